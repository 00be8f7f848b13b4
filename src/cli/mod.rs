//! CLI Module
//!
//! Command-line interface for forgetme using Clap v4. The default command
//! launches the interactive composer; `whatsapp` and `email` render the same
//! requests non-interactively for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::request::{WebsiteRequest, WhatsAppRequest};

/// forgetme - Terminal composer for personal data-deletion requests
#[derive(Parser, Debug)]
#[command(name = "forgetme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (creates log files under the data directory)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive composer (default)
    Compose,

    /// Render the WhatsApp deletion request non-interactively
    Whatsapp {
        /// Contact's phone number, with country code
        #[arg(short, long)]
        phone: String,

        /// Contact's name (optional)
        #[arg(short, long)]
        name: Option<String>,

        /// Hand the wa.me link to the OS handler
        #[arg(long)]
        open: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Render the website data-deletion email non-interactively
    Email {
        /// Website / company name
        #[arg(short, long)]
        website: String,

        /// Your identifying details (username, email, ...)
        #[arg(short = 'i', long)]
        details: String,

        /// Website's contact email address
        #[arg(short, long)]
        to: String,

        /// Hand the mailto: link to the OS handler
        #[arg(long)]
        open: bool,

        /// Copy the email body to the clipboard
        #[arg(long)]
        copy: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        operation: ConfigCommands,
    },

    /// Log management operations
    Logs {
        #[command(subcommand)]
        operation: LogCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Show configuration
    Show,
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Show log file location and status
    Status,
    /// View recent log entries (requires debug mode runs)
    View {
        /// Number of lines to show (default: 50)
        #[arg(short, long, default_value = "50")]
        lines: usize,
    },
    /// Clean up old log files
    Clean {
        /// Maximum age in days (default: 7)
        #[arg(short = 'a', long, default_value = "7")]
        days: u64,
    },
    /// Open log directory in the file manager
    Open,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None | Some(Commands::Compose) => cmd_compose(&config).await,
        Some(Commands::Whatsapp {
            phone,
            name,
            open,
            format,
        }) => cmd_whatsapp(phone, name, open, format),
        Some(Commands::Email {
            website,
            details,
            to,
            open,
            copy,
            format,
        }) => cmd_email(website, details, to, open, copy, format),
        Some(Commands::Config { operation }) => match operation {
            ConfigCommands::Init { force } => cmd_config_init(force),
            ConfigCommands::Show => cmd_config_show(&config),
        },
        Some(Commands::Logs { operation }) => cmd_logs(operation),
    }
}

/// Load configuration from file or defaults
fn load_config(config_path: Option<&str>) -> Result<crate::config::Config> {
    use crate::config::Config;

    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from custom path: {}", path);
        Config::load_from_path(path)?
    } else {
        tracing::debug!("Loading default configuration");
        Config::load()?
    };

    config.validate()?;

    Ok(config)
}

/// Start the interactive composer
async fn cmd_compose(config: &crate::config::Config) -> Result<()> {
    tracing::debug!("Creating TUI app");
    let app = crate::tui::App::new(config);

    tracing::debug!("Launching TUI");
    crate::tui::run(app).await.context("TUI error")?;

    Ok(())
}

/// Render the WhatsApp request non-interactively
fn cmd_whatsapp(
    phone: String,
    name: Option<String>,
    open_link: bool,
    format: OutputFormat,
) -> Result<()> {
    let request = WhatsAppRequest {
        phone_number: phone,
        contact_name: name.unwrap_or_default(),
    };

    if !request.can_generate() {
        anyhow::bail!("Please enter a phone number to generate the link.");
    }

    let message = request.message();
    let link = request.link();

    match format {
        OutputFormat::Text => {
            println!("{message}");
            println!();
            println!("{}", link.url);
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "message": message,
                "link": link.url,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    if open_link {
        open::that(&link.url).context("Failed to open WhatsApp link")?;
        tracing::info!("Opened WhatsApp deep link");
    }

    Ok(())
}

/// Render the website deletion email non-interactively
fn cmd_email(
    website: String,
    details: String,
    to: String,
    open_link: bool,
    copy: bool,
    format: OutputFormat,
) -> Result<()> {
    let request = WebsiteRequest {
        website_name: website,
        user_details: details,
        website_email: to,
    };

    if !request.can_generate() {
        anyhow::bail!("Please fill all fields to enable the action buttons.");
    }

    let body = request.email_body();
    let link = request.link();

    match format {
        OutputFormat::Text => {
            println!("{body}");
            println!();
            println!("{}", link.url);
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "subject": crate::deeplink::EMAIL_SUBJECT,
                "body": body,
                "link": link.url,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    if copy {
        let mut clipboard = crate::clipboard::Clipboard::new()?;
        clipboard.copy(&body)?;
        println!("\n✅ Email text copied to clipboard");
    }

    if open_link {
        open::that(&link.url).context("Failed to open mail client")?;
        tracing::info!("Opened mailto deep link");
    }

    Ok(())
}

/// Initialize configuration file
fn cmd_config_init(force: bool) -> Result<()> {
    use crate::config::Config;

    println!("🧹 forgetme Configuration Initialization\n");

    let config_path =
        Config::system_config_path().context("Could not determine config directory")?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at: {}\nUse --force to overwrite",
            config_path.display()
        );
    }

    let default_config = Config::default();
    default_config.save(&config_path)?;

    println!("✅ Configuration initialized at: {}", config_path.display());
    println!("\n📝 Next steps:");
    println!("   1. Optionally point [contacts] path at a contacts.toml file");
    println!("   2. Run 'forgetme' to start composing");

    Ok(())
}

/// Show configuration
fn cmd_config_show(config: &crate::config::Config) -> Result<()> {
    println!("🧹 forgetme Configuration\n");
    println!("Log level: {}", config.logging.level);
    match config.contacts_path() {
        Some(path) => {
            let present = if path.exists() { "present" } else { "not found" };
            println!("Contact book: {} ({})", path.display(), present);
        }
        None => println!("Contact book: (no config directory available)"),
    }
    Ok(())
}

/// Log management operations
fn cmd_logs(operation: LogCommands) -> Result<()> {
    use crate::logging;

    let dir = logging::log_dir();
    match operation {
        LogCommands::Status => {
            println!("📋 Log Status\n");
            println!("Directory: {}", dir.display());
            if !dir.exists() {
                println!("No logs yet — run with --debug to create them");
                return Ok(());
            }
            let mut files: Vec<_> = std::fs::read_dir(&dir)?
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .collect();
            files.sort_by_key(|e| e.file_name());
            println!("Files: {}", files.len());
            for entry in files {
                let modified: chrono::DateTime<chrono::Local> = entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .map(Into::into)
                    .unwrap_or_else(|_| chrono::Local::now());
                println!(
                    "  {}  (modified {})",
                    entry.file_name().to_string_lossy(),
                    modified.format("%Y-%m-%d %H:%M:%S")
                );
            }
            Ok(())
        }
        LogCommands::View { lines } => {
            let latest = std::fs::read_dir(&dir)
                .ok()
                .and_then(|entries| {
                    entries
                        .filter_map(|e| e.ok())
                        .filter(|e| e.path().is_file())
                        .max_by_key(|e| {
                            e.metadata()
                                .and_then(|m| m.modified())
                                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
                        })
                })
                .context("No log files found — run with --debug first")?;

            let contents = std::fs::read_to_string(latest.path())?;
            let all: Vec<&str> = contents.lines().collect();
            let start = all.len().saturating_sub(lines);
            for line in &all[start..] {
                println!("{line}");
            }
            Ok(())
        }
        LogCommands::Clean { days } => {
            let removed = logging::cleanup_old_logs(days)?;
            println!("🧹 Removed {removed} old log file(s)");
            Ok(())
        }
        LogCommands::Open => {
            open::that(&dir).with_context(|| format!("Failed to open {}", dir.display()))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_compose() {
        let cli = Cli::parse_from(["forgetme"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_whatsapp_args() {
        let cli = Cli::parse_from([
            "forgetme", "whatsapp", "--phone", "14155552671", "--name", "Alex",
        ]);
        let Some(Commands::Whatsapp { phone, name, open, .. }) = cli.command else {
            unreachable!("expected the whatsapp subcommand");
        };
        assert_eq!(phone, "14155552671");
        assert_eq!(name.as_deref(), Some("Alex"));
        assert!(!open);
    }

    #[test]
    fn test_blank_phone_is_gated() {
        let result = cmd_whatsapp("   ".to_string(), None, false, OutputFormat::Text);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_email_field_is_gated() {
        let result = cmd_email(
            "Acme".to_string(),
            "  ".to_string(),
            "privacy@acme.com".to_string(),
            false,
            false,
            OutputFormat::Text,
        );
        assert!(result.is_err());
    }
}
