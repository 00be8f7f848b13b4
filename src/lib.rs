//! forgetme - Terminal Composer for Data-Deletion Requests
//!
//! A small terminal tool for taking your personal data back: compose a
//! WhatsApp message asking a contact to delete your number, or a formal
//! GDPR/CCPA-style email asking a website to erase your data, then hand the
//! result to the right app as a deep link.
//!
//! ## Features
//!
//! - **Two builders:** WhatsApp contact request and website deletion email
//! - **Live preview:** message and action link re-derived on every keystroke
//! - **Deep links:** `wa.me` and `mailto:` URLs opened via the OS handler
//! - **Clipboard:** one-key copy of the rendered email text
//! - **Contact book:** optional local contacts.toml picker for name/number
//! - **Nothing stored:** request fields live only for the session
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive composer
//! forgetme
//!
//! # Non-interactive
//! forgetme whatsapp --phone 14155552671 --name Alex --open
//! forgetme email --website "Example Corp" -i "user@example.com" --to privacy@example.com --copy
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod contacts;
pub mod deeplink;
pub mod error;
pub mod logging;
pub mod request;
pub mod tui;

// Re-export commonly used types
pub use error::ForgetmeError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
