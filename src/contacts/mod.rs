//! Local contact book
//!
//! Optional capability behind the WhatsApp builder's "pick contact" action.
//! Contacts live in a TOML file of `[[contact]]` records; the book is probed
//! once at startup and the picker is hidden entirely when it is absent,
//! unreadable, or empty. Only the first name and first telephone number of a
//! selected record are ever consumed.
//!
//! ```toml
//! [[contact]]
//! name = ["Alex Doe"]
//! tel = ["+1 (415) 555-2671"]
//! ```

use crate::config::Config;
use crate::deeplink::digits_only;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One contact record. Name and telephone are arrays to allow multiple
/// entries per person; the picker consumes only the first of each.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Contact {
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub tel: Vec<String>,
}

impl Contact {
    /// Display label for the picker list.
    pub fn label(&self) -> String {
        let name = self.name.first().map(String::as_str).unwrap_or("(no name)");
        match self.tel.first() {
            Some(tel) => format!("{name}  {tel}"),
            None => name.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ContactFile {
    #[serde(default, rename = "contact")]
    contacts: Vec<Contact>,
}

/// Result of picking a contact: whatever the record had, phone already
/// sanitized to digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedContact {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// The loaded contact book.
#[derive(Debug, Clone)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Probe for the configured contact book. Returns `None` when the file
    /// is missing, unreadable, malformed, or holds no contacts — the caller
    /// hides the picker in all of those cases. Failures are logged, never
    /// surfaced.
    pub fn detect(config: &Config) -> Option<Self> {
        let path = config.contacts_path()?;
        if !path.exists() {
            tracing::debug!("No contact book at {:?}", path);
            return None;
        }
        match Self::load(&path) {
            Ok(book) if book.is_empty() => {
                tracing::debug!("Contact book at {:?} is empty", path);
                None
            }
            Ok(book) => {
                tracing::info!("Loaded {} contact(s) from {:?}", book.len(), path);
                Some(book)
            }
            Err(e) => {
                tracing::warn!("Failed to load contact book {:?}: {}", path, e);
                None
            }
        }
    }

    /// Load a contact book from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read contact book: {path:?}"))?;
        let file: ContactFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse contact book: {path:?}"))?;
        Ok(Self {
            contacts: file.contacts,
        })
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Pick a single contact by index. Out-of-range returns `None` and the
    /// caller leaves its state unchanged.
    pub fn pick(&self, index: usize) -> Option<PickedContact> {
        let contact = self.contacts.get(index)?;
        Some(PickedContact {
            name: contact.name.first().cloned().filter(|n| !n.is_empty()),
            phone: contact
                .tel
                .first()
                .map(|t| digits_only(t))
                .filter(|p| !p.is_empty()),
        })
    }
}

/// Default contact book location: `<config-dir>/forgetme/contacts.toml`.
pub fn default_contacts_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("forgetme").join("contacts.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn book_from(toml_src: &str) -> ContactBook {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(toml_src.as_bytes()).expect("write");
        ContactBook::load(file.path()).expect("load")
    }

    #[test]
    fn test_load_and_pick_first_name_and_tel() {
        let book = book_from(
            r#"
            [[contact]]
            name = ["Alex Doe", "A. Doe"]
            tel = ["+1 (415) 555-2671", "+44 20 7946 0958"]
            "#,
        );
        assert_eq!(book.len(), 1);
        let picked = book.pick(0).expect("picked");
        assert_eq!(picked.name.as_deref(), Some("Alex Doe"));
        // First telephone only, stripped to digits
        assert_eq!(picked.phone.as_deref(), Some("14155552671"));
    }

    #[test]
    fn test_pick_out_of_range_is_none() {
        let book = book_from("[[contact]]\nname = [\"Alex\"]\n");
        assert!(book.pick(5).is_none());
    }

    #[test]
    fn test_pick_missing_fields() {
        let book = book_from("[[contact]]\ntel = [\"555\"]\n");
        let picked = book.pick(0).expect("picked");
        assert_eq!(picked.name, None);
        assert_eq!(picked.phone.as_deref(), Some("555"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"not = [valid").expect("write");
        assert!(ContactBook::load(file.path()).is_err());
    }

    #[test]
    fn test_label() {
        let contact = Contact {
            name: vec!["Alex".to_string()],
            tel: vec!["555".to_string()],
        };
        assert_eq!(contact.label(), "Alex  555");
        assert_eq!(Contact::default().label(), "(no name)");
    }
}
