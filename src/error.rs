//! Crate error types

use thiserror::Error;

/// Library-level errors. Composer paths never produce these for missing
/// input — gating handles that; these cover the ambient surfaces only.
#[derive(Debug, Error)]
pub enum ForgetmeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Contact book error: {0}")]
    Contacts(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
