//! System clipboard access
//!
//! Write-only. A failed write is logged and swallowed by callers — the
//! composer treats clipboard failure as "nothing happened" rather than an
//! error the user has to deal with.

use crate::error::ForgetmeError;

pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Connect to the system clipboard. Fails on headless systems; callers
    /// keep running without copy support.
    pub fn new() -> Result<Self, ForgetmeError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ForgetmeError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Place `text` on the clipboard.
    pub fn copy(&mut self, text: &str) -> Result<(), ForgetmeError> {
        self.inner
            .set_text(text)
            .map_err(|e| ForgetmeError::Clipboard(e.to_string()))
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}
