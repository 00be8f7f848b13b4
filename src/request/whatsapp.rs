//! WhatsApp deletion request
//!
//! One fixed sentence with a single substitution point: the contact's name,
//! embedded right after "Hi" when present.

use crate::deeplink::{self, GeneratedLink};

/// Fields for the WhatsApp request builder. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhatsAppRequest {
    /// Digits and punctuation as typed; sanitized to digits only when the
    /// link is built or when populated from the contact book.
    pub phone_number: String,
    /// Optional; trimmed before use.
    pub contact_name: String,
}

impl WhatsAppRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the message. Pure function of the current fields.
    pub fn message(&self) -> String {
        let name = self.contact_name.trim();
        let name_part = if name.is_empty() {
            String::new()
        } else {
            format!(" {name}")
        };
        format!(
            "Hi{name_part}, I hope you're well. I'm doing a digital cleanup and would \
             appreciate it if you could please delete my number from your contacts. \
             Thank you for understanding!"
        )
    }

    /// True iff the trimmed phone number is non-empty.
    pub fn can_generate(&self) -> bool {
        !self.phone_number.trim().is_empty()
    }

    /// Derive the `wa.me` deep link for the current fields.
    pub fn link(&self) -> GeneratedLink {
        deeplink::whatsapp_link(&self.phone_number, &self.message())
    }
}
