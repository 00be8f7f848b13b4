//! Request builders
//!
//! The two view-models behind the composer: a WhatsApp message asking a
//! personal contact to delete the user's number, and a formal email asking a
//! company to erase the user's data. Each holds only the raw typed fields;
//! message text, links, and gating are derived on demand and never stored.

pub mod website;
pub mod whatsapp;

pub use website::WebsiteRequest;
pub use whatsapp::WhatsAppRequest;
