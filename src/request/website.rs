//! Website / company deletion request
//!
//! A fixed formal letter with two substitution points (company name and
//! identifying details) that fall back to bracketed placeholder text while
//! empty. The closing `[Your Name]` is left for the user to fill after
//! export; the tool never asks for their name.

use crate::deeplink::{self, GeneratedLink};

pub const WEBSITE_NAME_PLACEHOLDER: &str = "[Website/Company Name]";
pub const USER_DETAILS_PLACEHOLDER: &str =
    "[Your username, email, or other identifying details]";

/// Fields for the website request builder. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteRequest {
    pub website_name: String,
    pub user_details: String,
    pub website_email: String,
}

impl WebsiteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the email body. Pure function of the current fields.
    pub fn email_body(&self) -> String {
        let website_name = match self.website_name.trim() {
            "" => WEBSITE_NAME_PLACEHOLDER,
            name => name,
        };
        let user_details = match self.user_details.trim() {
            "" => USER_DETAILS_PLACEHOLDER,
            details => details,
        };

        format!(
            "Subject: Data Deletion Request\n\
             \n\
             To Whom It May Concern,\n\
             \n\
             I am writing to formally request the deletion of all personal data \
             associated with my account on {website_name}, pursuant to my rights under \
             applicable data protection regulations (such as GDPR, CCPA, etc.).\n\
             \n\
             My identifying information on your service is as follows:\n\
             - {user_details}\n\
             \n\
             Please process this request and permanently delete all my personal \
             information from your systems, including any backups, within the legally \
             stipulated timeframe (e.g., 30 days).\n\
             \n\
             Could you please confirm in writing once my data has been completely and \
             permanently erased?\n\
             \n\
             Thank you for your prompt attention to this important matter.\n\
             \n\
             Sincerely,\n\
             [Your Name]"
        )
    }

    /// True iff all three trimmed fields are non-empty.
    pub fn can_generate(&self) -> bool {
        !self.website_name.trim().is_empty()
            && !self.user_details.trim().is_empty()
            && !self.website_email.trim().is_empty()
    }

    /// Derive the `mailto:` deep link for the current fields.
    pub fn link(&self) -> GeneratedLink {
        deeplink::mailto_link(
            &self.website_name,
            &self.user_details,
            &self.website_email,
            &self.email_body(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_uses_placeholders_when_empty() {
        let body = WebsiteRequest::new().email_body();
        assert!(body.contains(WEBSITE_NAME_PLACEHOLDER));
        assert!(body.contains(USER_DETAILS_PLACEHOLDER));
    }

    #[test]
    fn test_body_substitutes_website_name() {
        let req = WebsiteRequest {
            website_name: "Acme".to_string(),
            ..Default::default()
        };
        assert!(req.email_body().contains("on Acme,"));
        assert!(!req.email_body().contains(WEBSITE_NAME_PLACEHOLDER));
    }

    #[test]
    fn test_body_substitutes_user_details() {
        let req = WebsiteRequest {
            user_details: "Email: user@example.com".to_string(),
            ..Default::default()
        };
        assert!(req.email_body().contains("- Email: user@example.com"));
    }

    #[test]
    fn test_body_keeps_closing_placeholder() {
        let req = WebsiteRequest {
            website_name: "Acme".to_string(),
            user_details: "user".to_string(),
            website_email: "privacy@acme.com".to_string(),
        };
        assert!(req.email_body().ends_with("Sincerely,\n[Your Name]"));
    }

    #[test]
    fn test_body_is_deterministic() {
        let req = WebsiteRequest {
            website_name: "Acme".to_string(),
            user_details: "user".to_string(),
            website_email: "privacy@acme.com".to_string(),
        };
        assert_eq!(req.email_body(), req.email_body());
    }

    #[test]
    fn test_can_generate_requires_all_fields() {
        let full = WebsiteRequest {
            website_name: "Acme".to_string(),
            user_details: "user".to_string(),
            website_email: "privacy@acme.com".to_string(),
        };
        assert!(full.can_generate());

        let mut missing = full.clone();
        missing.website_name = String::new();
        assert!(!missing.can_generate());

        let mut missing = full.clone();
        missing.user_details = "   ".to_string();
        assert!(!missing.can_generate());

        let mut missing = full;
        missing.website_email = String::new();
        assert!(!missing.can_generate());
    }

    #[test]
    fn test_link_carries_subject_and_body() {
        let req = WebsiteRequest {
            website_name: "Acme".to_string(),
            user_details: "user".to_string(),
            website_email: "privacy@acme.com".to_string(),
        };
        let link = req.link();
        assert!(link.enabled);
        assert!(link.url.starts_with("mailto:privacy@acme.com?"));
        assert!(link.url.contains("subject=Data%20Deletion%20Request"));
        // Multi-line body survives as %0A
        assert!(link.url.contains("%0A"));
    }

    #[test]
    fn test_link_disabled_when_incomplete() {
        let req = WebsiteRequest {
            website_name: "Acme".to_string(),
            ..Default::default()
        };
        let link = req.link();
        assert!(!link.enabled);
        assert_eq!(link.url, crate::deeplink::DISABLED_HREF);
    }
}
