//! Deep link construction
//!
//! Builds the `wa.me` and `mailto:` URLs that hand a rendered request off to
//! the external handler. Builders are pure; nothing here opens anything.

/// No-op target carried by a link whose required inputs are still blank.
/// Activation is suppressed while this is the URL.
pub const DISABLED_HREF: &str = "#";

/// Subject line used for the data-deletion email.
pub const EMAIL_SUBJECT: &str = "Data Deletion Request";

/// A derived action link plus its gating state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    pub url: String,
    pub enabled: bool,
}

impl GeneratedLink {
    fn disabled() -> Self {
        Self {
            url: DISABLED_HREF.to_string(),
            enabled: false,
        }
    }
}

/// Strip every character that is not an ASCII digit.
///
/// Used both for the `wa.me` path segment and for phone numbers imported
/// from the contact book, so the two always agree.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Percent-encode a URI component (space -> %20, newline -> %0A).
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Build the WhatsApp deep link, gated on a non-blank phone number.
pub fn whatsapp_link(phone_number: &str, message: &str) -> GeneratedLink {
    if phone_number.trim().is_empty() {
        return GeneratedLink::disabled();
    }
    GeneratedLink {
        url: format!(
            "https://wa.me/{}?text={}",
            digits_only(phone_number),
            encode_component(message)
        ),
        enabled: true,
    }
}

/// Build the `mailto:` link, gated on all three fields being non-blank.
pub fn mailto_link(
    website_name: &str,
    user_details: &str,
    website_email: &str,
    body: &str,
) -> GeneratedLink {
    let complete = !website_name.trim().is_empty()
        && !user_details.trim().is_empty()
        && !website_email.trim().is_empty();
    if !complete {
        return GeneratedLink::disabled();
    }
    GeneratedLink {
        url: format!(
            "mailto:{}?subject={}&body={}",
            website_email.trim(),
            encode_component(EMAIL_SUBJECT),
            encode_component(body)
        ),
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_punctuation() {
        assert_eq!(digits_only("(415) 555-2671"), "4155552671");
        assert_eq!(digits_only("+1 (415) 555-2671"), "14155552671");
        assert_eq!(digits_only("14155552671"), "14155552671");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_encode_component_space_and_newline() {
        assert_eq!(encode_component("Data Deletion Request"), "Data%20Deletion%20Request");
        assert_eq!(encode_component("line one\nline two"), "line%20one%0Aline%20two");
    }

    #[test]
    fn test_whatsapp_link_strips_formatting() {
        let link = whatsapp_link("(415) 555-2671", "Hi, please delete my number");
        assert!(link.enabled);
        assert!(link.url.contains("wa.me/4155552671"));
        assert!(link.url.contains("?text=Hi%2C%20please%20delete%20my%20number"));
    }

    #[test]
    fn test_whatsapp_link_gated_on_blank_phone() {
        for phone in ["", "   "] {
            let link = whatsapp_link(phone, "anything");
            assert!(!link.enabled);
            assert_eq!(link.url, DISABLED_HREF);
        }
    }

    #[test]
    fn test_mailto_link_complete() {
        let link = mailto_link("Acme", "user@example.com", "privacy@acme.com", "Hello\nWorld");
        assert!(link.enabled);
        assert!(link.url.starts_with("mailto:privacy@acme.com?"));
        assert!(link.url.contains("subject=Data%20Deletion%20Request"));
        assert!(link.url.contains("body=Hello%0AWorld"));
    }

    #[test]
    fn test_mailto_link_gated_on_any_blank_field() {
        let cases = [
            ("", "details", "a@b.com"),
            ("Acme", "  ", "a@b.com"),
            ("Acme", "details", ""),
        ];
        for (name, details, email) in cases {
            let link = mailto_link(name, details, email, "body");
            assert!(!link.enabled, "{name:?}/{details:?}/{email:?} should gate");
            assert_eq!(link.url, DISABLED_HREF);
        }
    }

    #[test]
    fn test_builders_are_pure() {
        let a = whatsapp_link("14155552671", "msg");
        let b = whatsapp_link("14155552671", "msg");
        assert_eq!(a, b);
    }
}
