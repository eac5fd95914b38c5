//! Parsing of `Contact:`, `Link:`, and `Sponsor:` metadata lines.
//!
//! Malformed metadata never fails a conversion: a missing parenthesis
//! group yields an empty target and a missing bracket group makes the
//! display name fall back to the target.

use crate::report::{Contact, Link};

/// Parse the remainder of a `Contact:` line.
///
/// Accepts the conventional `Display Name <addr>` form as well as a bare
/// address. Commas are deleted up front so `Doe, Jane <jane@example.org>`
/// still parses as a single contact instead of splitting on the comma.
pub(crate) fn parse_contact(rest: &str) -> Contact {
    let rest = rest.replace(',', "");
    let rest = rest.trim();

    match rest.find('<') {
        Some(open) => {
            let addr = &rest[open + 1..];
            let email = match addr.find('>') {
                Some(close) => &addr[..close],
                None => addr,
            };
            Contact {
                name: rest[..open].trim().to_string(),
                email: email.trim().to_string(),
            }
        }
        None => Contact {
            name: String::new(),
            email: rest.to_string(),
        },
    }
}

/// Parse the remainder of a `Link:` line.
///
/// The target is the text between the first `(` and the last `)`; the
/// display name is the text between the first `[` and the last `]`,
/// falling back to the target when absent.
pub(crate) fn parse_link(rest: &str) -> Link {
    let href = enclosed(rest, '(', ')').unwrap_or_default();
    let name = enclosed(rest, '[', ']').unwrap_or_else(|| href.clone());
    Link { name, href }
}

/// Non-empty text between the first `open` and the last `close`.
fn enclosed(s: &str, open: char, close: char) -> Option<String> {
    let start = s.find(open)?;
    let end = s.rfind(close)?;
    if end > start + 1 {
        Some(s[start + 1..end].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_with_display_name() {
        let contact = parse_contact(" Jane Doe <jane@example.org>");
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email, "jane@example.org");
    }

    #[test]
    fn test_contact_comma_in_name() {
        let contact = parse_contact(" Doe, Jane <jane@example.org>");
        assert_eq!(contact.name, "Doe Jane");
        assert_eq!(contact.email, "jane@example.org");
    }

    #[test]
    fn test_contact_bare_address() {
        let contact = parse_contact(" jane@example.org");
        assert_eq!(contact.name, "");
        assert_eq!(contact.email, "jane@example.org");
    }

    #[test]
    fn test_contact_unterminated_angle_bracket() {
        let contact = parse_contact(" Jane Doe <jane@example.org");
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email, "jane@example.org");
    }

    #[test]
    fn test_link_with_name() {
        let link = parse_link(" [Example](http://example.org)");
        assert_eq!(link.name, "Example");
        assert_eq!(link.href, "http://example.org");
    }

    #[test]
    fn test_link_without_name() {
        let link = parse_link(" (http://example.org)");
        assert_eq!(link.name, "http://example.org");
        assert_eq!(link.href, "http://example.org");
    }

    #[test]
    fn test_link_without_target() {
        let link = parse_link(" [Example]");
        assert_eq!(link.name, "Example");
        assert_eq!(link.href, "");
    }

    #[test]
    fn test_link_greedy_parentheses() {
        // First-to-last extraction, matching the conventional greedy rule.
        let link = parse_link(" (http://a) trailing (note)");
        assert_eq!(link.href, "http://a) trailing (note");
    }

    #[test]
    fn test_link_empty_groups() {
        let link = parse_link(" []()");
        assert_eq!(link.name, "");
        assert_eq!(link.href, "");
    }
}
