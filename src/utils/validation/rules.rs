//! Field rules evaluated after the blank check: length bounds, email and URL
//! shape, and equality with a sibling field.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use url::{Host, Url};
use validator::ValidateEmail;

/// A single check applied to a non-blank field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Character count must lie in `[min, max]`.
    Length { min: usize, max: usize },
    /// `local@domain` with a dotted domain.
    Email,
    /// http(s) URL with a real host. The scheme may be omitted.
    Url,
    /// Must equal the named field of the same record.
    EqualsField(&'static str),
}

impl Rule {
    /// Returns whether `value` passes this rule. `record` is the normalized
    /// record the value was taken from.
    ///
    /// Rules that describe text reject every non-string value.
    pub fn passes(&self, value: &Value, record: &Map<String, Value>) -> bool {
        match *self {
            Rule::Length { min, max } => value
                .as_str()
                .is_some_and(|text| (min..=max).contains(&text.chars().count())),
            Rule::Email => value.as_str().is_some_and(is_email),
            Rule::Url => value.as_str().is_some_and(is_url),
            Rule::EqualsField(other) => {
                value.is_string() && record.get(other).is_some_and(|expected| expected == value)
            }
        }
    }
}

/// Validates an email address: HTML5 shape, no whitespace anywhere, and a
/// dotted domain name with an alphabetic top-level label. IP literals such as
/// `user@[127.0.0.1]` are rejected.
pub fn is_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) || !email.validate_email() {
        return false;
    }

    match email.rsplit_once('@') {
        Some((_, domain)) => !domain.starts_with('[') && is_domain_name(domain),
        None => false,
    }
}

fn is_domain_name(domain: &str) -> bool {
    DOMAIN_REGEX.is_match(&domain.to_ascii_lowercase())
}

/// Top-level label: letters only, or an IDNA punycode label.
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$")
        .expect("Failed to compile domain regex")
});

/// Validates a web URL. `example.com/me` is read as `http://example.com/me`.
pub fn is_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let candidate = if candidate.contains("://") {
        Cow::Borrowed(candidate)
    } else {
        Cow::Owned(format!("http://{candidate}"))
    };

    let Ok(url) = Url::parse(&candidate) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => is_domain_name(domain.trim_end_matches('.')),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
