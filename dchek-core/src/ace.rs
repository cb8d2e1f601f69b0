//! ASCII-Compatible Encoding (Punycode) decoding
//!
//! Decoding is best effort. A domain that cannot be decoded is handed back
//! unchanged and will be scanned as plain ASCII.

use std::borrow::Cow;

/// Reserved prefix of an ACE label
pub const ACE_PREFIX: &str = "xn--";

/// Check whether a domain starts with the ACE prefix (case-sensitive)
#[inline]
pub fn is_ace(domain: &str) -> bool {
    domain.starts_with(ACE_PREFIX)
}

/// Decoder for `xn--` domains
#[derive(Debug, Clone, Copy, Default)]
pub struct AceDecoder;

impl AceDecoder {
    /// Create a decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode an ACE domain to Unicode
    ///
    /// Only `xn--` labels are rewritten, each from its Punycode payload. Other
    /// labels come back byte for byte, so no IDNA mapping folds fullwidth
    /// letters or ligatures away. Input without the prefix, and input with a
    /// label that fails to decode, is returned as is.
    pub fn decode<'a>(&self, domain: &'a str) -> Cow<'a, str> {
        decode(domain)
    }
}

/// Decode an ACE domain to Unicode, falling back to the input on failure
pub fn decode(domain: &str) -> Cow<'_, str> {
    if !is_ace(domain) {
        return Cow::Borrowed(domain);
    }

    match decode_labels(domain) {
        Some(unicode) => Cow::Owned(unicode),
        None => {
            log::debug!("ACE decoding failed for {domain:?}, scanning as is");
            Cow::Borrowed(domain)
        }
    }
}

fn decode_labels(domain: &str) -> Option<String> {
    let labels = domain
        .split('.')
        .map(|label| match label.strip_prefix(ACE_PREFIX) {
            Some(payload) => decode_label(payload),
            None => Some(label.to_string()),
        })
        .collect::<Option<Vec<_>>>()?;
    Some(labels.join("."))
}

/// Decode one A-label payload
///
/// The payload must be non-empty ASCII and must decode to at least one
/// non-ASCII code point.
fn decode_label(payload: &str) -> Option<String> {
    if payload.is_empty() || !payload.is_ascii() {
        return None;
    }
    idna::punycode::decode_to_string(payload).filter(|label| !label.is_ascii())
}
