//! Homoglyph detection for domain names
//!
//! This crate decides whether a domain name contains characters that can pass
//! for plain ASCII Latin letters: extended-Latin variants (accented letters,
//! ligatures, fullwidth forms) and Cyrillic look-alikes. Domains in
//! ASCII-Compatible Encoding (`xn--`) are decoded to Unicode first.
//!
//! # Architecture
//!
//! - **Tables**: static reference data (safe alphabet, Latin variant groups,
//!   Cyrillic catalog)
//! - **ACE decoding**: best-effort Punycode decoding that never fails
//! - **Character classification**: per code point, plus Cyrillic substring search
//! - **Domain classification**: decode, scan and aggregate into a [`Verdict`]
//!
//! Only letters are flagged. With the default [`LetterPolicy::AnyLetter`] every
//! letter outside the safe alphabet counts, Greek and CJK included; with
//! [`LetterPolicy::Catalogued`] only extended-Latin variants and Cyrillic
//! catalog entries do.
//!
//! # Example
//!
//! ```rust
//! use dchek_core::classify;
//!
//! assert!(!classify("example.com").is_flagged());
//! assert!(classify("café.com").is_flagged());
//!
//! let verdict = classify("xn--e1aybc.com");
//! assert_eq!(verdict.decoded, "тест.com");
//! assert!(verdict.has_cyrillic);
//! ```

pub mod ace;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod tables;
pub mod verdict;

use std::sync::OnceLock;

pub use ace::{AceDecoder, ACE_PREFIX};
pub use classifier::{
    is_non_standard_letter, CatalogClassifier, CharacterClass, CharacterClassifier,
};
pub use config::{
    CyrillicConfig, CyrillicMatching, DetectorConfig, DetectorConfigBuilder, LetterPolicy,
};
pub use domain::DomainClassifier;
pub use error::ConfigError;
pub use verdict::{Finding, FindingKind, Verdict};

static DEFAULT_CLASSIFIER: OnceLock<DomainClassifier> = OnceLock::new();

fn default_classifier() -> &'static DomainClassifier {
    DEFAULT_CLASSIFIER.get_or_init(DomainClassifier::new)
}

/// Classify a domain with the default configuration
pub fn classify(domain: &str) -> Verdict {
    default_classifier().classify(domain)
}

/// Check whether a domain contains a Cyrillic catalog entry (default configuration)
pub fn contains_cyrillic(domain: &str) -> bool {
    default_classifier()
        .character_classifier()
        .contains_cyrillic(domain)
}
