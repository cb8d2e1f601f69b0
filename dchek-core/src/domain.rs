//! Whole-domain classification

use std::borrow::Cow;
use std::ops::Range;

use crate::ace;
use crate::classifier::{latin_base, CatalogClassifier, CharacterClass, CharacterClassifier};
use crate::config::{DetectorConfig, LetterPolicy};
use crate::verdict::{Finding, FindingKind, Verdict};

/// Decodes, scans and aggregates one domain at a time
///
/// Holds only read-only lookup structures, so a single instance can be shared
/// between threads.
#[derive(Debug)]
pub struct DomainClassifier {
    config: DetectorConfig,
    chars: CatalogClassifier,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainClassifier {
    /// Create a classifier with the default configuration
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    /// Create a classifier with a custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        let chars = CatalogClassifier::new(config.cyrillic_matching(), config.fold_case());
        Self { config, chars }
    }

    /// Configuration in effect
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Character classifier in effect
    pub fn character_classifier(&self) -> &CatalogClassifier {
        &self.chars
    }

    /// Classify a domain
    ///
    /// Never fails: empty, malformed and undecodable input all produce a
    /// verdict, and the empty string is never flagged.
    pub fn classify(&self, raw: &str) -> Verdict {
        let decoded: Cow<'_, str> = if self.config.decode_ace() {
            ace::decode(raw)
        } else {
            Cow::Borrowed(raw)
        };
        let ace_decoded = decoded.as_ref() != raw;

        let spans = self.chars.cyrillic_spans(&decoded);
        let has_cyrillic = !spans.is_empty();
        let findings = self.findings(&decoded, &spans);
        let has_latin_variant = decoded.chars().any(|ch| self.flags_letter(ch))
            || findings
                .iter()
                .any(|finding| finding.kind == FindingKind::CombiningMark);

        log::trace!(
            "classified {raw:?} as {decoded:?}: latin_variant={has_latin_variant} cyrillic={has_cyrillic}"
        );

        Verdict {
            original: raw.to_string(),
            decoded: decoded.into_owned(),
            ace_decoded,
            flagged: has_latin_variant || has_cyrillic,
            has_latin_variant,
            has_cyrillic,
            findings,
        }
    }

    /// Whether a single letter raises the letter flag under the active policy
    ///
    /// Catalogued combining marks outside Cyrillic entries raise the flag too,
    /// whatever the policy.
    pub fn flags_letter(&self, ch: char) -> bool {
        match self.config.letter_policy() {
            LetterPolicy::AnyLetter => self.chars.is_non_standard_letter(ch),
            LetterPolicy::Catalogued => self.chars.is_latin_variant(ch),
        }
    }

    fn findings(&self, decoded: &str, spans: &[Range<usize>]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut spans = spans.iter().peekable();

        for (index, (offset, ch)) in decoded.char_indices().enumerate() {
            while spans.next_if(|span| span.end <= offset).is_some() {}

            if let Some(span) = spans.peek() {
                if span.start == offset {
                    findings.push(Finding {
                        index,
                        offset,
                        text: decoded[span.start..span.end].to_string(),
                        kind: FindingKind::Cyrillic,
                    });
                }
                if span.contains(&offset) {
                    continue;
                }
            }

            let kind = if self.flags_letter(ch) {
                self.letter_kind(ch)
            } else if self.chars.is_catalog_mark(ch) {
                FindingKind::CombiningMark
            } else {
                continue;
            };
            findings.push(Finding {
                index,
                offset,
                text: ch.to_string(),
                kind,
            });
        }
        findings
    }

    fn letter_kind(&self, ch: char) -> FindingKind {
        match self.chars.classify(ch) {
            CharacterClass::LatinVariant => match latin_base(ch) {
                Some(base) => FindingKind::LatinVariant { base },
                None => FindingKind::OtherLetter,
            },
            CharacterClass::Cyrillic => FindingKind::Cyrillic,
            _ => FindingKind::OtherLetter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CyrillicMatching;

    #[test]
    fn test_plain_ascii_domain() {
        let verdict = DomainClassifier::new().classify("example.com");
        assert!(!verdict.is_flagged());
        assert!(!verdict.ace_decoded);
        assert_eq!(verdict.decoded, "example.com");
        assert!(verdict.findings.is_empty());
    }

    #[test]
    fn test_empty_domain() {
        let verdict = DomainClassifier::new().classify("");
        assert!(!verdict.is_flagged());
        assert_eq!(verdict.decoded, "");
    }

    #[test]
    fn test_latin_variant_finding() {
        let verdict = DomainClassifier::new().classify("café.com");
        assert!(verdict.is_flagged());
        assert!(verdict.has_latin_variant);
        assert!(!verdict.has_cyrillic);
        assert_eq!(
            verdict.findings,
            vec![Finding {
                index: 3,
                offset: 3,
                text: "é".to_string(),
                kind: FindingKind::LatinVariant { base: 'E' },
            }]
        );
    }

    #[test]
    fn test_cyrillic_findings_cover_letters() {
        let verdict = DomainClassifier::new().classify("аррle.com");
        assert!(verdict.is_flagged());
        assert!(verdict.has_cyrillic);
        assert!(verdict.has_latin_variant);
        let texts: Vec<_> = verdict.findings.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["а", "р", "р"]);
        assert!(verdict
            .findings
            .iter()
            .all(|f| f.kind == FindingKind::Cyrillic));
        assert_eq!(verdict.findings[1].index, 1);
        assert_eq!(verdict.findings[1].offset, 2);
    }

    #[test]
    fn test_multi_code_point_cyrillic_reported_once() {
        let verdict = DomainClassifier::new().classify("xЯ\u{0300}y");
        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].text, "Я\u{0300}");
        assert_eq!(verdict.findings[0].index, 1);
    }

    #[test]
    fn test_decomposed_accents_are_flagged() {
        let classifier = DomainClassifier::new();
        for domain in ["a\u{0308}pple.com", "pa\u{0301}ypal.com", "n\u{0308}.com"] {
            let verdict = classifier.classify(domain);
            assert!(verdict.is_flagged(), "{domain:?}");
            assert!(verdict.has_latin_variant, "{domain:?}");
            assert!(!verdict.has_cyrillic, "{domain:?}");
        }

        let verdict = classifier.classify("pa\u{0301}ypal.com");
        assert_eq!(
            verdict.findings,
            vec![Finding {
                index: 2,
                offset: 2,
                text: "\u{0301}".to_string(),
                kind: FindingKind::CombiningMark,
            }]
        );
    }

    #[test]
    fn test_decomposed_accents_under_catalogued_policy() {
        let catalogued = DomainClassifier::with_config(
            DetectorConfig::builder()
                .letter_policy(LetterPolicy::Catalogued)
                .build(),
        );
        assert!(catalogued.classify("a\u{0308}pple.com").is_flagged());
        // marks outside both catalogs stay fail-open
        assert!(!catalogued.classify("a\u{0340}pple.com").is_flagged());
    }

    #[test]
    fn test_marks_inside_cyrillic_entries_are_not_reported_twice() {
        let catalogued = DomainClassifier::with_config(
            DetectorConfig::builder()
                .letter_policy(LetterPolicy::Catalogued)
                .build(),
        );
        let verdict = catalogued.classify("xЯ\u{0300}y");
        assert!(verdict.has_cyrillic);
        assert!(!verdict.has_latin_variant);
        assert_eq!(verdict.findings.len(), 1);
    }

    #[test]
    fn test_ace_domain_is_decoded() {
        let verdict = DomainClassifier::new().classify("xn--e1aybc.com");
        assert!(verdict.ace_decoded);
        assert_eq!(verdict.original, "xn--e1aybc.com");
        assert_eq!(verdict.decoded, "тест.com");
        assert!(verdict.is_flagged());
        assert_eq!(verdict.findings.len(), 4);
    }

    #[test]
    fn test_ace_decoding_can_be_disabled() {
        let config = DetectorConfig::builder().decode_ace(false).build();
        let verdict = DomainClassifier::with_config(config).classify("xn--e1aybc.com");
        assert!(!verdict.ace_decoded);
        assert_eq!(verdict.decoded, "xn--e1aybc.com");
        assert!(!verdict.is_flagged());
    }

    #[test]
    fn test_malformed_ace_fails_open() {
        let verdict = DomainClassifier::new().classify("xn--invalid!!!");
        assert!(!verdict.ace_decoded);
        assert_eq!(verdict.decoded, "xn--invalid!!!");
        assert!(!verdict.is_flagged());
    }

    #[test]
    fn test_other_scripts_under_each_policy() {
        let any = DomainClassifier::new().classify("αβγ.com");
        assert!(any.is_flagged());
        assert!(any
            .findings
            .iter()
            .all(|f| f.kind == FindingKind::OtherLetter));

        let catalogued = DomainClassifier::with_config(
            DetectorConfig::builder()
                .letter_policy(LetterPolicy::Catalogued)
                .build(),
        );
        let verdict = catalogued.classify("αβγ.com");
        assert!(!verdict.is_flagged());
        assert!(verdict.findings.is_empty());
        assert!(catalogued.classify("café.com").is_flagged());
        assert!(catalogued.classify("аррle.com").is_flagged());
    }

    #[test]
    fn test_base_letter_matching() {
        let builder = || {
            DetectorConfig::builder()
                .letter_policy(LetterPolicy::Catalogued)
                .fold_case(false)
        };
        let sequence = DomainClassifier::with_config(builder().build());
        let base_letter = DomainClassifier::with_config(
            builder()
                .cyrillic_matching(CyrillicMatching::BaseLetter)
                .build(),
        );

        // the catalog only lists lowercase г with a ring above
        assert!(!sequence.classify("г.com").has_cyrillic);
        assert!(sequence.classify("г\u{030A}.com").has_cyrillic);

        let verdict = base_letter.classify("г.com");
        assert!(verdict.has_cyrillic);
        assert_eq!(verdict.findings[0].kind, FindingKind::Cyrillic);
        assert_eq!(verdict.findings[0].text, "г");
    }

    #[test]
    fn test_non_letters_outside_safe_alphabet() {
        let verdict = DomainClassifier::new().classify("ex_ample!.com/€");
        assert!(!verdict.is_flagged());
        assert!(verdict.findings.is_empty());
    }

    #[test]
    fn test_long_input() {
        let domain = "a".repeat(10_000) + "é";
        let verdict = DomainClassifier::new().classify(&domain);
        assert!(verdict.is_flagged());
        assert_eq!(verdict.findings[0].index, 10_000);
    }
}
