//! Character classification against the reference tables

use std::collections::HashSet;
use std::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

use crate::config::CyrillicMatching;
use crate::tables;

/// Classification of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterClass {
    /// Member of the safe alphabet
    Standard,
    /// Extended-Latin variant: catalogued, or decomposing to an ASCII letter
    LatinVariant,
    /// Catalogued Cyrillic letter
    Cyrillic,
    /// Any other letter (Greek, Armenian, CJK, uncatalogued Latin, ...)
    OtherLetter,
    /// Combining mark listed in either catalog, such as a decomposed diaeresis
    CombiningMark,
    /// Anything else: uncatalogued marks, symbols, punctuation, other digits
    Other,
}

/// Check whether a character is a letter outside the safe alphabet
///
/// Only the general category decides: Lu, Ll, Lt, Lm and Lo are letters.
/// Unassigned code points, marks, digits, punctuation and symbols are not.
#[inline]
pub fn is_non_standard_letter(ch: char) -> bool {
    if tables::is_safe(ch) {
        return false;
    }
    is_letter(ch)
}

/// Check whether the general category of a character is a letter category
#[inline]
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Base Latin letter a variant stands for
///
/// Catalogued variants report the base letter of their group. Uncatalogued
/// precomposed letters such as `é` report the uppercase ASCII letter they
/// decompose to.
pub fn latin_base(ch: char) -> Option<char> {
    if tables::is_safe(ch) || tables::is_combining_mark(ch) {
        return None;
    }
    tables::latin_variant_base(ch).or_else(|| {
        base_of(ch)
            .filter(|base| base.is_ascii_alphabetic() && is_letter(ch))
            .map(|base| base.to_ascii_uppercase())
    })
}

/// Code point classification and Cyrillic detection
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterClass;

    /// Byte ranges of every Cyrillic catalog match in `domain`
    fn cyrillic_spans(&self, domain: &str) -> Vec<Range<usize>>;

    /// Check whether `domain` contains any Cyrillic catalog entry
    fn contains_cyrillic(&self, domain: &str) -> bool {
        !self.cyrillic_spans(domain).is_empty()
    }

    /// Check whether a character is a letter outside the safe alphabet
    fn is_non_standard_letter(&self, ch: char) -> bool {
        is_non_standard_letter(ch)
    }

    /// Check whether a character is an extended-Latin variant
    fn is_latin_variant(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::LatinVariant)
    }

    /// Check whether a character is a catalogued combining mark
    fn is_catalog_mark(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::CombiningMark)
    }
}

/// Lookup structure for the Cyrillic catalog
#[derive(Debug)]
enum CyrillicIndex {
    /// Substring search over whole entries
    Sequence {
        patterns: Vec<String>,
        automaton: Option<AhoCorasick>,
        letters: HashSet<char>,
    },
    /// Base code points after canonical decomposition
    BaseLetter { bases: HashSet<char> },
}

impl CyrillicIndex {
    fn build(matching: CyrillicMatching, fold_case: bool) -> Self {
        let entries = catalog_patterns(fold_case);

        match matching {
            CyrillicMatching::Sequence => {
                let letters = entries
                    .iter()
                    .filter_map(|entry| single_char(entry))
                    .filter(|&ch| !tables::is_safe(ch))
                    .collect();
                let automaton = match AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostLongest)
                    .build(&entries)
                {
                    Ok(automaton) => Some(automaton),
                    Err(err) => {
                        log::warn!("Cyrillic automaton unavailable, using linear scan: {err}");
                        None
                    }
                };
                CyrillicIndex::Sequence {
                    patterns: entries,
                    automaton,
                    letters,
                }
            }
            CyrillicMatching::BaseLetter => {
                let bases = entries
                    .iter()
                    .filter_map(|entry| entry.nfd().next())
                    .filter(|&ch| !tables::is_safe(ch))
                    .collect();
                CyrillicIndex::BaseLetter { bases }
            }
        }
    }

    fn contains_char(&self, ch: char) -> bool {
        match self {
            CyrillicIndex::Sequence { letters, .. } => letters.contains(&ch),
            CyrillicIndex::BaseLetter { bases } => {
                base_of(ch).is_some_and(|base| bases.contains(&base))
            }
        }
    }

    fn spans(&self, domain: &str) -> Vec<Range<usize>> {
        match self {
            CyrillicIndex::Sequence {
                automaton: Some(automaton),
                ..
            } => automaton.find_iter(domain).map(|m| m.range()).collect(),
            CyrillicIndex::Sequence { patterns, .. } => linear_spans(patterns, domain),
            CyrillicIndex::BaseLetter { .. } => {
                let mut spans: Vec<Range<usize>> = Vec::new();
                let mut chars = domain.char_indices().peekable();
                while let Some((offset, ch)) = chars.next() {
                    if !self.contains_char(ch) {
                        continue;
                    }
                    let mut end = offset + ch.len_utf8();
                    // marks stacked on a matched base belong to it
                    while let Some((mark_offset, mark)) =
                        chars.next_if(|&(_, next)| tables::is_combining_mark(next))
                    {
                        end = mark_offset + mark.len_utf8();
                    }
                    spans.push(offset..end);
                }
                spans
            }
        }
    }

    fn is_match(&self, domain: &str) -> bool {
        match self {
            CyrillicIndex::Sequence {
                automaton: Some(automaton),
                ..
            } => automaton.is_match(domain),
            CyrillicIndex::Sequence { patterns, .. } => {
                patterns.iter().any(|p| domain.contains(p.as_str()))
            }
            CyrillicIndex::BaseLetter { .. } => domain.chars().any(|ch| self.contains_char(ch)),
        }
    }
}

/// Catalog entries, optionally extended with their lowercase forms
fn catalog_patterns(fold_case: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut patterns = Vec::new();

    for entry in tables::cyrillic_entries() {
        if seen.insert(entry.clone()) {
            patterns.push(entry.clone());
        }
        if fold_case {
            let lower = entry.to_lowercase();
            if seen.insert(lower.clone()) {
                patterns.push(lower);
            }
        }
    }
    patterns
}

fn single_char(entry: &str) -> Option<char> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// First code point of the canonical decomposition
fn base_of(ch: char) -> Option<char> {
    std::iter::once(ch).nfd().next()
}

/// Leftmost-longest, non-overlapping matches without an automaton
fn linear_spans(patterns: &[String], domain: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;

    while offset < domain.len() {
        let rest = &domain[offset..];
        let longest = patterns
            .iter()
            .filter(|p| rest.starts_with(p.as_str()))
            .map(String::len)
            .max();
        match longest {
            Some(len) => {
                spans.push(offset..offset + len);
                offset += len;
            }
            None => {
                offset += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    spans
}

/// Classifier backed by the static Latin and Cyrillic catalogs
#[derive(Debug)]
pub struct CatalogClassifier {
    cyrillic: CyrillicIndex,
}

impl CatalogClassifier {
    /// Create a classifier for the given Cyrillic matching settings
    pub fn new(matching: CyrillicMatching, fold_case: bool) -> Self {
        Self {
            cyrillic: CyrillicIndex::build(matching, fold_case),
        }
    }
}

impl Default for CatalogClassifier {
    fn default() -> Self {
        Self::new(CyrillicMatching::default(), true)
    }
}

impl CharacterClassifier for CatalogClassifier {
    fn classify(&self, ch: char) -> CharacterClass {
        if tables::is_safe(ch) {
            CharacterClass::Standard
        } else if tables::is_combining_mark(ch) {
            if tables::is_catalog_mark(ch) {
                CharacterClass::CombiningMark
            } else {
                CharacterClass::Other
            }
        } else if latin_base(ch).is_some() {
            CharacterClass::LatinVariant
        } else if self.cyrillic.contains_char(ch) {
            CharacterClass::Cyrillic
        } else if is_letter(ch) {
            CharacterClass::OtherLetter
        } else {
            CharacterClass::Other
        }
    }

    fn cyrillic_spans(&self, domain: &str) -> Vec<Range<usize>> {
        self.cyrillic.spans(domain)
    }

    fn contains_cyrillic(&self, domain: &str) -> bool {
        self.cyrillic.is_match(domain)
    }
}
