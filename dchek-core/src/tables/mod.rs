//! Static reference tables for homoglyph detection
//!
//! The literal tables never change at runtime. Lookup structures derived from
//! them are built once on first access and shared for the life of the process.

pub mod cyrillic;
pub mod latin;

use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_general_category::{get_general_category, GeneralCategory};

pub use cyrillic::CYRILLIC_RUNS;
pub use latin::LATIN_VARIANT_GROUPS;

/// Characters that never contribute to a verdict
pub const SAFE_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-.";

const SAFE_TABLE: [bool; 128] = build_safe_table();

const fn build_safe_table() -> [bool; 128] {
    let bytes = SAFE_ALPHABET.as_bytes();
    let mut table = [false; 128];
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] = true;
        i += 1;
    }
    table
}

/// Check whether a character belongs to the safe alphabet
#[inline]
pub fn is_safe(ch: char) -> bool {
    ch.is_ascii() && SAFE_TABLE[ch as usize]
}

/// Number of characters in the safe alphabet
pub fn safe_alphabet_len() -> usize {
    SAFE_TABLE.iter().filter(|&&safe| safe).count()
}

static LATIN_VARIANTS: OnceLock<HashSet<char>> = OnceLock::new();

/// Union of all Latin variant groups, minus the safe alphabet
///
/// A few groups spell out sequences such as `C̄` or `DZ`, so their ASCII
/// base letters are dropped here; the combining marks stay.
pub fn latin_variants() -> &'static HashSet<char> {
    LATIN_VARIANTS.get_or_init(|| {
        LATIN_VARIANT_GROUPS
            .iter()
            .flat_map(|(_, group)| group.chars())
            .filter(|&ch| !is_safe(ch))
            .collect()
    })
}

/// Check whether a character is a catalogued Latin variant
#[inline]
pub fn is_latin_variant(ch: char) -> bool {
    !is_safe(ch) && latin_variants().contains(&ch)
}

/// Base letter of the first group listing `ch`
///
/// Ligatures such as `ﬁ` or `Ĳ` are listed under more than one base letter;
/// the earliest group wins.
pub fn latin_variant_base(ch: char) -> Option<char> {
    if is_safe(ch) {
        return None;
    }
    LATIN_VARIANT_GROUPS
        .iter()
        .find(|(_, group)| group.contains(ch))
        .map(|(base, _)| *base)
}

static CYRILLIC_ENTRIES: OnceLock<Vec<String>> = OnceLock::new();

/// Individual entries of the Cyrillic catalog, in catalog order without duplicates
///
/// An entry is one base character followed by every combining mark attached to it.
pub fn cyrillic_entries() -> &'static [String] {
    CYRILLIC_ENTRIES.get_or_init(|| {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        for run in CYRILLIC_RUNS {
            for entry in split_entries(run) {
                if seen.insert(entry.clone()) {
                    entries.push(entry);
                }
            }
        }
        entries
    })
}

/// Split a run of catalog text into base-plus-marks entries
pub(crate) fn split_entries(run: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();

    for ch in run.chars() {
        if is_combining_mark(ch) && !current.is_empty() {
            current.push(ch);
            continue;
        }
        if !current.is_empty() {
            entries.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        entries.push(current);
    }
    entries
}

/// Check whether a character is a combining mark (Mn, Mc or Me)
#[inline]
pub fn is_combining_mark(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

static CATALOG_MARKS: OnceLock<HashSet<char>> = OnceLock::new();

/// Combining marks listed in either catalog
///
/// Marks only ever decorate another character, so they are kept apart from
/// the letters: a domain carrying one of them next to a plain ASCII letter
/// (`a\u{0308}`) still spells a variant.
pub fn catalog_marks() -> &'static HashSet<char> {
    CATALOG_MARKS.get_or_init(|| {
        let latin = LATIN_VARIANT_GROUPS.iter().map(|(_, group)| *group);
        latin
            .chain(CYRILLIC_RUNS)
            .flat_map(str::chars)
            .filter(|&ch| is_combining_mark(ch))
            .collect()
    })
}

/// Check whether a character is a combining mark listed in either catalog
#[inline]
pub fn is_catalog_mark(ch: char) -> bool {
    catalog_marks().contains(&ch)
}
