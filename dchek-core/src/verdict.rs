//! Classification results

use serde::Serialize;
use std::fmt;

/// Why a character or sequence was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FindingKind {
    /// Extended-Latin look-alike of an ASCII letter
    LatinVariant {
        /// Uppercase ASCII letter the variant reads as
        base: char,
    },
    /// Cyrillic catalog entry
    Cyrillic,
    /// Letter outside the safe alphabet that belongs to neither catalog
    OtherLetter,
    /// Combining mark from either catalog, outside any Cyrillic entry
    CombiningMark,
}

/// One reported character or sequence in the scanned domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position in characters from the start of the scanned domain
    pub index: usize,
    /// Position in bytes from the start of the scanned domain
    pub offset: usize,
    /// The reported text, one or more code points
    pub text: String,
    /// Why it was reported
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code_points = self
            .text
            .chars()
            .map(|ch| format!("U+{:04X}", ch as u32))
            .collect::<Vec<_>>()
            .join(" ");

        write!(
            f,
            "'{}' ({}) at position {}",
            self.text, code_points, self.index
        )?;
        match self.kind {
            FindingKind::LatinVariant { base } => write!(f, " is a Latin variant of '{base}'"),
            FindingKind::Cyrillic => write!(f, " is Cyrillic"),
            FindingKind::OtherLetter => write!(f, " is a non-standard letter"),
            FindingKind::CombiningMark => write!(f, " is a catalogued combining mark"),
        }
    }
}

/// Outcome of classifying one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Domain as supplied by the caller
    pub original: String,
    /// Domain that was scanned, after ACE decoding when it applied
    pub decoded: String,
    /// Whether ACE decoding produced the scanned domain
    pub ace_decoded: bool,
    /// Whether the domain contains non-standard Latin or Cyrillic characters
    pub flagged: bool,
    /// Whether a non-standard letter was found
    pub has_latin_variant: bool,
    /// Whether a Cyrillic catalog entry was found
    pub has_cyrillic: bool,
    /// Reported characters and sequences, ordered by position
    pub findings: Vec<Finding>,
}

impl Verdict {
    /// Whether the domain contains non-standard Latin or Cyrillic characters
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Human-readable explanation of a flagged verdict
    pub fn reason(&self) -> Option<String> {
        if !self.is_flagged() {
            return None;
        }

        let details = self
            .findings
            .iter()
            .map(Finding::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        if self.ace_decoded {
            Some(format!("decoded to '{}': {details}", self.decoded))
        } else {
            Some(details)
        }
    }
}
