//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use dchek_core::Verdict;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs the verdict as a pretty-printed object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct VerdictData<'a> {
    /// The verdict itself
    #[serde(flatten)]
    pub verdict: &'a Verdict,
    /// Human-readable explanation of a flagged verdict
    pub reason: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_verdict(&mut self, verdict: &Verdict) -> Result<()> {
        let data = VerdictData {
            verdict,
            reason: verdict.reason(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(domain: &str) -> serde_json::Value {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_verdict(&dchek_core::classify(domain))
            .unwrap();
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_flagged_json() {
        let json = render("аррle.com");
        assert_eq!(json["original"], "аррle.com");
        assert_eq!(json["flagged"], true);
        assert_eq!(json["has_cyrillic"], true);
        assert_eq!(json["findings"].as_array().unwrap().len(), 3);
        assert_eq!(json["findings"][0]["kind"], "cyrillic");
        assert!(json["reason"].as_str().unwrap().contains("is Cyrillic"));
    }

    #[test]
    fn test_clean_json() {
        let json = render("example.com");
        assert_eq!(json["flagged"], false);
        assert_eq!(json["ace_decoded"], false);
        assert!(json["reason"].is_null());
        assert!(json["findings"].as_array().unwrap().is_empty());
    }
}
