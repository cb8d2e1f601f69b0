//! Plain text output formatter

use super::{verdict_sentence, OutputFormatter};
use anyhow::Result;
use dchek_core::Verdict;
use std::io::Write;

/// Plain text formatter - outputs the verdict sentence, optionally with findings
pub struct TextFormatter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, explain: bool) -> Self {
        Self { writer, explain }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_verdict(&mut self, verdict: &Verdict) -> Result<()> {
        writeln!(self.writer, "{}", verdict_sentence(verdict))?;

        if self.explain {
            if verdict.ace_decoded {
                writeln!(self.writer, "  decoded: {}", verdict.decoded)?;
            }
            for finding in &verdict.findings {
                writeln!(self.writer, "  - {finding}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
