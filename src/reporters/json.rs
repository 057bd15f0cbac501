//! Machine-readable analysis output.

use anyhow::Result;
use std::io::Write;

use super::FailureAnalysisReporter;
use crate::analysis::FailureAnalysis;

/// Writes the analysis as pretty-printed JSON to any [`Write`] sink, one
/// document per reported analysis.
pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> FailureAnalysisReporter for JsonReporter<W> {
    fn report(&mut self, analysis: &FailureAnalysis) -> Result<()> {
        let json = serde_json::to_string_pretty(analysis)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
