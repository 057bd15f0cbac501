//! Emits the failure banner through the `log` facade.

use anyhow::Result;
use log::{debug, error};

use super::{render_banner, FailureAnalysisReporter};
use crate::analysis::FailureAnalysis;

/// Reports an analysis at error level via whatever logger the host installed.
/// The captured cause chain goes out at debug level so the default
/// presentation stays readable.
pub struct LoggingReporter;

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl FailureAnalysisReporter for LoggingReporter {
    fn report(&mut self, analysis: &FailureAnalysis) -> Result<()> {
        error!("{}", render_banner(analysis));
        if !analysis.cause_chain().is_empty() {
            debug!("caused by: {}", analysis.cause_chain().join("\n  caused by: "));
        }
        Ok(())
    }
}
