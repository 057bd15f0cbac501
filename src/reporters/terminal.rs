//! Colored banner output for interactive terminals.

use anyhow::Result;
use colored::*;

use super::FailureAnalysisReporter;
use crate::analysis::FailureAnalysis;

/// Prints the failure banner to stderr with color, for hosts that talk to a
/// terminal rather than a log pipeline.
pub struct TerminalReporter;

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl FailureAnalysisReporter for TerminalReporter {
    fn report(&mut self, analysis: &FailureAnalysis) -> Result<()> {
        eprintln!();
        eprintln!("{}", "***************************".red());
        eprintln!("{}", "APPLICATION FAILED TO START".red().bold());
        eprintln!("{}", "***************************".red());
        eprintln!();
        eprintln!("{}", "Description:".bold());
        eprintln!();
        eprintln!("{}", analysis.description());
        if let Some(action) = analysis.action() {
            eprintln!();
            eprintln!("{}", "Action:".bold());
            eprintln!();
            eprintln!("{action}");
        }
        if !analysis.cause_chain().is_empty() {
            eprintln!();
            for (depth, cause) in analysis.cause_chain().iter().enumerate() {
                eprintln!("{}{} {}", "  ".repeat(depth), "caused by:".dimmed(), cause);
            }
        }
        Ok(())
    }
}
