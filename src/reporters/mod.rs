//! Reporter capability contract and the built-in reporter set.

use anyhow::Result;

use crate::analysis::FailureAnalysis;

pub mod json;
pub mod logging;
pub mod terminal;

pub use json::JsonReporter;
pub use logging::LoggingReporter;
pub use terminal::TerminalReporter;

/// Capability to deliver an analysis to some output channel.
///
/// Reporters may have arbitrary side effects (console, log sinks, telemetry).
/// An `Err` from `report` propagates to the dispatch caller and skips any
/// reporters registered after this one.
pub trait FailureAnalysisReporter {
    fn report(&mut self, analysis: &FailureAnalysis) -> Result<()>;
}

/// Renders the plain-text failure banner shared by the logging and terminal
/// reporters. The Action section is omitted when the analysis carries none.
pub fn render_banner(analysis: &FailureAnalysis) -> String {
    let mut banner = String::new();
    banner.push_str("\n\n***************************\n");
    banner.push_str("APPLICATION FAILED TO START\n");
    banner.push_str("***************************\n\n");
    banner.push_str("Description:\n\n");
    banner.push_str(analysis.description());
    banner.push('\n');
    if let Some(action) = analysis.action() {
        banner.push_str("\nAction:\n\n");
        banner.push_str(action);
        banner.push('\n');
    }
    banner
}
