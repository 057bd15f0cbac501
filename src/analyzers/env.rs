//! Analyzer for configuration read from the process environment.

use std::env::VarError;

use super::CauseAnalyzer;
use crate::analysis::FailureAnalysis;

/// Explains [`VarError`]: a required environment variable is unset or holds
/// bytes that are not valid unicode. The variable's name lives in the context
/// layers the startup path wrapped around the cause, which end up in the
/// reported cause chain.
pub struct MissingEnvVarAnalyzer;

impl CauseAnalyzer for MissingEnvVarAnalyzer {
    type Cause = VarError;

    fn analyze_cause(&self, failure: &anyhow::Error, cause: &VarError) -> Option<FailureAnalysis> {
        let description = match cause {
            VarError::NotPresent => "A required environment variable is not set.",
            VarError::NotUnicode(_) => {
                "A required environment variable contains invalid unicode."
            }
        };
        let mut analysis = FailureAnalysis::new(description).with_action(
            "Set the variable in the environment the application is started from, \
             then restart it.",
        );
        // Surface the wrapping context so the variable name is visible.
        if let Some(outermost) = failure.chain().next() {
            analysis = analysis.with_cause(outermost);
        }
        Some(analysis)
    }
}
