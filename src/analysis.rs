//! The explanation artifact produced by a matching analyzer.

use serde::Serialize;
use std::error::Error;

use crate::cause::render_chain;

/// Human-readable explanation of a startup failure: what went wrong and,
/// when known, what to do about it.
///
/// Immutable once built. Created by exactly one analyzer during resolution,
/// handed to every registered reporter in turn, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureAnalysis {
    description: String,
    action: Option<String>,
    cause_chain: Vec<String>,
}

impl FailureAnalysis {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            action: None,
            cause_chain: Vec::new(),
        }
    }

    /// Attaches a suggested remedy.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Records the most relevant cause: its message and every message
    /// beneath it in the source chain. The failure itself is borrowed by the
    /// dispatch call, so the reference back to the cause is materialized as
    /// rendered text.
    pub fn with_cause(mut self, cause: &(dyn Error + 'static)) -> Self {
        self.cause_chain = render_chain(cause);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn cause_chain(&self) -> &[String] {
        &self.cause_chain
    }
}
