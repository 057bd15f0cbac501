//! Analyzer capability contract and the built-in analyzer set.

use anyhow::Result;

use crate::analysis::FailureAnalysis;
use crate::cause::find_cause;

pub mod env;
pub mod io;

pub use env::MissingEnvVarAnalyzer;
pub use io::{AddrInUseAnalyzer, FileNotFoundAnalyzer, PermissionDeniedAnalyzer};

/// Capability to explain a startup failure.
///
/// Implementations are stateless from the dispatcher's point of view and are
/// invoked in registration order until one produces an analysis.
pub trait FailureAnalyzer: Send + Sync {
    /// Inspects `failure` and produces an analysis when this analyzer
    /// recognizes it. `Ok(None)` means "not mine, try the next one"; an
    /// `Err` is a malfunction and aborts the whole resolution.
    fn analyze(&self, failure: &anyhow::Error) -> Result<Option<FailureAnalysis>>;
}

/// Analyzer keyed to one concrete cause type.
///
/// Most analyzers only care whether a specific error type appears somewhere
/// in the failure's chain. Implement this instead of [`FailureAnalyzer`] and
/// the chain search is handled here: `analyze_cause` runs only when a
/// `Cause` is actually present, with the outermost occurrence winning.
pub trait CauseAnalyzer {
    type Cause: std::error::Error + 'static;

    fn analyze_cause(
        &self,
        failure: &anyhow::Error,
        cause: &Self::Cause,
    ) -> Option<FailureAnalysis>;
}

impl<A> FailureAnalyzer for A
where
    A: CauseAnalyzer + Send + Sync,
{
    fn analyze(&self, failure: &anyhow::Error) -> Result<Option<FailureAnalysis>> {
        Ok(find_cause::<A::Cause>(failure).and_then(|cause| self.analyze_cause(failure, cause)))
    }
}
