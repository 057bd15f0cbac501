//! Two-phase diagnostic dispatch: analyzer resolution, then reporter fan-out.
//!
//! [`resolve`] finds the first analyzer able to explain a failure; [`report`]
//! hands that explanation to every registered reporter. [`analyze_and_report`]
//! composes the two and is the call a hosting process makes when startup
//! fails. The phases stay public because their contracts (short-circuit vs
//! all-or-nothing) are independently useful.

use anyhow::Result;

use crate::analysis::FailureAnalysis;
use crate::analyzers::{
    AddrInUseAnalyzer, FailureAnalyzer, FileNotFoundAnalyzer, MissingEnvVarAnalyzer,
    PermissionDeniedAnalyzer,
};
use crate::reporters::{FailureAnalysisReporter, LoggingReporter};

/// Runs `failure` past each analyzer in order and returns the first analysis
/// produced, or `None` if no analyzer recognizes the failure.
///
/// Resolution short-circuits: analyzers after the first match are never
/// invoked. That is part of the contract, not an optimization: analyzers may
/// be expensive or side-effecting. An analyzer error aborts resolution
/// entirely; there is no fallback to the next candidate.
pub fn resolve(
    failure: &anyhow::Error,
    analyzers: &[Box<dyn FailureAnalyzer>],
) -> Result<Option<FailureAnalysis>> {
    for analyzer in analyzers {
        if let Some(analysis) = analyzer.analyze(failure)? {
            return Ok(Some(analysis));
        }
    }
    Ok(None)
}

/// Delivers `analysis` to every reporter in order.
///
/// Returns `Ok(false)` with zero side effects when there is no analysis or no
/// reporters; otherwise every reporter receives the identical analysis and
/// the call returns `Ok(true)`. A reporter error propagates immediately, so
/// reporters after the failing one are skipped.
pub fn report(
    analysis: Option<&FailureAnalysis>,
    reporters: &mut [Box<dyn FailureAnalysisReporter>],
) -> Result<bool> {
    let Some(analysis) = analysis else {
        return Ok(false);
    };
    if reporters.is_empty() {
        return Ok(false);
    }
    for reporter in reporters.iter_mut() {
        reporter.report(analysis)?;
    }
    Ok(true)
}

/// Resolves an analysis for `failure` and fans it out to the reporters.
///
/// Returns `Ok(true)` when a diagnostic was produced and delivered to at
/// least one reporter, `Ok(false)` when no diagnostic was delivered (no
/// analyzer matched, or no reporters are registered). Resolution always runs,
/// even when the reporter list is empty.
pub fn analyze_and_report(
    failure: &anyhow::Error,
    analyzers: &[Box<dyn FailureAnalyzer>],
    reporters: &mut [Box<dyn FailureAnalysisReporter>],
) -> Result<bool> {
    let analysis = resolve(failure, analyzers)?;
    report(analysis.as_ref(), reporters)
}

/// Ordered analyzer and reporter registrations for one hosting process.
///
/// The host wires this up once at startup (manually or from its own
/// configuration) and calls [`DiagnosticRegistry::analyze_and_report`] when a
/// failure surfaces. The registry performs no discovery of its own.
#[derive(Default)]
pub struct DiagnosticRegistry {
    analyzers: Vec<Box<dyn FailureAnalyzer>>,
    reporters: Vec<Box<dyn FailureAnalysisReporter>>,
}

impl DiagnosticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in analyzers, most specific first,
    /// and the logging reporter.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_analyzer(AddrInUseAnalyzer)
            .with_analyzer(PermissionDeniedAnalyzer)
            .with_analyzer(FileNotFoundAnalyzer)
            .with_analyzer(MissingEnvVarAnalyzer)
            .with_reporter(LoggingReporter::new())
    }

    /// Appends an analyzer. Order matters: earlier analyzers win.
    pub fn with_analyzer(mut self, analyzer: impl FailureAnalyzer + 'static) -> Self {
        self.analyzers.push(Box::new(analyzer));
        self
    }

    /// Appends a reporter. Every reporter receives the resolved analysis, in
    /// registration order.
    pub fn with_reporter(mut self, reporter: impl FailureAnalysisReporter + 'static) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }

    pub fn analyzer_count(&self) -> usize {
        self.analyzers.len()
    }

    pub fn reporter_count(&self) -> usize {
        self.reporters.len()
    }

    pub fn analyze_and_report(&mut self, failure: &anyhow::Error) -> Result<bool> {
        let analysis = resolve(failure, &self.analyzers)?;
        report(analysis.as_ref(), &mut self.reporters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct ScriptedAnalyzer {
        name: &'static str,
        matches: bool,
        calls: CallLog,
    }

    impl FailureAnalyzer for ScriptedAnalyzer {
        fn analyze(&self, _failure: &anyhow::Error) -> Result<Option<FailureAnalysis>> {
            self.calls.lock().unwrap().push(self.name);
            Ok(self
                .matches
                .then(|| FailureAnalysis::new(format!("matched by {}", self.name))))
        }
    }

    struct ExplodingAnalyzer {
        calls: CallLog,
    }

    impl FailureAnalyzer for ExplodingAnalyzer {
        fn analyze(&self, _failure: &anyhow::Error) -> Result<Option<FailureAnalysis>> {
            self.calls.lock().unwrap().push("exploding");
            bail!("analyzer malfunction")
        }
    }

    struct RecordingReporter {
        name: &'static str,
        fail: bool,
        deliveries: Arc<Mutex<Vec<(&'static str, FailureAnalysis)>>>,
    }

    impl FailureAnalysisReporter for RecordingReporter {
        fn report(&mut self, analysis: &FailureAnalysis) -> Result<()> {
            self.deliveries
                .lock()
                .unwrap()
                .push((self.name, analysis.clone()));
            if self.fail {
                bail!("reporter malfunction");
            }
            Ok(())
        }
    }

    fn analyzer(name: &'static str, matches: bool, calls: &CallLog) -> Box<dyn FailureAnalyzer> {
        Box::new(ScriptedAnalyzer {
            name,
            matches,
            calls: Arc::clone(calls),
        })
    }

    fn reporter(
        name: &'static str,
        fail: bool,
        deliveries: &Arc<Mutex<Vec<(&'static str, FailureAnalysis)>>>,
    ) -> Box<dyn FailureAnalysisReporter> {
        Box::new(RecordingReporter {
            name,
            fail,
            deliveries: Arc::clone(deliveries),
        })
    }

    #[test]
    fn test_resolve_returns_first_match_and_stops() {
        let calls: CallLog = Default::default();
        let analyzers = vec![
            analyzer("first", false, &calls),
            analyzer("second", true, &calls),
            analyzer("third", true, &calls),
        ];
        let failure = anyhow::anyhow!("boom");

        let analysis = resolve(&failure, &analyzers).unwrap().unwrap();

        assert_eq!(analysis.description(), "matched by second");
        assert_eq!(*calls.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_resolve_with_no_analyzers_is_none() {
        let failure = anyhow::anyhow!("boom");

        assert!(resolve(&failure, &[]).unwrap().is_none());
    }

    #[test]
    fn test_resolve_exhausts_non_matching_sequence() {
        let calls: CallLog = Default::default();
        let analyzers = vec![analyzer("a", false, &calls), analyzer("b", false, &calls)];
        let failure = anyhow::anyhow!("boom");

        assert!(resolve(&failure, &analyzers).unwrap().is_none());
        assert_eq!(*calls.lock().unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_analyzer_error_aborts_resolution() {
        let calls: CallLog = Default::default();
        let analyzers: Vec<Box<dyn FailureAnalyzer>> = vec![
            analyzer("a", false, &calls),
            Box::new(ExplodingAnalyzer {
                calls: Arc::clone(&calls),
            }),
            analyzer("never", true, &calls),
        ];
        let failure = anyhow::anyhow!("boom");

        let err = resolve(&failure, &analyzers).unwrap_err();

        assert_eq!(err.to_string(), "analyzer malfunction");
        assert_eq!(*calls.lock().unwrap(), ["a", "exploding"]);
    }

    #[test]
    fn test_report_without_analysis_invokes_nothing() {
        let deliveries = Default::default();
        let mut reporters = vec![reporter("r1", false, &deliveries), reporter("r2", false, &deliveries)];

        let delivered = report(None, &mut reporters).unwrap();

        assert!(!delivered);
        assert!(deliveries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_report_without_reporters_is_false() {
        let analysis = FailureAnalysis::new("explained");
        let mut reporters: Vec<Box<dyn FailureAnalysisReporter>> = Vec::new();

        assert!(!report(Some(&analysis), &mut reporters).unwrap());
    }

    #[test]
    fn test_report_fans_out_to_every_reporter_in_order() {
        let deliveries = Default::default();
        let mut reporters = vec![
            reporter("r1", false, &deliveries),
            reporter("r2", false, &deliveries),
            reporter("r3", false, &deliveries),
        ];
        let analysis = FailureAnalysis::new("explained").with_action("do the thing");

        let delivered = report(Some(&analysis), &mut reporters).unwrap();

        assert!(delivered);
        let seen = deliveries.lock().unwrap();
        assert_eq!(
            seen.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            ["r1", "r2", "r3"]
        );
        assert!(seen.iter().all(|(_, delivered)| *delivered == analysis));
    }

    #[test]
    fn test_reporter_error_skips_remaining_reporters() {
        let deliveries = Default::default();
        let mut reporters = vec![
            reporter("r1", false, &deliveries),
            reporter("r2", true, &deliveries),
            reporter("r3", false, &deliveries),
        ];
        let analysis = FailureAnalysis::new("explained");

        let err = report(Some(&analysis), &mut reporters).unwrap_err();

        assert_eq!(err.to_string(), "reporter malfunction");
        let seen = deliveries.lock().unwrap();
        assert_eq!(
            seen.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            ["r1", "r2"]
        );
    }

    #[test]
    fn test_registry_resolves_even_without_reporters() {
        let calls: CallLog = Default::default();
        let mut registry =
            DiagnosticRegistry::new().with_analyzer(ScriptedAnalyzer {
                name: "only",
                matches: true,
                calls: Arc::clone(&calls),
            });
        let failure = anyhow::anyhow!("boom");

        let delivered = registry.analyze_and_report(&failure).unwrap();

        assert!(!delivered);
        assert_eq!(*calls.lock().unwrap(), ["only"]);
    }

    #[test]
    fn test_registry_with_defaults_is_populated() {
        let registry = DiagnosticRegistry::with_defaults();

        assert_eq!(registry.analyzer_count(), 4);
        assert_eq!(registry.reporter_count(), 1);
    }
}
