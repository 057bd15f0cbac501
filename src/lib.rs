// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cause;
pub mod dispatch;
pub mod reporters;

// Re-export commonly used types
pub use crate::analysis::FailureAnalysis;

pub use crate::analyzers::{
    AddrInUseAnalyzer, CauseAnalyzer, FailureAnalyzer, FileNotFoundAnalyzer, MissingEnvVarAnalyzer,
    PermissionDeniedAnalyzer,
};

pub use crate::cause::{find_cause, render_chain};

pub use crate::dispatch::{analyze_and_report, report, resolve, DiagnosticRegistry};

pub use crate::reporters::{
    render_banner, FailureAnalysisReporter, JsonReporter, LoggingReporter, TerminalReporter,
};
