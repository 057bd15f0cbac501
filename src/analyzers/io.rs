//! Analyzers for I/O failures raised while binding sockets and opening files.

use std::io;

use super::CauseAnalyzer;
use crate::analysis::FailureAnalysis;

/// Explains [`io::ErrorKind::AddrInUse`]: the configured listen address is
/// already taken by another process.
pub struct AddrInUseAnalyzer;

impl CauseAnalyzer for AddrInUseAnalyzer {
    type Cause = io::Error;

    fn analyze_cause(&self, _failure: &anyhow::Error, cause: &io::Error) -> Option<FailureAnalysis> {
        if cause.kind() != io::ErrorKind::AddrInUse {
            return None;
        }
        Some(
            FailureAnalysis::new(
                "The address the application was configured to listen on is already in use.",
            )
            .with_action(
                "Identify and stop the process that is bound to that address, \
                 or configure this application to listen on a different port.",
            )
            .with_cause(cause),
        )
    }
}

/// Explains [`io::ErrorKind::PermissionDenied`] during startup I/O.
pub struct PermissionDeniedAnalyzer;

impl CauseAnalyzer for PermissionDeniedAnalyzer {
    type Cause = io::Error;

    fn analyze_cause(&self, _failure: &anyhow::Error, cause: &io::Error) -> Option<FailureAnalysis> {
        if cause.kind() != io::ErrorKind::PermissionDenied {
            return None;
        }
        Some(
            FailureAnalysis::new(
                "The application was denied permission to a resource it needs at startup.",
            )
            .with_action(
                "Check the ownership and mode of the resource, and the user the \
                 application runs as. Privileged ports (below 1024) need elevated rights.",
            )
            .with_cause(cause),
        )
    }
}

/// Explains [`io::ErrorKind::NotFound`]: a file or path the application
/// depends on is missing.
pub struct FileNotFoundAnalyzer;

impl CauseAnalyzer for FileNotFoundAnalyzer {
    type Cause = io::Error;

    fn analyze_cause(&self, _failure: &anyhow::Error, cause: &io::Error) -> Option<FailureAnalysis> {
        if cause.kind() != io::ErrorKind::NotFound {
            return None;
        }
        Some(
            FailureAnalysis::new("A file or directory the application needs at startup is missing.")
                .with_action(
                    "Verify the path in the application's configuration and that the \
                     file is deployed alongside the application.",
                )
                .with_cause(cause),
        )
    }
}
