//! Operator results shown to the user.

use latticekit_core::{Error, Result};
use tracing::{info, warn};

/// Severity of a report message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
}

impl std::fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// Whether an operator ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operator did its work
    Finished,
    /// The operator stopped before changing anything
    Cancelled,
}

/// What an operator reports back to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReport {
    pub operation: &'static str,
    pub outcome: Outcome,
    pub level: ReportLevel,
    pub message: String,
}

impl OperationReport {
    pub fn finished(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            outcome: Outcome::Finished,
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    /// Finished, but with something the user should look at.
    pub fn finished_with_warning(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            ..Self::finished(operation, message)
        }
    }

    pub fn cancelled(
        operation: &'static str,
        level: ReportLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            outcome: Outcome::Cancelled,
            level,
            message: message.into(),
        }
    }

    /// Converts an error into a cancelled report. Expected editing
    /// conditions (empty selection, stale names) are informational.
    pub fn from_error(operation: &'static str, err: &Error) -> Self {
        let level = if err.is_benign() {
            ReportLevel::Info
        } else {
            ReportLevel::Warning
        };
        Self::cancelled(operation, level, err.to_string())
    }

    /// Unwraps an operator body's result, converting errors, and logs the
    /// report.
    pub fn from_result(operation: &'static str, result: Result<OperationReport>) -> Self {
        let report = match result {
            Ok(report) => report,
            Err(err) => Self::from_error(operation, &err),
        };
        report.log();
        report
    }

    pub fn is_finished(&self) -> bool {
        self.outcome == Outcome::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }

    fn log(&self) {
        match self.level {
            ReportLevel::Info => info!("{}: {}", self.operation, self.message),
            ReportLevel::Warning => warn!("{}: {}", self.operation, self.message),
        }
    }
}

impl std::fmt::Display for OperationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.operation, self.message)
    }
}
