//! Short status lines for operations that produce no report body.

use std::fmt;

use serde::Serialize;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// The operation changed something
    Success,
    /// The operation completed but found nothing to report
    NotFound,
}

/// A one-line operation status, e.g. a script load or a missing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::NotFound,
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Success => writeln!(f, "Success: {}", self.message),
            StatusKind::NotFound => writeln!(f, "{}", self.message),
        }
    }
}
