// ================================================================
// File: lumia-common/src/error.rs
// ================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::models::alert_kind::AlertKind;

/// A name outside a closed identifier set: an alert kind, or an overlay
/// listener name. Always a programmer error on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kind: {0:?}")]
pub struct UnknownKindError(pub String);

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum FieldProblem {
    /// Required field is absent.
    Missing,
    /// Field is `null` but not declared nullable.
    UnexpectedNull,
    TypeMismatch { expected: String, found: String },
    /// A tag inside `dynamic` did not select any declared arm.
    UnknownArm { tag: String, found: String },
    /// Passed the schema but could not be decoded into the typed payload.
    Undecodable { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path from the envelope root, e.g. `dynamic.giftAmount`.
    pub path: String,
    #[serde(flatten)]
    pub problem: FieldProblem,
}

impl FieldIssue {
    pub fn missing(path: impl Into<String>) -> Self {
        Self { path: path.into(), problem: FieldProblem::Missing }
    }

    pub fn mismatch(path: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            problem: FieldProblem::TypeMismatch {
                expected: expected.into(),
                found: found.into(),
            },
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "{}: missing", self.path),
            FieldProblem::UnexpectedNull => write!(f, "{}: null is not allowed", self.path),
            FieldProblem::TypeMismatch { expected, found } => {
                write!(f, "{}: expected {}, found {}", self.path, expected, found)
            }
            FieldProblem::UnknownArm { tag, found } => {
                write!(f, "{}: tag `{}` = {} matches no variant", self.path, tag, found)
            }
            FieldProblem::Undecodable { message } => write!(f, "{}: {}", self.path, message),
        }
    }
}

/// Every problem found in one payload. A payload is accepted or rejected as a
/// unit; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("invalid `{kind}` payload: {}", join_issues(.issues))]
pub struct ValidationError {
    pub kind: AlertKind,
    pub issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Paths reported as missing.
    pub fn missing(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.problem == FieldProblem::Missing)
            .map(|i| i.path.as_str())
            .collect()
    }

    pub fn issue_at(&self, path: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.path == path)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    UnknownKind(#[from] UnknownKindError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sibling overlay event that failed to decode, with the offending path.
    #[error("Decode error at `{path}`: {message}")]
    Decode { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Event bus error: {0}")]
    EventBus(String),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Error::Decode {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Handler(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Handler(s.to_string())
    }
}
