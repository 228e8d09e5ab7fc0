//! Structured error types shared across CoReS crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CoresError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the CoReS engine.
///
/// Input errors fail before any mutation, backend errors leave the
/// structure restored to its pre-attempt snapshot, and internal errors
/// indicate a broken postcondition that the engine makes no promise to
/// recover from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CoresError {
    /// The caller's structure violates an invariant (duplicate edge,
    /// unknown vertex, arity mismatch, ...).
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// The external SAT process or in-process SMT solver failed.
    #[error("backend error: {0}")]
    Backend(ErrorInfo),
    /// A postcondition of the reducer or an encoder/decoder was broken.
    #[error("internal error: {0}")]
    Internal(ErrorInfo),
}

impl CoresError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CoresError::Input(info) | CoresError::Backend(info) | CoresError::Internal(info) => {
                info
            }
        }
    }

    /// Shorthand for constructing an [`CoresError::Input`] variant.
    pub fn input(code: impl Into<String>, message: impl Into<String>) -> Self {
        CoresError::Input(ErrorInfo::new(code, message))
    }

    /// Shorthand for constructing a [`CoresError::Backend`] variant.
    pub fn backend(code: impl Into<String>, message: impl Into<String>) -> Self {
        CoresError::Backend(ErrorInfo::new(code, message))
    }

    /// Shorthand for constructing an [`CoresError::Internal`] variant.
    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        CoresError::Internal(ErrorInfo::new(code, message))
    }
}
