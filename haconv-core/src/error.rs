//! Structured errors for template consumers
//!
//! Errors never crash the surrounding template evaluation. They are values
//! carried back to the caller with a machine-readable code.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_NUMERIC: &str = "NOT_NUMERIC";
    pub const UNRECOGNIZED_UNIT: &str = "UNRECOGNIZED_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const UNDEFINED_FILTER: &str = "UNDEFINED_FILTER";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Evaluation continued with a degraded result
    Warning,
    /// The call produced no result
    Error,
}

/// Structured error value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaConvError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl HaConvError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn not_numeric(value: &str) -> Self {
        Self::new(codes::NOT_NUMERIC, format!("Value '{}' is not a finite number", value))
            .with_severity(Severity::Warning)
    }

    pub fn unrecognized_unit(label: &str, family: &str) -> Self {
        Self::new(codes::UNRECOGNIZED_UNIT, format!("Unrecognized {} unit: '{}'", family, label))
            .with_suggestion(format!("Use one of the {} unit names listed by help()", family))
            .with_severity(Severity::Warning)
    }

    pub fn incompatible_units(details: impl Into<String>) -> Self {
        Self::new(codes::INCOMPATIBLE_UNITS, details.into())
            .with_suggestion("Convert only between units of the same family")
    }

    pub fn undefined_filter(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FILTER, format!("Unknown filter: {}", name))
            .with_suggestion("Use help() to list available filters")
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} argument(s), got {}", func, expected, got))
            .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Configuration error: {}", details.into()))
    }
}

impl std::fmt::Display for HaConvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for HaConvError {}

impl From<NumberError> for HaConvError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) | NumberError::NonFinite(s) => Self::not_numeric(&s),
        }
    }
}

impl From<serde_json::Error> for HaConvError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
