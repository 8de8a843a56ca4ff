//! Number parsing for filter inputs
//!
//! Template values arrive as numbers, numeric text ("21.5", " 1e3 ") or
//! booleans. Only finite reals are accepted as magnitudes.

use thiserror::Error;

/// Error type for number parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Not a finite number: {0}")]
    NonFinite(String),
}

/// Parse text into a finite `f64`.
///
/// Surrounding whitespace is ignored. `nan` and `inf` parse as floats but
/// are rejected, a magnitude must be finite.
pub fn parse_number(s: &str) -> Result<f64, NumberError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(NumberError::ParseError(s.to_string()));
    }

    let n: f64 = trimmed
        .parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    ensure_finite(n).map_err(|_| NumberError::NonFinite(s.to_string()))
}

/// Reject NaN and infinities
pub fn ensure_finite(n: f64) -> Result<f64, NumberError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(NumberError::NonFinite(n.to_string()))
    }
}
