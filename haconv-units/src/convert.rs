//! Conversion entry points
//!
//! `convert_value` is strict and reports both failure kinds to the caller.
//! `convert_lenient` is what filters use: it never fails loudly, logs a
//! warning, returns `None` for non-numeric input and applies the
//! configured unknown-unit policy.

use haconv_core::{ensure_finite, Settings, UnknownUnitPolicy, Value};
use tracing::warn;
use crate::normalize::resolve_unit;
use crate::unit::ConversionError;
use crate::{Quantity, Unit};

/// Convert a magnitude between two canonical units of one family.
///
/// Results that overflow `f64` are rejected with `OutOfRange`.
pub fn convert(value: f64, from: Unit, to: Unit, settings: &Settings) -> Result<f64, ConversionError> {
    let converted = Quantity::new(value, from).convert_to(to, settings)?;
    ensure_finite(converted.value).map_err(|_| ConversionError::OutOfRange { value, from, to })
}

/// Convert a template value with an optional source label into `target`.
///
/// An absent label means the family base unit.
pub fn convert_value(
    value: &Value,
    label: Option<&str>,
    target: Unit,
    settings: &Settings,
) -> Result<f64, ConversionError> {
    let magnitude = value.to_finite().map_err(|_| ConversionError::NotNumeric {
        value: value.to_string(),
    })?;
    let from = resolve_unit(label, target.family())?;
    convert(magnitude, from, target, settings)
}

/// Filter-facing conversion: `None` instead of errors, warnings in the log.
pub fn convert_lenient(
    filter: &str,
    value: &Value,
    label: Option<&str>,
    target: Unit,
    settings: &Settings,
) -> Option<f64> {
    let magnitude = match value.to_finite() {
        Ok(v) => v,
        Err(e) => {
            warn!(filter, value = %value, error = %e, "Unable to convert value to a number");
            return None;
        }
    };

    let from = match resolve_unit(label, target.family()) {
        Ok(unit) => unit,
        Err(e) => match settings.unknown_unit_policy {
            UnknownUnitPolicy::Passthrough => {
                warn!(filter, unit = label.unwrap_or_default(), error = %e,
                    "Unknown unit, treating value as {}", target.symbol());
                return Some(magnitude);
            }
            UnknownUnitPolicy::AssumeBaseUnit => {
                let base = target.family().base_unit();
                warn!(filter, unit = label.unwrap_or_default(), error = %e,
                    "Unknown unit, treating value as {}", base.symbol());
                base
            }
        },
    };

    match convert(magnitude, from, target, settings) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(filter, error = %e, "Conversion failed");
            None
        }
    }
}
