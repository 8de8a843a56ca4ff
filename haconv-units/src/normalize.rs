//! Unit label normalization
//!
//! Sensor attributes and template arguments spell units loosely:
//! "kW", "kilo_watts", "L / min", "°F". Labels are reduced to an uppercase
//! token before lookup so all of those resolve.

use crate::unit::ConversionError;
use crate::units::UNITS;
use crate::{Family, Unit};

/// Characters dropped from a label before lookup
fn is_ignored(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '-' | '/' | '°' | 'º')
}

/// Uppercase a label and strip whitespace, `_`, `-`, `/` and degree signs
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !is_ignored(*c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Resolve an optional label to a canonical unit of `family`.
///
/// An absent or blank label means the family's base unit.
pub fn resolve_unit(label: Option<&str>, family: Family) -> Result<Unit, ConversionError> {
    let label = match label {
        Some(l) if !l.trim().is_empty() => l,
        _ => return Ok(family.base_unit()),
    };

    let normalized = normalize_label(label);
    UNITS.get(family, &normalized).ok_or_else(|| ConversionError::UnrecognizedUnit {
        label: label.to_string(),
        family,
    })
}
