//! Quantity type - a magnitude with a canonical unit

use std::fmt;
use serde::{Serialize, Deserialize};
use haconv_core::Settings;
use crate::Unit;
use crate::unit::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Re-express in `target`, which must belong to the same family.
    ///
    /// Linear families go through the family base unit, temperature goes
    /// through °C. Converting to the same unit returns the value untouched.
    pub fn convert_to(&self, target: Unit, settings: &Settings) -> Result<Quantity, ConversionError> {
        if !self.unit.is_compatible(&target) {
            return Err(ConversionError::IncompatibleFamilies { from: self.unit, to: target });
        }
        if self.unit == target {
            return Ok(*self);
        }

        let value = match (self.unit.linear(settings), target.linear(settings)) {
            (Some(from), Some(to)) => to.from_base_value(from.to_base_value(self.value)),
            _ => target.from_celsius(self.unit.to_celsius(self.value)),
        };

        Ok(Quantity::new(value, target))
    }

}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_same_unit_is_identity() {
        let q = Quantity::new(0.1 + 0.2, Unit::GallonPerMinute);
        assert_eq!(q.convert_to(Unit::GallonPerMinute, &settings()).unwrap().value, 0.1 + 0.2);
    }

    #[test]
    fn test_incompatible() {
        let q = Quantity::new(1.0, Unit::Watt);
        assert!(matches!(
            q.convert_to(Unit::Joule, &settings()),
            Err(ConversionError::IncompatibleFamilies { .. })
        ));
    }

    #[test]
    fn test_convert_to_base_unit() {
        let q = Quantity::new(2.0, Unit::KilowattHour).convert_to(Unit::Joule, &settings()).unwrap();
        assert_eq!(q.unit, Unit::Joule);
        assert_eq!(q.value, 7_200_000.0);

        let t = Quantity::new(212.0, Unit::Fahrenheit).convert_to(Unit::Celsius, &settings()).unwrap();
        assert_eq!(t.unit, Unit::Celsius);
        assert_eq!(t.value, 100.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(5000.0, Unit::Watt).to_string(), "5000 W");
        assert_eq!(Quantity::new(21.5, Unit::Celsius).to_string(), "21.5 °C");
    }
}
