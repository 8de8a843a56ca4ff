//! Canonical units with their conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use haconv_core::{HaConvError, Settings};
use crate::Family;

/// Watts per BTU/h, as published for this filter set
const WATTS_PER_BTU_PER_HOUR: f64 = 1.0 / 0.29307107;
const WATTS_PER_HORSEPOWER: f64 = 745.699872;
const LITRES_PER_GALLON: f64 = 3.78541;
const GALLONS_PER_LITRE: f64 = 0.264172;
const ABSOLUTE_ZERO_CELSIUS: f64 = 273.15;

/// A canonical unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Power
    Watt,
    Kilowatt,
    Horsepower,
    BtuPerHour,
    // Energy
    Joule,
    Kilojoule,
    Megajoule,
    Gigajoule,
    WattHour,
    KilowattHour,
    Btu,
    Calorie,
    Kilocalorie,
    // Flow
    LitrePerMinute,
    GallonPerMinute,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Multiplicative conversion through the family base unit.
///
/// `value_base = value * to_base`. Going back divides by `to_base` unless
/// the unit publishes its own `from_base` factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub to_base: f64,
    pub from_base: Option<f64>,
}

impl Linear {
    const fn new(to_base: f64) -> Self {
        Linear { to_base, from_base: None }
    }

    pub fn to_base_value(&self, value: f64) -> f64 {
        value * self.to_base
    }

    pub fn from_base_value(&self, base: f64) -> f64 {
        match self.from_base {
            Some(k) => base * k,
            None => base / self.to_base,
        }
    }
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Watt => "W",
            Unit::Kilowatt => "kW",
            Unit::Horsepower => "HP",
            Unit::BtuPerHour => "BTU/h",
            Unit::Joule => "J",
            Unit::Kilojoule => "kJ",
            Unit::Megajoule => "MJ",
            Unit::Gigajoule => "GJ",
            Unit::WattHour => "Wh",
            Unit::KilowattHour => "kWh",
            Unit::Btu => "BTU",
            Unit::Calorie => "cal",
            Unit::Kilocalorie => "kcal",
            Unit::LitrePerMinute => "L/min",
            Unit::GallonPerMinute => "gal/min",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Watt => "watt",
            Unit::Kilowatt => "kilowatt",
            Unit::Horsepower => "horsepower",
            Unit::BtuPerHour => "BTU per hour",
            Unit::Joule => "joule",
            Unit::Kilojoule => "kilojoule",
            Unit::Megajoule => "megajoule",
            Unit::Gigajoule => "gigajoule",
            Unit::WattHour => "watt-hour",
            Unit::KilowattHour => "kilowatt-hour",
            Unit::Btu => "British thermal unit",
            Unit::Calorie => "calorie",
            Unit::Kilocalorie => "kilocalorie",
            Unit::LitrePerMinute => "litre per minute",
            Unit::GallonPerMinute => "gallon per minute",
            Unit::Celsius => "degree Celsius",
            Unit::Fahrenheit => "degree Fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Unit::Watt | Unit::Kilowatt | Unit::Horsepower | Unit::BtuPerHour => Family::Power,
            Unit::Joule
            | Unit::Kilojoule
            | Unit::Megajoule
            | Unit::Gigajoule
            | Unit::WattHour
            | Unit::KilowattHour
            | Unit::Btu
            | Unit::Calorie
            | Unit::Kilocalorie => Family::Energy,
            Unit::LitrePerMinute | Unit::GallonPerMinute => Family::Flow,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Family::Temperature,
        }
    }

    /// Linear factors, `None` for temperature units
    pub fn linear(&self, settings: &Settings) -> Option<Linear> {
        let linear = match self {
            Unit::Watt => Linear::new(1.0),
            Unit::Kilowatt => Linear::new(1000.0),
            Unit::Horsepower => Linear::new(WATTS_PER_HORSEPOWER),
            Unit::BtuPerHour => Linear::new(WATTS_PER_BTU_PER_HOUR),
            Unit::Joule => Linear::new(1.0),
            Unit::Kilojoule => Linear::new(1000.0),
            Unit::Megajoule => Linear::new(1_000_000.0),
            Unit::Gigajoule => Linear::new(1_000_000_000.0),
            Unit::WattHour => Linear::new(3600.0),
            Unit::KilowattHour => Linear::new(3_600_000.0),
            Unit::Btu => Linear::new(settings.btu_standard.joules()),
            Unit::Calorie => Linear::new(4.184),
            Unit::Kilocalorie => Linear::new(4184.0),
            Unit::LitrePerMinute => Linear::new(1.0),
            Unit::GallonPerMinute => Linear {
                to_base: LITRES_PER_GALLON,
                from_base: Some(GALLONS_PER_LITRE),
            },
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => return None,
        };
        Some(linear)
    }

    /// Temperature in this unit → °C. Identity for non-temperature units.
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Unit::Kelvin => value - ABSOLUTE_ZERO_CELSIUS,
            _ => value,
        }
    }

    /// °C → temperature in this unit. Identity for non-temperature units.
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Unit::Kelvin => celsius + ABSOLUTE_ZERO_CELSIUS,
            _ => celsius,
        }
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.family() == other.family()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("value '{value}' is not a finite number")]
    NotNumeric { value: String },

    #[error("unrecognized {family} unit: '{label}'")]
    UnrecognizedUnit { label: String, family: Family },

    #[error("cannot convert {from} ({}) to {to} ({})", .from.family(), .to.family())]
    IncompatibleFamilies { from: Unit, to: Unit },

    #[error("{value} {from} is out of range in {to}")]
    OutOfRange { value: f64, from: Unit, to: Unit },
}

impl From<ConversionError> for HaConvError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::NotNumeric { value } => HaConvError::not_numeric(&value),
            ConversionError::UnrecognizedUnit { label, family } => {
                HaConvError::unrecognized_unit(&label, family.as_str())
            }
            ConversionError::OutOfRange { value, .. } => HaConvError::not_numeric(&value.to_string()),
            other => HaConvError::incompatible_units(other.to_string()),
        }
    }
}
