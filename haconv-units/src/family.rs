//! Unit families
//!
//! Every unit belongs to exactly one closed family. Conversions never cross
//! families, and each family has a base unit that absent labels default to.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Power,
    Energy,
    Flow,
    Temperature,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Power, Family::Energy, Family::Flow, Family::Temperature];

    /// Unit assumed when no label is given
    pub fn base_unit(&self) -> Unit {
        match self {
            Family::Power => Unit::Watt,
            Family::Energy => Unit::Joule,
            Family::Flow => Unit::LitrePerMinute,
            Family::Temperature => Unit::Celsius,
        }
    }

    pub fn units(&self) -> &'static [Unit] {
        match self {
            Family::Power => &[Unit::Watt, Unit::Kilowatt, Unit::Horsepower, Unit::BtuPerHour],
            Family::Energy => &[
                Unit::Joule,
                Unit::Kilojoule,
                Unit::Megajoule,
                Unit::Gigajoule,
                Unit::WattHour,
                Unit::KilowattHour,
                Unit::Btu,
                Unit::Calorie,
                Unit::Kilocalorie,
            ],
            Family::Flow => &[Unit::LitrePerMinute, Unit::GallonPerMinute],
            Family::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Power => "power",
            Family::Energy => "energy",
            Family::Flow => "flow",
            Family::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
