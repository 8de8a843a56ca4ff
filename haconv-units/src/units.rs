//! Unit alias table
//!
//! Spellings are stored in normalized form (see `normalize_label`), keyed
//! per family so that e.g. "W" (power) and "WH" (energy) never collide.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Family, Unit};

/// Global alias table, built once and read-only afterwards
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Accepted spellings per canonical unit, already normalized
static ALIASES: &[(Unit, &[&str])] = &[
    // Power
    (Unit::Watt, &["W", "WATT", "WATTS"]),
    (Unit::Kilowatt, &["KW", "KILOWATT", "KILOWATTS"]),
    (Unit::Horsepower, &["HP", "HORSEPOWER", "HORSEPOWERS"]),
    (Unit::BtuPerHour, &["BTUH", "BTUHR", "BTUPH", "BTUPERHOUR", "BTUSPERHOUR"]),
    // Energy
    (Unit::Joule, &["J", "JOULE", "JOULES"]),
    (Unit::Kilojoule, &["KJ", "KILOJOULE", "KILOJOULES"]),
    (Unit::Megajoule, &["MJ", "MEGAJOULE", "MEGAJOULES"]),
    (Unit::Gigajoule, &["GJ", "GIGAJOULE", "GIGAJOULES"]),
    (Unit::WattHour, &["WH", "WATTHOUR", "WATTHOURS"]),
    (Unit::KilowattHour, &["KWH", "KILOWATTHOUR", "KILOWATTHOURS"]),
    (Unit::Btu, &["BTU", "BTUS", "BRITISHTHERMALUNIT", "BRITISHTHERMALUNITS"]),
    (Unit::Calorie, &["CAL", "CALORIE", "CALORIES"]),
    (Unit::Kilocalorie, &["KCAL", "KILOCALORIE", "KILOCALORIES"]),
    // Flow
    (
        Unit::LitrePerMinute,
        &[
            "LMIN",
            "LPM",
            "LPERMIN",
            "LITERPERMINUTE",
            "LITERSPERMINUTE",
            "LITREPERMINUTE",
            "LITRESPERMINUTE",
        ],
    ),
    (
        Unit::GallonPerMinute,
        &["GALMIN", "GPM", "GALPERMIN", "GALLONPERMINUTE", "GALLONSPERMINUTE"],
    ),
    // Temperature
    (Unit::Celsius, &["C", "CELSIUS", "CENTIGRADE", "DEGC"]),
    (Unit::Fahrenheit, &["F", "FAHRENHEIT", "DEGF"]),
    (Unit::Kelvin, &["K", "KELVIN", "KELVINS"]),
];

/// Registry of accepted spellings
pub struct UnitRegistry {
    aliases: HashMap<Family, HashMap<&'static str, Unit>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry { aliases: HashMap::new() };
        for (unit, spellings) in ALIASES {
            for spelling in spellings.iter() {
                registry.alias(*spelling, *unit);
            }
        }
        registry
    }

    fn alias(&mut self, spelling: &'static str, unit: Unit) {
        self.aliases.entry(unit.family()).or_default().insert(spelling, unit);
    }

    /// Look up an already-normalized spelling within a family
    pub fn get(&self, family: Family, normalized: &str) -> Option<Unit> {
        self.aliases.get(&family)?.get(normalized).copied()
    }

    /// Accepted spellings of a unit (normalized form)
    pub fn aliases_of(&self, unit: Unit) -> &'static [&'static str] {
        ALIASES.iter()
            .find(|(u, _)| *u == unit)
            .map(|(_, spellings)| *spellings)
            .unwrap_or(&[])
    }

    /// Number of registered spellings across all families
    pub fn len(&self) -> usize {
        self.aliases.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
