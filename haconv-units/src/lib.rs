//! haconv Units - Power, energy, flow and temperature conversion
//!
//! Converts sensor readings between the units Home Assistant integrations
//! commonly report, exposed as template filters.
//!
//! Families:
//! - Power (W, kW, HP, BTU/h)
//! - Energy (J, kJ, MJ, GJ, Wh, kWh, BTU, cal, kcal)
//! - Flow (L/min, gal/min)
//! - Temperature (°C, °F, K)

mod family;
mod unit;
mod units;
mod normalize;
mod quantity;
mod convert;
mod filters;

pub use family::Family;
pub use unit::{Unit, Linear, ConversionError};
pub use units::{UNITS, UnitRegistry};
pub use normalize::{normalize_label, resolve_unit};
pub use quantity::Quantity;
pub use convert::{convert, convert_value, convert_lenient};
pub use filters::{FilterDef, UnitFilter, FILTERS, find_filter};

use haconv_plugin::FilterRegistry;

/// Load the conversion filters, each under its long and short name
pub fn load_units_library(registry: FilterRegistry) -> FilterRegistry {
    FILTERS.iter().fold(registry, |registry, def| {
        registry
            .with_function(UnitFilter::new(def))
            .with_alias(def.short, def.name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haconv_core::Value;
    use haconv_plugin::EvalContext;

    const NAMES: [&str; 36] = [
        "watts", "w", "kilowatts", "kw", "horsepower", "hp", "btu_per_hour", "btuh",
        "joules", "j", "kilojoules", "kj", "megajoules", "mj", "gigajoules", "gj",
        "watt_hours", "wh", "kilowatt_hours", "kwh", "btu_energy", "btu",
        "calories", "cal", "kilocalories", "kcal",
        "l_per_min", "lpm", "g_per_min", "gpm",
        "celsius", "c", "fahrenheit", "f", "kelvin", "k",
    ];

    #[test]
    fn test_load_units_library() {
        let registry = load_units_library(FilterRegistry::new());
        for name in NAMES {
            assert!(registry.get_function(name).is_some(), "Filter '{}' should be registered", name);
        }
        assert_eq!(registry.names().len(), NAMES.len());
    }

    #[test]
    fn test_alias_and_long_name_agree() {
        let registry = load_units_library(FilterRegistry::new());
        let ctx = EvalContext::new();
        for def in &FILTERS {
            let args = [Value::Number(12.5), Value::Null];
            assert_eq!(
                registry.call_function(def.name, &args, &ctx),
                registry.call_function(def.short, &args, &ctx),
                "{} / {}",
                def.name,
                def.short
            );
        }
    }

    #[test]
    fn test_registered_examples() {
        let registry = load_units_library(FilterRegistry::new());
        let ctx = EvalContext::new();
        let call = |name: &str, v: f64, unit: &str| {
            registry.call_function(name, &[Value::Number(v), Value::from(unit)], &ctx)
        };
        assert_eq!(call("celsius", 32.0, "F"), Value::Number(0.0));
        assert_eq!(call("fahrenheit", 0.0, "C"), Value::Number(32.0));
        assert_eq!(call("kelvin", 0.0, "C"), Value::Number(273.15));
        assert_eq!(call("watts", 5.0, "kW"), Value::Number(5000.0));
        assert_eq!(call("kilowatts", 5000.0, "W"), Value::Number(5.0));
        assert_eq!(call("joules", 1.0, "Wh"), Value::Number(3600.0));
        assert_eq!(call("watt_hours", 3600.0, "J"), Value::Number(1.0));

        let lpm = call("lpm", 1.0, "GPM").as_number().unwrap();
        assert!((lpm - 3.78541).abs() < 1e-9);
        let gpm = call("gpm", 3.78541, "L/MIN").as_number().unwrap();
        assert!((gpm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_category_listing() {
        let registry = load_units_library(FilterRegistry::new());
        let listed = registry.list_functions(Some("temperature"));
        let list = listed.as_list().unwrap();
        assert_eq!(list.len(), 3);
    }
}
