//! Template filters, one per target unit
//!
//! Every filter has the shape `value | <target>(from_unit)`. The table below
//! drives both registration and help metadata.

use haconv_plugin::prelude::*;
use crate::convert::convert_lenient;
use crate::Unit;

/// Static description of one conversion filter
pub struct FilterDef {
    pub target: Unit,
    pub name: &'static str,
    pub short: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub examples: &'static [&'static str],
    pub related: &'static [&'static str],
}

static POWER_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Reading or entity id to convert"),
    ArgMeta::optional("from_unit", "Text", "Source unit (W, kW, HP, BTU/h)", "W"),
];

static ENERGY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Reading or entity id to convert"),
    ArgMeta::optional("from_unit", "Text", "Source unit (J, kJ, MJ, GJ, Wh, kWh, BTU, cal, kcal)", "J"),
];

static FLOW_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Reading or entity id to convert"),
    ArgMeta::optional("from_unit", "Text", "Source unit (L/min, gal/min)", "L/min"),
];

static TEMPERATURE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Reading or entity id to convert"),
    ArgMeta::optional("from_unit", "Text", "Source unit (°C, °F, K)", "°C"),
];

static POWER_RELATED: [&str; 4] = ["watts", "kilowatts", "horsepower", "btu_per_hour"];
static ENERGY_RELATED: [&str; 9] = [
    "joules",
    "kilojoules",
    "megajoules",
    "gigajoules",
    "watt_hours",
    "kilowatt_hours",
    "btu_energy",
    "calories",
    "kilocalories",
];
static FLOW_RELATED: [&str; 2] = ["l_per_min", "g_per_min"];
static TEMPERATURE_RELATED: [&str; 3] = ["celsius", "fahrenheit", "kelvin"];

pub static FILTERS: [FilterDef; 18] = [
    // Power
    FilterDef {
        target: Unit::Watt,
        name: "watts",
        short: "w",
        description: "Convert a power reading to watts",
        usage: "value | watts(from_unit)",
        args: &POWER_ARGS,
        examples: &["5 | watts('kW') → 5000", "1 | watts('HP') → 745.699872"],
        related: &POWER_RELATED,
    },
    FilterDef {
        target: Unit::Kilowatt,
        name: "kilowatts",
        short: "kw",
        description: "Convert a power reading to kilowatts",
        usage: "value | kilowatts(from_unit)",
        args: &POWER_ARGS,
        examples: &["5000 | kilowatts('W') → 5", "'sensor.house_power' | kilowatts"],
        related: &POWER_RELATED,
    },
    FilterDef {
        target: Unit::Horsepower,
        name: "horsepower",
        short: "hp",
        description: "Convert a power reading to mechanical horsepower",
        usage: "value | horsepower(from_unit)",
        args: &POWER_ARGS,
        examples: &["745.699872 | horsepower('W') → 1"],
        related: &POWER_RELATED,
    },
    FilterDef {
        target: Unit::BtuPerHour,
        name: "btu_per_hour",
        short: "btuh",
        description: "Convert a power reading to BTU per hour",
        usage: "value | btu_per_hour(from_unit)",
        args: &POWER_ARGS,
        examples: &["1 | btu_per_hour('W') → 0.29307107"],
        related: &POWER_RELATED,
    },
    // Energy
    FilterDef {
        target: Unit::Joule,
        name: "joules",
        short: "j",
        description: "Convert an energy reading to joules",
        usage: "value | joules(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["1 | joules('Wh') → 3600", "1 | joules('kcal') → 4184"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::Kilojoule,
        name: "kilojoules",
        short: "kj",
        description: "Convert an energy reading to kilojoules",
        usage: "value | kilojoules(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["1 | kilojoules('Wh') → 3.6"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::Megajoule,
        name: "megajoules",
        short: "mj",
        description: "Convert an energy reading to megajoules",
        usage: "value | megajoules(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["1 | megajoules('kWh') → 3.6"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::Gigajoule,
        name: "gigajoules",
        short: "gj",
        description: "Convert an energy reading to gigajoules",
        usage: "value | gigajoules(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["1000 | gigajoules('MJ') → 1"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::WattHour,
        name: "watt_hours",
        short: "wh",
        description: "Convert an energy reading to watt-hours",
        usage: "value | watt_hours(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["3600 | watt_hours('J') → 1", "2 | watt_hours('kWh') → 2000"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::KilowattHour,
        name: "kilowatt_hours",
        short: "kwh",
        description: "Convert an energy reading to kilowatt-hours",
        usage: "value | kilowatt_hours(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["1500 | kilowatt_hours('Wh') → 1.5"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::Btu,
        name: "btu_energy",
        short: "btu",
        description: "Convert an energy reading to British thermal units",
        usage: "value | btu_energy(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["1055.05585262 | btu_energy('J') → 1"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::Calorie,
        name: "calories",
        short: "cal",
        description: "Convert an energy reading to thermochemical calories",
        usage: "value | calories(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["4.184 | calories('J') → 1"],
        related: &ENERGY_RELATED,
    },
    FilterDef {
        target: Unit::Kilocalorie,
        name: "kilocalories",
        short: "kcal",
        description: "Convert an energy reading to kilocalories",
        usage: "value | kilocalories(from_unit)",
        args: &ENERGY_ARGS,
        examples: &["4184 | kilocalories('J') → 1"],
        related: &ENERGY_RELATED,
    },
    // Flow
    FilterDef {
        target: Unit::LitrePerMinute,
        name: "l_per_min",
        short: "lpm",
        description: "Convert a flow reading to litres per minute",
        usage: "value | l_per_min(from_unit)",
        args: &FLOW_ARGS,
        examples: &["1 | l_per_min('GPM') → 3.78541"],
        related: &FLOW_RELATED,
    },
    FilterDef {
        target: Unit::GallonPerMinute,
        name: "g_per_min",
        short: "gpm",
        description: "Convert a flow reading to US gallons per minute",
        usage: "value | g_per_min(from_unit)",
        args: &FLOW_ARGS,
        examples: &["3.78541 | g_per_min('L/MIN') → 1"],
        related: &FLOW_RELATED,
    },
    // Temperature
    FilterDef {
        target: Unit::Celsius,
        name: "celsius",
        short: "c",
        description: "Convert a temperature to degrees Celsius",
        usage: "value | celsius(from_unit)",
        args: &TEMPERATURE_ARGS,
        examples: &["32 | celsius('F') → 0", "273.15 | celsius('K') → 0"],
        related: &TEMPERATURE_RELATED,
    },
    FilterDef {
        target: Unit::Fahrenheit,
        name: "fahrenheit",
        short: "f",
        description: "Convert a temperature to degrees Fahrenheit",
        usage: "value | fahrenheit(from_unit)",
        args: &TEMPERATURE_ARGS,
        examples: &["0 | fahrenheit('C') → 32", "'sensor.outdoor_temp' | fahrenheit"],
        related: &TEMPERATURE_RELATED,
    },
    FilterDef {
        target: Unit::Kelvin,
        name: "kelvin",
        short: "k",
        description: "Convert a temperature to kelvin",
        usage: "value | kelvin(from_unit)",
        args: &TEMPERATURE_ARGS,
        examples: &["0 | kelvin('C') → 273.15"],
        related: &TEMPERATURE_RELATED,
    },
];

/// Look up a filter definition by its long or short name
pub fn find_filter(name: &str) -> Option<&'static FilterDef> {
    let name = name.to_lowercase();
    FILTERS.iter().find(|f| f.name == name || f.short == name)
}

/// Conversion filter bound to one target unit
pub struct UnitFilter {
    def: &'static FilterDef,
}

impl UnitFilter {
    pub fn new(def: &'static FilterDef) -> Self {
        UnitFilter { def }
    }
}

impl FunctionPlugin for UnitFilter {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: self.def.name,
            description: self.def.description,
            usage: self.def.usage,
            args: self.def.args,
            returns: "Number",
            examples: self.def.examples,
            category: self.def.target.family().as_str(),
            related: self.def.related,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let name = self.def.name;
        match args.len() {
            0 => return Value::Error(HaConvError::arg_count(name, 1, 0)),
            1 | 2 => {}
            n => return Value::Error(HaConvError::arg_count(name, 2, n)),
        }

        // Upstream errors pass through untouched
        if let Value::Error(e) = &args[0] {
            return Value::Error(e.clone());
        }

        let label = match args.get(1) {
            None | Some(Value::Null) => None,
            Some(Value::Text(s)) => Some(s.as_str()),
            Some(other) => {
                return Value::Error(HaConvError::arg_type(name, "from_unit", "Text", other.type_name()));
            }
        };

        convert_lenient(name, &args[0], label, self.def.target, &ctx.settings).into()
    }
}
