//! Conversion settings
//!
//! Two knobs reconcile behaviour that differed between earlier versions of
//! the filter set: what to do with a unit label nobody recognizes, and which
//! BTU definition to use.

use crate::HaConvError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a converter does when the source unit label is not recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownUnitPolicy {
    /// Treat the value as already expressed in the target unit
    Passthrough,
    /// Treat the value as expressed in the family's base unit
    #[default]
    AssumeBaseUnit,
}

impl UnknownUnitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownUnitPolicy::Passthrough => "passthrough",
            UnknownUnitPolicy::AssumeBaseUnit => "assume-base-unit",
        }
    }
}

impl fmt::Display for UnknownUnitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownUnitPolicy {
    type Err = HaConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "passthrough" | "pass-through" => Ok(UnknownUnitPolicy::Passthrough),
            "assume-base-unit" | "base-unit" => Ok(UnknownUnitPolicy::AssumeBaseUnit),
            _ => Err(HaConvError::config(format!(
                "unknown_unit_policy '{}', expected 'passthrough' or 'assume-base-unit'",
                s
            ))),
        }
    }
}

/// Joules per British thermal unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BtuStandard {
    /// International Table BTU, 1055.05585262 J
    #[default]
    International,
    /// Rounded value, 1055.06 J
    Simplified,
}

impl BtuStandard {
    pub const INTERNATIONAL_JOULES: f64 = 1055.05585262;
    pub const SIMPLIFIED_JOULES: f64 = 1055.06;

    pub fn joules(&self) -> f64 {
        match self {
            BtuStandard::International => Self::INTERNATIONAL_JOULES,
            BtuStandard::Simplified => Self::SIMPLIFIED_JOULES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BtuStandard::International => "international",
            BtuStandard::Simplified => "simplified",
        }
    }
}

impl FromStr for BtuStandard {
    type Err = HaConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "international" | "it" => Ok(BtuStandard::International),
            "simplified" => Ok(BtuStandard::Simplified),
            _ => Err(HaConvError::config(format!(
                "btu_standard '{}', expected 'international' or 'simplified'",
                s
            ))),
        }
    }
}

/// Settings shared by every converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Settings {
    pub unknown_unit_policy: UnknownUnitPolicy,
    pub btu_standard: BtuStandard,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a settings object, e.g. `{"unknown_unit_policy": "passthrough"}`.
    /// Missing fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, HaConvError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_unknown_unit_policy(mut self, policy: UnknownUnitPolicy) -> Self {
        self.unknown_unit_policy = policy;
        self
    }

    pub fn with_btu_standard(mut self, standard: BtuStandard) -> Self {
        self.btu_standard = standard;
        self
    }
}
