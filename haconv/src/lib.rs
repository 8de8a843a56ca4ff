//! haconv - Unit conversion filters for Home Assistant templates
//!
//! `HaConv` is the host binding: it owns the filter registry and settings,
//! resolves entity references and dispatches `value | filter(unit)` calls.

pub mod config;
pub mod entity;
pub mod logging;

pub use config::{load_settings, load_settings_with_env};
pub use entity::{looks_like_entity_id, resolve_value_and_unit, EntityState, StateMap, StateSource};

use haconv_core::{HaConvError, Settings, Value};
use haconv_plugin::{EvalContext, FilterRegistry};
use std::sync::Arc;
use tracing::info;

/// Main haconv host binding
pub struct HaConv {
    registry: Arc<FilterRegistry>,
    settings: Settings,
    states: Option<Arc<dyn StateSource>>,
}

impl HaConv {
    pub fn new(registry: FilterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            settings: Settings::default(),
            states: None,
        }
    }

    pub fn with_standard_filters() -> Self {
        Self::new(haconv_units::load_units_library(FilterRegistry::new()))
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_states(mut self, states: Arc<dyn StateSource>) -> Self {
        self.states = Some(states);
        self
    }

    /// Build the standard filter set from a host configuration document
    pub fn setup(config: &str) -> Result<Self, HaConvError> {
        let settings = load_settings(config)?;
        let haconv = Self::with_standard_filters().with_settings(settings);
        info!(
            filters = haconv.registry.names().len(),
            unknown_unit_policy = %settings.unknown_unit_policy,
            btu_standard = settings.btu_standard.as_str(),
            "Unit conversion filters registered"
        );
        Ok(haconv)
    }

    /// Apply filter `name` to `value`, with an optional source unit label.
    ///
    /// Entity ids are resolved first. Returns `Value::Null` when the value
    /// is not numeric and `Value::Error` for an unknown filter.
    pub fn filter(&self, name: &str, value: Value, unit: Option<&str>) -> Value {
        let (value, unit) = resolve_value_and_unit(value, unit, self.states.as_deref());

        let mut args = vec![value];
        if let Some(unit) = unit {
            args.push(Value::Text(unit));
        }

        let ctx = EvalContext::new().with_settings(self.settings);
        self.registry.call_function(name, &args, &ctx)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }
}

impl Default for HaConv {
    fn default() -> Self {
        Self::with_standard_filters()
    }
}
