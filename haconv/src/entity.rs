//! Entity resolution
//!
//! Templates may pass an entity id such as `sensor.house_power` instead of a
//! number. The host looks the entity up and hands the converter its state and
//! `unit_of_measurement`.

use std::collections::HashMap;
use haconv_core::{parse_number, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// State of one entity as the host sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,
}

impl EntityState {
    pub fn new(state: impl Into<String>) -> Self {
        EntityState { state: state.into(), unit_of_measurement: None }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measurement = Some(unit.into());
        self
    }
}

/// Read access to entity states
pub trait StateSource: Send + Sync {
    fn state(&self, entity_id: &str) -> Option<EntityState>;
}

/// In-memory state source
#[derive(Debug, Clone, Default)]
pub struct StateMap {
    states: HashMap<String, EntityState>,
}

impl StateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, state: EntityState) {
        self.states.insert(entity_id.into(), state);
    }

    pub fn with_state(mut self, entity_id: impl Into<String>, state: EntityState) -> Self {
        self.insert(entity_id, state);
        self
    }
}

impl StateSource for StateMap {
    fn state(&self, entity_id: &str) -> Option<EntityState> {
        self.states.get(entity_id).cloned()
    }
}

/// Text containing a dot that is not itself a number
pub fn looks_like_entity_id(text: &str) -> bool {
    text.contains('.') && parse_number(text).is_err()
}

/// Swap an entity reference for its numeric state and unit.
///
/// An explicit `unit` always wins over the entity's own unit. Anything that
/// cannot be resolved falls through untouched.
pub fn resolve_value_and_unit(
    value: Value,
    unit: Option<&str>,
    states: Option<&dyn StateSource>,
) -> (Value, Option<String>) {
    let explicit = unit.map(str::to_string);

    let entity_id = match value.as_text() {
        Some(text) if looks_like_entity_id(text) => text.trim().to_string(),
        _ => return (value, explicit),
    };

    let Some(states) = states else {
        warn!(entity_id = %entity_id, "No state source configured, cannot resolve entity");
        return (value, explicit);
    };

    let Some(entity) = states.state(&entity_id) else {
        warn!(entity_id = %entity_id, "Entity not found");
        return (value, explicit);
    };

    match parse_number(&entity.state) {
        Ok(n) => {
            let unit = explicit.or(entity.unit_of_measurement);
            debug!(entity_id = %entity_id, value = n, unit = ?unit, "Resolved entity");
            (Value::Number(n), unit)
        }
        Err(_) => {
            warn!(entity_id = %entity_id, value = %entity.state, "Entity state is not numeric");
            (value, explicit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn states() -> StateMap {
        StateMap::new()
            .with_state("sensor.house_power", EntityState::new("2.5").with_unit("kW"))
            .with_state("sensor.outdoor_temp", EntityState::new("68").with_unit("°F"))
            .with_state("sensor.bare", EntityState::new("12"))
            .with_state("sensor.offline", EntityState::new("unavailable").with_unit("W"))
    }

    #[test]
    fn test_looks_like_entity_id() {
        assert!(looks_like_entity_id("sensor.house_power"));
        assert!(!looks_like_entity_id("3.5"));
        assert!(!looks_like_entity_id(" -0.25 "));
        assert!(!looks_like_entity_id("unknown"));
    }

    #[test]
    fn test_resolves_state_and_unit() {
        let s = states();
        let (v, u) = resolve_value_and_unit(Value::from("sensor.house_power"), None, Some(&s));
        assert_eq!(v, Value::Number(2.5));
        assert_eq!(u.as_deref(), Some("kW"));
    }

    #[test]
    fn test_explicit_unit_wins() {
        let s = states();
        let (v, u) = resolve_value_and_unit(Value::from("sensor.outdoor_temp"), Some("C"), Some(&s));
        assert_eq!(v, Value::Number(68.0));
        assert_eq!(u.as_deref(), Some("C"));
    }

    #[test]
    fn test_entity_without_unit() {
        let s = states();
        let (v, u) = resolve_value_and_unit(Value::from("sensor.bare"), None, Some(&s));
        assert_eq!(v, Value::Number(12.0));
        assert_eq!(u, None);
    }

    #[test]
    fn test_numbers_pass_through() {
        let s = states();
        let (v, u) = resolve_value_and_unit(Value::from("3.5"), Some("kW"), Some(&s));
        assert_eq!(v, Value::from("3.5"));
        assert_eq!(u.as_deref(), Some("kW"));

        let (v, _) = resolve_value_and_unit(Value::Number(1.0), None, Some(&s));
        assert_eq!(v, Value::Number(1.0));
    }

    #[test]
    #[traced_test]
    fn test_missing_entity_falls_through() {
        let s = states();
        let (v, _) = resolve_value_and_unit(Value::from("sensor.nope"), None, Some(&s));
        assert_eq!(v, Value::from("sensor.nope"));
        assert!(logs_contain("Entity not found"));
    }

    #[test]
    #[traced_test]
    fn test_non_numeric_state_falls_through() {
        let s = states();
        let (v, u) = resolve_value_and_unit(Value::from("sensor.offline"), None, Some(&s));
        assert_eq!(v, Value::from("sensor.offline"));
        assert_eq!(u, None);
        assert!(logs_contain("Entity state is not numeric"));
    }

    #[test]
    #[traced_test]
    fn test_no_state_source() {
        let (v, _) = resolve_value_and_unit(Value::from("sensor.house_power"), None, None);
        assert_eq!(v, Value::from("sensor.house_power"));
        assert!(logs_contain("No state source configured"));
    }
}
