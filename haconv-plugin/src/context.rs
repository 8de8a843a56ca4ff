//! Evaluation Context

use haconv_core::{Settings, UnknownUnitPolicy};

/// Evaluation context passed to plugins
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    pub settings: Settings,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_unknown_unit_policy(mut self, policy: UnknownUnitPolicy) -> Self {
        self.settings.unknown_unit_policy = policy;
        self
    }
}
