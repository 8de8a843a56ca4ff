//! Settings loading
//!
//! Settings live under the `unit_conversions` key of the host configuration
//! document. Environment variables override whatever the document says.

use haconv_core::{BtuStandard, HaConvError, Settings, UnknownUnitPolicy};

/// Key of the settings section in the host document
pub const SECTION: &str = "unit_conversions";

pub const ENV_UNKNOWN_UNIT_POLICY: &str = "HACONV_UNKNOWN_UNIT_POLICY";
pub const ENV_BTU_STANDARD: &str = "HACONV_BTU_STANDARD";

/// Load settings from a host configuration document, then apply the process
/// environment on top.
pub fn load_settings(document: &str) -> Result<Settings, HaConvError> {
    load_settings_with_env(document, |key| std::env::var(key).ok())
}

/// Same as [`load_settings`] with a custom environment lookup
pub fn load_settings_with_env<F>(document: &str, env: F) -> Result<Settings, HaConvError>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = section_settings(document)?;
    apply_env(settings, env)
}

fn section_settings(document: &str) -> Result<Settings, HaConvError> {
    if document.trim().is_empty() {
        return Ok(Settings::default());
    }

    let doc: serde_json::Value = serde_json::from_str(document)?;
    let Some(root) = doc.as_object() else {
        return Err(HaConvError::config("configuration document must be a JSON object"));
    };

    match root.get(SECTION) {
        None | Some(serde_json::Value::Null) => Ok(Settings::default()),
        Some(section) => Ok(serde_json::from_value(section.clone())?),
    }
}

fn apply_env<F>(mut settings: Settings, env: F) -> Result<Settings, HaConvError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env(ENV_UNKNOWN_UNIT_POLICY) {
        settings.unknown_unit_policy = raw.parse::<UnknownUnitPolicy>()?;
    }
    if let Some(raw) = env(ENV_BTU_STANDARD) {
        settings.btu_standard = raw.parse::<BtuStandard>()?;
    }
    Ok(settings)
}
