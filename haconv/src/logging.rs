//! Logging setup

use haconv_core::HaConvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a fmt subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(level: &str) -> Result<(), HaConvError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| HaConvError::config(format!("invalid log level '{}': {}", level, e)))?,
    };

    // Err here only means a global subscriber already exists
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    Ok(())
}
