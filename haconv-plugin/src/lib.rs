//! haconv Plugin System
//!
//! Provides the trait filters implement and the registry that maps
//! template names onto them.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::FilterRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, FilterRegistry, EvalContext};
    pub use haconv_core::prelude::*;
}
