/*!
# Galaxy 3D Uniforms

CPU-side uniform staging for Galaxy3D shader programs.

A [`UniformStore`](galaxy3d::uniform::UniformStore) keeps named, typed
uniform values (scalars, vectors, matrices and variable-length arrays),
stamps every change, renders GLSL declarations for the staged set, and
flushes everything to a [`ShaderTarget`](galaxy3d::uniform::ShaderTarget)
in one pass. Backends implement `ShaderTarget` for their program type.

## Architecture

- **UniformStore**: name -> value map with type-checked reads
- **UniformValue**: tagged payload, one variant per uniform kind
- **ShaderTarget**: one setter per kind, implemented by the backend program
- **MockShaderTarget**: recording target for tests (no GPU)
*/

// Internal modules
mod error;
pub mod log;
pub mod uniform;
pub mod utils;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger slot)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Uniform sub-module
    pub mod uniform {
        pub use crate::uniform::*;
    }

    // Utilities
    pub use crate::utils::ModifiedStamp;
}

// Re-export math library at crate root
pub use glam;
