//! Uniform staging module
//!
//! Typed, named uniform values kept on the CPU side and flushed to a shader
//! program in one pass.

mod kind;
mod value;
mod store;
pub mod declarations;
pub mod target;
pub mod mock_target;

pub use kind::UniformType;
pub use value::{UniformValue, UniformData, UniformElement};
pub use store::{
    UniformStore, UniformStoreDesc,
    UniformEntry, FlushReport,
};
pub use target::{ShaderTarget, dispatch_uniform};
pub use mock_target::{MockShaderTarget, RecordedUniform};
