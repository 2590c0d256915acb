/// Shader target trait - the program a `UniformStore` flushes into

use glam::{DMat3, DMat4};
use crate::error::Result;
use crate::uniform::value::UniformValue;

// ============================================================================
// ShaderTarget trait
// ============================================================================

/// A compiled shader program accepting named uniform writes
///
/// One setter per uniform kind. Returning `Err` means the program refused
/// the write; `Error::TargetRejected(name)` is expected when the name is not
/// an active uniform of the program. Implementations own their threading
/// constraints (GL calls must run on the context thread).
pub trait ShaderTarget {
    fn set_uniform_i(&mut self, name: &str, v: i32) -> Result<()>;
    fn set_uniform_f(&mut self, name: &str, v: f32) -> Result<()>;
    fn set_uniform_2i(&mut self, name: &str, v: &[i32; 2]) -> Result<()>;
    fn set_uniform_2f(&mut self, name: &str, v: &[f32; 2]) -> Result<()>;
    fn set_uniform_3f(&mut self, name: &str, v: &[f32; 3]) -> Result<()>;
    fn set_uniform_3d(&mut self, name: &str, v: &[f64; 3]) -> Result<()>;
    fn set_uniform_4f(&mut self, name: &str, v: &[f32; 4]) -> Result<()>;

    /// Byte colors; GL backends usually normalize to [0, 1] floats
    fn set_uniform_3uc(&mut self, name: &str, v: &[u8; 3]) -> Result<()>;
    fn set_uniform_4uc(&mut self, name: &str, v: &[u8; 4]) -> Result<()>;

    /// Double precision matrix objects
    fn set_uniform_matrix3(&mut self, name: &str, m: &DMat3) -> Result<()>;
    fn set_uniform_matrix4(&mut self, name: &str, m: &DMat4) -> Result<()>;

    /// Flat float matrices, passed through as given
    fn set_uniform_matrix3x3(&mut self, name: &str, v: &[f32; 9]) -> Result<()>;
    fn set_uniform_matrix4x4(&mut self, name: &str, v: &[f32; 16]) -> Result<()>;

    // Arrays: the slice length is the element count
    fn set_uniform_1iv(&mut self, name: &str, v: &[i32]) -> Result<()>;
    fn set_uniform_1fv(&mut self, name: &str, v: &[f32]) -> Result<()>;
    fn set_uniform_2fv(&mut self, name: &str, v: &[[f32; 2]]) -> Result<()>;
    fn set_uniform_3fv(&mut self, name: &str, v: &[[f32; 3]]) -> Result<()>;
    fn set_uniform_4fv(&mut self, name: &str, v: &[[f32; 4]]) -> Result<()>;
    fn set_uniform_matrix4x4v(&mut self, name: &str, v: &[[f32; 16]]) -> Result<()>;
}

// ============================================================================
// Dispatch
// ============================================================================

/// Route a staged value to the matching setter of `target`
pub fn dispatch_uniform(target: &mut dyn ShaderTarget, name: &str, value: &UniformValue) -> Result<()> {
    match value {
        UniformValue::Int(v) => target.set_uniform_i(name, *v),
        UniformValue::Float(v) => target.set_uniform_f(name, *v),
        UniformValue::Int2(v) => target.set_uniform_2i(name, v),
        UniformValue::Float2(v) => target.set_uniform_2f(name, v),
        UniformValue::Float3(v) => target.set_uniform_3f(name, v),
        UniformValue::Double3(v) => target.set_uniform_3d(name, v),
        UniformValue::Float4(v) => target.set_uniform_4f(name, v),
        UniformValue::UChar3(v) => target.set_uniform_3uc(name, v),
        UniformValue::UChar4(v) => target.set_uniform_4uc(name, v),
        UniformValue::Matrix3(m) => target.set_uniform_matrix3(name, m),
        UniformValue::Matrix4(m) => target.set_uniform_matrix4(name, m),
        UniformValue::Matrix3x3(v) => target.set_uniform_matrix3x3(name, v),
        UniformValue::Matrix4x4(v) => target.set_uniform_matrix4x4(name, v),
        UniformValue::Int1v(v) => target.set_uniform_1iv(name, v),
        UniformValue::Float1v(v) => target.set_uniform_1fv(name, v),
        UniformValue::Float2v(v) => target.set_uniform_2fv(name, v),
        UniformValue::Float3v(v) => target.set_uniform_3fv(name, v),
        UniformValue::Float4v(v) => target.set_uniform_4fv(name, v),
        UniformValue::Matrix4x4v(v) => target.set_uniform_matrix4x4v(name, v),
    }
}
