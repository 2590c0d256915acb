use std::fmt;

/// Uniform kind discriminator.
///
/// One variant per payload shape a `UniformStore` can hold, plus `Invalid`
/// for "no such uniform". The `*v` kinds are variable-length arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UniformType {
    /// No uniform (lookup of an absent name)
    #[default]
    Invalid,
    /// `i32`
    Int,
    /// `f32`
    Float,
    /// `[i32; 2]`
    Int2,
    /// `[f32; 2]`
    Float2,
    /// `[f32; 3]`
    Float3,
    /// `[f64; 3]`
    Double3,
    /// `[f32; 4]`
    Float4,
    /// `[u8; 3]`
    UChar3,
    /// `[u8; 4]`
    UChar4,
    /// Double precision 3x3 matrix object (`glam::DMat3`)
    Matrix3,
    /// Double precision 4x4 matrix object (`glam::DMat4`)
    Matrix4,
    /// Flat `[f32; 9]` matrix
    Matrix3x3,
    /// Flat `[f32; 16]` matrix
    Matrix4x4,
    /// Variable-length `i32` array
    Int1v,
    /// Variable-length `f32` array
    Float1v,
    /// Variable-length `[f32; 2]` array
    Float2v,
    /// Variable-length `[f32; 3]` array
    Float3v,
    /// Variable-length `[f32; 4]` array
    Float4v,
    /// Variable-length array of flat 4x4 matrices
    Matrix4x4v,
}

impl UniformType {
    /// Every valid kind, in declaration order
    pub const ALL: [UniformType; 19] = [
        UniformType::Int,
        UniformType::Float,
        UniformType::Int2,
        UniformType::Float2,
        UniformType::Float3,
        UniformType::Double3,
        UniformType::Float4,
        UniformType::UChar3,
        UniformType::UChar4,
        UniformType::Matrix3,
        UniformType::Matrix4,
        UniformType::Matrix3x3,
        UniformType::Matrix4x4,
        UniformType::Int1v,
        UniformType::Float1v,
        UniformType::Float2v,
        UniformType::Float3v,
        UniformType::Float4v,
        UniformType::Matrix4x4v,
    ];

    /// True for the variable-length kinds
    pub fn is_array(self) -> bool {
        matches!(
            self,
            UniformType::Int1v
                | UniformType::Float1v
                | UniformType::Float2v
                | UniformType::Float3v
                | UniformType::Float4v
                | UniformType::Matrix4x4v
        )
    }

    /// Scalars per tuple (per element for array kinds, per value otherwise)
    pub fn components(self) -> usize {
        match self {
            UniformType::Invalid => 0,
            UniformType::Int | UniformType::Float | UniformType::Int1v | UniformType::Float1v => 1,
            UniformType::Int2 | UniformType::Float2 | UniformType::Float2v => 2,
            UniformType::Float3
            | UniformType::Double3
            | UniformType::UChar3
            | UniformType::Float3v => 3,
            UniformType::Float4 | UniformType::UChar4 | UniformType::Float4v => 4,
            UniformType::Matrix3 | UniformType::Matrix3x3 => 9,
            UniformType::Matrix4
            | UniformType::Matrix4x4
            | UniformType::Matrix4x4v => 16,
        }
    }

    /// GLSL type keyword used in declarations (element type for arrays)
    pub fn glsl_type(self) -> Option<&'static str> {
        let keyword = match self {
            UniformType::Invalid => return None,
            UniformType::Int | UniformType::Int1v => "int",
            UniformType::Float | UniformType::Float1v => "float",
            UniformType::Int2 => "ivec2",
            UniformType::Float2 | UniformType::Float2v => "vec2",
            UniformType::Float3
            | UniformType::Double3
            | UniformType::UChar3
            | UniformType::Float3v => "vec3",
            UniformType::Float4 | UniformType::UChar4 | UniformType::Float4v => "vec4",
            UniformType::Matrix3 | UniformType::Matrix3x3 => "mat3",
            UniformType::Matrix4
            | UniformType::Matrix4x4
            | UniformType::Matrix4x4v => "mat4",
        };
        Some(keyword)
    }
}

impl fmt::Display for UniformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
