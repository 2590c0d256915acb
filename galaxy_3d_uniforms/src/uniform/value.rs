use std::fmt;
use glam::{DMat3, DMat4};
use crate::uniform::kind::UniformType;

// ===== UNIFORM VALUE =====

/// A typed uniform payload
///
/// Array variants own their tuples, so the element count is always the
/// `Vec` length and the scalar count is `len * kind().components()`.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Int2([i32; 2]),
    Float2([f32; 2]),
    Float3([f32; 3]),
    Double3([f64; 3]),
    Float4([f32; 4]),
    UChar3([u8; 3]),
    UChar4([u8; 4]),
    Matrix3(DMat3),
    Matrix4(DMat4),
    Matrix3x3([f32; 9]),
    Matrix4x4([f32; 16]),
    Int1v(Vec<i32>),
    Float1v(Vec<f32>),
    Float2v(Vec<[f32; 2]>),
    Float3v(Vec<[f32; 3]>),
    Float4v(Vec<[f32; 4]>),
    Matrix4x4v(Vec<[f32; 16]>),
}

impl UniformValue {
    /// Kind discriminator of this payload
    pub fn kind(&self) -> UniformType {
        match self {
            UniformValue::Int(_) => UniformType::Int,
            UniformValue::Float(_) => UniformType::Float,
            UniformValue::Int2(_) => UniformType::Int2,
            UniformValue::Float2(_) => UniformType::Float2,
            UniformValue::Float3(_) => UniformType::Float3,
            UniformValue::Double3(_) => UniformType::Double3,
            UniformValue::Float4(_) => UniformType::Float4,
            UniformValue::UChar3(_) => UniformType::UChar3,
            UniformValue::UChar4(_) => UniformType::UChar4,
            UniformValue::Matrix3(_) => UniformType::Matrix3,
            UniformValue::Matrix4(_) => UniformType::Matrix4,
            UniformValue::Matrix3x3(_) => UniformType::Matrix3x3,
            UniformValue::Matrix4x4(_) => UniformType::Matrix4x4,
            UniformValue::Int1v(_) => UniformType::Int1v,
            UniformValue::Float1v(_) => UniformType::Float1v,
            UniformValue::Float2v(_) => UniformType::Float2v,
            UniformValue::Float3v(_) => UniformType::Float3v,
            UniformValue::Float4v(_) => UniformType::Float4v,
            UniformValue::Matrix4x4v(_) => UniformType::Matrix4x4v,
        }
    }

    /// Number of tuples for array kinds, 0 for fixed-size kinds
    pub fn element_count(&self) -> usize {
        match self {
            UniformValue::Int1v(v) => v.len(),
            UniformValue::Float1v(v) => v.len(),
            UniformValue::Float2v(v) => v.len(),
            UniformValue::Float3v(v) => v.len(),
            UniformValue::Float4v(v) => v.len(),
            UniformValue::Matrix4x4v(v) => v.len(),
            _ => 0,
        }
    }

    /// Total number of scalars held (e.g. 3 x number of triplets for `Float3v`)
    pub fn component_count(&self) -> usize {
        let kind = self.kind();
        if kind.is_array() {
            self.element_count() * kind.components()
        } else {
            kind.components()
        }
    }

    /// Raw payload bytes, native endian, tightly packed
    ///
    /// `Matrix3`/`Matrix4`/`Double3` expose their f64 storage.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformValue::Int(v) => bytemuck::bytes_of(v),
            UniformValue::Float(v) => bytemuck::bytes_of(v),
            UniformValue::Int2(v) => bytemuck::bytes_of(v),
            UniformValue::Float2(v) => bytemuck::bytes_of(v),
            UniformValue::Float3(v) => bytemuck::bytes_of(v),
            UniformValue::Double3(v) => bytemuck::bytes_of(v),
            UniformValue::Float4(v) => bytemuck::bytes_of(v),
            UniformValue::UChar3(v) => &v[..],
            UniformValue::UChar4(v) => &v[..],
            UniformValue::Matrix3(m) => bytemuck::bytes_of(m),
            UniformValue::Matrix4(m) => bytemuck::bytes_of(m),
            UniformValue::Matrix3x3(v) => bytemuck::bytes_of(v),
            UniformValue::Matrix4x4(v) => bytemuck::bytes_of(v),
            UniformValue::Int1v(v) => bytemuck::cast_slice(v),
            UniformValue::Float1v(v) => bytemuck::cast_slice(v),
            UniformValue::Float2v(v) => bytemuck::cast_slice(v),
            UniformValue::Float3v(v) => bytemuck::cast_slice(v),
            UniformValue::Float4v(v) => bytemuck::cast_slice(v),
            UniformValue::Matrix4x4v(v) => bytemuck::cast_slice(v),
        }
    }
}

impl fmt::Display for UniformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformValue::Int(v) => write!(f, "{}", v),
            UniformValue::Float(v) => write!(f, "{}", v),
            UniformValue::Int2(v) => write!(f, "{:?}", v),
            UniformValue::Float2(v) => write!(f, "{:?}", v),
            UniformValue::Float3(v) => write!(f, "{:?}", v),
            UniformValue::Double3(v) => write!(f, "{:?}", v),
            UniformValue::Float4(v) => write!(f, "{:?}", v),
            UniformValue::UChar3(v) => write!(f, "{:?}", v),
            UniformValue::UChar4(v) => write!(f, "{:?}", v),
            UniformValue::Matrix3(m) => write!(f, "{:?}", m.to_cols_array()),
            UniformValue::Matrix4(m) => write!(f, "{:?}", m.to_cols_array()),
            UniformValue::Matrix3x3(v) => write!(f, "{:?}", v),
            UniformValue::Matrix4x4(v) => write!(f, "{:?}", v),
            UniformValue::Int1v(v) => write!(f, "{:?}", v),
            UniformValue::Float1v(v) => write!(f, "{:?}", v),
            UniformValue::Float2v(v) => write!(f, "{:?}", v),
            UniformValue::Float3v(v) => write!(f, "{:?}", v),
            UniformValue::Float4v(v) => write!(f, "{:?}", v),
            UniformValue::Matrix4x4v(v) => write!(f, "{} x mat4", v.len()),
        }
    }
}

// ===== TYPED ACCESS =====

/// Rust types that map one-to-one onto a uniform kind
///
/// `from_value` returns `None` when the payload holds another kind; that is
/// the type check behind every store getter.
pub trait UniformData: Sized {
    /// Kind produced by `into_value`
    const KIND: UniformType;

    fn into_value(self) -> UniformValue;

    fn from_value(value: &UniformValue) -> Option<Self>;
}

/// Element types of the variable-length kinds, for borrowed slice views
pub trait UniformElement: Sized {
    /// Array kind holding elements of this type
    const ARRAY_KIND: UniformType;

    fn slice_of(value: &UniformValue) -> Option<&[Self]>;
}

macro_rules! impl_uniform_data {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl UniformData for $ty {
            const KIND: UniformType = UniformType::$variant;

            fn into_value(self) -> UniformValue {
                UniformValue::$variant(self)
            }

            fn from_value(value: &UniformValue) -> Option<Self> {
                match value {
                    UniformValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    )*};
}

impl_uniform_data! {
    i32 => Int,
    f32 => Float,
    [i32; 2] => Int2,
    [f32; 2] => Float2,
    [f32; 3] => Float3,
    [f64; 3] => Double3,
    [f32; 4] => Float4,
    [u8; 3] => UChar3,
    [u8; 4] => UChar4,
    DMat3 => Matrix3,
    DMat4 => Matrix4,
    [f32; 9] => Matrix3x3,
    [f32; 16] => Matrix4x4,
    Vec<i32> => Int1v,
    Vec<f32> => Float1v,
    Vec<[f32; 2]> => Float2v,
    Vec<[f32; 3]> => Float3v,
    Vec<[f32; 4]> => Float4v,
    Vec<[f32; 16]> => Matrix4x4v,
}

macro_rules! impl_uniform_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl UniformElement for $ty {
            const ARRAY_KIND: UniformType = UniformType::$variant;

            fn slice_of(value: &UniformValue) -> Option<&[Self]> {
                match value {
                    UniformValue::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }
        }
    )*};
}

impl_uniform_element! {
    i32 => Int1v,
    f32 => Float1v,
    [f32; 2] => Float2v,
    [f32; 3] => Float3v,
    [f32; 4] => Float4v,
    [f32; 16] => Matrix4x4v,
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
