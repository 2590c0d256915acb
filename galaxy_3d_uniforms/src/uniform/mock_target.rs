/// Mock shader target for tests (no GPU required)
///
/// Records every uniform write it accepts, and rejects names the way a
/// compiled program without those uniforms would.

use glam::{DMat3, DMat4};
use rustc_hash::FxHashSet;
use crate::error::{Error, Result};
use crate::uniform::target::ShaderTarget;
use crate::uniform::value::UniformValue;

// ============================================================================
// Recorded call
// ============================================================================

/// One setter call seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUniform {
    pub name: String,
    pub value: UniformValue,
}

// ============================================================================
// Mock target
// ============================================================================

/// Mock shader target: records uniform writes instead of uploading them
#[derive(Debug, Default)]
pub struct MockShaderTarget {
    /// Accepted writes, in call order
    pub calls: Vec<RecordedUniform>,
    /// Names refused on every call
    rejected: FxHashSet<String>,
    /// When set, only these names are accepted (the program's active uniforms)
    active: Option<FxHashSet<String>>,
    /// Every call attempted, accepted or not
    attempts: usize,
}

impl MockShaderTarget {
    /// Target accepting every name
    pub fn new() -> Self {
        Self::default()
    }

    /// Target accepting only the given active uniform names
    pub fn with_active_uniforms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: Some(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Refuse `name` from now on
    pub fn reject(&mut self, name: &str) {
        self.rejected.insert(name.to_string());
    }

    /// Number of setter calls, including rejected ones
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Accepted writes for `name`, in call order
    pub fn calls_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UniformValue> + 'a {
        self.calls.iter().filter(move |c| c.name == name).map(|c| &c.value)
    }

    /// Last accepted value for `name`
    pub fn last_value(&self, name: &str) -> Option<&UniformValue> {
        self.calls.iter().rev().find(|c| c.name == name).map(|c| &c.value)
    }

    /// Forget recorded calls (rejection rules stay)
    pub fn clear(&mut self) {
        self.calls.clear();
        self.attempts = 0;
    }

    fn accepts(&self, name: &str) -> bool {
        if self.rejected.contains(name) {
            return false;
        }
        match &self.active {
            Some(active) => active.contains(name),
            None => true,
        }
    }

    fn record(&mut self, name: &str, value: UniformValue) -> Result<()> {
        self.attempts += 1;
        if !self.accepts(name) {
            return Err(Error::TargetRejected(name.to_string()));
        }
        self.calls.push(RecordedUniform {
            name: name.to_string(),
            value,
        });
        Ok(())
    }
}

impl ShaderTarget for MockShaderTarget {
    fn set_uniform_i(&mut self, name: &str, v: i32) -> Result<()> {
        self.record(name, UniformValue::Int(v))
    }

    fn set_uniform_f(&mut self, name: &str, v: f32) -> Result<()> {
        self.record(name, UniformValue::Float(v))
    }

    fn set_uniform_2i(&mut self, name: &str, v: &[i32; 2]) -> Result<()> {
        self.record(name, UniformValue::Int2(*v))
    }

    fn set_uniform_2f(&mut self, name: &str, v: &[f32; 2]) -> Result<()> {
        self.record(name, UniformValue::Float2(*v))
    }

    fn set_uniform_3f(&mut self, name: &str, v: &[f32; 3]) -> Result<()> {
        self.record(name, UniformValue::Float3(*v))
    }

    fn set_uniform_3d(&mut self, name: &str, v: &[f64; 3]) -> Result<()> {
        self.record(name, UniformValue::Double3(*v))
    }

    fn set_uniform_4f(&mut self, name: &str, v: &[f32; 4]) -> Result<()> {
        self.record(name, UniformValue::Float4(*v))
    }

    fn set_uniform_3uc(&mut self, name: &str, v: &[u8; 3]) -> Result<()> {
        self.record(name, UniformValue::UChar3(*v))
    }

    fn set_uniform_4uc(&mut self, name: &str, v: &[u8; 4]) -> Result<()> {
        self.record(name, UniformValue::UChar4(*v))
    }

    fn set_uniform_matrix3(&mut self, name: &str, m: &DMat3) -> Result<()> {
        self.record(name, UniformValue::Matrix3(*m))
    }

    fn set_uniform_matrix4(&mut self, name: &str, m: &DMat4) -> Result<()> {
        self.record(name, UniformValue::Matrix4(*m))
    }

    fn set_uniform_matrix3x3(&mut self, name: &str, v: &[f32; 9]) -> Result<()> {
        self.record(name, UniformValue::Matrix3x3(*v))
    }

    fn set_uniform_matrix4x4(&mut self, name: &str, v: &[f32; 16]) -> Result<()> {
        self.record(name, UniformValue::Matrix4x4(*v))
    }

    fn set_uniform_1iv(&mut self, name: &str, v: &[i32]) -> Result<()> {
        self.record(name, UniformValue::Int1v(v.to_vec()))
    }

    fn set_uniform_1fv(&mut self, name: &str, v: &[f32]) -> Result<()> {
        self.record(name, UniformValue::Float1v(v.to_vec()))
    }

    fn set_uniform_2fv(&mut self, name: &str, v: &[[f32; 2]]) -> Result<()> {
        self.record(name, UniformValue::Float2v(v.to_vec()))
    }

    fn set_uniform_3fv(&mut self, name: &str, v: &[[f32; 3]]) -> Result<()> {
        self.record(name, UniformValue::Float3v(v.to_vec()))
    }

    fn set_uniform_4fv(&mut self, name: &str, v: &[[f32; 4]]) -> Result<()> {
        self.record(name, UniformValue::Float4v(v.to_vec()))
    }

    fn set_uniform_matrix4x4v(&mut self, name: &str, v: &[[f32; 16]]) -> Result<()> {
        self.record(name, UniformValue::Matrix4x4v(v.to_vec()))
    }
}

#[cfg(test)]
#[path = "mock_target_tests.rs"]
mod tests;
