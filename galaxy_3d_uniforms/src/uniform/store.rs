/// Uniform store: named, typed uniform values staged for a shader program.
///
/// Client code (a mapper, a material system) sets uniforms by name while it
/// prepares a draw; the store keeps the latest value per name and, when the
/// program is bound, pushes every entry to it in one pass with
/// `set_uniforms`. Nothing here touches a GPU.
///
/// Architecture:
/// - Entries: `Vec<UniformEntry>` + name index, enumerable by position
/// - Values: `UniformValue` sum type, type-checked on every read
/// - Stamp: bumped by every mutation, compared by downstream caches
/// - Flush: best effort, one target call per entry, failures reported by name

use std::fmt;
use glam::{DMat3, DMat4};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::uniform::declarations::{self, DEFAULT_QUALIFIER};
use crate::uniform::kind::UniformType;
use crate::uniform::target::{dispatch_uniform, ShaderTarget};
use crate::uniform::value::{UniformData, UniformElement, UniformValue};
use crate::utils::ModifiedStamp;
use crate::{uniforms_debug, uniforms_trace};

// ===== DESCRIPTOR =====

/// Uniform store creation descriptor
#[derive(Debug, Clone)]
pub struct UniformStoreDesc {
    /// Number of entries to reserve up front
    pub initial_capacity: usize,
    /// Storage qualifier written before each declaration (`uniform` by default)
    pub qualifier: String,
    /// Log source label
    pub source: String,
}

impl Default for UniformStoreDesc {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            qualifier: DEFAULT_QUALIFIER.to_string(),
            source: "galaxy3d::UniformStore".to_string(),
        }
    }
}

// ===== ENTRY =====

/// A named uniform value
#[derive(Debug, Clone, PartialEq)]
pub struct UniformEntry {
    name: String,
    value: UniformValue,
}

impl UniformEntry {
    /// Uniform name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored payload
    pub fn value(&self) -> &UniformValue {
        &self.value
    }

    /// Stored kind
    pub fn kind(&self) -> UniformType {
        self.value.kind()
    }

    /// Tuple count for array kinds, 0 otherwise
    pub fn element_count(&self) -> usize {
        self.value.element_count()
    }
}

// ===== FLUSH REPORT =====

/// Outcome of `UniformStore::set_uniforms`
///
/// The flush is not atomic: entries accepted before or after a rejected one
/// have reached the target regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushReport {
    dispatched: usize,
    failed: Vec<String>,
}

impl FlushReport {
    /// True when the target accepted every entry
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of setter calls issued
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Number of setter calls the target accepted
    pub fn accepted(&self) -> usize {
        self.dispatched - self.failed.len()
    }

    /// Names the target rejected, in flush order
    pub fn failed_names(&self) -> &[String] {
        &self.failed
    }
}

// ===== UNIFORM STORE =====

/// Uniform store: named uniform values waiting to be flushed to a program
pub struct UniformStore {
    entries: Vec<UniformEntry>,
    names: FxHashMap<String, usize>,
    stamp: ModifiedStamp,
    qualifier: String,
    source: String,
}

impl Default for UniformStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::from_desc(UniformStoreDesc::default())
    }

    /// Create an empty store from a descriptor
    pub fn from_desc(desc: UniformStoreDesc) -> Self {
        let mut names = FxHashMap::default();
        names.reserve(desc.initial_capacity);
        Self {
            entries: Vec::with_capacity(desc.initial_capacity),
            names,
            stamp: ModifiedStamp::new(),
            qualifier: desc.qualifier,
            source: desc.source,
        }
    }

    // ===== GENERIC ACCESS =====

    /// Insert or overwrite `name` with a raw payload
    ///
    /// An existing entry keeps its position; its kind and payload are
    /// replaced together.
    pub fn set_value(&mut self, name: &str, value: UniformValue) {
        uniforms_trace!(&self.source, "Set uniform '{}' ({})", name, value.kind());

        match self.names.get(name).copied() {
            Some(index) => self.entries[index].value = value,
            None => {
                self.names.insert(name.to_string(), self.entries.len());
                self.entries.push(UniformEntry {
                    name: name.to_string(),
                    value,
                });
            }
        }
        self.stamp.modified();
    }

    /// Insert or overwrite `name` with any typed payload
    pub fn set<T: UniformData>(&mut self, name: &str, value: T) {
        self.set_value(name, value.into_value());
    }

    /// Stored payload for `name`, whatever its kind
    pub fn value(&self, name: &str) -> Option<&UniformValue> {
        let index = self.names.get(name)?;
        self.entries.get(*index).map(|e| &e.value)
    }

    /// Typed read; `None` if absent or stored under another kind
    pub fn get<T: UniformData>(&self, name: &str) -> Option<T> {
        T::from_value(self.value(name)?)
    }

    /// Typed read reporting why it failed
    pub fn try_uniform<T: UniformData>(&self, name: &str) -> Result<T> {
        let value = self
            .value(name)
            .ok_or_else(|| Error::UniformNotFound(name.to_string()))?;
        T::from_value(value).ok_or_else(|| Error::UniformTypeMismatch {
            name: name.to_string(),
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Borrowed view of an array uniform; `None` if absent or not this array kind
    ///
    /// The view borrows the store, so any mutation ends it.
    pub fn get_array<T: UniformElement>(&self, name: &str) -> Option<&[T]> {
        T::slice_of(self.value(name)?)
    }

    // ===== FIXED-SIZE SETTERS =====

    pub fn set_uniform_i(&mut self, name: &str, v: i32) {
        self.set(name, v);
    }

    pub fn set_uniform_f(&mut self, name: &str, v: f32) {
        self.set(name, v);
    }

    pub fn set_uniform_2i(&mut self, name: &str, v: [i32; 2]) {
        self.set(name, v);
    }

    pub fn set_uniform_2f(&mut self, name: &str, v: [f32; 2]) {
        self.set(name, v);
    }

    pub fn set_uniform_3f(&mut self, name: &str, v: [f32; 3]) {
        self.set(name, v);
    }

    /// Double precision triplet (kept as f64, declared as `vec3`)
    pub fn set_uniform_3d(&mut self, name: &str, v: [f64; 3]) {
        self.set(name, v);
    }

    pub fn set_uniform_4f(&mut self, name: &str, v: [f32; 4]) {
        self.set(name, v);
    }

    pub fn set_uniform_3uc(&mut self, name: &str, v: [u8; 3]) {
        self.set(name, v);
    }

    pub fn set_uniform_4uc(&mut self, name: &str, v: [u8; 4]) {
        self.set(name, v);
    }

    /// Double precision matrix object
    pub fn set_uniform_matrix3(&mut self, name: &str, m: &DMat3) {
        self.set(name, *m);
    }

    /// Double precision matrix object
    pub fn set_uniform_matrix4(&mut self, name: &str, m: &DMat4) {
        self.set(name, *m);
    }

    /// Flat float matrix, stored as given
    pub fn set_uniform_matrix3x3(&mut self, name: &str, v: &[f32; 9]) {
        self.set(name, *v);
    }

    /// Flat float matrix, stored as given
    pub fn set_uniform_matrix4x4(&mut self, name: &str, v: &[f32; 16]) {
        self.set(name, *v);
    }

    // ===== VARIABLE-LENGTH SETTERS =====
    // The slice length is the element count; an empty slice keeps the entry
    // with its array kind.

    pub fn set_uniform_1iv(&mut self, name: &str, v: &[i32]) {
        self.set(name, v.to_vec());
    }

    pub fn set_uniform_1fv(&mut self, name: &str, v: &[f32]) {
        self.set(name, v.to_vec());
    }

    pub fn set_uniform_2fv(&mut self, name: &str, v: &[[f32; 2]]) {
        self.set(name, v.to_vec());
    }

    pub fn set_uniform_3fv(&mut self, name: &str, v: &[[f32; 3]]) {
        self.set(name, v.to_vec());
    }

    pub fn set_uniform_4fv(&mut self, name: &str, v: &[[f32; 4]]) {
        self.set(name, v.to_vec());
    }

    pub fn set_uniform_matrix4x4v(&mut self, name: &str, v: &[[f32; 16]]) {
        self.set(name, v.to_vec());
    }

    /// Matrix array from a flat buffer of `count * 16` floats
    ///
    /// # Errors
    ///
    /// `Error::InvalidLength` when `values.len() != count * 16`, or when
    /// `count * 16` overflows (reported as `usize::MAX`); the store is left
    /// untouched.
    pub fn set_uniform_matrix4x4v_flat(&mut self, name: &str, count: usize, values: &[f32]) -> Result<()> {
        if count.checked_mul(16) != Some(values.len()) {
            return Err(Error::InvalidLength {
                name: name.to_string(),
                expected: count.saturating_mul(16),
                actual: values.len(),
            });
        }

        let matrices: Vec<[f32; 16]> = values
            .chunks_exact(16)
            .map(|chunk| {
                let mut m = [0.0f32; 16];
                m.copy_from_slice(chunk);
                m
            })
            .collect();
        self.set(name, matrices);
        Ok(())
    }

    // ===== FIXED-SIZE GETTERS =====

    pub fn uniform_i(&self, name: &str) -> Option<i32> {
        self.get(name)
    }

    pub fn uniform_f(&self, name: &str) -> Option<f32> {
        self.get(name)
    }

    pub fn uniform_2i(&self, name: &str) -> Option<[i32; 2]> {
        self.get(name)
    }

    pub fn uniform_2f(&self, name: &str) -> Option<[f32; 2]> {
        self.get(name)
    }

    pub fn uniform_3f(&self, name: &str) -> Option<[f32; 3]> {
        self.get(name)
    }

    pub fn uniform_3d(&self, name: &str) -> Option<[f64; 3]> {
        self.get(name)
    }

    pub fn uniform_4f(&self, name: &str) -> Option<[f32; 4]> {
        self.get(name)
    }

    pub fn uniform_3uc(&self, name: &str) -> Option<[u8; 3]> {
        self.get(name)
    }

    pub fn uniform_4uc(&self, name: &str) -> Option<[u8; 4]> {
        self.get(name)
    }

    pub fn uniform_matrix3(&self, name: &str) -> Option<DMat3> {
        self.get(name)
    }

    pub fn uniform_matrix4(&self, name: &str) -> Option<DMat4> {
        self.get(name)
    }

    pub fn uniform_matrix3x3(&self, name: &str) -> Option<[f32; 9]> {
        self.get(name)
    }

    pub fn uniform_matrix4x4(&self, name: &str) -> Option<[f32; 16]> {
        self.get(name)
    }

    // ===== VARIABLE-LENGTH GETTERS =====

    pub fn uniform_1iv(&self, name: &str) -> Option<&[i32]> {
        self.get_array(name)
    }

    pub fn uniform_1fv(&self, name: &str) -> Option<&[f32]> {
        self.get_array(name)
    }

    pub fn uniform_2fv(&self, name: &str) -> Option<&[[f32; 2]]> {
        self.get_array(name)
    }

    pub fn uniform_3fv(&self, name: &str) -> Option<&[[f32; 3]]> {
        self.get_array(name)
    }

    pub fn uniform_4fv(&self, name: &str) -> Option<&[[f32; 4]]> {
        self.get_array(name)
    }

    pub fn uniform_matrix4x4v(&self, name: &str) -> Option<&[[f32; 16]]> {
        self.get_array(name)
    }

    /// Copy an integer array into `out`
    ///
    /// Returns false (and leaves `out` untouched) if absent or not `Int1v`.
    pub fn uniform_1iv_into(&self, name: &str, out: &mut Vec<i32>) -> bool {
        match self.uniform_1iv(name) {
            Some(values) => {
                out.clear();
                out.extend_from_slice(values);
                true
            }
            None => false,
        }
    }

    // ===== REMOVAL =====

    /// Remove `name`; returns false (without bumping the stamp) if absent
    ///
    /// The last entry moves into the freed position.
    pub fn remove_uniform(&mut self, name: &str) -> bool {
        let index = match self.names.remove(name) {
            Some(index) => index,
            None => return false,
        };

        self.entries.swap_remove(index);
        if let Some(moved) = self.entries.get(index) {
            self.names.insert(moved.name.clone(), index);
        }

        uniforms_trace!(&self.source, "Removed uniform '{}'", name);
        self.stamp.modified();
        true
    }

    /// Remove every uniform (always bumps the stamp)
    pub fn remove_all_uniforms(&mut self) {
        uniforms_trace!(&self.source, "Removed all {} uniforms", self.entries.len());
        self.entries.clear();
        self.names.clear();
        self.stamp.modified();
    }

    // ===== ENUMERATION =====

    /// Number of stored uniforms
    pub fn uniform_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name at `index` (valid range is `0..uniform_count()`)
    pub fn nth_uniform_name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.name.as_str())
    }

    /// Names in enumeration order
    pub fn uniform_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Entries in enumeration order
    pub fn entries(&self) -> &[UniformEntry] {
        &self.entries
    }

    pub fn contains_uniform(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    // ===== INTROSPECTION =====

    /// Stored kind, `UniformType::Invalid` if absent
    pub fn uniform_type(&self, name: &str) -> UniformType {
        self.value(name).map_or(UniformType::Invalid, UniformValue::kind)
    }

    /// Tuple count of an array uniform; 0 for fixed kinds and absent names
    pub fn uniform_size(&self, name: &str) -> usize {
        self.value(name).map_or(0, UniformValue::element_count)
    }

    /// Scalar count (e.g. 3 x number of triplets for `Float3v`); 0 if absent
    pub fn uniform_component_count(&self, name: &str) -> usize {
        self.value(name).map_or(0, UniformValue::component_count)
    }

    /// Stamp of the last mutation (0 for a store never modified)
    pub fn uniform_list_mtime(&self) -> u64 {
        self.stamp.get()
    }

    // ===== SHADER SIDE =====

    /// One declaration line per uniform, in enumeration order
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            declarations::write_declaration(&mut out, &self.qualifier, &entry.name, &entry.value);
        }
        out
    }

    /// Push every uniform to `target`
    ///
    /// Entries are dispatched in enumeration order, one setter call each.
    /// A rejected entry does not stop the flush and earlier writes are not
    /// rolled back. The store itself is not modified.
    pub fn set_uniforms(&self, target: &mut dyn ShaderTarget) -> FlushReport {
        let mut report = FlushReport::default();

        for entry in &self.entries {
            report.dispatched += 1;
            if let Err(err) = dispatch_uniform(target, &entry.name, &entry.value) {
                uniforms_debug!(&self.source, "Uniform '{}' not set: {}", entry.name, err);
                report.failed.push(entry.name.clone());
            }
        }

        uniforms_debug!(
            &self.source,
            "Flushed {} uniforms ({} rejected)",
            report.dispatched,
            report.failed.len()
        );
        report
    }
}

impl fmt::Display for UniformStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "UniformStore ({} uniforms, mtime {})",
            self.entries.len(),
            self.stamp.get()
        )?;
        for entry in &self.entries {
            writeln!(f, "  {}: {} = {}", entry.name, entry.kind(), entry.value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for UniformStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformStore")
            .field("entries", &self.entries)
            .field("mtime", &self.stamp.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
