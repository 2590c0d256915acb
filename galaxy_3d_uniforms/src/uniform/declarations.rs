//! GLSL declaration rendering
//!
//! Turns staged uniforms into source lines such as `uniform vec3 colors[2];`
//! for splicing into shader code assembled elsewhere.

use crate::uniform::value::UniformValue;

/// Default storage qualifier
pub const DEFAULT_QUALIFIER: &str = "uniform";

/// Append one declaration line (with trailing newline) to `out`
///
/// Array kinds are declared with their current element count, so an empty
/// array renders as `name[0]`.
pub fn write_declaration(out: &mut String, qualifier: &str, name: &str, value: &UniformValue) {
    let kind = value.kind();
    let glsl_type = match kind.glsl_type() {
        Some(t) => t,
        None => return,
    };

    if !qualifier.is_empty() {
        out.push_str(qualifier);
        out.push(' ');
    }

    let line = if kind.is_array() {
        format!("{} {}[{}];\n", glsl_type, name, value.element_count())
    } else {
        format!("{} {};\n", glsl_type, name)
    };
    out.push_str(&line);
}

/// Render a single declaration line without the trailing newline
pub fn declaration_line(qualifier: &str, name: &str, value: &UniformValue) -> String {
    let mut line = String::new();
    write_declaration(&mut line, qualifier, name, value);
    if line.ends_with('\n') {
        line.pop();
    }
    line
}

#[cfg(test)]
#[path = "declarations_tests.rs"]
mod tests;
