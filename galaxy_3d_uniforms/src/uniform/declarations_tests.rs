use super::*;
use glam::{DMat3, DMat4};

#[test]
fn test_scalar_declarations() {
    assert_eq!(declaration_line("uniform", "count", &UniformValue::Int(3)), "uniform int count;");
    assert_eq!(declaration_line("uniform", "alpha", &UniformValue::Float(0.5)), "uniform float alpha;");
}

#[test]
fn test_vector_declarations() {
    assert_eq!(declaration_line("uniform", "size", &UniformValue::Int2([1, 2])), "uniform ivec2 size;");
    assert_eq!(declaration_line("uniform", "uv", &UniformValue::Float2([0.0; 2])), "uniform vec2 uv;");
    assert_eq!(declaration_line("uniform", "p", &UniformValue::Double3([0.0; 3])), "uniform vec3 p;");
    assert_eq!(declaration_line("uniform", "rgb", &UniformValue::UChar3([0; 3])), "uniform vec3 rgb;");
    assert_eq!(declaration_line("uniform", "rgba", &UniformValue::UChar4([0; 4])), "uniform vec4 rgba;");
}

#[test]
fn test_matrix_declarations() {
    assert_eq!(
        declaration_line("uniform", "normalMatrix", &UniformValue::Matrix3(DMat3::IDENTITY)),
        "uniform mat3 normalMatrix;"
    );
    assert_eq!(
        declaration_line("uniform", "mvp", &UniformValue::Matrix4(DMat4::IDENTITY)),
        "uniform mat4 mvp;"
    );
    assert_eq!(
        declaration_line("uniform", "m", &UniformValue::Matrix3x3([0.0; 9])),
        "uniform mat3 m;"
    );
}

#[test]
fn test_array_declarations_carry_count() {
    let colors = UniformValue::Float3v(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(declaration_line("uniform", "colors", &colors), "uniform vec3 colors[2];");

    let bones = UniformValue::Matrix4x4v(vec![[0.0; 16]; 4]);
    assert_eq!(declaration_line("uniform", "bones", &bones), "uniform mat4 bones[4];");

    let empty = UniformValue::Int1v(Vec::new());
    assert_eq!(declaration_line("uniform", "ids", &empty), "uniform int ids[0];");
}

#[test]
fn test_custom_and_empty_qualifier() {
    let value = UniformValue::Float(1.0);
    assert_eq!(declaration_line("layout(std140) uniform", "a", &value), "layout(std140) uniform float a;");
    assert_eq!(declaration_line("", "a", &value), "float a;");
}

#[test]
fn test_write_declaration_appends_lines() {
    let mut out = String::new();
    write_declaration(&mut out, DEFAULT_QUALIFIER, "a", &UniformValue::Int(1));
    write_declaration(&mut out, DEFAULT_QUALIFIER, "b", &UniformValue::Float4([0.0; 4]));
    assert_eq!(out, "uniform int a;\nuniform vec4 b;\n");
}
