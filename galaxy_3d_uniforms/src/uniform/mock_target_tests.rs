/// Tests for MockShaderTarget and dispatch_uniform

use super::*;
use crate::uniform::target::dispatch_uniform;

#[test]
fn test_records_accepted_calls() {
    let mut target = MockShaderTarget::new();
    target.set_uniform_f("alpha", 0.5).unwrap();
    target.set_uniform_3fv("colors", &[[1.0, 0.0, 0.0]]).unwrap();

    assert_eq!(target.calls.len(), 2);
    assert_eq!(target.attempts(), 2);
    assert_eq!(target.last_value("alpha"), Some(&UniformValue::Float(0.5)));
    assert_eq!(
        target.last_value("colors"),
        Some(&UniformValue::Float3v(vec![[1.0, 0.0, 0.0]]))
    );
}

#[test]
fn test_reject_by_name() {
    let mut target = MockShaderTarget::new();
    target.reject("missingUniform");

    let err = target.set_uniform_i("missingUniform", 1).unwrap_err();
    assert_eq!(err, Error::TargetRejected("missingUniform".to_string()));
    assert!(target.calls.is_empty());
    assert_eq!(target.attempts(), 1);
}

#[test]
fn test_active_uniform_list() {
    let mut target = MockShaderTarget::with_active_uniforms(["mvp", "alpha"]);

    assert!(target.set_uniform_f("alpha", 1.0).is_ok());
    assert!(target.set_uniform_f("beta", 1.0).is_err());
    assert_eq!(target.calls.len(), 1);
}

#[test]
fn test_calls_for_and_clear() {
    let mut target = MockShaderTarget::new();
    target.set_uniform_i("n", 1).unwrap();
    target.set_uniform_i("n", 2).unwrap();
    target.set_uniform_i("m", 3).unwrap();

    let values: Vec<_> = target.calls_for("n").cloned().collect();
    assert_eq!(values, vec![UniformValue::Int(1), UniformValue::Int(2)]);

    target.clear();
    assert!(target.calls.is_empty());
    assert_eq!(target.attempts(), 0);
}

#[test]
fn test_dispatch_reaches_matching_setter() {
    let values = vec![
        UniformValue::Int(1),
        UniformValue::Float(2.0),
        UniformValue::Int2([1, 2]),
        UniformValue::Float2([1.0, 2.0]),
        UniformValue::Float3([1.0, 2.0, 3.0]),
        UniformValue::Double3([1.0, 2.0, 3.0]),
        UniformValue::Float4([1.0, 2.0, 3.0, 4.0]),
        UniformValue::UChar3([1, 2, 3]),
        UniformValue::UChar4([1, 2, 3, 4]),
        UniformValue::Matrix3(DMat3::IDENTITY),
        UniformValue::Matrix4(DMat4::IDENTITY),
        UniformValue::Matrix3x3([1.0; 9]),
        UniformValue::Matrix4x4([1.0; 16]),
        UniformValue::Int1v(vec![1, 2]),
        UniformValue::Float1v(vec![1.0]),
        UniformValue::Float2v(vec![[1.0, 2.0]]),
        UniformValue::Float3v(vec![[1.0, 2.0, 3.0]]),
        UniformValue::Float4v(vec![[1.0, 2.0, 3.0, 4.0]]),
        UniformValue::Matrix4x4v(vec![[1.0; 16]; 2]),
    ];

    let mut target = MockShaderTarget::new();
    for (i, value) in values.iter().enumerate() {
        dispatch_uniform(&mut target, &format!("u{}", i), value).unwrap();
    }

    // The mock rebuilds each value from the setter it received, so equality
    // proves the kind survived the dispatch
    assert_eq!(target.calls.len(), values.len());
    for (call, value) in target.calls.iter().zip(values.iter()) {
        assert_eq!(&call.value, value);
    }
}
