use golite::{
    ast::Scope,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};
use pretty_assertions::assert_eq;

#[test]
fn names_report_the_table_they_live_in() {
    let mut env = Environment::new();
    env.declare(Scope::Global, "limit", Value::Int(10), true, 3).unwrap();
    env.declare(Scope::Local, "count", Value::Int(0), false, 6).unwrap();

    assert_eq!(env.scope_of("limit"), Some(Scope::Global));
    assert_eq!(env.scope_of("count"), Some(Scope::Local));
    assert_eq!(env.scope_of("missing"), None);
    assert!(env.is_constant("limit"));
    assert!(!env.is_constant("count"));
}

#[test]
fn nested_frames_close_with_their_block() {
    let mut env = Environment::new();
    env.declare(Scope::Local, "outer", Value::Int(1), false, 6).unwrap();

    env.push_frame();
    env.declare(Scope::Local, "inner", Value::Bool(true), false, 7).unwrap();
    assert_eq!(env.scope_of("inner"), Some(Scope::Local));
    assert_eq!(env.assign("outer", Value::Int(2), 8), Ok(Scope::Local));
    env.pop_frame();

    assert_eq!(env.scope_of("inner"), None);
    assert_eq!(env.get("outer").and_then(Value::as_int), Some(2));

    env.pop_frame();
    assert_eq!(env.scope_of("outer"), Some(Scope::Local));
}

#[test]
fn globals_cannot_be_shadowed_by_locals() {
    let mut env = Environment::new();
    env.declare(Scope::Global, "x", Value::Int(1), false, 3).unwrap();
    env.push_frame();

    assert_eq!(env.declare(Scope::Local, "x", Value::Int(2), false, 7),
               Err(RuntimeError::Redeclaration { name: "x".to_string(),
                                                 line: 7, }));
    assert_eq!(env.lookup("x", 8).ok().and_then(|value| value.as_int()), Some(1));
}

#[test]
fn assignments_keep_the_kind_of_the_binding() {
    let mut env = Environment::new();
    env.declare(Scope::Local, "n", Value::Int(4), false, 6).unwrap();

    assert!(env.assign("n", Value::from("four"), 7).is_err());
    assert_eq!(env.get("n").and_then(Value::as_int), Some(4));
    assert_eq!(Value::from("four").as_int(), None);
    assert_eq!(Value::Bool(true).as_int(), None);
}
