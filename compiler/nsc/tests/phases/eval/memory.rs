//! Reference counting and reclamation across whole runs.

use crate::common::session;
use ns_eval::Value;
use pretty_assertions::assert_eq;

#[test]
fn top_level_environment_reclaimed_after_recursive_definitions() {
    let session = session();
    let env = session.fresh_environment();
    let result = session
        .run_in(
            "function loop(n) { match n { case nil -> nil case pair(_, r) -> loop(r) } }\n\
             loop(list(none, none, none))",
            &env,
        )
        .unwrap();
    assert_eq!(result, Some(Value::Nil));

    let weak = env.downgrade();
    drop(env);
    assert!(weak.is_released());
}

#[test]
fn returned_function_keeps_environment_alive() {
    let session = session();
    let env = session.fresh_environment();
    let func = session.run_in("function f() { nil }", &env).unwrap().unwrap();
    let weak = env.downgrade();
    drop(env);
    assert!(!weak.is_released());
    drop(func);
    assert!(weak.is_released());
}

#[test]
fn result_value_is_uniquely_owned() {
    let session = session();
    let result = session.run_fresh("pair(none, list(nil))").unwrap().unwrap();
    assert_eq!(result.ref_count(), Some(1));
}

#[test]
fn bound_value_shares_allocation() {
    let session = session();
    let env = session.fresh_environment();
    session
        .run_in("function keep(x) { pair(x, x) }", &env)
        .unwrap();
    let result = session
        .run_in("keep(list(none))", &env)
        .unwrap()
        .unwrap();
    let pair = result.as_pair().unwrap();
    // Both halves are handles to the one argument list.
    assert_eq!(pair.car().ref_count(), Some(2));
}

#[test]
fn environments_are_independent() {
    let session = session();
    let first = session.fresh_environment();
    session.run_in("function f() { none }", &first).unwrap();
    let err = session.run_fresh("f()").unwrap_err();
    assert_eq!(err.category(), "NameError");
}
