//! The four native functions every top-level environment starts with.
//!
//! Booleans are encoded as `nil` (true) and `undefined` (false); numbers as
//! unary numerals (see [`decode_numeral`]).

use ns_ir::StringInterner;

use crate::errors::{arity_mismatch, type_mismatch};
use crate::{Environment, EvalResult, SharedPrintHandler, Value};


/// Name and implementation of every builtin, in definition order.
pub const BUILTINS: [(&str, crate::value::BuiltinFn); 4] = [
    ("eq", builtin_eq),
    ("car", builtin_car),
    ("cdr", builtin_cdr),
    ("print", builtin_print),
];

/// Bind every builtin in `env`.
pub fn register_builtins(env: &Environment, interner: &StringInterner) {
    for (name, func) in BUILTINS {
        env.define(interner.intern(name), Value::builtin(name, func));
    }
}

/// A fresh top-level environment holding only the builtins.
pub fn global_environment(interner: &StringInterner) -> Environment {
    let env = Environment::new();
    register_builtins(&env, interner);
    env
}

fn check_arity(name: &str, args: &[Value], expected: usize) -> Result<(), crate::EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(name, expected, args.len()))
    }
}

/// `eq(a, b)`: `nil` if structurally equal, else `undefined`.
pub fn builtin_eq(args: &[Value], _: &SharedPrintHandler) -> EvalResult {
    check_arity("eq", args, 2)?;
    Ok(if args[0].values_equal(&args[1]) {
        Value::Nil
    } else {
        Value::Undefined
    })
}

pub fn builtin_car(args: &[Value], _: &SharedPrintHandler) -> EvalResult {
    check_arity("car", args, 1)?;
    match args[0].as_pair() {
        Some(pair) => Ok(pair.car().clone()),
        None => Err(type_mismatch("car", "pair", &args[0])),
    }
}

pub fn builtin_cdr(args: &[Value], _: &SharedPrintHandler) -> EvalResult {
    check_arity("cdr", args, 1)?;
    match args[0].as_pair() {
        Some(pair) => Ok(pair.cdr().clone()),
        None => Err(type_mismatch("cdr", "pair", &args[0])),
    }
}

/// `print(pair(tag, payload))`.
///
/// | tag         | output                                        |
/// |-------------|-----------------------------------------------|
/// | `none`      | payload decoded as a numeral, in decimal      |
/// | `undefined` | payload decoded as an ASCII code, if <= 127   |
/// | `null`      | the payload's tag name                        |
/// | other       | nothing                                       |
///
/// Payloads that do not decode print nothing. Always returns `nil`.
pub fn builtin_print(args: &[Value], print: &SharedPrintHandler) -> EvalResult {
    check_arity("print", args, 1)?;
    let Some(arg) = args[0].as_pair() else {
        return Err(type_mismatch("print", "pair", &args[0]));
    };

    let payload = arg.cdr();
    match arg.car() {
        Value::None => {
            if let Some(n) = decode_numeral(payload) {
                print.print(&n.to_string());
            }
        }
        Value::Undefined => {
            if let Some(c) = decode_numeral(payload)
                .and_then(|n| u8::try_from(n).ok())
                .filter(u8::is_ascii)
            {
                print.print(char::from(c).encode_utf8(&mut [0; 4]));
            }
        }
        Value::Null => print.print(tag_name(payload)),
        _ => {}
    }
    tracing::debug!(tag = arg.car().type_name(), "print");
    Ok(Value::Nil)
}

/// Symbolic name printed for a value under the `null` tag.
fn tag_name(value: &Value) -> &'static str {
    match value {
        Value::None => "none",
        Value::Nil => "nil",
        Value::Undefined => "undefined",
        Value::Null => "null",
        Value::Pair(_) => "pair(...)",
        Value::Function(_) | Value::Builtin(_) => "unknown",
    }
}

/// Decode a unary numeral: the number of pairs with car `none` before the
/// terminating `nil`.
///
/// Returns `None` if any car is not `none` or the chain ends in anything
/// but `nil`.
pub fn decode_numeral(value: &Value) -> Option<usize> {
    let mut count = 0usize;
    let mut current = value;
    loop {
        match current {
            Value::Nil => return Some(count),
            Value::Pair(pair) if matches!(pair.car(), Value::None) => {
                count += 1;
                current = pair.cdr();
            }
            _ => return None,
        }
    }
}
