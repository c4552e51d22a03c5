//! Runtime values.
//!
//! Four payload-free sentinels plus pairs, user functions and builtins.
//! Composite payloads live behind [`Heap`], whose constructor is private to
//! this crate, so values are only built through the factories on [`Value`].
//!
//! Retain and release are `Clone` and `Drop`: a value's reference count is
//! always the number of live handles to it.

mod heap;

use std::fmt;

use ns_ir::{ExprId, Name, Sentinel, SharedArena, Span};
use ns_stack::ensure_sufficient_stack;

pub use heap::Heap;

use crate::{Environment, EvalResult, SharedPrintHandler};

/// Native implementation of a builtin.
pub type BuiltinFn = fn(&[Value], &SharedPrintHandler) -> EvalResult;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    None,
    Nil,
    Undefined,
    Null,
    Pair(Heap<PairValue>),
    Function(Heap<FunctionValue>),
    Builtin(BuiltinValue),
}

/// The two halves of a pair.
pub struct PairValue {
    car: Value,
    cdr: Value,
}

impl PairValue {
    #[inline]
    pub fn car(&self) -> &Value {
        &self.car
    }

    #[inline]
    pub fn cdr(&self) -> &Value {
        &self.cdr
    }
}

impl Drop for PairValue {
    /// Releases nested pairs with a work list instead of recursion, so that
    /// dropping a long list cannot overflow the stack.
    fn drop(&mut self) {
        let car = std::mem::replace(&mut self.car, Value::Nil);
        let cdr = std::mem::replace(&mut self.cdr, Value::Nil);
        if !matches!(car, Value::Pair(_)) && !matches!(cdr, Value::Pair(_)) {
            return;
        }

        let mut pending = vec![car, cdr];
        while let Some(value) = pending.pop() {
            if let Value::Pair(heap) = value {
                if let Ok(mut pair) = Heap::try_unwrap(heap) {
                    pending.push(std::mem::replace(&mut pair.car, Value::Nil));
                    pending.push(std::mem::replace(&mut pair.cdr, Value::Nil));
                }
            }
        }
    }
}

/// The code of a user function, shared between its recursive binding and
/// every function value created from it.
#[derive(Debug)]
pub struct FunctionProto {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: ExprId,
    /// Keeps the body's nodes alive.
    pub arena: SharedArena,
    /// The whole `function` definition.
    pub span: Span,
}

impl FunctionProto {
    pub fn new(
        name: Name,
        params: Vec<Name>,
        body: ExprId,
        arena: SharedArena,
        span: Span,
    ) -> Heap<Self> {
        Heap::new(FunctionProto {
            name,
            params,
            body,
            arena,
            span,
        })
    }
}

/// A user function together with the environment it closes over.
pub struct FunctionValue {
    pub proto: Heap<FunctionProto>,
    pub closure: Environment,
}

/// A native function.
#[derive(Clone, Copy)]
pub struct BuiltinValue {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Value {
    #[inline]
    pub fn pair(car: Value, cdr: Value) -> Self {
        Value::Pair(Heap::new(PairValue { car, cdr }))
    }

    #[inline]
    pub fn function(proto: Heap<FunctionProto>, closure: Environment) -> Self {
        Value::Function(Heap::new(FunctionValue { proto, closure }))
    }

    #[inline]
    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Builtin(BuiltinValue { name, func })
    }

    /// Build a proper list: `pair(a, pair(b, ... nil))`.
    pub fn list(items: Vec<Value>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Value::Nil, |tail, item| Value::pair(item, tail))
    }

    /// Encode `n` as a unary numeral: `n` pairs with car `none`, ending in `nil`.
    pub fn numeral(n: usize) -> Self {
        (0..n).fold(Value::Nil, |tail, _| Value::pair(Value::None, tail))
    }

    pub fn from_sentinel(sentinel: Sentinel) -> Self {
        match sentinel {
            Sentinel::None => Value::None,
            Sentinel::Nil => Value::Nil,
            Sentinel::Undefined => Value::Undefined,
            Sentinel::Null => Value::Null,
        }
    }

    /// The sentinel tag, if this value has no payload.
    pub fn as_sentinel(&self) -> Option<Sentinel> {
        match self {
            Value::None => Some(Sentinel::None),
            Value::Nil => Some(Sentinel::Nil),
            Value::Undefined => Some(Sentinel::Undefined),
            Value::Null => Some(Sentinel::Null),
            Value::Pair(_) | Value::Function(_) | Value::Builtin(_) => None,
        }
    }

    #[inline]
    pub fn as_pair(&self) -> Option<&PairValue> {
        match self {
            Value::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    /// Only `nil` is true.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Nil => "nil",
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Pair(_) => "pair",
            Value::Function(_) => "function",
            Value::Builtin(_) => "builtin",
        }
    }

    /// Number of live handles to the payload; `None` for sentinels and
    /// builtins, which own nothing.
    pub fn ref_count(&self) -> Option<usize> {
        match self {
            Value::Pair(pair) => Some(Heap::strong_count(pair)),
            Value::Function(func) => Some(Heap::strong_count(func)),
            _ => None,
        }
    }

    /// Structural equality.
    ///
    /// Sentinels are equal when their tags match, pairs when both halves
    /// are. Functions and builtins are never equal to anything, themselves
    /// included.
    pub fn values_equal(&self, other: &Value) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Value::Pair(x), Value::Pair(y)) => {
                    if !ensure_sufficient_stack(|| x.car.values_equal(&y.car)) {
                        return false;
                    }
                    a = &x.cdr;
                    b = &y.cdr;
                }
                _ => {
                    return match (a.as_sentinel(), b.as_sentinel()) {
                        (Some(x), Some(y)) => x == y,
                        _ => false,
                    };
                }
            }
        }
    }
}

impl PartialEq for Value {
    /// Same as [`Value::values_equal`], so not reflexive for functions.
    fn eq(&self, other: &Self) -> bool {
        self.values_equal(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self;
        let mut open = 0usize;
        while let Value::Pair(pair) = current {
            f.write_str("pair(")?;
            ensure_sufficient_stack(|| fmt::Display::fmt(&pair.car, f))?;
            f.write_str(", ")?;
            open += 1;
            current = &pair.cdr;
        }
        match current {
            Value::Function(_) => f.write_str("<function>")?,
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name)?,
            other => f.write_str(other.type_name())?,
        }
        for _ in 0..open {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
