//! Environments: chained scopes of name bindings.
//!
//! Each scope owns its bindings and a handle to its parent. Lookup scans the
//! innermost scope newest-first, then walks outward. Redefining a name in the
//! same scope shadows the earlier binding without removing it.
//!
//! # Recursive functions
//!
//! A `function` definition binds its own name to the function's code only
//! ([`Binding::Recursive`]), not to a value holding this environment.
//! Lookup turns that binding into a function value closing over the scope
//! where the binding was found. Self-recursion works, and a scope never owns
//! a handle to itself, so plain reference counting reclaims it.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use ns_ir::Name;

use crate::value::{FunctionProto, Heap, Value};


/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so that all scope allocations go through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    #[inline]
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// What a name is bound to.
#[derive(Clone)]
pub enum Binding {
    /// An ordinary value.
    Value(Value),
    /// A function's own name inside the scope it was defined in.
    Recursive(Heap<FunctionProto>),
}

/// A single scope containing variable bindings.
#[derive(Default)]
pub struct Scope {
    /// In definition order; searched from the end.
    bindings: Vec<(Name, Binding)>,
    parent: Option<Environment>,
}

impl Scope {
    /// Find the newest binding for `name` in this scope only.
    fn find(&self, name: Name) -> Option<&Binding> {
        self.bindings
            .iter()
            .rev()
            .find_map(|(bound, binding)| (*bound == name).then_some(binding))
    }
}

/// Handle to a scope and, through it, the whole chain of enclosing scopes.
///
/// Cloning retains the scope; dropping the last handle releases its
/// bindings and its parent.
#[derive(Clone, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create an empty top-level environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: Vec::new(),
            parent: Some(self.clone()),
        }))
    }

    /// Bind `name` to `value` in this scope.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.push((name, Binding::Value(value)));
    }

    /// Bind a function's own name in the scope it is defined in.
    pub fn define_function(&self, proto: Heap<FunctionProto>) {
        let name = proto.name;
        self.0
            .borrow_mut()
            .bindings
            .push((name, Binding::Recursive(proto)));
    }

    /// Resolve `name`, innermost scope first.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                match scope.find(name) {
                    Some(Binding::Value(value)) => return Some(value.clone()),
                    Some(Binding::Recursive(proto)) => {
                        return Some(Value::function(proto.clone(), current.clone()));
                    }
                    None => scope.parent.clone(),
                }
            };
            current = parent?;
        }
    }

    /// Number of bindings in this scope, shadowed ones included.
    pub fn len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    /// Whether this scope has no bindings of its own.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0 .0, &other.0 .0)
    }

    /// A handle that does not keep the scope alive.
    pub fn downgrade(&self) -> WeakEnvironment {
        WeakEnvironment(Rc::downgrade(&self.0 .0))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        f.debug_struct("Environment")
            .field("bindings", &scope.bindings.len())
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

/// Non-owning handle to an [`Environment`].
#[derive(Clone, Debug)]
pub struct WeakEnvironment(Weak<RefCell<Scope>>);

impl WeakEnvironment {
    /// The environment, if anything still owns it.
    pub fn upgrade(&self) -> Option<Environment> {
        self.0.upgrade().map(|rc| Environment(LocalScope(rc)))
    }

    /// Whether the environment has been released.
    pub fn is_released(&self) -> bool {
        self.0.strong_count() == 0
    }
}
