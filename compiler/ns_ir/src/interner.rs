//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Strings are stored as `Arc<str>` so a
//! lookup can hand out an owned handle without holding the lock.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct InternTable {
    map: FxHashMap<Arc<str>, u32>,
    strings: Vec<Arc<str>>,
}

/// String interner.
///
/// # Thread Safety
/// Uses a single `RwLock` so a `SharedInterner` can be handed to any
/// component without extra synchronization.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as `Name::EMPTY`.
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let mut table = InternTable::default();
        table.map.insert(Arc::clone(&empty), 0);
        table.strings.push(empty);
        StringInterner {
            table: RwLock::new(table),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&index) = self.table.read().map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let mut guard = self.table.write();
        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let stored: Arc<str> = Arc::from(s);
        guard.strings.push(Arc::clone(&stored));
        guard.map.insert(stored, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner holds more than `u32::MAX` strings.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// A name from a different interner resolves to the empty string.
    pub fn lookup(&self, name: Name) -> Arc<str> {
        let guard = self.table.read();
        guard
            .strings
            .get(name.index())
            .map_or_else(|| Arc::clone(&guard.strings[0]), Arc::clone)
    }

    /// Number of interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.table.read().strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a `StringInterner`.
///
/// The lexer, parser, evaluator and diagnostics all resolve names against
/// the same table; cloning the handle is an `Arc` clone.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_idempotent() {
        let interner = StringInterner::new();
        let a = interner.intern("car");
        let b = interner.intern("car");
        let c = interner.intern("cdr");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(&*interner.lookup(a), "car");
        assert_eq!(&*interner.lookup(c), "cdr");
    }

    #[test]
    fn test_empty_is_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.len(), 1);
        assert!(!interner.is_empty());
    }

    #[test]
    fn test_lookup_unknown_name_is_empty() {
        let interner = StringInterner::new();
        assert_eq!(&*interner.lookup(Name::from_raw(99)), "");
    }

    #[test]
    fn test_shared_interner_clones_share_table() {
        let shared = SharedInterner::new();
        let other = shared.clone();
        let name = shared.intern("fact");
        assert_eq!(other.intern("fact"), name);
        assert_eq!(other.len(), 2);
    }
}
