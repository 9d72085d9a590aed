//! Symbol bindings shared by the serializer and the expression evaluator

use std::collections::HashMap;

/// Mapping from identifier to bound integer, scoped to one conversion run.
///
/// Bindings only accumulate; a later `const` or dictionary entry with the
/// same name silently replaces the earlier value. There is no deletion.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: HashMap<String, i64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Insert or overwrite a binding, unconditionally.
    pub fn bind(&mut self, name: impl Into<String>, value: i64) {
        self.bindings.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
