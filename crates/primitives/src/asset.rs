//! Security identifier definitions.

use std::borrow::Borrow;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Ticker of a listed security (the `Papel` column of the fundamentals table).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn symbol_from_str() {
        let sym: Symbol = "PETR4".into();
        assert_eq!(sym.as_str(), "PETR4");
        assert_eq!(sym.to_string(), "PETR4");
    }

    #[test]
    fn symbol_lookup_by_str() {
        let mut index = HashMap::new();
        index.insert(Symbol::new("VALE3"), 0usize);
        assert_eq!(index.get("VALE3"), Some(&0));
        assert_eq!(index.get("ITUB4"), None);
    }
}
