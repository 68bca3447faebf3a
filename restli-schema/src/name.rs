//! Fully qualified schema names.

use std::fmt;

/// A namespace-qualified schema name such as `com.example.Widget`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    /// Dot-separated namespace, empty for the default namespace
    pub namespace: String,

    /// Simple name within the namespace
    pub name: String,
}

impl Name {
    /// Create a name from its namespace and simple name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a full name at its last dot.
    ///
    /// A name without a dot lands in the default (empty) namespace.
    pub fn parse(full_name: &str) -> Self {
        match full_name.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", full_name),
        }
    }

    /// The dotted full name.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}
