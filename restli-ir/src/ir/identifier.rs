//! Registry keys.

use std::fmt;

use restli_schema::Name;
use serde::{Deserialize, Serialize};

/// Namespace and name uniquely naming a data type.
///
/// Ordering is by namespace, then name, which is the order the registry
/// reports its entries in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    pub namespace: String,
    pub name: String,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl From<&Name> for Identifier {
    fn from(name: &Name) -> Self {
        Self::new(name.namespace.clone(), name.name.clone())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}
