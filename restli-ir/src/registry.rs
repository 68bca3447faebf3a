//! Registry of named types.
//!
//! The registry is the single owner of every [`NamedTypeIR`] discovered in a
//! translation run. Everything else refers to entries by [`Identifier`].

use std::collections::{HashMap, HashSet};

use crate::ir::{Identifier, NamedTypeIR, NamedTypeKind, UnionIR};

/// Owning map from identifier to named type.
///
/// Holds at most one entry per identifier; registering under an existing
/// identifier replaces the previous entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    types: HashMap<Identifier, NamedTypeIR>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register an entry under its own identifier.
    ///
    /// Returns the entry it replaced, if any.
    pub fn register(&mut self, named: NamedTypeIR) -> Option<NamedTypeIR> {
        let identifier = named.identifier.clone();
        let kind = named.kind.kind_name();
        let previous = self.types.insert(identifier.clone(), named);
        match &previous {
            Some(old) => tracing::debug!(
                identifier = %identifier,
                kind,
                replaced = old.kind.kind_name(),
                "replaced data type"
            ),
            None => tracing::debug!(identifier = %identifier, kind, "registered data type"),
        }
        previous
    }

    /// Get an entry by identifier.
    pub fn get(&self, identifier: &Identifier) -> Option<&NamedTypeIR> {
        self.types.get(identifier)
    }

    /// Check if an identifier is registered.
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.types.contains_key(identifier)
    }

    /// Remove an entry.
    pub fn remove(&mut self, identifier: &Identifier) -> Option<NamedTypeIR> {
        self.types.remove(identifier)
    }

    /// Remove and return the union registered under `identifier`.
    ///
    /// Leaves the registry untouched when the entry is absent or is not a
    /// standalone union.
    pub fn take_standalone_union(&mut self, identifier: &Identifier) -> Option<UnionIR> {
        if !matches!(
            self.types.get(identifier).map(|named| &named.kind),
            Some(NamedTypeKind::StandaloneUnion(_))
        ) {
            return None;
        }
        match self.types.remove(identifier)?.kind {
            NamedTypeKind::StandaloneUnion(union) => Some(union),
            _ => None,
        }
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedTypeIR> {
        self.types.values()
    }

    /// All entries, ordered by identifier.
    pub fn data_types(&self) -> Vec<&NamedTypeIR> {
        let mut out: Vec<_> = self.types.values().collect();
        out.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        out
    }

    /// Consume the registry, returning entries ordered by identifier.
    pub fn into_data_types(self) -> Vec<NamedTypeIR> {
        let mut out: Vec<_> = self.types.into_values().collect();
        out.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        out
    }

    /// References that point at no registered entry.
    ///
    /// Each pair is `(referrer, missing)`, ordered by referrer then missing
    /// identifier, without duplicates.
    pub fn dangling_references(&self) -> Vec<(Identifier, Identifier)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for named in self.data_types() {
            for reference in named.references() {
                if !self.types.contains_key(reference)
                    && seen.insert((&named.identifier, reference))
                {
                    out.push((named.identifier.clone(), reference.clone()));
                }
            }
        }
        out.sort();
        out
    }
}
