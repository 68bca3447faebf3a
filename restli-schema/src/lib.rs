//! # restli-schema
//!
//! The resolved schema model that `restli-ir` translates, plus the
//! interfaces of the collaborators that produce it.
//!
//! Schemas reach this crate already decoded and namespace-resolved. A named
//! type (record, typeref, enum, fixed) is defined once as a [`NamedSchema`]
//! and referenced everywhere else by name through [`DataSchema::Named`], so
//! self-referential and mutually-referential schemas never need cyclic
//! ownership.
//!
//! ## Modules
//!
//! - [`name`] - fully qualified schema names
//! - [`schema`] - schema nodes and named definitions
//! - [`resource`] - resource descriptions and collection identifiers
//! - [`resolver`] - the resolver and reachable-model collaborator traits
//! - [`graph`] - an in-memory implementation of both collaborators

pub mod graph;
pub mod name;
pub mod resolver;
pub mod resource;
pub mod schema;

// Re-export main types for convenience
pub use graph::SchemaGraph;
pub use name::Name;
pub use resolver::{DecodeError, ModelCollector, SchemaResolver};
pub use resource::{CollectionSchema, IdentifierSchema, ResourceSchema};
pub use schema::{
    DataSchema, EnumBody, FieldSchema, FixedBody, NamedBody, NamedKind, NamedRef, NamedSchema,
    RecordBody, SchemaType, TyperefBody, UnionMember,
};
