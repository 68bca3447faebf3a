//! Intermediate Representation (IR) module.
//!
//! This module defines the data structures handed to code generators: the
//! identifiers that key the registry, the type-reference model used at every
//! use site, and the named-type entries the registry owns.

pub mod identifier;
pub mod named;
pub mod types;

pub use identifier::Identifier;
pub use named::{
    ComplexKeyIR, EnumIR, FieldIR, FixedIR, NamedTypeIR, NamedTypeKind, RecordIR, TyperefIR,
    TyperefTarget, UnionIR, UnionMemberIR,
};
pub use types::{PathKey, PrimitiveKind, TypeRef};
