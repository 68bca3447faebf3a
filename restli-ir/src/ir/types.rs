//! Type-reference IR definitions.
//!
//! A [`TypeRef`] describes how a type is used at a particular site: a
//! primitive, a container of another [`TypeRef`], or a reference into the
//! registry. Named types are never inlined here.

use restli_schema::SchemaType;
use serde::{Deserialize, Serialize};

use super::identifier::Identifier;

/// Primitive kinds a generator maps to native types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Bytes,
}

impl PrimitiveKind {
    /// Map a schema kind to its primitive, if it is one.
    ///
    /// `null` is deliberately absent: it is only meaningful as a union member.
    pub fn from_schema_type(ty: SchemaType) -> Option<Self> {
        let kind = match ty {
            SchemaType::Boolean => Self::Boolean,
            SchemaType::Int => Self::Int32,
            SchemaType::Long => Self::Int64,
            SchemaType::Float => Self::Float32,
            SchemaType::Double => Self::Float64,
            SchemaType::String => Self::String,
            SchemaType::Bytes => Self::Bytes,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

/// How a type is referenced at a use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypeRef {
    Primitive(PrimitiveKind),

    /// Array of the element type
    Array(Box<TypeRef>),

    /// Map from string keys to the value type
    Map(Box<TypeRef>),

    /// Reference to a registry entry
    Reference(Identifier),
}

impl TypeRef {
    /// Create an array of `element`.
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// Create a map to `value`.
    pub fn map(value: TypeRef) -> Self {
        TypeRef::Map(Box::new(value))
    }

    /// Create a reference to `namespace.name`.
    pub fn reference(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Reference(Identifier::new(namespace, name))
    }

    /// The referenced identifier, if this is a direct reference.
    pub fn as_reference(&self) -> Option<&Identifier> {
        match self {
            TypeRef::Reference(id) => Some(id),
            _ => None,
        }
    }

    /// Append every identifier this type reaches, through containers.
    pub fn collect_references<'a>(&'a self, out: &mut Vec<&'a Identifier>) {
        match self {
            TypeRef::Primitive(_) => {}
            TypeRef::Array(inner) | TypeRef::Map(inner) => inner.collect_references(out),
            TypeRef::Reference(id) => out.push(id),
        }
    }
}

/// Resolved key of a collection resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathKey {
    /// Key parameter name, e.g. `widgetId`
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,
}
