//! Named-type IR definitions.
//!
//! Every registry entry is a [`NamedTypeIR`]: an identifier, provenance
//! (doc string and source file) and one of the [`NamedTypeKind`] shapes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use super::types::{PrimitiveKind, TypeRef};

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTypeIR {
    /// Registry key
    pub identifier: Identifier,

    /// Doc string of the originating schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// File the originating schema was resolved from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,

    /// Shape of the type
    pub kind: NamedTypeKind,
}

impl NamedTypeIR {
    /// Create an entry without provenance.
    pub fn new(identifier: Identifier, kind: NamedTypeKind) -> Self {
        Self {
            identifier,
            doc: None,
            source_file: None,
            kind,
        }
    }

    /// Set the doc string.
    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Set the source file.
    pub fn with_source_file(mut self, source_file: Option<PathBuf>) -> Self {
        self.source_file = source_file;
        self
    }

    /// Every identifier this entry refers to, in declaration order.
    ///
    /// May contain duplicates when a type is referenced more than once.
    pub fn references(&self) -> Vec<&Identifier> {
        let mut out = Vec::new();
        match &self.kind {
            NamedTypeKind::Record(record) => {
                for field in &record.fields {
                    field.ty.collect_references(&mut out);
                }
            }
            NamedTypeKind::Typeref(typeref) => match &typeref.represents {
                TyperefTarget::Primitive(_) => {}
                TyperefTarget::Array(inner) | TyperefTarget::Map(inner) => {
                    inner.collect_references(&mut out)
                }
                TyperefTarget::Reference(id) => out.push(id),
                TyperefTarget::InlineUnion(members) => {
                    for member in members {
                        member.ty.collect_references(&mut out);
                    }
                }
            },
            NamedTypeKind::StandaloneUnion(union) => {
                for member in &union.members {
                    member.ty.collect_references(&mut out);
                }
            }
            NamedTypeKind::ComplexKey(key) => {
                out.push(&key.key);
                out.push(&key.params);
            }
            NamedTypeKind::Enum(_) | NamedTypeKind::Fixed(_) => {}
        }
        out
    }
}

/// Shape of a registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NamedTypeKind {
    Record(RecordIR),
    Typeref(TyperefIR),
    Enum(EnumIR),
    Fixed(FixedIR),

    /// Anonymous union lifted out of a record field or container
    StandaloneUnion(UnionIR),

    /// Synthesized key of a collection with a params type
    ComplexKey(ComplexKeyIR),
}

impl NamedTypeKind {
    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::Typeref(_) => "typeref",
            Self::Enum(_) => "enum",
            Self::Fixed(_) => "fixed",
            Self::StandaloneUnion(_) => "union",
            Self::ComplexKey(_) => "complex key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIR {
    /// Fields in declaration order
    pub fields: Vec<FieldIR>,
}

/// A record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIR {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(rename = "type")]
    pub ty: TypeRef,

    #[serde(default)]
    pub optional: bool,

    /// Default literal as declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl FieldIR {
    /// Create a required field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty,
            optional: false,
            default: None,
        }
    }

    /// Set the doc string.
    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Mark as optional.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Set the default literal.
    pub fn with_default(mut self, default: Option<serde_json::Value>) -> Self {
        self.default = default;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TyperefIR {
    pub represents: TyperefTarget,
}

/// What a typeref stands for.
///
/// Mirrors [`TypeRef`] plus `InlineUnion`, which holds the members of an
/// anonymous union the typeref names directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TyperefTarget {
    Primitive(PrimitiveKind),
    Array(Box<TypeRef>),
    Map(Box<TypeRef>),
    Reference(Identifier),
    InlineUnion(Vec<UnionMemberIR>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumIR {
    /// Symbols in declaration order
    pub symbols: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub symbol_docs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedIR {
    /// Size in bytes
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionIR {
    /// Name synthesized from the hierarchy the union was found at
    pub synthetic_name: String,

    /// Non-null members in declaration order
    pub members: Vec<UnionMemberIR>,
}

/// A union member and its discriminant key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionMemberIR {
    pub key: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl UnionMemberIR {
    pub fn new(key: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            key: key.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexKeyIR {
    /// Record holding the key fields
    pub key: Identifier,

    /// Record holding the key params
    pub params: Identifier,
}
