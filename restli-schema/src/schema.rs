//! Schema node definitions.
//!
//! [`DataSchema`] is a schema as it appears at a use site (a field type, a
//! typeref target, a union member). [`NamedSchema`] is the single definition
//! of a named type.

use std::collections::BTreeMap;
use std::fmt;

use crate::name::Name;

/// Kind tag of a schema node, as spelled in the IDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Array,
    Map,
    Union,
    Record,
    Typeref,
    Enum,
    Fixed,
}

impl SchemaType {
    /// The IDL keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::Map => "map",
            Self::Union => "union",
            Self::Record => "record",
            Self::Typeref => "typeref",
            Self::Enum => "enum",
            Self::Fixed => "fixed",
        }
    }

    /// Look up a primitive kind (including `null`) by its keyword.
    pub fn primitive_from_keyword(keyword: &str) -> Option<Self> {
        let ty = match keyword {
            "null" => Self::Null,
            "boolean" => Self::Boolean,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds a named definition can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKind {
    Record,
    Typeref,
    Enum,
    Fixed,
}

impl NamedKind {
    /// The matching schema kind tag.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Self::Record => SchemaType::Record,
            Self::Typeref => SchemaType::Typeref,
            Self::Enum => SchemaType::Enum,
            Self::Fixed => SchemaType::Fixed,
        }
    }
}

/// Use-site reference to a named definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedRef {
    pub kind: NamedKind,
    pub name: Name,
}

/// A schema node at a use site.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSchema {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,

    /// `array` of the item schema
    Array(Box<DataSchema>),

    /// `map` from string keys to the value schema
    Map(Box<DataSchema>),

    /// Anonymous union of member schemas, in declaration order
    Union(Vec<UnionMember>),

    /// Reference to a named definition
    Named(NamedRef),
}

impl DataSchema {
    /// Create an array schema.
    pub fn array(items: DataSchema) -> Self {
        Self::Array(Box::new(items))
    }

    /// Create a map schema.
    pub fn map(values: DataSchema) -> Self {
        Self::Map(Box::new(values))
    }

    /// Create a union of unaliased members.
    pub fn union(members: impl IntoIterator<Item = DataSchema>) -> Self {
        Self::Union(members.into_iter().map(UnionMember::new).collect())
    }

    /// Create a reference to a named definition.
    pub fn named(kind: NamedKind, name: Name) -> Self {
        Self::Named(NamedRef { kind, name })
    }

    /// The kind tag of this node.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Self::Null => SchemaType::Null,
            Self::Boolean => SchemaType::Boolean,
            Self::Int => SchemaType::Int,
            Self::Long => SchemaType::Long,
            Self::Float => SchemaType::Float,
            Self::Double => SchemaType::Double,
            Self::String => SchemaType::String,
            Self::Bytes => SchemaType::Bytes,
            Self::Array(_) => SchemaType::Array,
            Self::Map(_) => SchemaType::Map,
            Self::Union(_) => SchemaType::Union,
            Self::Named(named) => named.kind.schema_type(),
        }
    }

    /// Key identifying this schema as an unaliased union member.
    ///
    /// Named types use their full name; everything else uses its keyword.
    pub fn union_member_key(&self) -> String {
        match self {
            Self::Named(named) => named.name.full_name(),
            other => other.schema_type().as_str().to_string(),
        }
    }

    /// Build a primitive schema from its kind tag.
    pub fn primitive(ty: SchemaType) -> Option<Self> {
        let schema = match ty {
            SchemaType::Null => Self::Null,
            SchemaType::Boolean => Self::Boolean,
            SchemaType::Int => Self::Int,
            SchemaType::Long => Self::Long,
            SchemaType::Float => Self::Float,
            SchemaType::Double => Self::Double,
            SchemaType::String => Self::String,
            SchemaType::Bytes => Self::Bytes,
            _ => return None,
        };
        Some(schema)
    }
}

/// One member of a union.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionMember {
    /// Explicit member alias, if the union is aliased
    pub alias: Option<String>,

    /// Member type
    pub ty: DataSchema,
}

impl UnionMember {
    /// Create an unaliased member.
    pub fn new(ty: DataSchema) -> Self {
        Self { alias: None, ty }
    }

    /// Create an aliased member.
    pub fn aliased(alias: impl Into<String>, ty: DataSchema) -> Self {
        Self {
            alias: Some(alias.into()),
            ty,
        }
    }

    /// Discriminant key of this member.
    pub fn key(&self) -> String {
        self.alias
            .clone()
            .unwrap_or_else(|| self.ty.union_member_key())
    }

    /// Whether this member is the `null` type.
    pub fn is_null(&self) -> bool {
        matches!(self.ty, DataSchema::Null)
    }
}

/// The single definition of a named type.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSchema {
    pub name: Name,
    pub doc: Option<String>,
    pub body: NamedBody,
}

impl NamedSchema {
    /// Create a definition without documentation.
    pub fn new(name: Name, body: NamedBody) -> Self {
        Self {
            name,
            doc: None,
            body,
        }
    }

    /// Attach a doc string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Shorthand for a record definition.
    pub fn record(name: Name, fields: Vec<FieldSchema>) -> Self {
        Self::new(name, NamedBody::Record(RecordBody { fields }))
    }

    /// Shorthand for a typeref definition.
    pub fn typeref(name: Name, referenced: DataSchema) -> Self {
        Self::new(name, NamedBody::Typeref(TyperefBody { referenced }))
    }

    /// Shorthand for an enum definition without symbol docs.
    pub fn enumeration(name: Name, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(
            name,
            NamedBody::Enum(EnumBody {
                symbols: symbols.into_iter().map(Into::into).collect(),
                symbol_docs: BTreeMap::new(),
            }),
        )
    }

    /// Shorthand for a fixed definition.
    pub fn fixed(name: Name, size: usize) -> Self {
        Self::new(name, NamedBody::Fixed(FixedBody { size }))
    }

    /// Kind of this definition.
    pub fn kind(&self) -> NamedKind {
        match self.body {
            NamedBody::Record(_) => NamedKind::Record,
            NamedBody::Typeref(_) => NamedKind::Typeref,
            NamedBody::Enum(_) => NamedKind::Enum,
            NamedBody::Fixed(_) => NamedKind::Fixed,
        }
    }

    /// A use-site reference to this definition.
    pub fn reference(&self) -> DataSchema {
        DataSchema::named(self.kind(), self.name.clone())
    }
}

/// Body of a named definition.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedBody {
    Record(RecordBody),
    Typeref(TyperefBody),
    Enum(EnumBody),
    Fixed(FixedBody),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordBody {
    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TyperefBody {
    /// The immediately referenced schema
    pub referenced: DataSchema,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumBody {
    pub symbols: Vec<String>,
    pub symbol_docs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedBody {
    /// Size in bytes
    pub size: usize,
}

/// A record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub doc: Option<String>,
    pub ty: DataSchema,
    pub optional: bool,

    /// Declared default, as the literal JSON value
    pub default: Option<serde_json::Value>,
}

impl FieldSchema {
    /// Create a required field without doc or default.
    pub fn new(name: impl Into<String>, ty: DataSchema) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty,
            optional: false,
            default: None,
        }
    }

    /// Mark as optional.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Set the doc string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the default literal.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}
