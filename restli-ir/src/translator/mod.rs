//! Schema to IR translation.
//!
//! [`Translator::from_data_schema`] turns any schema node into a
//! [`TypeRef`], registering anonymous unions it meets along the way. Named
//! types are referenced by identifier and never entered here; their bodies
//! are parsed separately by the per-kind parsers in [`named`], which is what
//! keeps self-referential schemas from recursing forever.

pub mod named;
pub mod naming;

use std::path::Path;

use restli_schema::{DataSchema, UnionMember};

use crate::error::{TranslateResult, UnsupportedSchema};
use crate::ir::{Identifier, NamedTypeIR, NamedTypeKind, PrimitiveKind, TypeRef, UnionIR, UnionMemberIR};
use crate::registry::Registry;

/// Hierarchy segment appended when descending into an array.
pub const ARRAY_SEGMENT: &str = "Array";

/// Hierarchy segment appended when descending into a map.
pub const MAP_SEGMENT: &str = "Map";

/// Where a schema node sits relative to its nearest named ancestor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context<'a> {
    /// Namespace of the enclosing named type
    pub namespace: Option<&'a str>,

    /// File the enclosing named type came from
    pub source_file: Option<&'a Path>,

    /// Path of names from the enclosing named type down to this node
    pub hierarchy: Option<Vec<String>>,
}

impl<'a> Context<'a> {
    /// No enclosing named type, as for inline resource types.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context inside a named type.
    pub fn within(namespace: &'a str, source_file: Option<&'a Path>, hierarchy: Vec<String>) -> Self {
        Self {
            namespace: Some(namespace),
            source_file,
            hierarchy: Some(hierarchy),
        }
    }

    /// The same context one segment deeper.
    pub fn descend(&self, segment: &str) -> Self {
        Self {
            namespace: self.namespace,
            source_file: self.source_file,
            hierarchy: self.hierarchy.as_ref().map(|hierarchy| {
                let mut hierarchy = hierarchy.clone();
                hierarchy.push(segment.to_string());
                hierarchy
            }),
        }
    }
}

/// Recursive translator writing into a borrowed registry.
pub struct Translator<'r> {
    registry: &'r mut Registry,
}

impl<'r> Translator<'r> {
    /// Create a translator over `registry`.
    pub fn new(registry: &'r mut Registry) -> Self {
        Self { registry }
    }

    /// Translate `schema` into a type reference.
    ///
    /// Unions are lifted into the registry under a name synthesized from the
    /// context hierarchy. Fails on the `null` type outside a union and on a
    /// union without an enclosing named type.
    pub fn from_data_schema(&mut self, schema: &DataSchema, ctx: &Context<'_>) -> TranslateResult<TypeRef> {
        if let Some(kind) = PrimitiveKind::from_schema_type(schema.schema_type()) {
            return Ok(TypeRef::Primitive(kind));
        }

        match schema {
            DataSchema::Named(named) => Ok(TypeRef::Reference(Identifier::from(&named.name))),
            DataSchema::Array(items) => {
                let element = self.from_data_schema(items, &ctx.descend(ARRAY_SEGMENT))?;
                Ok(TypeRef::array(element))
            }
            DataSchema::Map(values) => {
                let value = self.from_data_schema(values, &ctx.descend(MAP_SEGMENT))?;
                Ok(TypeRef::map(value))
            }
            DataSchema::Union(members) => self.translate_union(members, ctx),
            other => Err(UnsupportedSchema::UnknownType {
                kind: other.schema_type(),
            }
            .into()),
        }
    }

    fn translate_union(&mut self, members: &[UnionMember], ctx: &Context<'_>) -> TranslateResult<TypeRef> {
        let (Some(namespace), Some(hierarchy)) = (ctx.namespace, ctx.hierarchy.as_ref()) else {
            return Err(UnsupportedSchema::RawUnion.into());
        };

        let mut translated = Vec::with_capacity(members.len());
        for member in members.iter().filter(|member| !member.is_null()) {
            let ty = self.from_data_schema(&member.ty, ctx)?;
            translated.push(UnionMemberIR::new(member.key(), ty));
        }

        let synthetic_name = naming::union_name(hierarchy);
        let identifier = Identifier::new(namespace, synthetic_name.clone());
        tracing::trace!(identifier = %identifier, members = translated.len(), "lifted anonymous union");

        self.registry.register(
            NamedTypeIR::new(
                identifier.clone(),
                NamedTypeKind::StandaloneUnion(UnionIR {
                    synthetic_name,
                    members: translated,
                }),
            )
            .with_source_file(ctx.source_file.map(Path::to_path_buf)),
        );

        Ok(TypeRef::Reference(identifier))
    }
}
