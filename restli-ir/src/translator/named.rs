//! Per-kind parsers for named definitions.
//!
//! Each parser registers exactly one entry under the definition's own
//! identifier. The typeref parser additionally folds an anonymous union
//! target into the typeref itself.

use std::path::Path;

use restli_schema::{EnumBody, FixedBody, NamedBody, NamedSchema, RecordBody, TyperefBody};

use super::{Context, Translator};
use crate::error::TranslateResult;
use crate::ir::{
    EnumIR, FieldIR, FixedIR, Identifier, NamedTypeIR, NamedTypeKind, RecordIR, TypeRef, TyperefIR,
    TyperefTarget,
};

impl Translator<'_> {
    /// Parse the body of `schema` and register it.
    pub fn parse_named(&mut self, schema: &NamedSchema, source_file: &Path) -> TranslateResult<()> {
        let kind = match &schema.body {
            NamedBody::Record(record) => self.parse_record(schema, record, source_file)?,
            NamedBody::Typeref(typeref) => self.parse_typeref(schema, typeref, source_file)?,
            NamedBody::Enum(body) => parse_enum(body),
            NamedBody::Fixed(body) => parse_fixed(body),
        };

        self.registry.register(
            NamedTypeIR::new(Identifier::from(&schema.name), kind)
                .with_doc(schema.doc.clone())
                .with_source_file(Some(source_file.to_path_buf())),
        );
        Ok(())
    }

    fn parse_record(
        &mut self,
        schema: &NamedSchema,
        record: &RecordBody,
        source_file: &Path,
    ) -> TranslateResult<NamedTypeKind> {
        let mut fields = Vec::with_capacity(record.fields.len());
        for field in &record.fields {
            let ctx = Context::within(
                &schema.name.namespace,
                Some(source_file),
                vec![schema.name.name.clone(), field.name.clone()],
            );
            let ty = self.from_data_schema(&field.ty, &ctx)?;
            fields.push(
                FieldIR::new(field.name.clone(), ty)
                    .with_doc(field.doc.clone())
                    .with_optional(field.optional)
                    .with_default(field.default.clone()),
            );
        }
        Ok(NamedTypeKind::Record(RecordIR { fields }))
    }

    /// Translate the typeref target, collapsing a lifted union into it.
    ///
    /// The union entry is removed before the caller registers the typeref,
    /// so the union's identifier never survives translation.
    fn parse_typeref(
        &mut self,
        schema: &NamedSchema,
        typeref: &TyperefBody,
        source_file: &Path,
    ) -> TranslateResult<NamedTypeKind> {
        let ctx = Context::within(
            &schema.name.namespace,
            Some(source_file),
            vec![schema.name.name.clone()],
        );
        let represents = match self.from_data_schema(&typeref.referenced, &ctx)? {
            TypeRef::Primitive(kind) => TyperefTarget::Primitive(kind),
            TypeRef::Array(element) => TyperefTarget::Array(element),
            TypeRef::Map(value) => TyperefTarget::Map(value),
            TypeRef::Reference(id) => match self.registry.take_standalone_union(&id) {
                Some(union) => {
                    tracing::debug!(typeref = %schema.name, inlined = %id, "inlined union into typeref");
                    TyperefTarget::InlineUnion(union.members)
                }
                None => TyperefTarget::Reference(id),
            },
        };
        Ok(NamedTypeKind::Typeref(TyperefIR { represents }))
    }
}

fn parse_enum(body: &EnumBody) -> NamedTypeKind {
    NamedTypeKind::Enum(EnumIR {
        symbols: body.symbols.clone(),
        symbol_docs: body.symbol_docs.clone(),
    })
}

fn parse_fixed(body: &FixedBody) -> NamedTypeKind {
    NamedTypeKind::Fixed(FixedIR { size: body.size })
}
