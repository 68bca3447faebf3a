//! Resource driver.
//!
//! [`TypeParser`] walks the models reachable from a resource, parses each
//! named definition into the registry, and synthesizes collection keys.

use std::collections::HashSet;
use std::path::Path;

use restli_schema::{
    CollectionSchema, DataSchema, ModelCollector, NamedKind, ResourceSchema, SchemaResolver,
};

use crate::config::Config;
use crate::error::{KeyRole, TranslateError, TranslateResult, UnsupportedSchema};
use crate::ir::{ComplexKeyIR, Identifier, NamedTypeIR, NamedTypeKind, PathKey, TypeRef};
use crate::registry::Registry;
use crate::translator::{naming, Context, Translator};

/// Translates resources into registry entries.
pub struct TypeParser<'a, R: SchemaResolver + ?Sized> {
    resolver: &'a R,
    registry: Registry,
    config: Config,
    visited: HashSet<Identifier>,
}

impl<'a, R: SchemaResolver + ?Sized> TypeParser<'a, R> {
    /// Create a parser with an empty registry.
    pub fn new(resolver: &'a R, config: Config) -> Self {
        Self::with_registry(resolver, Registry::new(), config)
    }

    /// Create a parser that keeps adding to `registry`.
    pub fn with_registry(resolver: &'a R, registry: Registry, config: Config) -> Self {
        Self {
            resolver,
            registry,
            config,
            visited: HashSet::new(),
        }
    }

    /// Parse every named model reachable from `resource`.
    ///
    /// Reachable models that are not named types are logged and skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(resource = %resource.name))]
    pub fn extract_data_types<C: ModelCollector + ?Sized>(
        &mut self,
        collector: &C,
        resource: &ResourceSchema,
    ) -> TranslateResult<()> {
        let resolver = self.resolver;
        let models = collector
            .reachable_models(resource)
            .map_err(UnsupportedSchema::InlineType)?;
        tracing::debug!(count = models.len(), "collected reachable models");

        for model in &models {
            let DataSchema::Named(named) = model else {
                tracing::warn!(kind = %model.schema_type(), "skipping unsupported top-level model");
                continue;
            };

            let full_name = named.name.full_name();
            let source_file = resolver
                .location(&named.name)
                .ok_or_else(|| TranslateError::UnresolvableLocation {
                    name: full_name.clone(),
                })?;

            let identifier = Identifier::from(&named.name);
            if self.config.translation.skip_visited && self.visited.contains(&identifier) {
                tracing::trace!(identifier = %identifier, "already parsed");
                continue;
            }

            let schema = resolver
                .resolve(&named.name)
                .ok_or(UnsupportedSchema::MissingSchema { name: full_name })?;
            Translator::new(&mut self.registry).parse_named(schema, source_file)?;
            self.visited.insert(identifier);
        }
        Ok(())
    }

    /// Decode an inline type expression and translate it without context.
    pub fn parse_from_rest_spec(&mut self, text: &str) -> TranslateResult<TypeRef> {
        let schema = self
            .resolver
            .decode_inline_type(text)
            .map_err(UnsupportedSchema::InlineType)?;
        Translator::new(&mut self.registry).from_data_schema(&schema, &Context::root())
    }

    /// Resolve the path key of a collection.
    ///
    /// A key with params becomes a complex key registered under
    /// `{namespace, <Resource>_<suffix>}`; both halves must be records.
    #[tracing::instrument(level = "debug", skip(self, collection, spec_file))]
    pub fn collection_path_key(
        &mut self,
        resource_name: &str,
        namespace: &str,
        collection: &CollectionSchema,
        spec_file: Option<&Path>,
    ) -> TranslateResult<PathKey> {
        let identifier = &collection.identifier;
        let Some(params) = &identifier.params else {
            return Ok(PathKey {
                name: identifier.name.clone(),
                ty: self.parse_from_rest_spec(&identifier.key_type)?,
            });
        };

        let key = self.parse_record_reference(&identifier.key_type, KeyRole::Key)?;
        let params = self.parse_record_reference(params, KeyRole::Params)?;

        let complex_key = Identifier::new(
            namespace,
            naming::complex_key_name(resource_name, &self.config.naming.complex_key_suffix),
        );
        self.registry.register(
            NamedTypeIR::new(
                complex_key.clone(),
                NamedTypeKind::ComplexKey(ComplexKeyIR { key, params }),
            )
            .with_source_file(spec_file.map(Path::to_path_buf)),
        );

        Ok(PathKey {
            name: identifier.name.clone(),
            ty: TypeRef::Reference(complex_key),
        })
    }

    /// Parse the data types of `resource` and, for a collection, its path key.
    pub fn extract_resource<C: ModelCollector + ?Sized>(
        &mut self,
        collector: &C,
        resource: &ResourceSchema,
        spec_file: Option<&Path>,
    ) -> TranslateResult<Option<PathKey>> {
        self.extract_data_types(collector, resource)?;
        match &resource.collection {
            Some(collection) => {
                let namespace = resource.namespace.as_deref().unwrap_or_default();
                self.collection_path_key(&resource.name, namespace, collection, spec_file)
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    /// The registry built so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the parser, returning its registry.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Registered entries ordered by identifier.
    pub fn data_types(&self) -> Vec<&NamedTypeIR> {
        self.registry.data_types()
    }

    fn parse_record_reference(&mut self, text: &str, role: KeyRole) -> TranslateResult<Identifier> {
        let schema = self
            .resolver
            .decode_inline_type(text)
            .map_err(UnsupportedSchema::InlineType)?;
        match &schema {
            DataSchema::Named(named) if named.kind == NamedKind::Record => {
                Ok(Identifier::from(&named.name))
            }
            _ => Err(UnsupportedSchema::ComplexKeyNotRecord { role }.into()),
        }
    }
}
