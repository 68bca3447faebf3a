//! In-memory schema graph.
//!
//! [`SchemaGraph`] holds already-decoded named definitions together with
//! the file each came from, and implements both [`SchemaResolver`] and
//! [`ModelCollector`] over them.
//!
//! Inline type expressions are either a bare keyword or full name
//! (`long`, `com.example.WidgetKey`) or a JSON type expression:
//!
//! ```text
//! "com.example.Widget"
//! { "type": "array", "items": "string" }
//! { "type": "map", "values": "com.example.Widget" }
//! [ "null", "int", { "alias": "label", "type": "string" } ]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::name::Name;
use crate::resolver::{DecodeError, ModelCollector, SchemaResolver};
use crate::resource::ResourceSchema;
use crate::schema::{DataSchema, NamedBody, NamedSchema, SchemaType, UnionMember};

/// Named definitions keyed by full name.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    schemas: HashMap<String, NamedSchema>,
    locations: HashMap<String, PathBuf>,
}

impl SchemaGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition loaded from `location`.
    ///
    /// A second definition under the same full name replaces the first.
    pub fn insert(&mut self, schema: NamedSchema, location: impl Into<PathBuf>) {
        let full_name = schema.name.full_name();
        self.locations.insert(full_name.clone(), location.into());
        self.schemas.insert(full_name, schema);
    }

    /// Add a definition with no known source file.
    pub fn insert_unlocated(&mut self, schema: NamedSchema) {
        let full_name = schema.name.full_name();
        self.locations.remove(&full_name);
        self.schemas.insert(full_name, schema);
    }

    /// Builder form of [`SchemaGraph::insert`].
    pub fn with_schema(mut self, schema: NamedSchema, location: impl Into<PathBuf>) -> Self {
        self.insert(schema, location);
        self
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the graph holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    fn decode_value(&self, value: &Value) -> Result<DataSchema, DecodeError> {
        match value {
            Value::String(token) => self.decode_token(token),
            Value::Array(members) => members
                .iter()
                .map(|member| self.decode_member(member))
                .collect::<Result<Vec<_>, _>>()
                .map(DataSchema::Union),
            Value::Object(object) => {
                let ty = object
                    .get("type")
                    .and_then(Value::as_str)
                    .ok_or_else(|| DecodeError::malformed("object without a string \"type\""))?;
                match ty {
                    "array" => {
                        let items = object
                            .get("items")
                            .ok_or_else(|| DecodeError::malformed("array without \"items\""))?;
                        Ok(DataSchema::array(self.decode_value(items)?))
                    }
                    "map" => {
                        let values = object
                            .get("values")
                            .ok_or_else(|| DecodeError::malformed("map without \"values\""))?;
                        Ok(DataSchema::map(self.decode_value(values)?))
                    }
                    "record" | "typeref" | "enum" | "fixed" => Err(DecodeError::malformed(format!(
                        "inline {ty} definitions are not supported"
                    ))),
                    other => self.decode_token(other),
                }
            }
            other => Err(DecodeError::malformed(format!("unexpected JSON value {other}"))),
        }
    }

    fn decode_member(&self, member: &Value) -> Result<UnionMember, DecodeError> {
        if let Value::Object(object) = member {
            if let Some(alias) = object.get("alias") {
                let alias = alias
                    .as_str()
                    .ok_or_else(|| DecodeError::malformed("union alias must be a string"))?;
                let ty = object
                    .get("type")
                    .ok_or_else(|| DecodeError::malformed("aliased member without \"type\""))?;
                return Ok(UnionMember::aliased(alias, self.decode_value(ty)?));
            }
        }
        Ok(UnionMember::new(self.decode_value(member)?))
    }

    fn decode_token(&self, token: &str) -> Result<DataSchema, DecodeError> {
        if let Some(schema) = SchemaType::primitive_from_keyword(token).and_then(DataSchema::primitive)
        {
            return Ok(schema);
        }
        self.schemas
            .get(token)
            .map(NamedSchema::reference)
            .ok_or_else(|| DecodeError::UnknownName {
                name: token.to_string(),
            })
    }

    /// Depth-first walk pushing each named reference the first time it is seen.
    fn collect(&self, schema: &DataSchema, seen: &mut HashSet<String>, out: &mut Vec<DataSchema>) {
        match schema {
            DataSchema::Array(items) => self.collect(items, seen, out),
            DataSchema::Map(values) => self.collect(values, seen, out),
            DataSchema::Union(members) => {
                for member in members {
                    self.collect(&member.ty, seen, out);
                }
            }
            DataSchema::Named(named) => {
                let full_name = named.name.full_name();
                if !seen.insert(full_name.clone()) {
                    return;
                }
                out.push(schema.clone());

                let Some(definition) = self.schemas.get(&full_name) else {
                    return;
                };
                match &definition.body {
                    NamedBody::Record(record) => {
                        for field in &record.fields {
                            self.collect(&field.ty, seen, out);
                        }
                    }
                    NamedBody::Typeref(typeref) => self.collect(&typeref.referenced, seen, out),
                    NamedBody::Enum(_) | NamedBody::Fixed(_) => {}
                }
            }
            _ => {}
        }
    }
}

impl SchemaResolver for SchemaGraph {
    fn resolve(&self, name: &Name) -> Option<&NamedSchema> {
        self.schemas.get(&name.full_name())
    }

    fn location(&self, name: &Name) -> Option<&Path> {
        self.locations.get(&name.full_name()).map(PathBuf::as_path)
    }

    fn decode_inline_type(&self, text: &str) -> Result<DataSchema, DecodeError> {
        let text = text.trim();
        if text.starts_with(['{', '[', '"']) {
            let value: Value = serde_json::from_str(text).map_err(|e| DecodeError::Json {
                text: text.to_string(),
                message: e.to_string(),
            })?;
            self.decode_value(&value)
        } else {
            self.decode_token(text)
        }
    }
}

impl ModelCollector for SchemaGraph {
    fn reachable_models(&self, resource: &ResourceSchema) -> Result<Vec<DataSchema>, DecodeError> {
        let mut roots = Vec::new();
        if let Some(schema) = &resource.schema {
            roots.push(self.decode_inline_type(schema)?);
        }
        if let Some(collection) = &resource.collection {
            roots.push(self.decode_inline_type(&collection.identifier.key_type)?);
            if let Some(params) = &collection.identifier.params {
                roots.push(self.decode_inline_type(params)?);
            }
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for root in &roots {
            self.collect(root, &mut seen, &mut out);
        }
        Ok(out)
    }
}
