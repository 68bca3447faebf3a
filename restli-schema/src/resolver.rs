//! Collaborator interfaces.
//!
//! Resolution, import handling and IDL decoding happen outside the
//! translator. It only sees them through these traits.

use std::path::Path;

use thiserror::Error;

use crate::name::Name;
use crate::resource::ResourceSchema;
use crate::schema::{DataSchema, NamedSchema};

/// Error decoding an inline type expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The expression is not valid JSON.
    #[error("Invalid type expression '{text}': {message}")]
    Json { text: String, message: String },

    /// The expression names a type the resolver does not know.
    #[error("Unknown type name '{name}'")]
    UnknownName { name: String },

    /// The expression is JSON but not a type.
    #[error("Malformed type expression: {message}")]
    Malformed { message: String },
}

impl DecodeError {
    /// Create a malformed-expression error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Resolves named schemas and decodes inline type expressions.
pub trait SchemaResolver {
    /// The definition registered under `name`.
    fn resolve(&self, name: &Name) -> Option<&NamedSchema>;

    /// The source file `name` was loaded from.
    fn location(&self, name: &Name) -> Option<&Path>;

    /// Decode a raw type expression, such as a collection key type.
    fn decode_inline_type(&self, text: &str) -> Result<DataSchema, DecodeError>;
}

/// Produces the reachable model set of a resource.
pub trait ModelCollector {
    /// Every schema transitively referenced by `resource`, ordered and
    /// deduplicated by full name.
    fn reachable_models(&self, resource: &ResourceSchema) -> Result<Vec<DataSchema>, DecodeError>;
}
