//! # restli-ir
//!
//! Translation of Rest.li data schemas into a flat, language-neutral
//! intermediate representation.
//!
//! Given a resource and a [`restli_schema::SchemaResolver`], the
//! [`TypeParser`] collects every named model the resource reaches and turns
//! each into a [`NamedTypeIR`] in a [`Registry`]. Anonymous unions are
//! lifted into standalone entries under synthesized names, and collection
//! keys with params become complex-key entries.
//!
//! ## Architecture
//!
//! - [`ir`] - Identifiers, type references and named type definitions
//! - [`registry`] - The owning map of named types
//! - [`translator`] - Schema node translation and per-kind parsers
//! - [`driver`] - Resource-level entry points
//! - [`config`] - Configuration management and TOML parsing
//! - [`error`] - Error types and handling
//!
//! ## Example
//!
//! ```
//! use restli_ir::{Config, TypeParser};
//! use restli_schema::{DataSchema, FieldSchema, Name, NamedSchema, ResourceSchema, SchemaGraph};
//!
//! let widget = NamedSchema::record(
//!     Name::parse("com.example.Widget"),
//!     vec![FieldSchema::new("id", DataSchema::Long)],
//! );
//! let graph = SchemaGraph::new().with_schema(widget, "schemas/Widget.pdl");
//! let resource = ResourceSchema::new("widget").with_schema("com.example.Widget");
//!
//! let mut parser = TypeParser::new(&graph, Config::default());
//! parser.extract_data_types(&graph, &resource).unwrap();
//! assert_eq!(parser.data_types().len(), 1);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod ir;
pub mod registry;
pub mod translator;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use driver::TypeParser;
pub use error::{ConfigError, KeyRole, TranslateError, TranslateResult, UnsupportedSchema};
pub use ir::{Identifier, NamedTypeIR, NamedTypeKind, PathKey, PrimitiveKind, TypeRef};
pub use registry::Registry;
pub use translator::{Context, Translator};
