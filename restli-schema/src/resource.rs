//! Resource descriptions.
//!
//! Only the parts of a resource that carry data types are modeled: the
//! entity value schema and, for collections, the identifier declaration.

/// A resource description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSchema {
    /// Resource name as declared
    pub name: String,

    /// Namespace of the resource
    pub namespace: Option<String>,

    pub doc: Option<String>,

    /// Inline type expression of the entity value, usually a record name
    pub schema: Option<String>,

    /// Present when the resource is a collection
    pub collection: Option<CollectionSchema>,
}

impl ResourceSchema {
    /// Create a resource with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the entity value type expression.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Make this a collection resource.
    pub fn with_collection(mut self, collection: CollectionSchema) -> Self {
        self.collection = Some(collection);
        self
    }
}

/// A collection resource.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSchema {
    pub identifier: IdentifierSchema,
}

impl CollectionSchema {
    /// Create a collection keyed by the given identifier.
    pub fn new(identifier: IdentifierSchema) -> Self {
        Self { identifier }
    }
}

/// The key declaration of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierSchema {
    /// Path key name, e.g. `widgetId`
    pub name: String,

    /// Inline type expression of the key
    pub key_type: String,

    /// Inline type expression of the complex-key params, if any
    pub params: Option<String>,
}

impl IdentifierSchema {
    /// Create a simple key.
    pub fn new(name: impl Into<String>, key_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_type: key_type.into(),
            params: None,
        }
    }

    /// Add a params type, turning the key into a complex key.
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(params.into());
        self
    }
}
