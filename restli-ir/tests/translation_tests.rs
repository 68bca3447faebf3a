//! Integration tests for restli-ir.
//!
//! These tests drive whole resources through [`TypeParser`] over an
//! in-memory [`SchemaGraph`] and check the resulting registry.

use std::path::Path;

use restli_ir::ir::{ComplexKeyIR, TyperefTarget, UnionMemberIR};
use restli_ir::{
    Config, Identifier, NamedTypeKind, PathKey, PrimitiveKind, Registry, TranslateError,
    TypeParser, TypeRef, UnsupportedSchema,
};
use restli_schema::{
    CollectionSchema, DataSchema, FieldSchema, IdentifierSchema, Name, NamedKind, NamedSchema,
    ResourceSchema, SchemaGraph, UnionMember,
};

const NS: &str = "com.example";

fn id(name: &str) -> Identifier {
    Identifier::new(NS, name)
}

fn named(kind: NamedKind, name: &str) -> DataSchema {
    DataSchema::named(kind, Name::new(NS, name))
}

/// A small catalog of widgets, gadgets and their keys.
fn catalog() -> SchemaGraph {
    let color = NamedSchema::enumeration(Name::new(NS, "Color"), ["RED", "GREEN", "BLUE"]);
    let md5 = NamedSchema::fixed(Name::new(NS, "Md5"), 16);
    let payload = NamedSchema::typeref(
        Name::new(NS, "Payload"),
        DataSchema::Union(vec![
            UnionMember::new(DataSchema::Null),
            UnionMember::aliased("text", DataSchema::String),
            UnionMember::new(named(NamedKind::Fixed, "Md5")),
        ]),
    );
    let widget = NamedSchema::record(
        Name::new(NS, "Widget"),
        vec![
            FieldSchema::new("colors", DataSchema::array(named(NamedKind::Enum, "Color"))),
            FieldSchema::new("hash", named(NamedKind::Fixed, "Md5")),
            FieldSchema::new("payload", named(NamedKind::Typeref, "Payload")),
            FieldSchema::new(
                "size",
                DataSchema::union([DataSchema::Null, DataSchema::Int, DataSchema::String]),
            )
            .with_optional(true),
        ],
    )
    .with_doc("A widget");
    let gadget = NamedSchema::record(
        Name::new(NS, "Gadget"),
        vec![
            FieldSchema::new("primary", named(NamedKind::Enum, "Color")),
            FieldSchema::new("widget", named(NamedKind::Record, "Widget")),
        ],
    );
    let key = NamedSchema::record(
        Name::new(NS, "WidgetKey"),
        vec![FieldSchema::new("serial", DataSchema::String)],
    );
    let params = NamedSchema::record(
        Name::new(NS, "WidgetParams"),
        vec![FieldSchema::new("version", DataSchema::Long)],
    );

    SchemaGraph::new()
        .with_schema(color, "pegasus/com/example/Color.pdl")
        .with_schema(md5, "pegasus/com/example/Md5.pdl")
        .with_schema(payload, "pegasus/com/example/Payload.pdl")
        .with_schema(widget, "pegasus/com/example/Widget.pdl")
        .with_schema(gadget, "pegasus/com/example/Gadget.pdl")
        .with_schema(key, "pegasus/com/example/WidgetKey.pdl")
        .with_schema(params, "pegasus/com/example/WidgetParams.pdl")
}

fn widgets_resource() -> ResourceSchema {
    ResourceSchema::new("widgets")
        .with_namespace(NS)
        .with_schema("com.example.Widget")
        .with_collection(CollectionSchema::new(
            IdentifierSchema::new("widgetId", "com.example.WidgetKey")
                .with_params("com.example.WidgetParams"),
        ))
}

fn run(graph: &SchemaGraph, resource: &ResourceSchema) -> (Registry, Option<PathKey>) {
    let mut parser = TypeParser::new(graph, Config::default());
    let key = parser
        .extract_resource(graph, resource, Some(Path::new("idl/com.example.widgets.restspec.json")))
        .unwrap();
    (parser.into_registry(), key)
}

// =============================================================================
// Resource translation
// =============================================================================

#[test]
fn test_array_of_enum_field() {
    let graph = catalog();
    let (registry, _) = run(&graph, &widgets_resource());

    let NamedTypeKind::Record(widget) = &registry.get(&id("Widget")).unwrap().kind else {
        panic!("Widget should be a record");
    };
    assert_eq!(widget.fields[0].name, "colors");
    assert_eq!(
        widget.fields[0].ty,
        TypeRef::array(TypeRef::Reference(id("Color")))
    );

    let NamedTypeKind::Enum(color) = &registry.get(&id("Color")).unwrap().kind else {
        panic!("Color should be an enum");
    };
    assert_eq!(color.symbols, vec!["RED", "GREEN", "BLUE"]);
}

#[test]
fn test_all_reachable_models_are_registered() {
    let graph = catalog();
    let (registry, _) = run(&graph, &widgets_resource());

    let names: Vec<_> = registry
        .data_types()
        .iter()
        .map(|named| named.identifier.name.clone())
        .collect();
    assert_eq!(
        names,
        vec![
            "Color",
            "Md5",
            "Payload",
            "Widget",
            "WidgetKey",
            "WidgetParams",
            "Widget_Size",
            "Widgets_ComplexKey",
        ]
    );
    assert!(registry.dangling_references().is_empty());

    let widget = registry.get(&id("Widget")).unwrap();
    assert_eq!(widget.doc.as_deref(), Some("A widget"));
    assert_eq!(
        widget.source_file.as_deref(),
        Some(Path::new("pegasus/com/example/Widget.pdl"))
    );
}

#[test]
fn test_complex_key_synthesis() {
    let graph = catalog();
    let (registry, key) = run(&graph, &widgets_resource());

    assert_eq!(
        key,
        Some(PathKey {
            name: "widgetId".to_string(),
            ty: TypeRef::Reference(id("Widgets_ComplexKey")),
        })
    );

    let entry = registry.get(&id("Widgets_ComplexKey")).unwrap();
    assert_eq!(
        entry.kind,
        NamedTypeKind::ComplexKey(ComplexKeyIR {
            key: id("WidgetKey"),
            params: id("WidgetParams"),
        })
    );
    assert_eq!(
        entry.source_file.as_deref(),
        Some(Path::new("idl/com.example.widgets.restspec.json"))
    );
}

#[test]
fn test_primitive_key_with_params_fails() {
    let graph = catalog();
    let resource = ResourceSchema::new("widgets")
        .with_namespace(NS)
        .with_collection(CollectionSchema::new(
            IdentifierSchema::new("widgetId", "long").with_params("com.example.WidgetParams"),
        ));

    let mut parser = TypeParser::new(&graph, Config::default());
    let err = parser.extract_resource(&graph, &resource, None).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Unsupported(UnsupportedSchema::ComplexKeyNotRecord { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Unsupported or malformed schema: Complex key \"key\" must be a record type"
    );
    assert!(!parser.registry().contains(&id("Widgets_ComplexKey")));
}

#[test]
fn test_simple_collection_key() {
    let graph = catalog();
    let resource = ResourceSchema::new("colors")
        .with_namespace(NS)
        .with_collection(CollectionSchema::new(IdentifierSchema::new(
            "colorId",
            "com.example.Color",
        )));
    let (registry, key) = run(&graph, &resource);

    assert_eq!(
        key,
        Some(PathKey {
            name: "colorId".to_string(),
            ty: TypeRef::Reference(id("Color")),
        })
    );
    assert_eq!(registry.len(), 1);
}

// =============================================================================
// Unions
// =============================================================================

#[test]
fn test_typeref_union_is_inlined() {
    let graph = catalog();
    let (registry, _) = run(&graph, &widgets_resource());

    assert!(!registry
        .iter()
        .any(|named| matches!(&named.kind, NamedTypeKind::StandaloneUnion(union) if union.synthetic_name == "Payload")));

    let NamedTypeKind::Typeref(payload) = &registry.get(&id("Payload")).unwrap().kind else {
        panic!("Payload should be a typeref");
    };
    assert_eq!(
        payload.represents,
        TyperefTarget::InlineUnion(vec![
            UnionMemberIR::new("text", TypeRef::Primitive(PrimitiveKind::String)),
            UnionMemberIR::new("com.example.Md5", TypeRef::Reference(id("Md5"))),
        ])
    );
}

#[test]
fn test_union_field_drops_null() {
    let graph = catalog();
    let (registry, _) = run(&graph, &widgets_resource());

    let NamedTypeKind::StandaloneUnion(size) = &registry.get(&id("Widget_Size")).unwrap().kind
    else {
        panic!("Widget_Size should be a standalone union");
    };
    assert_eq!(
        size.members,
        vec![
            UnionMemberIR::new("int", TypeRef::Primitive(PrimitiveKind::Int32)),
            UnionMemberIR::new("string", TypeRef::Primitive(PrimitiveKind::String)),
        ]
    );
}

// =============================================================================
// Registry invariants
// =============================================================================

#[test]
fn test_shared_references_register_once() {
    let graph = catalog();
    let resource = ResourceSchema::new("gadgets")
        .with_namespace(NS)
        .with_schema("com.example.Gadget");

    let mut parser = TypeParser::new(&graph, Config::default());
    parser.extract_data_types(&graph, &resource).unwrap();
    // Color is reached from both Gadget and Widget.
    let colors = parser
        .registry()
        .iter()
        .filter(|named| named.identifier == id("Color"))
        .count();
    assert_eq!(colors, 1);
    assert!(parser.registry().dangling_references().is_empty());
}

#[test]
fn test_reparse_into_shared_registry() {
    let graph = catalog();
    let resource = ResourceSchema::new("gadgets")
        .with_namespace(NS)
        .with_schema("com.example.Gadget");

    let mut first = TypeParser::new(&graph, Config::default());
    first.extract_data_types(&graph, &resource).unwrap();
    let registry = first.into_registry();

    let mut config = Config::default();
    config.translation.skip_visited = false;
    let mut second = TypeParser::with_registry(&graph, registry.clone(), config);
    second.extract_data_types(&graph, &resource).unwrap();

    assert_eq!(second.into_registry(), registry);
}

#[test]
fn test_translation_is_deterministic() {
    let graph = catalog();
    let (first, first_key) = run(&graph, &widgets_resource());
    let (second, second_key) = run(&graph, &widgets_resource());

    assert_eq!(first, second);
    assert_eq!(first_key, second_key);
    assert_eq!(
        serde_json::to_string(&first.data_types()).unwrap(),
        serde_json::to_string(&second.data_types()).unwrap()
    );
}

#[test]
fn test_unknown_root_type_fails() {
    let graph = catalog();
    let resource = ResourceSchema::new("things").with_schema("com.example.Thing");
    let err = TypeParser::new(&graph, Config::default())
        .extract_data_types(&graph, &resource)
        .unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Unsupported(UnsupportedSchema::InlineType(_))
    ));
}
