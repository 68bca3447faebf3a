//! Property-based tests for restli-ir.
//!
//! Properties tested:
//! - Synthesized union names follow the segment naming rule
//! - Null members are dropped and the rest keep their order
//! - Translating the same resource twice gives the same registry

use proptest::prelude::*;

use restli_ir::ir::UnionMemberIR;
use restli_ir::translator::naming::{exported_identifier, union_name};
use restli_ir::{Config, Identifier, NamedTypeKind, PrimitiveKind, TypeParser, TypeRef};
use restli_schema::{
    DataSchema, FieldSchema, Name, NamedKind, NamedSchema, ResourceSchema, SchemaGraph,
};

// =============================================================================
// Generators for property tests
// =============================================================================

/// Generate an IDL field or type name.
fn arb_segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,12}"
}

/// Generate a primitive or null union member.
fn arb_member() -> impl Strategy<Value = DataSchema> {
    prop_oneof![
        Just(DataSchema::Null),
        Just(DataSchema::Boolean),
        Just(DataSchema::Int),
        Just(DataSchema::Long),
        Just(DataSchema::Float),
        Just(DataSchema::Double),
        Just(DataSchema::String),
        Just(DataSchema::Bytes),
    ]
}

fn primitive(schema: &DataSchema) -> Option<PrimitiveKind> {
    PrimitiveKind::from_schema_type(schema.schema_type())
}

/// A record `Holder` with one union field, plus `Item` records chained by
/// `next` fields and referenced from the holder.
fn graph(field: &str, members: &[DataSchema], chain: usize) -> SchemaGraph {
    let mut graph = SchemaGraph::new();
    for i in 0..chain {
        let mut fields = vec![FieldSchema::new("label", DataSchema::String)];
        if i + 1 < chain {
            fields.push(FieldSchema::new(
                "next",
                DataSchema::named(NamedKind::Record, Name::new("test", format!("Item{}", i + 1))),
            ));
        }
        graph.insert(
            NamedSchema::record(Name::new("test", format!("Item{}", i)), fields),
            format!("schemas/Item{}.pdl", i),
        );
    }

    let mut fields = vec![FieldSchema::new(field, DataSchema::union(members.iter().cloned()))];
    if chain > 0 {
        fields.push(FieldSchema::new(
            "first",
            DataSchema::named(NamedKind::Record, Name::new("test", "Item0")),
        ));
    }
    graph.insert(
        NamedSchema::record(Name::new("test", "Holder"), fields),
        "schemas/Holder.pdl",
    );
    graph
}

// =============================================================================
// Property: Synthesized naming
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_union_name_exports_each_segment(segments in prop::collection::vec(arb_segment(), 1..5)) {
        let name = union_name(&segments);
        let parts: Vec<_> = name.split('_').collect();

        prop_assert_eq!(parts.len(), segments.len());
        for (part, segment) in parts.iter().zip(&segments) {
            prop_assert_eq!(part.to_string(), exported_identifier(segment));
            prop_assert!(part.starts_with(|c: char| c.is_ascii_uppercase()));
            prop_assert_eq!(&part[1..], &segment[1..]);
        }
    }
}

// =============================================================================
// Property: Null elision
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_null_members_are_dropped_in_order(
        field in arb_segment(),
        members in prop::collection::vec(arb_member(), 1..8),
    ) {
        let graph = graph(&field, &members, 0);
        let resource = ResourceSchema::new("holders").with_schema("test.Holder");
        let mut parser = TypeParser::new(&graph, Config::default());
        parser.extract_data_types(&graph, &resource).unwrap();

        let union_id = Identifier::new("test", format!("Holder_{}", exported_identifier(&field)));
        let Some(NamedTypeKind::StandaloneUnion(union)) =
            parser.registry().get(&union_id).map(|named| &named.kind)
        else {
            panic!("expected a standalone union under {union_id}");
        };

        let expected: Vec<_> = members
            .iter()
            .filter_map(|member| {
                primitive(member).map(|kind| {
                    UnionMemberIR::new(member.union_member_key(), TypeRef::Primitive(kind))
                })
            })
            .collect();
        prop_assert_eq!(&union.members, &expected);
    }
}

// =============================================================================
// Property: Idempotence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_translation_is_idempotent(
        field in arb_segment(),
        members in prop::collection::vec(arb_member(), 1..6),
        chain in 0usize..6,
    ) {
        let graph = graph(&field, &members, chain);
        let resource = ResourceSchema::new("holders").with_schema("test.Holder");

        let mut first = TypeParser::new(&graph, Config::default());
        first.extract_data_types(&graph, &resource).unwrap();
        first.extract_data_types(&graph, &resource).unwrap();

        let mut second = TypeParser::new(&graph, Config::default());
        second.extract_data_types(&graph, &resource).unwrap();

        prop_assert_eq!(first.registry(), second.registry());
        prop_assert_eq!(first.registry().len(), chain + 2);
        prop_assert!(first.registry().dangling_references().is_empty());
    }
}
