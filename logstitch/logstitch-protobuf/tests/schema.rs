mod test_helpers;

use logstitch_core::{DecoderError, FieldType};
use logstitch_protobuf::protobuf_descriptor_to_schema;
use prost_types::{
    DescriptorProto,
    field_descriptor_proto::{Label, Type},
};
use test_helpers::*;

#[test]
fn scalar_fields() {
    let msg = DescriptorProto {
        name: Some("LogEvent".to_string()),
        field: vec![
            scalar("f_double", 1, Type::Double),
            scalar("f_float", 2, Type::Float),
            scalar("f_int32", 3, Type::Int32),
            scalar("f_int64", 4, Type::Int64),
            scalar("f_uint32", 5, Type::Uint32),
            scalar("f_uint64", 6, Type::Uint64),
            scalar("f_sint32", 7, Type::Sint32),
            scalar("f_sint64", 8, Type::Sint64),
            scalar("f_fixed32", 9, Type::Fixed32),
            scalar("f_fixed64", 10, Type::Fixed64),
            scalar("f_sfixed32", 11, Type::Sfixed32),
            scalar("f_sfixed64", 12, Type::Sfixed64),
            scalar("f_bool", 13, Type::Bool),
            scalar("f_string", 14, Type::String),
            scalar("f_bytes", 15, Type::Bytes),
        ],
        ..Default::default()
    };
    let fds = descriptor_set("log_event.proto", vec![msg]);
    let schema = protobuf_descriptor_to_schema("LogEvent", &fds).unwrap();

    let expected = vec![
        ("f_double", FieldType::F64),
        ("f_float", FieldType::F32),
        ("f_int32", FieldType::I32),
        ("f_int64", FieldType::I64),
        ("f_uint32", FieldType::U32),
        ("f_uint64", FieldType::U64),
        ("f_sint32", FieldType::I32),
        ("f_sint64", FieldType::I64),
        ("f_fixed32", FieldType::U32),
        ("f_fixed64", FieldType::U64),
        ("f_sfixed32", FieldType::I32),
        ("f_sfixed64", FieldType::I64),
        ("f_bool", FieldType::Bool),
        ("f_string", FieldType::String),
        ("f_bytes", FieldType::Bytes),
    ];

    assert_eq!(schema.len(), expected.len());
    for (field, (name, ty)) in schema.iter().zip(expected.iter()) {
        assert_eq!(field.name, *name);
        assert_eq!(field.ty, *ty);
        assert!(!field.nullable);
    }
}

#[test]
fn repeated_field_becomes_list() {
    let msg = DescriptorProto {
        name: Some("Histogram".to_string()),
        field: vec![repeated("counts", 1, Type::Int32)],
        ..Default::default()
    };
    let fds = descriptor_set("histogram.proto", vec![msg]);
    let schema = protobuf_descriptor_to_schema("Histogram", &fds).unwrap();

    assert_eq!(schema.len(), 1);
    let field = &schema[0];
    assert_eq!(field.name, "counts");
    assert_eq!(field.ty, FieldType::List(Box::new(FieldType::I32)));
}

#[test]
fn nested_message_becomes_struct() {
    let inner = DescriptorProto {
        name: Some("Histogram".to_string()),
        field: vec![scalar("instrument_id", 1, Type::Int32)],
        ..Default::default()
    };
    let outer = DescriptorProto {
        name: Some("LogEvent".to_string()),
        field: vec![message_ref("histogram", 1, ".Histogram", Label::Optional)],
        ..Default::default()
    };
    let fds = descriptor_set("nested.proto", vec![inner, outer]);
    let schema = protobuf_descriptor_to_schema("LogEvent", &fds).unwrap();

    assert_eq!(schema.len(), 1);
    let field = &schema[0];
    assert_eq!(field.name, "histogram");
    // Message fields always support presence.
    assert!(field.nullable);
    let FieldType::Struct(inner_schema) = &field.ty else {
        panic!("expected Struct, got {:?}", field.ty);
    };
    assert_eq!(inner_schema.len(), 1);
    assert_eq!(inner_schema[0].name, "instrument_id");
}

#[test]
fn enum_field_becomes_string() {
    let level_enum = enum_type("Level", &[("LOW", 0), ("HIGH", 1)]);
    let msg = DescriptorProto {
        name: Some("WithEnum".to_string()),
        field: vec![enum_ref("level", 1, ".Level")],
        ..Default::default()
    };
    let fds = descriptor_set_with_enums("enum.proto", vec![msg], vec![level_enum]);
    let schema = protobuf_descriptor_to_schema("WithEnum", &fds).unwrap();

    assert_eq!(schema[0].ty, FieldType::String);
}

#[test]
fn map_field_becomes_map() {
    let entry = map_entry("AnnotationsEntry", Type::String, Type::Uint64);
    let msg = DescriptorProto {
        name: Some("WithMap".to_string()),
        field: vec![message_ref(
            "annotations",
            1,
            ".WithMap.AnnotationsEntry",
            Label::Repeated,
        )],
        nested_type: vec![entry],
        ..Default::default()
    };
    let fds = descriptor_set("map.proto", vec![msg]);
    let schema = protobuf_descriptor_to_schema("WithMap", &fds).unwrap();

    assert_eq!(
        schema[0].ty,
        FieldType::Map {
            key: Box::new(FieldType::String),
            value: Box::new(FieldType::U64),
        }
    );
}

#[test]
fn proto3_optional_field_is_nullable() {
    let msg = DescriptorProto {
        name: Some("WithOptional".to_string()),
        field: vec![optional_scalar("count", 1, Type::Int32, 0)],
        oneof_decl: vec![synthetic_oneof("_count")],
        ..Default::default()
    };
    let fds = descriptor_set("optional.proto", vec![msg]);
    let schema = protobuf_descriptor_to_schema("WithOptional", &fds).unwrap();

    assert!(schema[0].nullable);
}

#[test]
fn unknown_message_returns_error() {
    let msg = DescriptorProto {
        name: Some("Exists".to_string()),
        field: vec![scalar("x", 1, Type::Int32)],
        ..Default::default()
    };
    let fds = descriptor_set("test.proto", vec![msg]);
    let err = protobuf_descriptor_to_schema("Missing", &fds).unwrap_err();
    assert!(matches!(err, DecoderError::SchemaInvalid { .. }));
}

#[test]
fn invalid_descriptor_bytes_return_error() {
    let err = protobuf_descriptor_to_schema("Foo", &[0xff, 0xff]).unwrap_err();
    assert!(matches!(err, DecoderError::SchemaParse { .. }));
}
