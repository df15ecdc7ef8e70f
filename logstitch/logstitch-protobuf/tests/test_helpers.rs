//! Helpers for building protobuf `FileDescriptorSet` bytes in tests.
//!
//! Tests construct descriptor sets programmatically instead of shipping
//! `.proto` fixtures, so no `protoc` is needed at test time.

use prost::Message;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions, OneofDescriptorProto,
    field_descriptor_proto::{Label, Type},
};

fn field(name: &str, number: i32, typ: Type, label: Label) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        r#type: Some(typ.into()),
        label: Some(label.into()),
        ..Default::default()
    }
}

/// Serialize a single-file `FileDescriptorSet` with the given message types.
pub fn descriptor_set(file_name: &str, messages: Vec<DescriptorProto>) -> Vec<u8> {
    descriptor_set_with_enums(file_name, messages, vec![])
}

/// Serialize a single-file `FileDescriptorSet` with messages and top-level
/// enums.
pub fn descriptor_set_with_enums(
    file_name: &str,
    messages: Vec<DescriptorProto>,
    enums: Vec<EnumDescriptorProto>,
) -> Vec<u8> {
    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some(file_name.to_string()),
            message_type: messages,
            enum_type: enums,
            syntax: Some("proto3".to_string()),
            ..Default::default()
        }],
    }
    .encode_to_vec()
}

pub fn scalar(name: &str, number: i32, typ: Type) -> FieldDescriptorProto {
    field(name, number, typ, Label::Optional)
}

pub fn repeated(name: &str, number: i32, typ: Type) -> FieldDescriptorProto {
    field(name, number, typ, Label::Repeated)
}

pub fn message_ref(
    name: &str,
    number: i32,
    type_name: &str,
    label: Label,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, Type::Message, label)
    }
}

pub fn enum_ref(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, Type::Enum, Label::Optional)
    }
}

pub fn enum_type(name: &str, values: &[(&str, i32)]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .map(|(n, num)| EnumValueDescriptorProto {
                name: Some(n.to_string()),
                number: Some(*num),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Protobuf encodes maps as repeated entry messages carrying the
/// `map_entry` option.
pub fn map_entry(name: &str, key_type: Type, value_type: Type) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: vec![scalar("key", 1, key_type), scalar("value", 2, value_type)],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Proto3 optional scalar field. The containing message must declare a
/// matching synthetic oneof at `oneof_index`.
pub fn optional_scalar(
    name: &str,
    number: i32,
    typ: Type,
    oneof_index: i32,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        oneof_index: Some(oneof_index),
        proto3_optional: Some(true),
        ..field(name, number, typ, Label::Optional)
    }
}

pub fn synthetic_oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}
