//! Derive a record [`Schema`] from a protobuf `FileDescriptorSet`.

use logstitch_core::{DecoderError, FieldDef, FieldType, Schema};
use prost_reflect::{DescriptorPool, FieldDescriptor, Kind, MessageDescriptor};

/// Resolve the message descriptor for `schema_name` from serialized
/// `google.protobuf.FileDescriptorSet` bytes.
pub(crate) fn parse_message_descriptor(
    schema_name: &str,
    schema_data: &[u8],
) -> Result<MessageDescriptor, DecoderError> {
    let pool = DescriptorPool::decode(schema_data).map_err(|e| DecoderError::SchemaParse {
        schema_name: schema_name.to_string(),
        source: Box::new(e),
    })?;
    pool.get_message_by_name(schema_name)
        .ok_or_else(|| DecoderError::SchemaInvalid {
            schema_name: schema_name.to_string(),
            detail: format!("message descriptor not found: '{schema_name}'"),
        })
}

/// Derive a record [`Schema`] from the given protobuf `FileDescriptorSet`
/// bytes.
///
/// `schema_name` is the fully-qualified protobuf message name
/// (e.g. `"com.google.tuningfork.TuningForkLogEvent"`).
pub fn protobuf_descriptor_to_schema(
    schema_name: &str,
    schema_data: &[u8],
) -> Result<Schema, DecoderError> {
    let desc = parse_message_descriptor(schema_name, schema_data)?;
    message_to_schema(schema_name, &desc)
}

pub(crate) fn message_to_schema(
    schema_name: &str,
    desc: &MessageDescriptor,
) -> Result<Schema, DecoderError> {
    desc.fields()
        .map(|fd| field_to_def(schema_name, &fd))
        .collect()
}

fn field_to_def(schema_name: &str, fd: &FieldDescriptor) -> Result<FieldDef, DecoderError> {
    // Check maps before lists: map fields are repeated on the wire.
    let ty = if fd.is_map() {
        let Kind::Message(entry) = fd.kind() else {
            return Err(DecoderError::SchemaInvalid {
                schema_name: schema_name.to_string(),
                detail: format!("map field `{}` has non-message kind: {:?}", fd.name(), fd.kind()),
            });
        };
        let missing = |part: &str| DecoderError::SchemaInvalid {
            schema_name: schema_name.to_string(),
            detail: format!("map entry `{}` missing {part} field", fd.name()),
        };
        let key = entry.get_field_by_name("key").ok_or_else(|| missing("key"))?;
        let value = entry
            .get_field_by_name("value")
            .ok_or_else(|| missing("value"))?;
        FieldType::Map {
            key: Box::new(field_type(schema_name, &key)?),
            value: Box::new(field_type(schema_name, &value)?),
        }
    } else if fd.is_list() {
        FieldType::List(Box::new(field_type(schema_name, fd)?))
    } else {
        field_type(schema_name, fd)?
    };

    Ok(FieldDef::new(fd.name(), ty, fd.supports_presence()))
}

fn field_type(schema_name: &str, fd: &FieldDescriptor) -> Result<FieldType, DecoderError> {
    let ty = match fd.kind() {
        Kind::Double => FieldType::F64,
        Kind::Float => FieldType::F32,
        Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => FieldType::I32,
        Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => FieldType::I64,
        Kind::Uint32 | Kind::Fixed32 => FieldType::U32,
        Kind::Uint64 | Kind::Fixed64 => FieldType::U64,
        Kind::Bool => FieldType::Bool,
        Kind::String => FieldType::String,
        Kind::Bytes => FieldType::Bytes,
        // Enums decode to their value names.
        Kind::Enum(_) => FieldType::String,
        Kind::Message(desc) => FieldType::Struct(message_to_schema(schema_name, &desc)?),
    };
    Ok(ty)
}
