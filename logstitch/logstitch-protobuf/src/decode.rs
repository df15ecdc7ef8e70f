//! Convert protobuf wire bytes into the intermediate [`Value`]
//! representation used by logstitch-core.

use std::sync::Arc;

use logstitch_core::{DecoderError, Value};
use prost_reflect::{
    DynamicMessage, EnumDescriptor, Kind, MapKey, MessageDescriptor, Value as ProtoValue,
};

use crate::schema::parse_message_descriptor;

/// Decode a payload using an already-resolved [`MessageDescriptor`].
///
/// Both the standalone [`decode_protobuf_to_value`] and
/// [`ProtobufRecordDecoder`](crate::ProtobufRecordDecoder) converge here;
/// the decoder passes a cached descriptor so that `FileDescriptorSet`
/// parsing is not repeated on every record.
pub(crate) fn decode_from_descriptor(
    schema_name: &str,
    desc: &MessageDescriptor,
    payload: &[u8],
) -> Result<Value, DecoderError> {
    let msg = DynamicMessage::decode(desc.clone(), payload).map_err(|e| {
        DecoderError::RecordDecode {
            schema_name: schema_name.to_string(),
            source: Box::new(e),
        }
    })?;
    Ok(message_value(&msg, desc))
}

/// Decode a serialized protobuf message into a [`Value`].
///
/// `schema_name` is the fully-qualified protobuf message name.
/// `schema_data` must be a valid serialized
/// `google.protobuf.FileDescriptorSet`.  `payload` is the wire-format
/// encoded protobuf message.
pub fn decode_protobuf_to_value(
    schema_name: &str,
    schema_data: &[u8],
    payload: &[u8],
) -> Result<Value, DecoderError> {
    let desc = parse_message_descriptor(schema_name, schema_data)?;
    decode_from_descriptor(schema_name, &desc, payload)
}

fn message_value(msg: &DynamicMessage, desc: &MessageDescriptor) -> Value {
    let mut members = Vec::new();
    for fd in desc.fields() {
        // Unset presence-tracked fields become Null instead of the
        // proto3 default.
        if fd.supports_presence() && !msg.has_field(&fd) {
            members.push(Value::Null);
            continue;
        }
        members.push(value_from_proto(msg.get_field(&fd).as_ref(), &fd.kind()));
    }
    Value::Struct(members)
}

fn value_from_proto(proto: &ProtoValue, kind: &Kind) -> Value {
    match proto {
        ProtoValue::Bool(v) => Value::Bool(*v),
        ProtoValue::I32(v) => Value::I32(*v),
        ProtoValue::I64(v) => Value::I64(*v),
        ProtoValue::U32(v) => Value::U32(*v),
        ProtoValue::U64(v) => Value::U64(*v),
        ProtoValue::F32(v) => Value::F32(*v),
        ProtoValue::F64(v) => Value::F64(*v),
        ProtoValue::String(s) => Value::string(s),
        ProtoValue::Bytes(b) => Value::Bytes(Arc::from(b.as_ref())),
        ProtoValue::EnumNumber(n) => {
            let Kind::Enum(ed) = kind else {
                panic!("enum number {n} paired with kind {kind:?}")
            };
            enum_name_value(*n, ed)
        }
        ProtoValue::Message(m) => {
            let Kind::Message(md) = kind else {
                panic!("message value paired with kind {kind:?}")
            };
            message_value(m, md)
        }
        ProtoValue::List(items) => {
            Value::List(items.iter().map(|v| value_from_proto(v, kind)).collect())
        }
        ProtoValue::Map(map) => {
            let value_kind = match kind {
                Kind::Message(entry) if entry.is_map_entry() => entry.map_entry_value_field().kind(),
                _ => kind.clone(),
            };
            Value::Map(
                map.iter()
                    .map(|(k, v)| (key_value(k), value_from_proto(v, &value_kind)))
                    .collect(),
            )
        }
    }
}

fn enum_name_value(n: i32, ed: &EnumDescriptor) -> Value {
    // Unknown enum numbers keep their numeric text.
    match ed.get_value(n) {
        Some(v) => Value::string(v.name()),
        None => Value::string(n.to_string()),
    }
}

fn key_value(k: &MapKey) -> Value {
    match k {
        MapKey::Bool(v) => Value::Bool(*v),
        MapKey::I32(v) => Value::I32(*v),
        MapKey::I64(v) => Value::I64(*v),
        MapKey::U32(v) => Value::U32(*v),
        MapKey::U64(v) => Value::U64(*v),
        MapKey::String(s) => Value::string(s),
    }
}
