//! Protobuf [`RecordDecoder`] implementation for the logstitch pipeline.
//!
//! This crate provides [`ProtobufRecordDecoder`], which decodes
//! protobuf-encoded payloads into the intermediate [`Value`] representation
//! used by logstitch-core.  It also re-exports the lower-level helpers
//! [`decode_protobuf_to_value`] and [`protobuf_descriptor_to_schema`] for
//! direct use.

mod decode;
mod schema;

use logstitch_core::{DecoderError, RecordDecoder, Schema, Value};
use prost_reflect::MessageDescriptor;

pub use decode::decode_protobuf_to_value;
pub use schema::protobuf_descriptor_to_schema;

/// Decoder that converts protobuf-encoded payloads into [`Value`] via the
/// [`RecordDecoder`] trait.
///
/// The message descriptor is resolved once at construction so that
/// `FileDescriptorSet` parsing is not repeated on every record.
pub struct ProtobufRecordDecoder {
    desc: MessageDescriptor,
    schema: Schema,
}

impl ProtobufRecordDecoder {
    /// Build a decoder for the given fully-qualified message name from
    /// serialized `google.protobuf.FileDescriptorSet` bytes.
    pub fn new(schema_name: &str, schema_data: &[u8]) -> Result<Self, DecoderError> {
        let desc = schema::parse_message_descriptor(schema_name, schema_data)?;
        let schema = schema::message_to_schema(schema_name, &desc)?;
        Ok(Self { desc, schema })
    }
}

impl RecordDecoder for ProtobufRecordDecoder {
    fn decode(&self, payload: &[u8]) -> Result<Value, DecoderError> {
        decode::decode_from_descriptor(self.desc.full_name(), &self.desc, payload)
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn schema_name(&self) -> &str {
        self.desc.full_name()
    }
}
