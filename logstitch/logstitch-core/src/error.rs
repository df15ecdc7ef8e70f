//! Error types for the decoder layer.

/// Error returned by [`RecordDecoder`](crate::RecordDecoder) implementations.
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    /// Schema data (e.g., a serialized `FileDescriptorSet`) could not be parsed.
    #[error("failed to parse schema '{schema_name}': {source}")]
    SchemaParse {
        schema_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema data is structurally invalid (e.g., missing descriptor, broken map fields).
    #[error("invalid schema '{schema_name}': {detail}")]
    SchemaInvalid { schema_name: String, detail: String },

    /// Payload bytes do not conform to the schema's wire format.
    #[error("failed to decode record for schema '{schema_name}': {source}")]
    RecordDecode {
        schema_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
