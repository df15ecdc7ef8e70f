//! Decoder trait used to inject an externally defined record schema.

use crate::{error::DecoderError, schema::Schema, value::Value};

/// Decodes reassembled payload bytes against an externally supplied schema.
///
/// Implementations resolve their schema once at construction time and are
/// reused for every record in the stream. The schema itself is an external
/// contract; this crate never defines one.
pub trait RecordDecoder {
    /// Decode one payload into a [`Value`].
    ///
    /// Returns `Err` if the bytes do not conform to the schema's wire
    /// format.
    fn decode(&self, payload: &[u8]) -> Result<Value, DecoderError>;

    /// Schema of decoded values, for rendering and inspection.
    fn schema(&self) -> &Schema;

    /// Fully-qualified name of the record schema.
    fn schema_name(&self) -> &str;
}
