//! Error types for the log stream reader.

use logstitch_core::DecoderError;

/// Per-record error produced when a completed payload fails to decode.
///
/// The stream continues after one of these; the reader hands the error to
/// the caller and keeps processing lines.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The reassembled payload is not valid base64.
    #[error("reassembled payload is not valid base64: {source}")]
    Base64 {
        #[source]
        source: base64::DecodeError,
    },

    /// The payload bytes do not conform to the injected schema.
    #[error(transparent)]
    Decode(#[from] DecoderError),
}

/// Errors that terminate [`LogReader::for_each_record`](crate::LogReader::for_each_record).
#[derive(Debug, thiserror::Error)]
pub enum LogReaderError {
    /// I/O error while reading the input stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An error returned by the user-supplied callback.
    #[error(transparent)]
    Callback(Box<dyn std::error::Error + Send + Sync>),
}
