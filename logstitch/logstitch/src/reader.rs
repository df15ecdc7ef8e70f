//! Line stream reader driving fragment reassembly and record decoding.

use std::io::BufRead;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use logstitch_core::{DecodedRecord, FragmentAssembler, LineMatcher, RecordDecoder};
use tracing::{debug, trace};

use crate::error::{LogReaderError, RecordError};

/// Reads a logcat-style line stream and emits one [`DecodedRecord`] per
/// completed multi-part message.
pub struct LogReader<D> {
    matcher: LineMatcher,
    decoder: D,
}

impl<D: RecordDecoder> LogReader<D> {
    pub fn new(matcher: LineMatcher, decoder: D) -> Self {
        Self { matcher, decoder }
    }

    /// The injected record decoder, for schema inspection.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Consume lines until end of stream.
    ///
    /// Matching lines feed the fragment assembler; every completed payload
    /// is base64-decoded, decoded against the injected schema, and handed
    /// to `callback` as a `Result<DecodedRecord, RecordError>`. A failed
    /// record does not stop the stream; only I/O errors and callback
    /// errors do. Non-matching lines and incomplete accumulations produce
    /// no output.
    pub fn for_each_record(
        &self,
        input: impl BufRead,
        mut callback: impl FnMut(
            Result<DecodedRecord, RecordError>,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>,
    ) -> Result<(), LogReaderError> {
        // The single in-flight accumulation, scoped to this invocation.
        let mut assembler = FragmentAssembler::new();

        for line in input.lines() {
            let line = line?;
            let Some(parts) = self.matcher.parse(&line) else {
                trace!("skipping non-matching line");
                continue;
            };
            if parts.part_index == 1 && !assembler.is_empty() {
                debug!(
                    timestamp = parts.timestamp,
                    "new message discards incomplete accumulation"
                );
            }
            let Some(payload) =
                assembler.accumulate(parts.part_index, parts.part_count, parts.fragment)
            else {
                continue;
            };
            let result = self.decode_payload(&payload, parts.timestamp);
            callback(result).map_err(LogReaderError::Callback)?;
        }

        Ok(())
    }

    fn decode_payload(
        &self,
        payload: &str,
        timestamp: &str,
    ) -> Result<DecodedRecord, RecordError> {
        let bytes = STANDARD
            .decode(payload)
            .map_err(|source| RecordError::Base64 { source })?;
        let value = self.decoder.decode(&bytes)?;
        Ok(DecodedRecord {
            timestamp: timestamp.to_string(),
            schema_name: self.decoder.schema_name().to_string(),
            value,
        })
    }
}
