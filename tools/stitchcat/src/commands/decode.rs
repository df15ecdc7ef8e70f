use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Args;
use logstitch::{
    LogReader,
    core::{LineMatcher, RecordDecoder, format_record},
};
use logstitch_protobuf::ProtobufRecordDecoder;
use tracing::warn;

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to a logcat capture (stdin if not specified)
    input: Option<PathBuf>,

    /// Path to a serialized FileDescriptorSet (protoc --descriptor_set_out)
    #[arg(short, long)]
    descriptor: PathBuf,

    /// Fully-qualified protobuf message name of the log record
    #[arg(short, long)]
    message: String,

    /// Log tag the records are emitted under
    #[arg(long, default_value = LineMatcher::DEFAULT_TAG)]
    tag: String,

    /// Fragment marker inside the tagged lines
    #[arg(long, default_value = LineMatcher::DEFAULT_MARKER)]
    marker: String,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let schema_data = fs::read(&self.descriptor)
            .with_context(|| format!("reading descriptor set {}", self.descriptor.display()))?;
        let decoder = ProtobufRecordDecoder::new(&self.message, &schema_data)?;
        let matcher = LineMatcher::new(&self.tag, &self.marker)?;
        let reader = LogReader::new(matcher, decoder);

        let failed = match self.input {
            Some(path) => {
                let file = fs::File::open(&path)
                    .with_context(|| format!("opening {}", path.display()))?;
                decode_stream(&reader, BufReader::new(file))?
            }
            None => decode_stream(&reader, io::stdin().lock())?,
        };

        if failed > 0 {
            eprintln!("{failed} record(s) failed to decode");
        }
        Ok(())
    }
}

/// Print every decoded record; count failed records instead of aborting.
fn decode_stream<D: RecordDecoder>(reader: &LogReader<D>, input: impl BufRead) -> Result<u64> {
    let mut failed = 0u64;
    reader.for_each_record(input, |result| {
        match result {
            Ok(record) => {
                println!("[{}] {}", record.timestamp, record.schema_name);
                let text = format_record(reader.decoder().schema(), &record.value)?;
                println!("{text}");
            }
            Err(err) => {
                failed += 1;
                warn!("record skipped: {err}");
            }
        }
        Ok(())
    })?;
    Ok(failed)
}
