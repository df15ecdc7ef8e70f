mod error;
mod reader;

pub use error::{LogReaderError, RecordError};
pub use logstitch_core as core;
pub use reader::LogReader;
