//! Encoding-agnostic core types and decoder contracts for `logstitch`.
//!
//! This crate provides the log line matcher, the multi-part fragment
//! assembler, schema-independent intermediate representations
//! ([`Value`] / [`Schema`]) and the [`RecordDecoder`] trait.

mod assembler;
mod decoder;
mod error;
mod matcher;
mod record;
mod schema;
mod value;

pub use assembler::FragmentAssembler;
pub use decoder::RecordDecoder;
pub use error::DecoderError;
pub use matcher::{LineMatcher, LineParts};
pub use record::{DecodedRecord, format_record};
pub use schema::{FieldDef, FieldType, Schema, format_schema};
pub use value::Value;
