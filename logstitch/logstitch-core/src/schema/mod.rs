//! Schema intermediate representation for decoded records.

mod format;
mod types;

pub use format::format_schema;
pub use types::{FieldDef, FieldType, Schema};
