use std::fmt::{Error, Result, Write as _};

use super::{FieldDef, FieldType};

/// Render a schema in a compact declaration style, one field per line.
/// Nullable fields carry a `?` suffix; struct fields expand into an
/// indented block:
///
/// ```text
/// session_id: string?
/// histogram: struct? {
///     instrument_id: i32?
///     counts: list<u64>
/// }
/// annotations: map<string, string>
/// ```
pub fn format_schema(fields: &[FieldDef]) -> std::result::Result<String, Error> {
    let mut out = String::new();
    for field in fields {
        write_field(field, 0, &mut out)?;
    }
    Ok(out)
}

fn write_field(field: &FieldDef, indent: usize, out: &mut String) -> Result {
    write!(out, "{:indent$}{}: ", "", field.name)?;
    write_type(&field.ty, field.nullable, indent, out)?;
    writeln!(out)
}

fn write_type(ty: &FieldType, nullable: bool, indent: usize, out: &mut String) -> Result {
    let suffix = if nullable { "?" } else { "" };
    match ty {
        FieldType::Struct(fields) => {
            writeln!(out, "struct{suffix} {{")?;
            for child in fields.iter() {
                write_field(child, indent + 4, out)?;
            }
            write!(out, "{:indent$}}}", "")
        }
        FieldType::List(elem) => {
            write!(out, "list{suffix}<")?;
            write_type(elem, false, indent, out)?;
            write!(out, ">")
        }
        FieldType::Map { key, value } => {
            write!(out, "map{suffix}<")?;
            write_type(key, false, indent, out)?;
            write!(out, ", ")?;
            write_type(value, false, indent, out)?;
            write!(out, ">")
        }
        scalar => write!(out, "{}{suffix}", scalar.type_name()),
    }
}
