//! Decoded record type and its human-readable rendering.

use std::fmt::{Error, Result, Write as _};

use crate::{
    schema::{FieldType, Schema},
    value::Value,
};

/// One fully reassembled and decoded record.
///
/// Created only when the final fragment of a message arrives and the
/// payload decodes successfully; handed to the caller and not retained.
#[derive(Debug)]
pub struct DecodedRecord {
    /// Timestamp token pair of the log line that completed the record.
    pub timestamp: String,
    /// Fully-qualified name of the schema the payload was decoded against.
    pub schema_name: String,
    pub value: Value,
}

/// Render a decoded record against its schema:
/// scalar fields are rendered in one line, compound fields are
/// pretty-printed. Field labels and order follow the schema.
pub fn format_record(schema: &Schema, value: &Value) -> std::result::Result<String, Error> {
    let mut out = String::new();
    match value {
        Value::Struct(members) => format_struct(Some(schema), members, 0, &mut out)?,
        other => format_labeled_value("value", None, other, 0, &mut out)?,
    }
    Ok(out)
}

fn format_struct(
    schema: Option<&Schema>,
    members: &[Value],
    indent: usize,
    out: &mut String,
) -> Result {
    for (i, member) in members.iter().enumerate() {
        let field = schema.and_then(|s| s.fields().get(i));
        let label = field.map(|f| f.name.as_str()).unwrap_or("?");
        let member_type = field.map(|f| &f.ty);
        format_labeled_value(label, member_type, member, indent, out)?;
    }
    Ok(())
}

fn format_labeled_value(
    label: &str,
    ty: Option<&FieldType>,
    value: &Value,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if let Some(text) = scalar_text(value) {
        return writeln!(out, "{pad}{label}: {text}");
    }
    writeln!(out, "{pad}{label}:")?;
    format_compound(ty, value, indent + 4, out)
}

fn format_compound(
    ty: Option<&FieldType>,
    value: &Value,
    indent: usize,
    out: &mut String,
) -> Result {
    match value {
        Value::Struct(members) => {
            let schema = match ty {
                Some(FieldType::Struct(schema)) => Some(schema),
                _ => None,
            };
            format_struct(schema, members, indent, out)
        }
        Value::List(items) => {
            let elem_type = match ty {
                Some(FieldType::List(elem)) => Some(&**elem),
                _ => None,
            };
            for item in items {
                format_item(elem_type, item, indent, out)?;
            }
            Ok(())
        }
        Value::Map(entries) => {
            let value_type = match ty {
                Some(FieldType::Map { value, .. }) => Some(&**value),
                _ => None,
            };
            for (key, val) in entries {
                // Map keys are always scalar in the supported encodings.
                let key_text = scalar_text(key).unwrap_or_else(|| "?".to_string());
                format_labeled_value(&key_text, value_type, val, indent, out)?;
            }
            Ok(())
        }
        _ => unreachable!("scalar values are handled by the caller"),
    }
}

fn format_item(
    ty: Option<&FieldType>,
    value: &Value,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if let Some(text) = scalar_text(value) {
        writeln!(out, "{pad}- {text}")
    } else {
        writeln!(out, "{pad}-")?;
        format_compound(ty, value, indent + 4, out)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => "null".to_string(),
        Value::Bool(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Bytes(b) => {
            let mut hex = String::with_capacity(2 + b.len() * 2);
            hex.push_str("0x");
            for byte in b.iter() {
                let _ = write!(hex, "{byte:02x}");
            }
            format!("{hex} ({} bytes)", b.len())
        }
        Value::Struct(_) | Value::List(_) | Value::Map(_) => return None,
    };
    Some(text)
}
