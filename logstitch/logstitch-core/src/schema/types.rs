use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Type of a single record field.
///
/// Variant names mirror [`Value`](crate::Value) for consistency
/// (values ↔ types). List elements and map keys/values carry a bare
/// [`FieldType`]: the supported record encodings have no notion of a
/// nullable element, only of a nullable field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
    Struct(Schema),
    List(Box<FieldType>),
    Map {
        key: Box<FieldType>,
        value: Box<FieldType>,
    },
}

impl FieldType {
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            FieldType::Struct(_) | FieldType::List(_) | FieldType::Map { .. }
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::String => "string",
            FieldType::Bytes => "bytes",
            FieldType::Struct(_) => "struct",
            FieldType::List(_) => "list",
            FieldType::Map { .. } => "map",
        }
    }
}

/// One named, typed field of a record.
///
/// `nullable` means the field may be absent from a decoded record, in
/// which case its [`Value`](crate::Value) slot holds `Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub ty: FieldType,
    pub nullable: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: FieldType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable,
        }
    }
}

/// Ordered field definitions of one record type.
///
/// The order matches the positional members of a decoded
/// [`Value::Struct`](crate::Value::Struct).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema(Vec<FieldDef>);

impl Schema {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.0
    }
}

impl From<Vec<FieldDef>> for Schema {
    fn from(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }
}

impl FromIterator<FieldDef> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldDef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Schema {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.fields()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&super::format_schema(self)?)
    }
}
