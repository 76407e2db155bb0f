// File: lumia-core/src/catalog/schema.rs
//
// Field-level schema vocabulary. Everything here is `'static` so the whole
// catalog lives in read-only memory and needs no initialisation.

use serde::Serialize;

use lumia_common::models::AlertShape;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    /// RFC 3339 string.
    Timestamp,
    /// String restricted to a fixed set of literals.
    OneOf { values: &'static [&'static str] },
    /// The literal `true`.
    True,
    AnyOf { types: &'static [FieldType] },
    ArrayOf { item: &'static FieldType },
    Object { fields: &'static [FieldSpec] },
    /// `Record<string, unknown>`
    Map,
    Any,
}

impl FieldType {
    /// Human-readable form used in mismatch reports.
    pub fn describe(&self) -> String {
        match self {
            FieldType::String => "string".into(),
            FieldType::Number => "number".into(),
            FieldType::Boolean => "boolean".into(),
            FieldType::Timestamp => "ISO-8601 timestamp".into(),
            FieldType::OneOf { values } => values
                .iter()
                .map(|v| format!("\"{}\"", v))
                .collect::<Vec<_>>()
                .join(" | "),
            FieldType::True => "true".into(),
            FieldType::AnyOf { types } => types
                .iter()
                .map(|t| t.describe())
                .collect::<Vec<_>>()
                .join(" | "),
            FieldType::ArrayOf { item } => format!("{}[]", item.describe()),
            FieldType::Object { .. } => "object".into(),
            FieldType::Map => "object".into(),
            FieldType::Any => "any".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub ty: FieldType,
    /// Absent is an error when set. Independent of `nullable`.
    pub required: bool,
    pub nullable: bool,
}

/// Present and non-null.
pub const fn required(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { name, ty, required: true, nullable: false }
}

/// Present, but may be `null` (`T | null`).
pub const fn nullable(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { name, ty, required: true, nullable: true }
}

/// May be absent (`name?: T`); type-checked when present.
pub const fn optional(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { name, ty, required: false, nullable: false }
}

/// May be absent or `null`.
pub const fn optional_nullable(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { name, ty, required: false, nullable: true }
}

/// What a tagged `dynamic` arm accepts for its tag field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagValue {
    Absent,
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DynamicArm {
    pub name: &'static str,
    pub accepts: &'static [TagValue],
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DynamicSchema {
    Record { fields: &'static [FieldSpec] },
    Tagged { tag: &'static str, arms: &'static [DynamicArm] },
}

impl DynamicSchema {
    /// Arm selected by an observed tag value, if any.
    pub fn arm_for(&self, observed: TagValue) -> Option<&'static DynamicArm> {
        match self {
            DynamicSchema::Record { .. } => None,
            DynamicSchema::Tagged { arms, .. } => {
                arms.iter().find(|arm| arm.accepts.contains(&observed))
            }
        }
    }
}

/// The full `(dynamic, extraSettings)` contract of one shape. Common extras
/// and timing fields are checked for every shape on top of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSchema {
    pub shape: AlertShape,
    pub dynamic: DynamicSchema,
    pub extra_settings: &'static [FieldSpec],
}

impl VariantSchema {
    /// Required field names across `dynamic` (every arm) and
    /// `extraSettings`, as dotted paths.
    pub fn required_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let dynamic_fields: Vec<&FieldSpec> = match &self.dynamic {
            DynamicSchema::Record { fields } => fields.iter().collect(),
            DynamicSchema::Tagged { arms, .. } => arms.iter().flat_map(|a| a.fields.iter()).collect(),
        };
        for f in dynamic_fields.into_iter().filter(|f| f.required) {
            let path = format!("dynamic.{}", f.name);
            if !out.contains(&path) {
                out.push(path);
            }
        }
        for f in self.extra_settings.iter().filter(|f| f.required) {
            out.push(format!("extraSettings.{}", f.name));
        }
        out
    }
}
