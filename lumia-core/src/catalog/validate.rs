// File: lumia-core/src/catalog/validate.rs

use chrono::DateTime;
use serde_json::{Map, Value};

use lumia_common::error::{FieldIssue, FieldProblem};

use super::schema::{DynamicSchema, FieldSpec, FieldType, TagValue, VariantSchema};
use super::shapes::COMMON_EXTRAS;

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Collects issues rather than stopping at the first one.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    issues: Vec<FieldIssue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    pub fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    /// Looks up `name` in `obj` and requires it to be an object.
    pub fn object_at<'v>(&mut self, obj: &'v Map<String, Value>, name: &str) -> Option<&'v Map<String, Value>> {
        match obj.get(name) {
            None => {
                self.push(FieldIssue::missing(name));
                None
            }
            Some(Value::Object(inner)) => Some(inner),
            Some(other) => {
                self.push(FieldIssue::mismatch(name, "object", json_type(other)));
                None
            }
        }
    }

    pub fn check_fields(&mut self, prefix: &str, obj: &Map<String, Value>, fields: &[FieldSpec]) {
        for spec in fields {
            self.check_field(&join(prefix, spec.name), obj.get(spec.name), spec);
        }
    }

    pub fn check_field(&mut self, path: &str, value: Option<&Value>, spec: &FieldSpec) {
        match value {
            None if spec.required => self.push(FieldIssue::missing(path)),
            None => {}
            Some(Value::Null) if spec.nullable => {}
            Some(Value::Null) => self.push(FieldIssue {
                path: path.to_string(),
                problem: FieldProblem::UnexpectedNull,
            }),
            Some(v) => self.check_type(path, v, &spec.ty),
        }
    }

    pub fn check_type(&mut self, path: &str, value: &Value, ty: &FieldType) {
        match ty {
            FieldType::Any => {}
            FieldType::String => self.require_type(path, value.is_string(), ty, value),
            FieldType::Number => self.require_type(path, value.is_number(), ty, value),
            FieldType::Boolean => self.require_type(path, value.is_boolean(), ty, value),
            FieldType::Map => self.require_type(path, value.is_object(), ty, value),
            FieldType::True => self.literal(path, value == &Value::Bool(true), ty, value),
            FieldType::Timestamp => match value.as_str() {
                Some(s) if DateTime::parse_from_rfc3339(s).is_ok() => {}
                Some(_) => self.literal(path, false, ty, value),
                None => self.require_type(path, false, ty, value),
            },
            FieldType::OneOf { values } => match value.as_str() {
                Some(s) => self.literal(path, values.contains(&s), ty, value),
                None => self.require_type(path, false, ty, value),
            },
            FieldType::AnyOf { types } => {
                let ok = types.iter().any(|t| {
                    let mut trial = Validator::new();
                    trial.check_type(path, value, t);
                    trial.issues.is_empty()
                });
                self.require_type(path, ok, ty, value);
            }
            FieldType::ArrayOf { item } => match value.as_array() {
                Some(items) => {
                    for (i, v) in items.iter().enumerate() {
                        self.check_type(&format!("{}[{}]", path, i), v, item);
                    }
                }
                None => self.require_type(path, false, ty, value),
            },
            FieldType::Object { fields } => match value.as_object() {
                Some(inner) => self.check_fields(path, inner, fields),
                None => self.require_type(path, false, ty, value),
            },
        }
    }

    /// Wrong JSON type: report the type that was found.
    fn require_type(&mut self, path: &str, ok: bool, ty: &FieldType, value: &Value) {
        if !ok {
            self.push(FieldIssue::mismatch(path, ty.describe(), json_type(value)));
        }
    }

    /// Right JSON type, wrong value: report the value itself.
    fn literal(&mut self, path: &str, ok: bool, ty: &FieldType, value: &Value) {
        if !ok {
            self.push(FieldIssue::mismatch(path, ty.describe(), value.to_string()));
        }
    }

    pub fn check_dynamic(&mut self, dynamic: &Map<String, Value>, schema: &DynamicSchema) {
        match schema {
            DynamicSchema::Record { fields } => self.check_fields("dynamic", dynamic, fields),
            DynamicSchema::Tagged { tag, .. } => {
                let tag_path = join("dynamic", tag);
                let observed = match dynamic.get(*tag) {
                    None => TagValue::Absent,
                    Some(Value::Bool(b)) => TagValue::Bool(*b),
                    Some(other) => {
                        self.push(FieldIssue::mismatch(tag_path, "boolean", json_type(other)));
                        return;
                    }
                };
                match schema.arm_for(observed) {
                    Some(arm) => self.check_fields("dynamic", dynamic, arm.fields),
                    None => self.push(FieldIssue {
                        path: tag_path,
                        problem: FieldProblem::UnknownArm {
                            tag: tag.to_string(),
                            found: dynamic.get(*tag).map(|v| v.to_string()).unwrap_or_else(|| "absent".into()),
                        },
                    }),
                }
            }
        }
    }

    /// Per-shape fields, then common extras the shape does not redeclare,
    /// then timing.
    pub fn check_extra_settings(&mut self, extra: &Map<String, Value>, schema: &VariantSchema) {
        self.check_fields("extraSettings", extra, schema.extra_settings);

        for spec in COMMON_EXTRAS {
            if schema.extra_settings.iter().any(|f| f.name == spec.name) {
                continue;
            }
            self.check_field(&join("extraSettings", spec.name), extra.get(spec.name), spec);
        }

        self.check_timing(extra, schema.extra_settings);
    }

    /// An amount field the shape already declares was type-checked with the
    /// shape's fields; only its presence is checked here.
    fn check_timing(&mut self, extra: &Map<String, Value>, declared: &[FieldSpec]) {
        let enabled = match extra.get("checkTimingType") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                self.push(FieldIssue::mismatch("extraSettings.checkTimingType", "boolean", json_type(other)));
                return;
            }
        };
        if !enabled {
            return;
        }
        let timing_type = FieldType::OneOf { values: &["duration", "cycle"] };
        match extra.get("timingType") {
            None => self.push(FieldIssue::missing("extraSettings.timingType")),
            Some(v) => {
                self.check_type("extraSettings.timingType", v, &timing_type);
                let amount_field = match v.as_str() {
                    Some("duration") => "duration",
                    Some("cycle") => "cycles",
                    _ => return,
                };
                let path = join("extraSettings", amount_field);
                match extra.get(amount_field) {
                    None => {
                        if !declared.iter().any(|f| f.name == amount_field && f.required) {
                            self.push(FieldIssue::missing(path));
                        }
                    }
                    Some(_) if declared.iter().any(|f| f.name == amount_field) => {}
                    Some(n) => self.check_type(&path, n, &FieldType::Number),
                }
            }
        }
    }
}
