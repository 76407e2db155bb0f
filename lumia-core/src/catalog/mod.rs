// File: lumia-core/src/catalog/mod.rs
//
// Kind -> schema lookup and payload validation.

pub mod schema;
pub mod shapes;
mod validate;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use lumia_common::error::{Error, FieldIssue, FieldProblem, UnknownKindError, ValidationError};
use lumia_common::models::{AlertEvent, AlertKind, AlertPayload, AlertShape, CommonExtras, Timing};

pub use schema::{DynamicArm, DynamicSchema, FieldSpec, FieldType, TagValue, VariantSchema};

use validate::{json_type, Validator};

/// Schema for a kind. Total: every kind maps to exactly one shape.
pub fn shape_for(kind: AlertKind) -> &'static VariantSchema {
    schema_of(kind.shape())
}

pub fn schema_of(shape: AlertShape) -> &'static VariantSchema {
    match shape {
        AlertShape::TwitchFollower => &shapes::TWITCH_FOLLOWER,
        AlertShape::TwitchRaid => &shapes::TWITCH_RAID,
        AlertShape::TwitchBits => &shapes::TWITCH_BITS,
        AlertShape::TwitchSubscriber => &shapes::TWITCH_SUBSCRIBER,
        AlertShape::TwitchPowerups => &shapes::TWITCH_POWERUPS,
        AlertShape::TwitchExtension => &shapes::TWITCH_EXTENSION,
        AlertShape::TiltifyDonation => &shapes::TILTIFY_DONATION,
        AlertShape::KickFollower => &shapes::KICK_FOLLOWER,
        AlertShape::KickPoints => &shapes::KICK_POINTS,
        AlertShape::TiktokGift => &shapes::TIKTOK_GIFT,
        AlertShape::YoutubeSubscriber => &shapes::YOUTUBE_SUBSCRIBER,
        AlertShape::YoutubeSupersticker => &shapes::YOUTUBE_SUPERSTICKER,
        AlertShape::YoutubeSuperchat => &shapes::YOUTUBE_SUPERCHAT,
        AlertShape::YoutubeMember => &shapes::YOUTUBE_MEMBER,
        AlertShape::CrowdcontrolEffect => &shapes::CROWDCONTROL_EFFECT,
        AlertShape::Generic => &shapes::GENERIC,
    }
}

/// Every kind, in declaration order.
pub fn list_kinds() -> &'static [AlertKind] {
    AlertKind::ALL
}

// --------------------------------------------------------------------------------
// Validation
// --------------------------------------------------------------------------------

/// Checks an alert envelope against the schema for `kind` and, if it holds,
/// decodes it into an `AlertEvent`. All issues are reported at once.
pub fn validate(kind: AlertKind, payload: &Value) -> Result<AlertEvent, ValidationError> {
    let schema = shape_for(kind);
    let reject = |issues: Vec<FieldIssue>| ValidationError { kind, issues };

    let envelope = match payload.as_object() {
        Some(obj) => obj,
        None => {
            return Err(reject(vec![FieldIssue::mismatch("", "object", json_type(payload))]));
        }
    };

    let mut v = Validator::new();
    check_envelope(&mut v, kind, envelope);
    if let Some(dynamic) = v.object_at(envelope, "dynamic") {
        v.check_dynamic(dynamic, &schema.dynamic);
    }
    if let Some(extra) = v.object_at(envelope, "extraSettings") {
        v.check_extra_settings(extra, schema);
    }

    let issues = v.into_issues();
    if !issues.is_empty() {
        debug!("rejected `{}` payload with {} issue(s)", kind, issues.len());
        return Err(reject(issues));
    }

    let extra = envelope.get("extraSettings").cloned().unwrap_or(Value::Null);
    let payload_typed = AlertPayload::decode(kind.shape(), payload).map_err(|e| reject(vec![undecodable("", e)]))?;
    let common: CommonExtras = decode_at("extraSettings", extra).map_err(|e| reject(vec![e]))?;
    let originated_internally = matches!(envelope.get("fromLumia"), Some(Value::Bool(true)));
    let timing = envelope
        .get("extraSettings")
        .and_then(Value::as_object)
        .map(timing_of)
        .unwrap_or(Timing::None);

    Ok(AlertEvent::new(kind, originated_internally, timing, common, payload_typed, payload.clone()))
}

/// Like [`validate`], with the kind given as its wire string.
pub fn validate_str(kind: &str, payload: &Value) -> Result<AlertEvent, Error> {
    let kind: AlertKind = kind.parse()?;
    Ok(validate(kind, payload)?)
}

/// Reads the kind from the envelope's own `alert` key.
pub fn parse_alert(payload: &Value) -> Result<AlertEvent, Error> {
    let kind = match payload.get("alert") {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(UnknownKindError(other.to_string()).into()),
        None => return Err(UnknownKindError(String::new()).into()),
    };
    validate_str(kind, payload)
}

fn check_envelope(v: &mut Validator, kind: AlertKind, envelope: &Map<String, Value>) {
    match envelope.get("alert") {
        None => {}
        Some(Value::String(s)) if s == kind.as_str() => {}
        Some(other) => v.push(FieldIssue::mismatch("alert", format!("\"{}\"", kind), other.to_string())),
    }
    match envelope.get("fromLumia") {
        None | Some(Value::Bool(_)) => {}
        Some(other) => v.push(FieldIssue::mismatch("fromLumia", "boolean", json_type(other))),
    }
}

fn timing_of(extra: &Map<String, Value>) -> Timing {
    if extra.get("checkTimingType") != Some(&Value::Bool(true)) {
        return Timing::None;
    }
    let number = |name: &str| extra.get(name).and_then(Value::as_f64);
    match extra.get("timingType").and_then(Value::as_str) {
        Some("duration") => number("duration").map(|ms| Timing::Duration { ms }),
        Some("cycle") => number("cycles").map(|count| Timing::Cycles { count }),
        _ => None,
    }
    .unwrap_or(Timing::None)
}

fn undecodable(prefix: &str, err: Error) -> FieldIssue {
    let (path, message) = match err {
        Error::Decode { path, message } => (path, message),
        other => (String::new(), other.to_string()),
    };
    let path = match (prefix.is_empty(), path.as_str()) {
        (true, _) => path,
        (false, "" | ".") => prefix.to_string(),
        (false, _) => format!("{}.{}", prefix, path),
    };
    FieldIssue { path, problem: FieldProblem::Undecodable { message } }
}

fn decode_at<T: DeserializeOwned>(prefix: &str, value: Value) -> Result<T, FieldIssue> {
    serde_path_to_error::deserialize(value).map_err(|e| undecodable(prefix, Error::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::test_utils::fixtures::fixture;

    #[test]
    fn test_every_kind_has_schema() {
        for kind in list_kinds() {
            assert_eq!(shape_for(*kind).shape, kind.shape(), "{}", kind);
        }
    }

    #[test]
    fn test_generic_kind_accepts_bare_payload() {
        let payload = json!({
            "dynamic": {},
            "extraSettings": { "site": "twitch", "timestamp": "2024-01-01T00:00:00Z" }
        });
        let event = validate(AlertKind::TwitchClip, &payload).unwrap();
        assert!(matches!(event.payload, AlertPayload::Generic(_)));
        assert_eq!(event.timing, Timing::None);
        assert!(!event.originated_internally);
    }

    #[test]
    fn test_non_object_payload() {
        let err = validate(AlertKind::TwitchRaid, &json!([1, 2])).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::mismatch("", "object", "array")]);
    }

    #[test]
    fn test_alert_key_must_agree() {
        let mut payload = fixture(AlertKind::TwitchRaid);
        payload["alert"] = json!("twitch-bits");
        let err = validate(AlertKind::TwitchRaid, &payload).unwrap_err();
        assert!(err.issue_at("alert").is_some());
    }

    #[test]
    fn test_timing_is_decoded() {
        let mut payload = fixture(AlertKind::TwitchBits);
        payload["extraSettings"]["checkTimingType"] = json!(true);
        payload["extraSettings"]["timingType"] = json!("duration");
        payload["extraSettings"]["duration"] = json!(4500);
        let event = validate(AlertKind::TwitchBits, &payload).unwrap();
        assert_eq!(event.timing, Timing::Duration { ms: 4500.0 });
    }

    #[test]
    fn test_validate_str_unknown() {
        let err = validate_str("twitch-followr", &json!({})).unwrap_err();
        assert!(matches!(err, Error::UnknownKind(_)));
    }

    #[test]
    fn test_parse_alert_reads_envelope() {
        let mut payload = fixture(AlertKind::KickFollower);
        payload["alert"] = json!("kick-follower");
        let event = parse_alert(&payload).unwrap();
        assert_eq!(event.kind, AlertKind::KickFollower);

        let err = parse_alert(&json!({"dynamic": {}})).unwrap_err();
        assert!(matches!(err, Error::UnknownKind(_)));
    }

    #[test]
    fn test_undecodable_prefix() {
        let issue = undecodable("extraSettings", Error::Decode { path: "timestamp".into(), message: "bad".into() });
        assert_eq!(issue.path, "extraSettings.timestamp");
    }
}
