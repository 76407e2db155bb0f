// File: lumia-core/src/frame.rs
//
// `{ "type": <listener>, "data": <payload> }` frames as an overlay host emits
// them, one per event.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use lumia_common::error::Error;
use lumia_common::models::{OverlayEvent, OverlayListener};

use crate::catalog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayFrame {
    #[serde(rename = "type")]
    pub listener: String,
    pub data: Value,
}

impl OverlayFrame {
    pub fn new(listener: OverlayListener, data: Value) -> Self {
        Self { listener: listener.as_str().to_string(), data }
    }
}

fn decode_data<T: DeserializeOwned>(data: &Value) -> Result<T, Error> {
    Ok(serde_path_to_error::deserialize(data)?)
}

/// Resolves the listener and decodes `data` into the matching event.
/// Alerts go through the catalog, so their kind comes from `data.alert`.
pub fn decode_frame(frame: &OverlayFrame) -> Result<OverlayEvent, Error> {
    let listener: OverlayListener = frame.listener.parse()?;
    Ok(match listener {
        OverlayListener::Alert => OverlayEvent::Alert(catalog::parse_alert(&frame.data)?),
        OverlayListener::Chat => OverlayEvent::Chat(decode_data(&frame.data)?),
        OverlayListener::Hfx => OverlayEvent::Hfx(decode_data(&frame.data)?),
        OverlayListener::VirtualLight => OverlayEvent::VirtualLight(decode_data(&frame.data)?),
        OverlayListener::OverlayContent => OverlayEvent::OverlayContent(decode_data(&frame.data)?),
    })
}

/// Parses one NDJSON line into an event.
pub fn decode_line(line: &str) -> Result<OverlayEvent, Error> {
    let frame: OverlayFrame = serde_json::from_str(line)?;
    decode_frame(&frame)
}

/// One entry per non-blank line, in file order. The outer error is only for
/// I/O; bad lines come back as inner errors.
pub fn read_frames(path: impl AsRef<Path>) -> Result<Vec<(usize, Result<OverlayEvent, Error>)>, Error> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let result = decode_line(line);
        if let Err(e) = &result {
            warn!("{}:{}: {}", path.as_ref().display(), idx + 1, e);
        }
        out.push((idx + 1, result));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_listener() {
        let frame = OverlayFrame { listener: "lights".into(), data: json!({}) };
        assert!(matches!(decode_frame(&frame), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn test_decode_error_names_path() {
        let frame = OverlayFrame::new(
            OverlayListener::OverlayContent,
            json!({ "codeId": "abc", "content": 5 }),
        );
        match decode_frame(&frame) {
            Err(Error::Decode { path, .. }) => assert_eq!(path, "content"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_virtual_light() {
        let frame = OverlayFrame::new(
            OverlayListener::VirtualLight,
            json!({
                "uuid": "light-1",
                "brightness": 80,
                "color": { "r": 127.5, "g": 120, "b": 0 },
                "transition": 500,
                "delay": 0,
                "duration": 3000,
            }),
        );
        match decode_frame(&frame).unwrap() {
            OverlayEvent::VirtualLight(light) => {
                assert_eq!(light.color.r, 127.5);
                assert_eq!(light.color.g, 120.0);
                assert_eq!(light.power, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
