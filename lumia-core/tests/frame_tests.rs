//! tests/frame_tests.rs
use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use lumia_common::models::{AlertKind, OverlayEvent, OverlayListener};
use lumia_core::frame::{decode_frame, read_frames, OverlayFrame};
use lumia_core::test_utils::fixtures::fixture;
use lumia_core::Error;

fn chat_data() -> serde_json::Value {
    json!({
        "origin": "twitch",
        "id": "msg-1",
        "username": "moonfox",
        "displayname": "MoonFox",
        "channel": "lumiastream",
        "avatar": "https://static-cdn.jtvnw.net/a.png",
        "message": "hello",
        "color": "#FF00AA",
        "badges": ["https://static-cdn.jtvnw.net/badges/sub.png"],
        "badgesRaw": "subscriber/12,vip/1",
        "emotesRaw": "",
        "emotesPack": {},
        "reply": null,
        "lumiauserlevels": [4, 7],
        "userLevels": {
            "isSelf": false,
            "mod": false,
            "vip": true,
            "tier3": false,
            "tier2": false,
            "subscriber": true,
            "regular": false,
            "follower": true,
            "anyone": true,
        },
    })
}

#[test]
fn test_decode_chat_frame() {
    let frame = OverlayFrame::new(OverlayListener::Chat, chat_data());
    match decode_frame(&frame).unwrap() {
        OverlayEvent::Chat(chat) => {
            assert!(chat.user_levels.vip);
            assert_eq!(chat.badge_pairs(), vec![("subscriber", "12"), ("vip", "1")]);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_decode_alert_frame_uses_catalog() {
    let frame = OverlayFrame::new(OverlayListener::Alert, fixture(AlertKind::TiktokGift));
    match decode_frame(&frame).unwrap() {
        OverlayEvent::Alert(alert) => assert_eq!(alert.kind, AlertKind::TiktokGift),
        other => panic!("unexpected: {:?}", other),
    }

    let mut bad = fixture(AlertKind::TiktokGift);
    bad["dynamic"]["value"] = json!("one");
    let frame = OverlayFrame::new(OverlayListener::Alert, bad);
    assert!(matches!(decode_frame(&frame), Err(Error::Validation(_))));
}

#[test]
fn test_read_frames_reports_each_line() {
    let mut file = NamedTempFile::new().unwrap();
    let good = json!({ "type": "alert", "data": fixture(AlertKind::TwitchRaid) });
    let chat = json!({ "type": "chat", "data": chat_data() });
    writeln!(file, "{}", good).unwrap();
    writeln!(file).unwrap();
    writeln!(file, "not json").unwrap();
    writeln!(file, "{}", json!({ "type": "lights", "data": {} })).unwrap();
    writeln!(file, "{}", chat).unwrap();
    file.flush().unwrap();

    let results = read_frames(file.path()).unwrap();
    let lines: Vec<usize> = results.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![1, 3, 4, 5]);

    assert!(results[0].1.is_ok());
    assert!(matches!(results[1].1, Err(Error::Json(_))));
    assert!(matches!(results[2].1, Err(Error::UnknownKind(_))));
    assert!(matches!(results[3].1, Ok(OverlayEvent::Chat(_))));
}

#[test]
fn test_read_frames_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_frames(dir.path().join("nope.ndjson")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
