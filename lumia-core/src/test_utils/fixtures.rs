// File: lumia-core/src/test_utils/fixtures.rs
//
// Representative payloads for every documented alert shape, as an overlay
// host would deliver them.

use serde_json::{json, Value};

use lumia_common::models::{AlertKind, AlertShape};

const TIMESTAMP: &str = "2024-05-04T18:22:31.000Z";

fn envelope(kind: AlertKind, dynamic: Value, mut extra: Value, site: &str) -> Value {
    if let Some(obj) = extra.as_object_mut() {
        obj.entry("site").or_insert_with(|| json!(site));
        obj.entry("timestamp").or_insert_with(|| json!(TIMESTAMP));
    }
    json!({
        "alert": kind.as_str(),
        "dynamic": dynamic,
        "extraSettings": extra,
        "fromLumia": false,
    })
}

/// A payload that validates for `kind`.
pub fn fixture(kind: AlertKind) -> Value {
    let site = kind.platform_prefix();
    let (dynamic, extra) = match kind.shape() {
        AlertShape::TwitchFollower => (
            json!({}),
            json!({
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "userId": "41234567",
                "username": "moonfox",
                "displayname": "MoonFox",
                "channelViews": 0,
                "channelDescription": "vtuber and pixel art",
            }),
        ),
        AlertShape::TwitchRaid => (
            json!({ "value": 42, "username": "moonfox" }),
            json!({
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "userId": "41234567",
                "username": "moonfox",
                "displayname": "MoonFox",
                "channelViews": 1200,
                "channelDescription": null,
                "viewers": 42,
                "value": 42,
            }),
        ),
        AlertShape::TwitchBits => (
            json!({ "value": 100, "username": "moonfox" }),
            json!({
                "bits": 100,
                "amount": 100,
                "value": 100,
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "userId": "41234567",
                "message": "gg",
                "username": "moonfox",
                "rawMessage": "Cheer100 gg",
                "displayname": "MoonFox",
                "channelViews": 1200,
                "full_message": "Cheer100 gg",
                "channelDescription": null,
            }),
        ),
        AlertShape::TwitchSubscriber => (
            json!({
                "value": "1000",
                "username": "moonfox",
                "subMonths": 3,
                "streakMonths": 3,
                "isPrime": false,
            }),
            json!({
                "tier": "Tier 1",
                "value": "1000",
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "userId": "41234567",
                "message": null,
                "subPlan": "1000",
                "subPlanName": "Channel Subscription",
                "username": "moonfox",
                "subMonths": 3,
                "streakMonths": 3,
                "displayname": "MoonFox",
                "channelViews": 1200,
                "channelDescription": null,
            }),
        ),
        AlertShape::TwitchPowerups => (
            json!({ "name": "celebration", "value": 50, "username": "moonfox" }),
            json!({
                "bits": 50,
                "type": "celebration",
                "value": 50,
                "amount": 50,
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "userId": "41234567",
                "username": "moonfox",
                "rawMessage": null,
                "displayname": "MoonFox",
                "channelViews": 1200,
                "full_message": null,
                "channelDescription": null,
            }),
        ),
        AlertShape::TwitchExtension => (
            json!({ "username": "moonfox", "name": "confetti", "currency": "bits" }),
            json!({
                "bits": 25,
                "amount": 25,
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "origin": "twitch-extension",
                "userId": "41234567",
                "command": "confetti",
                "command_id": "cmd-7",
                "message": "",
                "currency": "bits",
                "amount_type": "bits",
                "currencySymbol": "",
                "platform": "twitch",
                "username": "moonfox",
                "displayname": "MoonFox",
                "channelViews": "1200",
                "full_message": "",
                "channelDescription": "vtuber and pixel art",
            }),
        ),
        AlertShape::TiltifyDonation => (
            json!({ "value": "15.00", "currency": "USD" }),
            json!({
                "value": "15.00",
                "amount": "15.00",
                "message": "for the kids",
                "currency": "USD",
                "username": "moonfox",
                "displayname": "MoonFox",
            }),
        ),
        AlertShape::KickFollower => (
            json!({ "value": "moonfox" }),
            json!({
                "avatar": null,
                "userId": 9912345,
                "username": "moonfox",
                "displayname": "MoonFox",
            }),
        ),
        AlertShape::KickPoints => (
            json!({ "value": 500, "name": "Hydrate", "currency": "points" }),
            json!({
                "title": "Hydrate",
                "value": "Hydrate",
                "amount": 500,
                "origin": "kick-points",
                "points": 500,
                "prompt": null,
                "userId": 9912345,
                "command": "Hydrate",
                "message": null,
                "currency": "points",
                "platform": "kick",
                "username": "moonfox",
                "rawMessage": null,
                "amount_type": "points",
                "displayname": "MoonFox",
                "userLevelsRaw": {
                    "mod": false,
                    "vip": true,
                    "isSelf": false,
                    "follower": true,
                    "subscriber": false,
                },
                "currencySymbol": "",
                "lumiauserlevels": [1, 4],
            }),
        ),
        AlertShape::TiktokGift => (
            json!({ "name": "Rose", "value": 1 }),
            json!({
                "coins": 1,
                "value": 1,
                "giftId": 5655,
                "userId": "6812345678",
                "describe": "sent Rose",
                "giftName": "Rose",
                "giftType": 1,
                "username": "moonfox",
                "repeatEnd": true,
                "repeatCount": 1,
                "diamondCount": 1,
                "giftPictureUrl": "https://p16-webcast.tiktokcdn.com/rose.png",
                "receiverUserId": "6800000001",
                "profilePictureUrl": "https://p16-sign.tiktokcdn.com/a.jpeg",
                "displayname": "MoonFox",
                "isNewGifter": false,
            }),
        ),
        AlertShape::YoutubeSubscriber | AlertShape::YoutubeMember => (
            json!({ "value": "MoonFox" }),
            json!({
                "avatar": "https://yt3.ggpht.com/a.jpg",
                "userId": "UCx1y2z3",
                "username": "moonfox",
                "displayname": "MoonFox",
            }),
        ),
        AlertShape::YoutubeSupersticker => (
            json!({ "value": 5 }),
            json!({ "amount": 5, "username": "moonfox", "displayname": "MoonFox" }),
        ),
        AlertShape::YoutubeSuperchat => (
            json!({ "value": 10, "currency": "USD", "username": "moonfox" }),
            json!({
                "value": 10,
                "amount": 10,
                "currency": "USD",
                "username": "moonfox",
                "displayname": "MoonFox",
            }),
        ),
        AlertShape::CrowdcontrolEffect => (
            json!({ "value": "Spawn Creeper" }),
            json!({
                "game": "Minecraft",
                "value": "Spawn Creeper",
                "avatar": "https://static-cdn.jtvnw.net/a.png",
                "effect": "Spawn Creeper",
                "gameId": "minecraft",
                "artwork": "https://resources.crowdcontrol.live/creeper.png",
                "message": "",
                "effectId": "spawn_creeper",
                "platform": "twitch",
                "username": "moonfox",
                "displayname": "MoonFox",
                "duration": 0,
            }),
        ),
        AlertShape::Generic => (
            json!({ "value": "moonfox" }),
            json!({ "username": "moonfox", "displayname": "MoonFox" }),
        ),
    };
    envelope(kind, dynamic, extra, site)
}

/// The gift arm of `twitch-subscriber`.
pub fn gift_subscription() -> Value {
    let mut payload = fixture(AlertKind::TwitchSubscriber);
    payload["dynamic"] = json!({
        "value": "1000",
        "username": "moonfox",
        "subMonths": 1,
        "giftAmount": 5,
        "totalGifts": 25,
        "isGift": true,
        "isPrime": false,
        "isResub": false,
    });
    payload["extraSettings"]["gifter"] = json!("moonfox");
    payload["extraSettings"]["recipients"] = json!("a,b,c,d,e");
    payload["extraSettings"]["giftAmount"] = json!(5);
    payload["extraSettings"]["totalGifts"] = json!(25);
    payload
}

/// One kind per detailed shape, plus a generic one.
pub fn documented_kinds() -> Vec<AlertKind> {
    let mut out: Vec<AlertKind> = Vec::new();
    for shape in AlertShape::ALL {
        if let Some(kind) = shape.kinds().next() {
            out.push(kind);
        }
    }
    out
}
