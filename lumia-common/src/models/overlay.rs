// File: lumia-common/src/models/overlay.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UnknownKindError;
use crate::models::alert::AlertEvent;

/// Event names an overlay can subscribe to with `Overlay.on(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayListener {
    Chat,
    Alert,
    Hfx,
    VirtualLight,
    OverlayContent,
}

impl OverlayListener {
    pub const ALL: &'static [OverlayListener] = &[
        OverlayListener::Chat,
        OverlayListener::Alert,
        OverlayListener::Hfx,
        OverlayListener::VirtualLight,
        OverlayListener::OverlayContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayListener::Chat => "chat",
            OverlayListener::Alert => "alert",
            OverlayListener::Hfx => "hfx",
            OverlayListener::VirtualLight => "virtuallight",
            OverlayListener::OverlayContent => "overlaycontent",
        }
    }
}

impl fmt::Display for OverlayListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayListener {
    type Err = UnknownKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OverlayListener::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

// --------------------------------------------------------------------------------
// Chat
// --------------------------------------------------------------------------------

/// One permission level a chatter may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserLevel {
    IsSelf,
    Mod,
    Vip,
    Tier3,
    Tier2,
    Subscriber,
    Regular,
    Follower,
    Anyone,
}

impl UserLevel {
    pub const ALL: &'static [UserLevel] = &[
        UserLevel::IsSelf,
        UserLevel::Mod,
        UserLevel::Vip,
        UserLevel::Tier3,
        UserLevel::Tier2,
        UserLevel::Subscriber,
        UserLevel::Regular,
        UserLevel::Follower,
        UserLevel::Anyone,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLevels {
    pub is_self: bool,
    #[serde(rename = "mod")]
    pub moderator: bool,
    pub vip: bool,
    pub tier3: bool,
    pub tier2: bool,
    pub subscriber: bool,
    pub regular: bool,
    pub follower: bool,
    /// Always `true` on the wire.
    pub anyone: bool,
}

impl UserLevels {
    pub fn contains(&self, level: UserLevel) -> bool {
        match level {
            UserLevel::IsSelf => self.is_self,
            UserLevel::Mod => self.moderator,
            UserLevel::Vip => self.vip,
            UserLevel::Tier3 => self.tier3,
            UserLevel::Tier2 => self.tier2,
            UserLevel::Subscriber => self.subscriber,
            UserLevel::Regular => self.regular,
            UserLevel::Follower => self.follower,
            UserLevel::Anyone => self.anyone,
        }
    }

    /// Bitset view, one bit per `UserLevel` in declaration order.
    pub fn bits(&self) -> u16 {
        UserLevel::ALL
            .iter()
            .filter(|l| self.contains(**l))
            .fold(0, |acc, l| acc | l.bit())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEvent {
    /// Platform the message came from, e.g. "twitch".
    pub origin: String,
    pub id: String,
    pub username: String,
    pub displayname: String,
    pub channel: String,
    pub avatar: String,
    pub message: String,
    pub color: String,
    pub badges: Vec<String>,
    /// e.g. "broadcaster/1,sub/12,vip/1"
    pub badges_raw: String,
    pub emotes_raw: String,
    pub emotes_pack: serde_json::Map<String, Value>,
    pub reply: Option<Value>,
    pub lumiauserlevels: Vec<f64>,
    pub user_levels: UserLevels,
}

impl ChatEvent {
    /// Splits `badgesRaw` into `(badge, version)` pairs.
    pub fn badge_pairs(&self) -> Vec<(&str, &str)> {
        self.badges_raw
            .split(',')
            .filter(|b| !b.is_empty())
            .map(|b| b.split_once('/').unwrap_or((b, "")))
            .collect()
    }
}

// --------------------------------------------------------------------------------
// HFX / lights / custom content
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfxEvent {
    pub layer: String,
    /// Asset UUID.
    pub content: String,
    pub command: String,
    pub origin: String,
    pub play_audio: bool,
    pub volume: f64,
    pub duration: f64,
    pub username: String,
    pub message: String,
    pub avatar: String,
    pub command_duration: f64,
}

/// Channels are passed through as sent; the overlay clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualLightEvent {
    pub uuid: String,
    /// 0-100
    pub brightness: f64,
    pub color: LightColor,
    #[serde(default)]
    pub power: Option<bool>,
    pub transition: f64,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOverlayContentEvent {
    pub code_id: String,
    pub content: String,
}

/// Anything an overlay can receive.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    Chat(ChatEvent),
    Alert(AlertEvent),
    Hfx(HfxEvent),
    VirtualLight(VirtualLightEvent),
    OverlayContent(CustomOverlayContentEvent),
}

impl OverlayEvent {
    pub fn listener(&self) -> OverlayListener {
        match self {
            OverlayEvent::Chat(_) => OverlayListener::Chat,
            OverlayEvent::Alert(_) => OverlayListener::Alert,
            OverlayEvent::Hfx(_) => OverlayListener::Hfx,
            OverlayEvent::VirtualLight(_) => OverlayListener::VirtualLight,
            OverlayEvent::OverlayContent(_) => OverlayListener::OverlayContent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listener_names() {
        assert_eq!("virtuallight".parse::<OverlayListener>().unwrap(), OverlayListener::VirtualLight);
        assert!("lights".parse::<OverlayListener>().is_err());
        let json = serde_json::to_string(&OverlayListener::OverlayContent).unwrap();
        assert_eq!(json, "\"overlaycontent\"");
    }

    #[test]
    fn test_user_level_bits() {
        let levels = UserLevels { moderator: true, anyone: true, ..Default::default() };
        assert!(levels.contains(UserLevel::Mod));
        assert!(!levels.contains(UserLevel::Vip));
        assert_eq!(levels.bits(), UserLevel::Mod.bit() | UserLevel::Anyone.bit());
    }

    #[test]
    fn test_light_color_accepts_any_number() {
        let color: LightColor = serde_json::from_value(json!({"r": 127.5, "g": 0, "b": 12})).unwrap();
        assert_eq!(color, LightColor { r: 127.5, g: 0.0, b: 12.0 });
        assert!(serde_json::from_value::<LightColor>(json!({"r": "red", "g": 0, "b": 12})).is_err());
    }
}
