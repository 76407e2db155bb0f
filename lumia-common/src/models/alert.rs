// File: lumia-common/src/models/alert.rs

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::models::alert_kind::{AlertKind, AlertShape};
use crate::models::platform::Site;

// --------------------------------------------------------------------------------
// Envelope pieces shared by every alert
// --------------------------------------------------------------------------------

/// How long an overlay should keep an alert on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Timing {
    None,
    Duration { ms: f64 },
    Cycles { count: f64 },
}

/// Vendors disagree on whether some ids and counters are strings or numbers.
/// Kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(f64),
}

impl StringOrNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StringOrNumber::String(s) => s.parse().ok(),
            StringOrNumber::Number(n) => Some(*n),
        }
    }
}

/// Fields the runtime merges into every `extraSettings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonExtras {
    pub site: Site,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub displayname: Option<String>,
    #[serde(default)]
    pub user_id: Option<StringOrNumber>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// `{ dynamic, extraSettings }` narrowed to one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<D, E> {
    pub dynamic: D,
    #[serde(rename = "extraSettings")]
    pub extra_settings: E,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringValue {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFrom {
    pub value: f64,
    pub username: String,
}

/// `dynamic` of the general alert shape, also used for `twitch-follower`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericDynamic {
    #[serde(default)]
    pub value: Option<StringOrNumber>,
}

// --------------------------------------------------------------------------------
// Twitch
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchFollowerExtra {
    pub avatar: String,
    pub user_id: String,
    pub username: String,
    pub displayname: String,
    pub channel_views: f64,
    pub channel_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchRaidExtra {
    pub avatar: String,
    pub user_id: String,
    pub username: String,
    pub displayname: String,
    pub channel_views: f64,
    pub channel_description: Option<String>,
    pub viewers: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchBitsExtra {
    pub bits: f64,
    pub amount: f64,
    pub value: f64,
    pub avatar: String,
    pub user_id: String,
    pub message: Option<String>,
    pub username: String,
    pub raw_message: String,
    pub displayname: String,
    pub channel_views: f64,
    #[serde(rename = "full_message")]
    pub full_message: String,
    pub channel_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubTier {
    #[serde(rename = "1000")]
    Tier1,
    #[serde(rename = "2000")]
    Tier2,
    #[serde(rename = "3000")]
    Tier3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularSubscription {
    pub value: SubTier,
    pub username: String,
    pub sub_months: f64,
    pub streak_months: f64,
    pub is_prime: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftSubscription {
    pub value: SubTier,
    pub username: String,
    pub sub_months: f64,
    pub gift_amount: f64,
    pub total_gifts: f64,
    pub is_gift: bool,
    #[serde(default)]
    pub is_anon: Option<bool>,
    pub is_prime: bool,
    pub is_resub: bool,
}

/// `twitch-subscriber` has two `dynamic` arms selected by `isGift`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubscriberDynamic {
    Regular(RegularSubscription),
    Gift(GiftSubscription),
}

impl SubscriberDynamic {
    pub fn tier(&self) -> SubTier {
        match self {
            SubscriberDynamic::Regular(r) => r.value,
            SubscriberDynamic::Gift(g) => g.value,
        }
    }
}

impl<'de> Deserialize<'de> for SubscriberDynamic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_gift = value.get("isGift").and_then(Value::as_bool).unwrap_or(false);
        if is_gift {
            GiftSubscription::deserialize(value)
                .map(SubscriberDynamic::Gift)
                .map_err(de::Error::custom)
        } else {
            RegularSubscription::deserialize(value)
                .map(SubscriberDynamic::Regular)
                .map_err(de::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchSubscriberExtra {
    pub tier: String,
    pub value: SubTier,
    pub avatar: String,
    #[serde(default)]
    pub gifter: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub recipients: Option<String>,
    pub user_id: String,
    pub message: Option<String>,
    pub sub_plan: String,
    pub sub_plan_name: String,
    pub username: String,
    pub sub_months: f64,
    #[serde(default)]
    pub streak_months: Option<f64>,
    #[serde(default)]
    pub gift_amount: Option<f64>,
    #[serde(default)]
    pub total_gifts: Option<f64>,
    pub displayname: String,
    pub channel_views: f64,
    pub channel_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitchPowerupsDynamic {
    pub name: String,
    pub value: f64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchPowerupsExtra {
    pub bits: f64,
    #[serde(rename = "type")]
    pub powerup_type: String,
    pub value: f64,
    pub amount: f64,
    pub avatar: String,
    pub user_id: String,
    pub username: String,
    pub raw_message: Option<String>,
    pub displayname: String,
    pub channel_views: f64,
    #[serde(rename = "full_message")]
    pub full_message: Option<String>,
    pub channel_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionCurrency {
    Points,
    Bits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitchExtensionDynamic {
    pub username: String,
    pub name: String,
    pub currency: ExtensionCurrency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchExtensionExtra {
    pub bits: f64,
    pub amount: f64,
    pub avatar: String,
    pub origin: String,
    pub user_id: String,
    pub command: String,
    #[serde(rename = "command_id")]
    pub command_id: String,
    pub message: String,
    pub currency: ExtensionCurrency,
    #[serde(rename = "amount_type")]
    pub amount_type: ExtensionCurrency,
    pub currency_symbol: String,
    pub platform: String,
    pub username: String,
    pub displayname: String,
    pub channel_views: StringOrNumber,
    #[serde(rename = "full_message")]
    pub full_message: String,
    pub channel_description: String,
}

// --------------------------------------------------------------------------------
// Donations
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltifyDonationDynamic {
    pub value: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltifyDonationExtra {
    pub value: String,
    pub amount: String,
    pub message: Option<String>,
    pub currency: String,
    pub username: String,
    pub displayname: String,
}

// --------------------------------------------------------------------------------
// Kick
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KickFollowerExtra {
    pub avatar: Option<String>,
    pub user_id: f64,
    pub username: String,
    pub displayname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KickPointsDynamic {
    pub value: f64,
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KickUserLevels {
    #[serde(rename = "mod")]
    pub moderator: bool,
    pub vip: bool,
    pub is_self: bool,
    pub follower: bool,
    pub subscriber: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KickPointsExtra {
    pub title: String,
    pub value: String,
    pub amount: f64,
    pub origin: String,
    pub points: f64,
    pub prompt: Option<String>,
    pub user_id: f64,
    pub command: String,
    pub message: Option<String>,
    pub currency: String,
    pub platform: String,
    pub username: String,
    pub raw_message: Option<String>,
    #[serde(rename = "amount_type")]
    pub amount_type: String,
    pub displayname: String,
    pub user_levels_raw: KickUserLevels,
    pub currency_symbol: String,
    pub lumiauserlevels: Vec<f64>,
}

// --------------------------------------------------------------------------------
// TikTok
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiktokGiftDynamic {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiktokGiftExtra {
    pub coins: f64,
    pub value: f64,
    pub gift_id: f64,
    pub user_id: String,
    pub describe: String,
    pub gift_name: String,
    pub gift_type: f64,
    pub username: String,
    pub repeat_end: bool,
    pub repeat_count: f64,
    pub diamond_count: f64,
    pub gift_picture_url: String,
    pub receiver_user_id: String,
    pub profile_picture_url: String,
    pub displayname: String,
    pub is_new_gifter: bool,
}

// --------------------------------------------------------------------------------
// YouTube
// --------------------------------------------------------------------------------

/// Shared by `youtube-subscriber` and `youtube-member`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeUserExtra {
    pub avatar: String,
    pub user_id: String,
    pub username: String,
    pub displayname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeSuperstickerExtra {
    pub amount: f64,
    pub username: String,
    pub displayname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeSuperchatDynamic {
    pub value: f64,
    pub currency: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeSuperchatExtra {
    pub value: f64,
    pub amount: f64,
    pub currency: String,
    pub username: String,
    pub displayname: String,
}

// --------------------------------------------------------------------------------
// Crowd Control
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdControlPlatform {
    Twitch,
    Youtube,
    Kick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdcontrolEffectExtra {
    pub game: String,
    pub value: String,
    pub avatar: String,
    pub effect: String,
    pub game_id: String,
    pub artwork: String,
    pub message: String,
    pub effect_id: String,
    pub platform: CrowdControlPlatform,
    pub username: String,
    pub displayname: String,
    /// Effect length as reported by Crowd Control, separate from `Timing`.
    pub duration: f64,
}

// --------------------------------------------------------------------------------
// The narrowed alert
// --------------------------------------------------------------------------------

/// One arm per `AlertShape`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AlertPayload {
    TwitchFollower(Payload<GenericDynamic, TwitchFollowerExtra>),
    TwitchRaid(Payload<ValueFrom, TwitchRaidExtra>),
    TwitchBits(Payload<ValueFrom, TwitchBitsExtra>),
    TwitchSubscriber(Payload<SubscriberDynamic, TwitchSubscriberExtra>),
    TwitchPowerups(Payload<TwitchPowerupsDynamic, TwitchPowerupsExtra>),
    TwitchExtension(Payload<TwitchExtensionDynamic, TwitchExtensionExtra>),
    TiltifyDonation(Payload<TiltifyDonationDynamic, TiltifyDonationExtra>),
    KickFollower(Payload<StringValue, KickFollowerExtra>),
    KickPoints(Payload<KickPointsDynamic, KickPointsExtra>),
    TiktokGift(Payload<TiktokGiftDynamic, TiktokGiftExtra>),
    YoutubeSubscriber(Payload<StringValue, YoutubeUserExtra>),
    YoutubeSupersticker(Payload<NumberValue, YoutubeSuperstickerExtra>),
    YoutubeSuperchat(Payload<YoutubeSuperchatDynamic, YoutubeSuperchatExtra>),
    YoutubeMember(Payload<StringValue, YoutubeUserExtra>),
    CrowdcontrolEffect(Payload<StringValue, CrowdcontrolEffectExtra>),
    Generic(Payload<GenericDynamic, serde_json::Map<String, Value>>),
}

fn decode<T: DeserializeOwned>(raw: &Value) -> Result<T, Error> {
    Ok(serde_path_to_error::deserialize(raw)?)
}

impl AlertPayload {
    /// Decodes `{ dynamic, extraSettings }` from an envelope into the typed arm
    /// for `shape`. Callers are expected to have validated `raw` first.
    pub fn decode(shape: AlertShape, raw: &Value) -> Result<Self, Error> {
        Ok(match shape {
            AlertShape::TwitchFollower => AlertPayload::TwitchFollower(decode(raw)?),
            AlertShape::TwitchRaid => AlertPayload::TwitchRaid(decode(raw)?),
            AlertShape::TwitchBits => AlertPayload::TwitchBits(decode(raw)?),
            AlertShape::TwitchSubscriber => AlertPayload::TwitchSubscriber(decode(raw)?),
            AlertShape::TwitchPowerups => AlertPayload::TwitchPowerups(decode(raw)?),
            AlertShape::TwitchExtension => AlertPayload::TwitchExtension(decode(raw)?),
            AlertShape::TiltifyDonation => AlertPayload::TiltifyDonation(decode(raw)?),
            AlertShape::KickFollower => AlertPayload::KickFollower(decode(raw)?),
            AlertShape::KickPoints => AlertPayload::KickPoints(decode(raw)?),
            AlertShape::TiktokGift => AlertPayload::TiktokGift(decode(raw)?),
            AlertShape::YoutubeSubscriber => AlertPayload::YoutubeSubscriber(decode(raw)?),
            AlertShape::YoutubeSupersticker => AlertPayload::YoutubeSupersticker(decode(raw)?),
            AlertShape::YoutubeSuperchat => AlertPayload::YoutubeSuperchat(decode(raw)?),
            AlertShape::YoutubeMember => AlertPayload::YoutubeMember(decode(raw)?),
            AlertShape::CrowdcontrolEffect => AlertPayload::CrowdcontrolEffect(decode(raw)?),
            AlertShape::Generic => AlertPayload::Generic(decode(raw)?),
        })
    }

    pub fn shape(&self) -> AlertShape {
        match self {
            AlertPayload::TwitchFollower(_) => AlertShape::TwitchFollower,
            AlertPayload::TwitchRaid(_) => AlertShape::TwitchRaid,
            AlertPayload::TwitchBits(_) => AlertShape::TwitchBits,
            AlertPayload::TwitchSubscriber(_) => AlertShape::TwitchSubscriber,
            AlertPayload::TwitchPowerups(_) => AlertShape::TwitchPowerups,
            AlertPayload::TwitchExtension(_) => AlertShape::TwitchExtension,
            AlertPayload::TiltifyDonation(_) => AlertShape::TiltifyDonation,
            AlertPayload::KickFollower(_) => AlertShape::KickFollower,
            AlertPayload::KickPoints(_) => AlertShape::KickPoints,
            AlertPayload::TiktokGift(_) => AlertShape::TiktokGift,
            AlertPayload::YoutubeSubscriber(_) => AlertShape::YoutubeSubscriber,
            AlertPayload::YoutubeSupersticker(_) => AlertShape::YoutubeSupersticker,
            AlertPayload::YoutubeSuperchat(_) => AlertShape::YoutubeSuperchat,
            AlertPayload::YoutubeMember(_) => AlertShape::YoutubeMember,
            AlertPayload::CrowdcontrolEffect(_) => AlertShape::CrowdcontrolEffect,
            AlertPayload::Generic(_) => AlertShape::Generic,
        }
    }
}

/// A validated alert. Built once per incoming event and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub kind: AlertKind,
    /// `fromLumia` on the wire.
    pub originated_internally: bool,
    pub timing: Timing,
    pub common: CommonExtras,
    pub payload: AlertPayload,
    raw: Value,
}

impl AlertEvent {
    pub fn new(
        kind: AlertKind,
        originated_internally: bool,
        timing: Timing,
        common: CommonExtras,
        payload: AlertPayload,
        raw: Value,
    ) -> Self {
        Self { kind, originated_internally, timing, common, payload, raw }
    }

    /// The envelope exactly as it was received.
    pub fn to_wire(&self) -> &Value {
        &self.raw
    }

    pub fn into_wire(self) -> Value {
        self.raw
    }
}
