// File: lumia-core/src/catalog/shapes.rs
//
// One `VariantSchema` per `AlertShape`. Field lists mirror what the overlay
// runtime sends, including fields it repeats in both `dynamic` and
// `extraSettings`; those repeats are part of the contract and stay.

use lumia_common::models::AlertShape;

use super::schema::{
    nullable, optional, optional_nullable, required, DynamicArm, DynamicSchema, FieldSpec,
    FieldType, TagValue, VariantSchema,
};

const STR: FieldType = FieldType::String;
const NUM: FieldType = FieldType::Number;
const BOOL: FieldType = FieldType::Boolean;
const STR_OR_NUM: FieldType = FieldType::AnyOf { types: &[FieldType::String, FieldType::Number] };
const SUB_TIER: FieldType = FieldType::OneOf { values: &["1000", "2000", "3000"] };
const POINTS_OR_BITS: FieldType = FieldType::OneOf { values: &["points", "bits"] };

/// Checked on every alert's `extraSettings` unless the shape declares the
/// same name itself. The general alert typing lists username, displayname,
/// userId and avatar as always present while per-kind typings omit them
/// (tiltify has no avatar, youtube-superchat no userId); they are optional
/// here so neither revision's payloads get rejected.
pub static COMMON_EXTRAS: &[FieldSpec] = &[
    required("site", STR),
    required("timestamp", FieldType::Timestamp),
    optional("username", STR),
    optional("displayname", STR),
    optional("userId", STR_OR_NUM),
    optional_nullable("avatar", STR),
];

// --------------------------------------------------------------------------------
// Twitch
// --------------------------------------------------------------------------------

/// The detailed typing declares `dynamic` as `Record<string, never>`, the
/// general one as `{ value: number | string }`. Superset: an object whose
/// `value` is optional.
const FOLLOWER_DYNAMIC: &[FieldSpec] = &[optional("value", STR_OR_NUM)];

pub static TWITCH_FOLLOWER: VariantSchema = VariantSchema {
    shape: AlertShape::TwitchFollower,
    dynamic: DynamicSchema::Record { fields: FOLLOWER_DYNAMIC },
    extra_settings: &[
        required("avatar", STR),
        required("userId", STR),
        required("username", STR),
        required("displayname", STR),
        required("channelViews", NUM),
        required("channelDescription", STR),
    ],
};

pub static TWITCH_RAID: VariantSchema = VariantSchema {
    shape: AlertShape::TwitchRaid,
    dynamic: DynamicSchema::Record {
        fields: &[required("value", NUM), required("username", STR)],
    },
    extra_settings: &[
        required("avatar", STR),
        required("userId", STR),
        required("username", STR),
        required("displayname", STR),
        required("channelViews", NUM),
        nullable("channelDescription", STR),
        required("viewers", NUM),
        required("value", NUM),
    ],
};

pub static TWITCH_BITS: VariantSchema = VariantSchema {
    shape: AlertShape::TwitchBits,
    dynamic: DynamicSchema::Record {
        fields: &[required("value", NUM), required("username", STR)],
    },
    extra_settings: &[
        required("bits", NUM),
        required("amount", NUM),
        required("value", NUM),
        required("avatar", STR),
        required("userId", STR),
        nullable("message", STR),
        required("username", STR),
        required("rawMessage", STR),
        required("displayname", STR),
        required("channelViews", NUM),
        required("full_message", STR),
        nullable("channelDescription", STR),
    ],
};

const SUB_REGULAR: &[FieldSpec] = &[
    required("value", SUB_TIER),
    required("username", STR),
    required("subMonths", NUM),
    required("streakMonths", NUM),
    required("isPrime", BOOL),
];

const SUB_GIFT: &[FieldSpec] = &[
    required("value", SUB_TIER),
    required("username", STR),
    required("subMonths", NUM),
    required("giftAmount", NUM),
    required("totalGifts", NUM),
    required("isGift", FieldType::True),
    optional("isAnon", BOOL),
    required("isPrime", BOOL),
    required("isResub", BOOL),
];

pub static TWITCH_SUBSCRIBER: VariantSchema = VariantSchema {
    shape: AlertShape::TwitchSubscriber,
    dynamic: DynamicSchema::Tagged {
        tag: "isGift",
        arms: &[
            // The regular arm never sends `isGift`; older payloads send
            // `isGift: false`, accepted as the same arm.
            DynamicArm {
                name: "regular",
                accepts: &[TagValue::Absent, TagValue::Bool(false)],
                fields: SUB_REGULAR,
            },
            DynamicArm {
                name: "gift",
                accepts: &[TagValue::Bool(true)],
                fields: SUB_GIFT,
            },
        ],
    },
    extra_settings: &[
        required("tier", STR),
        required("value", SUB_TIER),
        required("avatar", STR),
        optional("gifter", STR),
        optional("recipient", STR),
        optional("recipients", STR),
        required("userId", STR),
        nullable("message", STR),
        required("subPlan", STR),
        required("subPlanName", STR),
        required("username", STR),
        required("subMonths", NUM),
        optional("streakMonths", NUM),
        optional("giftAmount", NUM),
        optional("totalGifts", NUM),
        required("displayname", STR),
        required("channelViews", NUM),
        nullable("channelDescription", STR),
    ],
};

pub static TWITCH_POWERUPS: VariantSchema = VariantSchema {
    shape: AlertShape::TwitchPowerups,
    dynamic: DynamicSchema::Record {
        fields: &[required("name", STR), required("value", NUM), required("username", STR)],
    },
    extra_settings: &[
        required("bits", NUM),
        required("type", STR),
        required("value", NUM),
        required("amount", NUM),
        required("avatar", STR),
        required("userId", STR),
        required("username", STR),
        nullable("rawMessage", STR),
        required("displayname", STR),
        required("channelViews", NUM),
        nullable("full_message", STR),
        nullable("channelDescription", STR),
    ],
};

pub static TWITCH_EXTENSION: VariantSchema = VariantSchema {
    shape: AlertShape::TwitchExtension,
    dynamic: DynamicSchema::Record {
        fields: &[
            required("username", STR),
            required("name", STR),
            required("currency", POINTS_OR_BITS),
        ],
    },
    extra_settings: &[
        required("bits", NUM),
        required("amount", NUM),
        required("avatar", STR),
        required("origin", FieldType::OneOf { values: &["twitch-extension"] }),
        required("userId", STR),
        required("command", STR),
        required("command_id", STR),
        required("message", STR),
        required("currency", POINTS_OR_BITS),
        required("amount_type", POINTS_OR_BITS),
        required("currencySymbol", STR),
        required("platform", FieldType::OneOf { values: &["twitch"] }),
        required("username", STR),
        required("displayname", STR),
        // Extensions report channel views as either a string or a number.
        required("channelViews", STR_OR_NUM),
        required("full_message", STR),
        required("channelDescription", STR),
    ],
};

// --------------------------------------------------------------------------------
// Donations
// --------------------------------------------------------------------------------

pub static TILTIFY_DONATION: VariantSchema = VariantSchema {
    shape: AlertShape::TiltifyDonation,
    dynamic: DynamicSchema::Record {
        fields: &[required("value", STR), required("currency", STR)],
    },
    extra_settings: &[
        required("value", STR),
        required("amount", STR),
        nullable("message", STR),
        required("currency", STR),
        required("username", STR),
        required("displayname", STR),
    ],
};

// --------------------------------------------------------------------------------
// Kick
// --------------------------------------------------------------------------------

pub static KICK_FOLLOWER: VariantSchema = VariantSchema {
    shape: AlertShape::KickFollower,
    dynamic: DynamicSchema::Record { fields: &[required("value", STR)] },
    extra_settings: &[
        nullable("avatar", STR),
        required("userId", NUM),
        required("username", STR),
        required("displayname", STR),
    ],
};

const KICK_USER_LEVELS: &[FieldSpec] = &[
    required("mod", BOOL),
    required("vip", BOOL),
    required("isSelf", BOOL),
    required("follower", BOOL),
    required("subscriber", BOOL),
];

pub static KICK_POINTS: VariantSchema = VariantSchema {
    shape: AlertShape::KickPoints,
    dynamic: DynamicSchema::Record {
        fields: &[
            required("value", NUM),
            required("name", STR),
            required("currency", FieldType::OneOf { values: &["points"] }),
        ],
    },
    extra_settings: &[
        required("title", STR),
        required("value", STR),
        required("amount", NUM),
        required("origin", FieldType::OneOf { values: &["kick-points"] }),
        required("points", NUM),
        nullable("prompt", STR),
        required("userId", NUM),
        required("command", STR),
        nullable("message", STR),
        required("currency", FieldType::OneOf { values: &["points"] }),
        required("platform", FieldType::OneOf { values: &["kick"] }),
        required("username", STR),
        nullable("rawMessage", STR),
        required("amount_type", FieldType::OneOf { values: &["points"] }),
        required("displayname", STR),
        required("userLevelsRaw", FieldType::Object { fields: KICK_USER_LEVELS }),
        required("currencySymbol", STR),
        required("lumiauserlevels", FieldType::ArrayOf { item: &NUM }),
    ],
};

// --------------------------------------------------------------------------------
// TikTok
// --------------------------------------------------------------------------------

pub static TIKTOK_GIFT: VariantSchema = VariantSchema {
    shape: AlertShape::TiktokGift,
    dynamic: DynamicSchema::Record {
        fields: &[required("name", STR), required("value", NUM)],
    },
    extra_settings: &[
        required("coins", NUM),
        required("value", NUM),
        required("giftId", NUM),
        required("userId", STR),
        required("describe", STR),
        required("giftName", STR),
        required("giftType", NUM),
        required("username", STR),
        required("repeatEnd", BOOL),
        required("repeatCount", NUM),
        required("diamondCount", NUM),
        required("giftPictureUrl", STR),
        required("receiverUserId", STR),
        required("profilePictureUrl", STR),
        required("displayname", STR),
        required("isNewGifter", BOOL),
    ],
};

// --------------------------------------------------------------------------------
// YouTube
// --------------------------------------------------------------------------------

const YOUTUBE_USER_EXTRAS: &[FieldSpec] = &[
    required("avatar", STR),
    required("userId", STR),
    required("username", STR),
    required("displayname", STR),
];

pub static YOUTUBE_SUBSCRIBER: VariantSchema = VariantSchema {
    shape: AlertShape::YoutubeSubscriber,
    dynamic: DynamicSchema::Record { fields: &[required("value", STR)] },
    extra_settings: YOUTUBE_USER_EXTRAS,
};

pub static YOUTUBE_SUPERSTICKER: VariantSchema = VariantSchema {
    shape: AlertShape::YoutubeSupersticker,
    dynamic: DynamicSchema::Record { fields: &[required("value", NUM)] },
    extra_settings: &[
        required("amount", NUM),
        required("username", STR),
        required("displayname", STR),
    ],
};

pub static YOUTUBE_SUPERCHAT: VariantSchema = VariantSchema {
    shape: AlertShape::YoutubeSuperchat,
    dynamic: DynamicSchema::Record {
        fields: &[required("value", NUM), required("currency", STR), required("username", STR)],
    },
    extra_settings: &[
        required("value", NUM),
        required("amount", NUM),
        required("currency", STR),
        required("username", STR),
        required("displayname", STR),
    ],
};

pub static YOUTUBE_MEMBER: VariantSchema = VariantSchema {
    shape: AlertShape::YoutubeMember,
    dynamic: DynamicSchema::Record { fields: &[required("value", STR)] },
    extra_settings: YOUTUBE_USER_EXTRAS,
};

// --------------------------------------------------------------------------------
// Crowd Control
// --------------------------------------------------------------------------------

pub static CROWDCONTROL_EFFECT: VariantSchema = VariantSchema {
    shape: AlertShape::CrowdcontrolEffect,
    dynamic: DynamicSchema::Record { fields: &[required("value", STR)] },
    extra_settings: &[
        required("game", STR),
        required("value", STR),
        required("avatar", STR),
        required("effect", STR),
        required("gameId", STR),
        required("artwork", STR),
        required("message", STR),
        required("effectId", STR),
        required("platform", FieldType::OneOf { values: &["twitch", "youtube", "kick"] }),
        required("username", STR),
        required("displayname", STR),
        required("duration", NUM),
    ],
};

// --------------------------------------------------------------------------------
// Everything else
// --------------------------------------------------------------------------------

/// The general alert typing declares `dynamic: { value: number | string }`
/// as always present, but lifecycle kinds (stream live/offline, OBS
/// transitions) carry no value. `value` is optional here; the user fields
/// come from `COMMON_EXTRAS`.
pub static GENERIC: VariantSchema = VariantSchema {
    shape: AlertShape::Generic,
    dynamic: DynamicSchema::Record { fields: &[optional("value", STR_OR_NUM)] },
    extra_settings: &[],
};
