// File: lumia-common/src/models/mod.rs
pub mod alert_kind;
pub mod alert;
pub mod overlay;
pub mod platform;

pub use alert_kind::{AlertKind, AlertShape};
pub use alert::{AlertEvent, AlertPayload, CommonExtras, Payload, StringOrNumber, Timing};
pub use overlay::{
    ChatEvent, CustomOverlayContentEvent, HfxEvent, OverlayEvent, OverlayListener, UserLevel,
    UserLevels, VirtualLightEvent,
};
pub use platform::Site;
