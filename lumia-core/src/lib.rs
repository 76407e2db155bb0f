// src/lib.rs

pub mod catalog;
pub mod dispatch;
pub mod eventbus;
pub mod frame;
pub mod test_utils;

pub use catalog::{list_kinds, parse_alert, shape_for, validate, validate_str};
pub use dispatch::{AlertHandler, AlertHandlers, Dispatched, OverlayHandler, OverlayRouter};
pub use eventbus::{BusConfig, OverlayBus, RouterStats};
pub use frame::{OverlayFrame, decode_frame, read_frames};
pub use lumia_common::error::Error;
