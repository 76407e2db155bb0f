//! tests/dispatch_tests.rs
use std::sync::{Arc, Mutex};

use lumia_common::models::{AlertEvent, AlertKind, OverlayEvent};
use lumia_core::catalog::validate;
use lumia_core::dispatch::{AlertHandler, AlertHandlers, Dispatched, OverlayRouter};
use lumia_core::test_utils::fixtures::fixture;
use lumia_core::Error;

fn event(kind: AlertKind) -> AlertEvent {
    validate(kind, &fixture(kind)).unwrap()
}

/// Records which kinds it saw.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<AlertKind>>,
}

impl AlertHandler for Recorder {
    fn handle(&self, event: &AlertEvent) -> Result<(), Error> {
        self.seen.lock().unwrap().push(event.kind);
        Ok(())
    }
}

#[test]
fn test_only_matching_handler_runs() {
    let follower = Arc::new(Recorder::default());
    let raid = Arc::new(Recorder::default());

    let mut handlers = AlertHandlers::new();
    handlers.register(AlertKind::TwitchFollower, follower.clone());
    handlers.register(AlertKind::TwitchRaid, raid.clone());

    let outcome = handlers.dispatch(&event(AlertKind::TwitchFollower)).unwrap();
    assert_eq!(outcome, Dispatched::Handled);
    assert_eq!(*follower.seen.lock().unwrap(), vec![AlertKind::TwitchFollower]);
    assert!(raid.seen.lock().unwrap().is_empty());
}

#[test]
fn test_no_handler_is_noop() {
    let recorder = Arc::new(Recorder::default());
    let mut handlers = AlertHandlers::new();
    handlers.register(AlertKind::TwitchFollower, recorder.clone());

    let outcome = handlers.dispatch(&event(AlertKind::KickFollower)).unwrap();
    assert_eq!(outcome, Dispatched::NoHandler);
    assert!(recorder.seen.lock().unwrap().is_empty());
}

#[test]
fn test_typo_rejected_at_registration() {
    let mut handlers = AlertHandlers::new();
    let err = handlers.on("twitch-followr", |_| Ok(())).unwrap_err();
    assert_eq!(err.0, "twitch-followr");
    assert!(handlers.is_empty());

    assert!(handlers.on("twitch-follower", |_| Ok(())).is_ok());
    assert_eq!(handlers.registered_kinds(), vec![AlertKind::TwitchFollower]);
}

#[test]
fn test_router_sibling_listeners() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut router = OverlayRouter::new();
    for name in ["chat", "hfx", "virtuallight", "overlaycontent"] {
        let seen = seen.clone();
        router
            .on(name, move |e: &OverlayEvent| {
                seen.lock().unwrap().push(e.listener());
                Ok(())
            })
            .unwrap();
    }

    let content = OverlayEvent::OverlayContent(lumia_common::models::CustomOverlayContentEvent {
        code_id: "abc".into(),
        content: "hello".into(),
    });
    assert_eq!(router.route(&content).unwrap(), Dispatched::Handled);
    assert_eq!(
        router.route(&OverlayEvent::Alert(event(AlertKind::TwitchRaid))).unwrap(),
        Dispatched::NoHandler
    );
    assert_eq!(seen.lock().unwrap().len(), 1);
}
