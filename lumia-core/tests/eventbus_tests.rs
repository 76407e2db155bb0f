//! tests/eventbus_tests.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::time::{timeout, Duration};

use lumia_common::models::{AlertKind, OverlayEvent};
use lumia_core::catalog::validate;
use lumia_core::dispatch::OverlayRouter;
use lumia_core::eventbus::{run_router, BusConfig, OverlayBus, RouterStats};
use lumia_core::test_utils::fixtures::fixture;
use lumia_core::Error;

fn alert(kind: AlertKind) -> OverlayEvent {
    OverlayEvent::Alert(validate(kind, &fixture(kind)).unwrap())
}

#[tokio::test]
async fn test_router_drains_until_closed() {
    let bus = OverlayBus::with_config(BusConfig { buffer_size: 4 });
    let rx = bus.subscribe(None).await;

    let hits = Arc::new(AtomicUsize::new(0));
    let mut router = OverlayRouter::new();
    let h = hits.clone();
    router.alerts_mut().on_kind(AlertKind::TwitchRaid, move |_| {
        h.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    router
        .alerts_mut()
        .on_kind(AlertKind::TwitchBits, |_| Err(Error::Handler("nope".into())));

    let task = tokio::spawn(run_router(rx, Arc::new(router), bus.shutdown_rx.clone()));

    bus.publish(alert(AlertKind::TwitchRaid)).await;
    bus.publish(alert(AlertKind::TwitchRaid)).await;
    bus.publish(alert(AlertKind::TwitchBits)).await;
    bus.publish(alert(AlertKind::KickFollower)).await;
    drop(bus);

    let stats = timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    assert_eq!(stats, RouterStats { handled: 2, unhandled: 1, failed: 1 });
    assert_eq!(stats.total(), 4);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_router_stops_on_shutdown() {
    let bus = OverlayBus::new();
    let rx = bus.subscribe(None).await;
    let task = tokio::spawn(run_router(rx, Arc::new(OverlayRouter::new()), bus.shutdown_rx.clone()));

    bus.shutdown();
    let stats = timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    assert_eq!(stats.total(), 0);
}

#[test]
fn test_publish_without_runtime_helpers() {
    let bus = OverlayBus::new();
    let mut rx = tokio_test::block_on(bus.subscribe(Some(2)));
    let delivered = tokio_test::block_on(bus.publish(alert(AlertKind::YoutubeMember)));
    assert_eq!(delivered, 1);
    assert!(matches!(rx.try_recv(), Ok(OverlayEvent::Alert(a)) if a.kind == AlertKind::YoutubeMember));
}
