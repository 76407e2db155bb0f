//! src/eventbus/mod.rs
//!
//! In-process fan-out of overlay events to bounded MPSC subscribers, and a
//! consumer loop that feeds a subscription into an `OverlayRouter`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch, Mutex};
use tracing::{debug, info, warn};

use lumia_common::models::OverlayEvent;

use crate::dispatch::{Dispatched, OverlayRouter};

/// Default size for each subscriber's buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusConfig {
    pub buffer_size: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self { buffer_size: DEFAULT_BUFFER_SIZE }
    }
}

/// Each subscriber gets its own `mpsc::Sender<OverlayEvent>`.
///
/// - If a subscriber's buffer fills, `publish` waits for space.
/// - Subscribers that dropped their receiver are pruned on the next publish.
#[derive(Clone)]
pub struct OverlayBus {
    config: BusConfig,
    subscribers: Arc<Mutex<Vec<mpsc::Sender<OverlayEvent>>>>,
    shutdown_tx: Arc<watch::Sender<bool>>,
    pub shutdown_rx: watch::Receiver<bool>,
}

impl Default for OverlayBus {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayBus {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            config,
            subscribers: Arc::new(Mutex::new(vec![])),
            shutdown_tx: Arc::new(tx),
            shutdown_rx: rx,
        }
    }

    pub fn config(&self) -> BusConfig {
        self.config
    }

    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    pub fn is_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Returns a receiver on which events will be delivered.
    pub async fn subscribe(&self, buffer_size: Option<usize>) -> mpsc::Receiver<OverlayEvent> {
        let size = buffer_size.unwrap_or(self.config.buffer_size).max(1);
        let (tx, rx) = mpsc::channel(size);
        let mut subs = self.subscribers.lock().await;
        subs.push(tx);
        rx
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.lock().await.len()
    }

    /// Publish an event to all live subscribers. Returns how many received
    /// it. Nothing is delivered after shutdown.
    pub async fn publish(&self, event: OverlayEvent) -> usize {
        if self.is_shutdown() {
            debug!("bus is shut down, dropping '{}' event", event.listener());
            return 0;
        }
        let senders = {
            let subs = self.subscribers.lock().await;
            subs.clone()
        };
        let mut delivered = 0;
        let mut closed = false;
        for s in senders {
            if s.send(event.clone()).await.is_ok() {
                delivered += 1;
            } else {
                closed = true;
            }
        }
        if closed {
            let mut subs = self.subscribers.lock().await;
            subs.retain(|s| !s.is_closed());
        }
        delivered
    }
}

// --------------------------------------------------------------------------------
// Router loop
// --------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterStats {
    pub handled: usize,
    pub unhandled: usize,
    pub failed: usize,
}

impl RouterStats {
    pub fn total(&self) -> usize {
        self.handled + self.unhandled + self.failed
    }
}

/// Drains `rx` into `router` until the channel closes or shutdown is set.
/// Handler errors are logged and counted; they do not stop the loop.
pub async fn run_router(
    mut rx: mpsc::Receiver<OverlayEvent>,
    router: Arc<OverlayRouter>,
    mut shutdown: watch::Receiver<bool>,
) -> RouterStats {
    let mut stats = RouterStats::default();
    // Cleared once the bus is gone; the queue is still drained after that.
    let mut watching = true;
    loop {
        if *shutdown.borrow() {
            break;
        }
        tokio::select! {
            maybe = rx.recv() => {
                let Some(event) = maybe else { break };
                match router.route(&event) {
                    Ok(Dispatched::Handled) => stats.handled += 1,
                    Ok(Dispatched::NoHandler) => stats.unhandled += 1,
                    Err(e) => {
                        warn!("'{}' handler failed: {}", event.listener(), e);
                        stats.failed += 1;
                    }
                }
            }
            changed = shutdown.changed(), if watching => {
                if changed.is_err() {
                    watching = false;
                }
            }
        }
    }
    info!(
        "router stopped: {} handled, {} unhandled, {} failed",
        stats.handled, stats.unhandled, stats.failed
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumia_common::models::CustomOverlayContentEvent;
    use tokio::time::{sleep, timeout, Duration};

    fn content(id: &str) -> OverlayEvent {
        OverlayEvent::OverlayContent(CustomOverlayContentEvent {
            code_id: id.to_string(),
            content: String::new(),
        })
    }

    fn code_id(event: &OverlayEvent) -> &str {
        match event {
            OverlayEvent::OverlayContent(c) => &c.code_id,
            _ => panic!("unexpected event type"),
        }
    }

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let bus = OverlayBus::new();
        let mut rx1 = bus.subscribe(Some(5)).await;
        let mut rx2 = bus.subscribe(Some(5)).await;

        assert_eq!(bus.publish(content("a")).await, 2);

        assert_eq!(code_id(&rx1.recv().await.expect("rx1 should get event")), "a");
        assert_eq!(code_id(&rx2.recv().await.expect("rx2 should get event")), "a");
    }

    #[tokio::test]
    async fn test_backpressure_blocking() {
        let bus = OverlayBus::new();
        let mut rx = bus.subscribe(Some(1)).await;

        bus.publish(content("msg1")).await;

        let handle = tokio::spawn(async move {
            sleep(Duration::from_millis(50)).await;
            let first = rx.recv().await.expect("expected first message");
            let second = rx.recv().await.expect("expected second message");
            (first, second)
        });

        let second_publish = bus.publish(content("msg2"));
        let result = timeout(Duration::from_millis(500), second_publish).await;
        assert!(result.is_ok(), "publish should eventually unblock");

        let (evt1, evt2) = handle.await.unwrap();
        assert_eq!(code_id(&evt1), "msg1");
        assert_eq!(code_id(&evt2), "msg2");
    }

    #[tokio::test]
    async fn test_dropped_subscriber_is_pruned() {
        let bus = OverlayBus::new();
        let rx = bus.subscribe(Some(1)).await;
        let _keep = bus.subscribe(Some(4)).await;
        drop(rx);

        assert_eq!(bus.publish(content("x")).await, 1);
        assert_eq!(bus.subscriber_count().await, 1);
    }

    #[tokio::test]
    async fn test_no_publish_after_shutdown() {
        let bus = OverlayBus::new();
        let mut rx = bus.subscribe(None).await;
        bus.shutdown();
        assert!(bus.is_shutdown());
        assert_eq!(bus.publish(content("late")).await, 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_default_config() {
        assert_eq!(BusConfig::default().buffer_size, DEFAULT_BUFFER_SIZE);
    }
}
