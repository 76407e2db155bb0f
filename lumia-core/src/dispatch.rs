// File: lumia-core/src/dispatch.rs
//
// Per-kind alert handlers and the overlay-wide `on(listener, ..)` surface.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use lumia_common::error::{Error, UnknownKindError};
use lumia_common::models::{AlertEvent, AlertKind, OverlayEvent, OverlayListener};

/// Handles one validated alert.
pub trait AlertHandler: Send + Sync {
    fn handle(&self, event: &AlertEvent) -> Result<(), Error>;
}

impl<F> AlertHandler for F
where
    F: Fn(&AlertEvent) -> Result<(), Error> + Send + Sync,
{
    fn handle(&self, event: &AlertEvent) -> Result<(), Error> {
        self(event)
    }
}

/// Handles any overlay event routed to the listener it was registered on.
pub trait OverlayHandler: Send + Sync {
    fn handle(&self, event: &OverlayEvent) -> Result<(), Error>;
}

impl<F> OverlayHandler for F
where
    F: Fn(&OverlayEvent) -> Result<(), Error> + Send + Sync,
{
    fn handle(&self, event: &OverlayEvent) -> Result<(), Error> {
        self(event)
    }
}

/// Outcome of a dispatch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Handled,
    /// Nothing registered for the event; it was dropped.
    NoHandler,
}

// --------------------------------------------------------------------------------
// AlertHandlers
// --------------------------------------------------------------------------------

/// At most one handler per alert kind.
#[derive(Default, Clone)]
pub struct AlertHandlers {
    handlers: HashMap<AlertKind, Arc<dyn AlertHandler>>,
}

impl AlertHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers by wire string. Unknown strings are rejected here, not at
    /// dispatch time.
    pub fn on<F>(&mut self, kind: &str, handler: F) -> Result<&mut Self, UnknownKindError>
    where
        F: Fn(&AlertEvent) -> Result<(), Error> + Send + Sync + 'static,
    {
        let kind: AlertKind = kind.parse()?;
        Ok(self.register(kind, Arc::new(handler)))
    }

    pub fn on_kind<F>(&mut self, kind: AlertKind, handler: F) -> &mut Self
    where
        F: Fn(&AlertEvent) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.register(kind, Arc::new(handler))
    }

    /// Registers a shared handler; a later registration for the same kind
    /// replaces it.
    pub fn register(&mut self, kind: AlertKind, handler: Arc<dyn AlertHandler>) -> &mut Self {
        if self.handlers.insert(kind, handler).is_some() {
            warn!("replacing existing handler for alert kind '{}'", kind);
        } else {
            debug!("registered handler for alert kind '{}'", kind);
        }
        self
    }

    pub fn remove(&mut self, kind: AlertKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    pub fn contains(&self, kind: AlertKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Kinds with a handler, in declaration order.
    pub fn registered_kinds(&self) -> Vec<AlertKind> {
        let mut kinds: Vec<AlertKind> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the handler registered for `event.kind`, and only that one.
    pub fn dispatch(&self, event: &AlertEvent) -> Result<Dispatched, Error> {
        match self.handlers.get(&event.kind) {
            Some(handler) => {
                debug!("dispatching '{}'", event.kind);
                handler.handle(event)?;
                Ok(Dispatched::Handled)
            }
            None => {
                debug!("no handler for '{}', dropping", event.kind);
                Ok(Dispatched::NoHandler)
            }
        }
    }
}

impl std::fmt::Debug for AlertHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertHandlers")
            .field("kinds", &self.registered_kinds())
            .finish()
    }
}

// --------------------------------------------------------------------------------
// OverlayRouter
// --------------------------------------------------------------------------------

/// One handler per listener name, plus per-kind alert handlers.
///
/// Alerts go to the kind-specific handler when one exists, otherwise to the
/// handler registered on the `alert` listener.
#[derive(Default, Clone)]
pub struct OverlayRouter {
    listeners: HashMap<OverlayListener, Arc<dyn OverlayHandler>>,
    alerts: AlertHandlers,
}

impl OverlayRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, listener: &str, handler: F) -> Result<&mut Self, UnknownKindError>
    where
        F: Fn(&OverlayEvent) -> Result<(), Error> + Send + Sync + 'static,
    {
        let listener: OverlayListener = listener.parse()?;
        Ok(self.register(listener, Arc::new(handler)))
    }

    pub fn on_listener<F>(&mut self, listener: OverlayListener, handler: F) -> &mut Self
    where
        F: Fn(&OverlayEvent) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.register(listener, Arc::new(handler))
    }

    pub fn register(&mut self, listener: OverlayListener, handler: Arc<dyn OverlayHandler>) -> &mut Self {
        if self.listeners.insert(listener, handler).is_some() {
            warn!("replacing existing handler for listener '{}'", listener);
        }
        self
    }

    pub fn alerts(&self) -> &AlertHandlers {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertHandlers {
        &mut self.alerts
    }

    pub fn route(&self, event: &OverlayEvent) -> Result<Dispatched, Error> {
        if let OverlayEvent::Alert(alert) = event {
            if self.alerts.contains(alert.kind) {
                return self.alerts.dispatch(alert);
            }
        }
        match self.listeners.get(&event.listener()) {
            Some(handler) => {
                handler.handle(event)?;
                Ok(Dispatched::Handled)
            }
            None => {
                debug!("no '{}' listener registered", event.listener());
                Ok(Dispatched::NoHandler)
            }
        }
    }
}

impl std::fmt::Debug for OverlayRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut listeners: Vec<&str> = self.listeners.keys().map(|l| l.as_str()).collect();
        listeners.sort();
        f.debug_struct("OverlayRouter")
            .field("listeners", &listeners)
            .field("alerts", &self.alerts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::catalog::validate;
    use crate::test_utils::fixtures::fixture;

    fn event(kind: AlertKind) -> AlertEvent {
        validate(kind, &fixture(kind)).unwrap()
    }

    #[test]
    fn test_replacing_handler_keeps_one() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut handlers = AlertHandlers::new();
        handlers.on_kind(AlertKind::TwitchRaid, |_| Err(Error::Handler("old".into())));
        let h = hits.clone();
        handlers.on_kind(AlertKind::TwitchRaid, move |_| {
            h.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers.dispatch(&event(AlertKind::TwitchRaid)).unwrap(), Dispatched::Handled);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_error_propagates() {
        let mut handlers = AlertHandlers::new();
        handlers.on_kind(AlertKind::TwitchBits, |_| Err(Error::Handler("boom".into())));
        let err = handlers.dispatch(&event(AlertKind::TwitchBits)).unwrap_err();
        assert!(matches!(err, Error::Handler(msg) if msg == "boom"));
    }

    #[test]
    fn test_registered_kinds_sorted() {
        let mut handlers = AlertHandlers::new();
        handlers.on_kind(AlertKind::KickFollower, |_| Ok(()));
        handlers.on_kind(AlertKind::TwitchFollower, |_| Ok(()));
        let kinds = handlers.registered_kinds();
        let pos = |k| AlertKind::ALL.iter().position(|x| *x == k).unwrap();
        assert!(pos(kinds[0]) < pos(kinds[1]));
    }

    #[test]
    fn test_router_prefers_kind_handler() {
        let generic = Arc::new(AtomicUsize::new(0));
        let specific = Arc::new(AtomicUsize::new(0));
        let mut router = OverlayRouter::new();
        let g = generic.clone();
        router
            .on("alert", move |_| {
                g.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();
        let s = specific.clone();
        router.alerts_mut().on_kind(AlertKind::TwitchRaid, move |_| {
            s.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        router.route(&OverlayEvent::Alert(event(AlertKind::TwitchRaid))).unwrap();
        router.route(&OverlayEvent::Alert(event(AlertKind::TwitchBits))).unwrap();
        assert_eq!(specific.load(Ordering::SeqCst), 1);
        assert_eq!(generic.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_router_rejects_unknown_listener() {
        let mut router = OverlayRouter::new();
        assert!(router.on("lights", |_| Ok(())).is_err());
    }
}
