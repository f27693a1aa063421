//! Cross-tab logout channel
//!
//! A logout performed in one tab must reach every other open tab of the
//! same origin. The channel is a plain publish/subscribe seam: the
//! browser backend rides on storage-change events, the in-memory backend
//! below delivers synchronously and backs the tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SessionResult;

/// A logout event, stamped with epoch milliseconds at the publisher.
///
/// The timestamp only has to change between publishes so observers see a
/// fresh value; subscribers never compare it against a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogoutSignal {
    pub at_ms: i64,
}

impl LogoutSignal {
    pub fn new(at_ms: i64) -> Self {
        Self { at_ms }
    }
}

/// Handler invoked for every observed logout signal
pub type SignalHandler = Box<dyn Fn(LogoutSignal)>;

/// Active subscription; dropping it unsubscribes
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Publish/subscribe contract for logout propagation
pub trait LogoutChannel {
    /// Announce a logout to every subscriber, including other tabs
    fn publish(&self, signal: LogoutSignal) -> SessionResult<()>;

    /// Observe logout signals until the returned subscription is dropped
    fn subscribe(&self, handler: SignalHandler) -> Subscription;
}

/// Synchronous in-process [`LogoutChannel`].
///
/// Clones share the same subscriber list. Unlike the browser storage
/// channel, the publishing handle's own subscribers are notified too;
/// observers are idempotent so the difference is harmless.
#[derive(Clone, Default)]
pub struct MemoryLogoutChannel {
    subscribers: Rc<RefCell<Vec<(usize, Rc<dyn Fn(LogoutSignal)>)>>>,
    next_id: Rc<RefCell<usize>>,
}

impl MemoryLogoutChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogoutChannel for MemoryLogoutChannel {
    fn publish(&self, signal: LogoutSignal) -> SessionResult<()> {
        let handlers: Vec<_> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(signal);
        }
        Ok(())
    }

    fn subscribe(&self, handler: SignalHandler) -> Subscription {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };
        self.subscribers.borrow_mut().push((id, Rc::from(handler)));

        let subscribers = self.subscribers.clone();
        Subscription::new(move || {
            subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemorySessionStore, SessionStore};
    use std::cell::Cell;

    #[test]
    fn published_signal_reaches_subscribers() {
        let channel = MemoryLogoutChannel::new();
        let seen = Rc::new(Cell::new(None));

        let seen_in_handler = seen.clone();
        let _sub = channel.subscribe(Box::new(move |signal| {
            seen_in_handler.set(Some(signal));
        }));

        channel.publish(LogoutSignal::new(1_724_680_000_000)).unwrap();
        assert_eq!(seen.get(), Some(LogoutSignal::new(1_724_680_000_000)));
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let channel = MemoryLogoutChannel::new();
        let count = Rc::new(Cell::new(0));

        let count_in_handler = count.clone();
        let sub = channel.subscribe(Box::new(move |_| {
            count_in_handler.set(count_in_handler.get() + 1);
        }));

        channel.publish(LogoutSignal::new(1)).unwrap();
        drop(sub);
        channel.publish(LogoutSignal::new(2)).unwrap();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn logout_in_one_tab_clears_the_other() {
        // Tab A and tab B share the origin-wide channel but hold their
        // own store handles.
        let channel = MemoryLogoutChannel::new();
        let store_a = MemorySessionStore::new();
        let store_b = MemorySessionStore::new();
        store_a.set_token("a.b.c").unwrap();
        store_b.set_token("a.b.c").unwrap();

        let observer = store_b.clone();
        let _sub = channel.subscribe(Box::new(move |_| {
            observer.clear().ok();
        }));

        // Tab A logs out: clears locally first, then broadcasts.
        store_a.clear().unwrap();
        channel.publish(LogoutSignal::new(42)).unwrap();

        assert_eq!(store_a.token(), None);
        assert_eq!(store_b.token(), None);
    }

    #[test]
    fn repeated_signals_are_idempotent_for_observers() {
        let channel = MemoryLogoutChannel::new();
        let store = MemorySessionStore::new();

        let observer = store.clone();
        let _sub = channel.subscribe(Box::new(move |_| {
            observer.clear().ok();
        }));

        channel.publish(LogoutSignal::new(1)).unwrap();
        channel.publish(LogoutSignal::new(2)).unwrap();
        assert_eq!(store.token(), None);
    }
}
