//! Theme change observers
//!
//! Observers are held weakly: registering never extends an observer's
//! lifetime, and a dropped observer is pruned on the next notification.
//! Notification is a zero-payload broadcast; observers query the
//! [`ThemeContext`] for whatever state they need.
//!
//! Registration and deregistration are safe from inside a callback. Each
//! round iterates a snapshot taken when the round starts: an observer removed
//! mid-round is not called afterwards, and one added mid-round first hears
//! the next round.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::context::ThemeContext;

new_key_type! {
    /// Handle identifying a registered observer
    pub struct ObserverId;
}

/// Receives a callback whenever a concrete theme is about to be applied
pub trait ThemeObserver: Send + Sync {
    fn theme_changed(&self, ctx: &ThemeContext);
}

impl<F> ThemeObserver for F
where
    F: Fn(&ThemeContext) + Send + Sync,
{
    fn theme_changed(&self, ctx: &ThemeContext) {
        self(ctx)
    }
}

type Slots = SlotMap<ObserverId, Weak<dyn ThemeObserver>>;

/// Weakly-held set of theme observers
#[derive(Default)]
pub struct ObserverHub {
    slots: Mutex<Slots>,
}

impl ObserverHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `observer` without taking ownership of it
    pub fn register<O>(&self, observer: &Arc<O>) -> ObserverId
    where
        O: ThemeObserver + 'static,
    {
        let observer: Arc<dyn ThemeObserver> = observer.clone();
        let id = self.slots().insert(Arc::downgrade(&observer));
        tracing::trace!("ObserverHub::register - {:?}", id);
        id
    }

    /// Remove an observer; returns `false` if it was not registered
    pub fn unregister(&self, id: ObserverId) -> bool {
        let removed = self.slots().remove(id).is_some();
        if removed {
            tracing::trace!("ObserverHub::unregister - {:?}", id);
        }
        removed
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.slots().contains_key(id)
    }

    /// Number of registered observers whose target is still alive
    pub fn len(&self) -> usize {
        self.slots()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every live observer once; returns how many were called
    pub fn notify(&self, ctx: &ThemeContext) -> usize {
        let round: Vec<(ObserverId, Arc<dyn ThemeObserver>)> = {
            let mut slots = self.slots();
            slots.retain(|_, weak| weak.strong_count() > 0);
            slots
                .iter()
                .filter_map(|(id, weak)| weak.upgrade().map(|strong| (id, strong)))
                .collect()
        };

        let mut called = 0;
        for (id, observer) in round {
            // The lock is not held across callbacks, so an earlier observer
            // may have unregistered this one.
            if !self.contains(id) {
                continue;
            }
            observer.theme_changed(ctx);
            called += 1;
        }
        tracing::trace!("ObserverHub::notify - {} observer(s)", called);
        called
    }
}

impl std::fmt::Debug for ObserverHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverHub")
            .field("observers", &self.slots().len())
            .finish()
    }
}

/// Registration guard that unregisters its observer when dropped
#[must_use = "the observer is unregistered when the subscription is dropped"]
pub struct Subscription {
    hub: Weak<ObserverHub>,
    id: ObserverId,
}

impl Subscription {
    pub(crate) fn new(hub: &Arc<ObserverHub>, id: ObserverId) -> Self {
        Self {
            hub: Arc::downgrade(hub),
            id,
        }
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Keep the registration for the observer's whole lifetime
    pub fn detach(mut self) -> ObserverId {
        self.hub = Weak::new();
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.unregister(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Subscription").field(&self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl ThemeObserver for Counter {
        fn theme_changed(&self, _ctx: &ThemeContext) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Counter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_notify_calls_each_live_observer() {
        let ctx = ThemeContext::new();
        let a = Arc::new(Counter::default());
        let b = Arc::new(Counter::default());
        let _sa = ctx.subscribe(&a);
        let _sb = ctx.subscribe(&b);

        assert_eq!(ctx.observers().notify(&ctx), 2);
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 1);
    }

    #[test]
    fn test_registration_does_not_keep_observer_alive() {
        let ctx = ThemeContext::new();
        let observer = Arc::new(Counter::default());
        let weak = Arc::downgrade(&observer);
        let subscription = ctx.subscribe(&observer);

        drop(observer);
        assert!(weak.upgrade().is_none());
        assert_eq!(ctx.observers().notify(&ctx), 0);
        assert!(!ctx.observers().contains(subscription.id()));
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let ctx = ThemeContext::new();
        let observer = Arc::new(Counter::default());
        let subscription = ctx.subscribe(&observer);
        drop(subscription);

        ctx.observers().notify(&ctx);
        assert_eq!(observer.count(), 0);
    }

    #[test]
    fn test_detached_subscription_stays_registered() {
        let ctx = ThemeContext::new();
        let observer = Arc::new(Counter::default());
        let id = ctx.subscribe(&observer).detach();

        ctx.observers().notify(&ctx);
        assert_eq!(observer.count(), 1);
        assert!(ctx.observers().unregister(id));
        assert!(!ctx.observers().unregister(id));
    }

    #[test]
    fn test_observer_can_unregister_itself_during_notify() {
        let ctx = ThemeContext::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<ObserverId>>> = Arc::new(Mutex::new(None));

        let (calls_in, slot_in) = (calls.clone(), slot.clone());
        let once = Arc::new(move |ctx: &ThemeContext| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = slot_in.lock().unwrap().take() {
                ctx.observers().unregister(id);
            }
        });
        *slot.lock().unwrap() = Some(ctx.observers().register(&once));

        ctx.observers().notify(&ctx);
        ctx.observers().notify(&ctx);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observer_removed_mid_round_is_skipped() {
        let ctx = ThemeContext::new();
        let first = Arc::new(Counter::default());
        let first_id = ctx.observers().register(&first);

        // Slots of a fresh map are visited in insertion order.
        let target: Arc<Mutex<Option<ObserverId>>> = Arc::new(Mutex::new(None));
        let target_in = target.clone();
        let remover = Arc::new(move |ctx: &ThemeContext| {
            if let Some(id) = target_in.lock().unwrap().take() {
                ctx.observers().unregister(id);
            }
        });
        ctx.observers().register(&remover);
        let last = Arc::new(Counter::default());
        *target.lock().unwrap() = Some(ctx.observers().register(&last));

        assert_eq!(ctx.observers().notify(&ctx), 2);
        assert_eq!(first.count(), 1);
        assert_eq!(last.count(), 0);
        assert!(ctx.observers().contains(first_id));
    }

    #[test]
    fn test_observer_added_mid_round_waits_for_next_round() {
        let ctx = ThemeContext::new();
        let newcomer = Arc::new(Counter::default());
        let pending = Arc::new(Mutex::new(Some(newcomer.clone())));

        let adder = Arc::new(move |ctx: &ThemeContext| {
            if let Some(observer) = pending.lock().unwrap().take() {
                ctx.observers().register(&observer);
            }
        });
        let _guard = ctx.subscribe(&adder);

        ctx.observers().notify(&ctx);
        assert_eq!(newcomer.count(), 0);
        ctx.observers().notify(&ctx);
        assert_eq!(newcomer.count(), 1);
    }
}
