/// Process-wide broadcast notifications.
/// Observers are held until their [`Subscription`] is released or dropped.
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Posted by the screen-saver runtime after the saver stops
pub const DID_STOP: &str = "com.apple.screensaver.didstop";

type Observer = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: Vec<(u64, String, Observer)>,
}

#[derive(Clone, Default)]
pub struct NotificationCenter {
    registry: Rc<RefCell<Registry>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, name: &str, observer: impl Fn() + 'static) -> Subscription {
        let observer: Observer = Rc::new(observer);
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.observers.push((id, name.to_string(), observer));
        debug!("Subscribed observer {} to {}", id, name);

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `name` to its observers. Returns how many were called.
    pub fn post(&self, name: &str) -> usize {
        // observers may (un)subscribe while running
        let observers: Vec<Observer> = self
            .registry
            .borrow()
            .observers
            .iter()
            .filter(|(_, n, _)| n == name)
            .map(|(_, _, o)| o.clone())
            .collect();

        for observer in &observers {
            observer();
        }
        observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.registry.borrow().observers.len()
    }
}

/// Handle to one registered observer
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the observer now
    pub fn release(self) {}

    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        registry.borrow().observers.iter().any(|(id, _, _)| *id == self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().observers.retain(|(id, _, _)| *id != self.id);
            debug!("Released observer {}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_post_reaches_matching_observers_only() {
        let center = NotificationCenter::new();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        let _stop = center.subscribe(DID_STOP, move || h.set(h.get() + 1));
        let h = hits.clone();
        let _other = center.subscribe("something.else", move || h.set(h.get() + 100));

        assert_eq!(center.post(DID_STOP), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_release_unsubscribes() {
        let center = NotificationCenter::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = center.subscribe(DID_STOP, move || h.set(h.get() + 1));
        assert!(sub.is_active());

        sub.release();

        assert_eq!(center.observer_count(), 0);
        assert_eq!(center.post(DID_STOP), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let center = NotificationCenter::new();
        {
            let _sub = center.subscribe(DID_STOP, || {});
            assert_eq!(center.observer_count(), 1);
        }
        assert_eq!(center.observer_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_center() {
        let center = NotificationCenter::new();
        let sub = center.subscribe(DID_STOP, || {});
        drop(center);
        assert!(!sub.is_active());
        sub.release();
    }

    #[test]
    fn test_observer_can_subscribe_during_post() {
        let center = NotificationCenter::new();
        let inner = center.clone();
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::default();
        let keep = late.clone();
        let _sub = center.subscribe(DID_STOP, move || {
            keep.borrow_mut().push(inner.subscribe(DID_STOP, || {}));
        });

        assert_eq!(center.post(DID_STOP), 1);
        assert_eq!(center.observer_count(), 2);
    }
}
