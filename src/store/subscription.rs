use std::sync::{Arc, Weak};

use parking_lot::RwLock;

pub(crate) type Callback = Arc<dyn Fn() + Send + Sync>;

pub(crate) struct SubscriberEntry {
    pub(crate) id: u64,
    pub(crate) callback: Callback,
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Call [`unsubscribe`](Subscription::unsubscribe) to stop receiving
/// notifications. Dropping the handle without unsubscribing leaves the
/// callback registered for the store's lifetime.
pub struct Subscription {
    subscribers: Weak<RwLock<Vec<SubscriberEntry>>>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(subscribers: Weak<RwLock<Vec<SubscriberEntry>>>, id: u64) -> Self {
        Self { subscribers, id }
    }

    /// Remove exactly the callback this handle was returned for.
    ///
    /// Idempotent: unsubscribing a second time, or after the store is gone,
    /// is a no-op. If called during a dispatch's notification pass, the
    /// removal takes effect from the next dispatch.
    pub fn unsubscribe(&self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.write().retain(|entry| entry.id != self.id);
        }
    }
}
