use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::reducer::Reducer;
use crate::store::error::DispatchError;
use crate::store::subscription::{Callback, SubscriberEntry, Subscription};

/// A unidirectional state container.
///
/// The store owns a single state value. Every transition goes through the
/// reducer supplied at construction: `dispatch` computes the next state
/// from the current state and an action, commits it, and then notifies
/// subscribers in registration order. The state is never mutated in place;
/// each commit replaces the old value with the one the reducer returned.
///
/// Stores are cheap handles over shared internals and can be cloned to
/// hand out to subscribers or other components. The dispatch cycle itself
/// is fully synchronous: reducer, commit and the whole notification pass
/// complete before `dispatch` returns, and overlapping dispatches are
/// rejected with [`DispatchError::AlreadyDispatching`].
pub struct Store<S, A> {
    state: Arc<RwLock<S>>,
    reducer: Arc<dyn Reducer<S, A> + Send + Sync>,
    subscribers: Arc<RwLock<Vec<SubscriberEntry>>>,
    next_subscriber_id: Arc<AtomicU64>,
    dispatching: Arc<AtomicBool>,
}

impl<S, A> Store<S, A> {
    /// Create a store, establishing the initial state with an explicit
    /// initialization call.
    ///
    /// The store invokes `reducer.reduce(&S::default(), &init_action)` once
    /// and commits the result as the initial state. By the reducer
    /// contract, `init_action` must be an action the reducer does not
    /// recognize, so the default state comes back unchanged in value and
    /// becomes the initial state.
    pub fn new<R>(reducer: R, init_action: A) -> Self
    where
        S: Default,
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        let initial = reducer.reduce(&S::default(), &init_action);
        log::debug!("store created");
        Self {
            state: Arc::new(RwLock::new(initial)),
            reducer: Arc::new(reducer),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_subscriber_id: Arc::new(AtomicU64::new(0)),
            dispatching: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> S
    where
        S: Clone,
    {
        self.state.read().clone()
    }

    /// Read the current state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        f(&self.state.read())
    }

    /// Apply the reducer to the current state and `action`, commit the
    /// result, and notify every subscriber in registration order.
    ///
    /// Returns the dispatched action for chaining. A dispatch that begins
    /// while another one on this store is still running (from a reducer, a
    /// subscriber, or another thread) is rejected with
    /// [`DispatchError::AlreadyDispatching`] and changes nothing.
    ///
    /// If the reducer panics the transition is not committed: the prior
    /// state is retained, the store stays usable, and the panic propagates
    /// to the caller.
    pub fn dispatch(&self, action: A) -> Result<A, DispatchError> {
        if self.dispatching.swap(true, Ordering::Acquire) {
            return Err(DispatchError::AlreadyDispatching);
        }
        // Clears the flag even if the reducer or a subscriber panics.
        let _in_flight = scopeguard::guard(Arc::clone(&self.dispatching), |flag| {
            flag.store(false, Ordering::Release);
        });

        let next = {
            let current = self.state.read();
            self.reducer.reduce(&current, &action)
        };
        *self.state.write() = next;
        log::trace!("transition committed");

        self.notify();
        Ok(action)
    }

    /// Subscribe to state changes.
    ///
    /// The callback is invoked, with no arguments, after every committed
    /// transition; read the new value through [`get`](Store::get) or
    /// [`read`](Store::read) on a clone of the store. Callbacks run in
    /// registration order. The returned [`Subscription`] removes the
    /// callback again.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.write().push(SubscriberEntry {
            id,
            callback: Arc::new(callback),
        });
        Subscription::new(Arc::downgrade(&self.subscribers), id)
    }

    /// Notify subscribers from a snapshot of the registration list, so a
    /// callback may subscribe or unsubscribe without deadlocking; such
    /// changes take effect from the next dispatch.
    fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .read()
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        log::trace!("notifying {} subscribers", callbacks.len());
        for callback in &callbacks {
            callback();
        }
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            subscribers: Arc::clone(&self.subscribers),
            next_subscriber_id: Arc::clone(&self.next_subscriber_id),
            dispatching: Arc::clone(&self.dispatching),
        }
    }
}
