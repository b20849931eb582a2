//! Single-threaded state container with explicit observer registration.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::reducer::Reducer;

type Listener<S> = Rc<dyn Fn(&S)>;

/// Identifier assigned to a listener when it subscribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registry<S> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<S>)>,
}

impl<S> Registry<S> {
    fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    fn insert(&mut self, listener: Listener<S>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }

    /// Listeners in registration order, detached from the registry borrow.
    fn snapshot(&self) -> Vec<Listener<S>> {
        self.listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Owns the state tree and applies actions to it through `R`.
///
/// Dispatch is synchronous: the reducer runs, the new state is stored, and
/// then every listener is called in registration order with the new state.
/// A dispatch issued from inside a listener is queued and applied after the
/// current notification round, before the outermost `dispatch` returns.
pub struct Store<R: Reducer> {
    state: RefCell<R::State>,
    registry: Rc<RefCell<Registry<R::State>>>,
    pending: RefCell<VecDeque<R::Action>>,
    dispatching: Cell<bool>,
    revision: Cell<u64>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: RefCell::new(initial),
            registry: Rc::new(RefCell::new(Registry::new())),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            revision: Cell::new(0),
        }
    }

    /// Clone of the current state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with_state<T>(&self, read: impl FnOnce(&R::State) -> T) -> T {
        read(&self.state.borrow())
    }

    /// Number of actions reduced since construction.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn dispatch(&self, action: R::Action) {
        self.pending.borrow_mut().push_back(action);
        if self.dispatching.get() {
            tracing::trace!("Queued re-entrant dispatch");
            return;
        }

        let _round = DispatchRound {
            dispatching: &self.dispatching,
            pending: &self.pending,
        };
        self.dispatching.set(true);
        while let Some(action) = self.next_pending() {
            self.apply(action);
        }
    }

    /// Register a listener called after every reduction.
    ///
    /// The listener stays registered for as long as the returned
    /// [`Subscription`] is alive.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + 'static,
    {
        let id = self.registry.borrow_mut().insert(Rc::new(listener));
        tracing::trace!(?id, "Listener subscribed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    fn next_pending(&self) -> Option<R::Action> {
        self.pending.borrow_mut().pop_front()
    }

    fn apply(&self, action: R::Action) {
        tracing::debug!(?action, revision = self.revision.get() + 1, "Dispatch");
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let previous = std::mem::take(&mut *state);
            *state = R::reduce(previous, action);
            state.clone()
        };
        self.revision.set(self.revision.get() + 1);

        let listeners = self.registry.borrow().snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Ends a dispatch round, including one unwound by a panicking listener.
/// Actions still queued at that point are discarded.
struct DispatchRound<'a, A> {
    dispatching: &'a Cell<bool>,
    pending: &'a RefCell<VecDeque<A>>,
}

impl<A> Drop for DispatchRound<'_, A> {
    fn drop(&mut self) {
        let dropped = std::mem::take(&mut *self.pending.borrow_mut()).len();
        if dropped > 0 {
            tracing::warn!(dropped, "Discarding queued actions after an aborted dispatch");
        }
        self.dispatching.set(false);
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle unsubscribes the listener.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription<S> {
    id: ListenerId,
    registry: Weak<RefCell<Registry<S>>>,
}

impl<S> Subscription<S> {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// False once unsubscribed or once the store is gone.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.borrow().contains(self.id))
            .unwrap_or(false)
    }

    /// Remove the listener. Returns false if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let removed = self.remove();
        tracing::trace!(id = ?self.id, removed, "Listener unsubscribed");
        removed
    }

    fn remove(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.borrow_mut().remove(self.id),
            None => false,
        }
    }
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.remove();
    }
}
