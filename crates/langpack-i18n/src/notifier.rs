//! Synchronous language-change broadcast

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Handle returned by [`ChangeNotifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<C> = Rc<dyn Fn(&C)>;

/// Ordered subscriber list, dispatched synchronously.
///
/// Listeners carry no payload beyond a reference to the context `C` (the
/// [`crate::LocalizationManager`] in practice) and read whatever they need
/// from it. Dispatch iterates over a snapshot taken when it starts: a
/// listener may subscribe or unsubscribe anyone, itself included, and the
/// running dispatch still calls exactly the listeners present at its start.
pub struct ChangeNotifier<C: ?Sized> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<C>)>>,
}

impl<C: ?Sized> ChangeNotifier<C> {
    /// Create a notifier with no listeners
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Register `listener`; it runs after every listener registered before it
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&C) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        trace!("Subscribed listener {:?}", id);
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        trace!("Unsubscribed listener {:?}: {}", id, removed);
        removed
    }

    /// Call every current listener in registration order. Returns how many
    /// were called.
    pub fn notify(&self, context: &C) -> usize {
        let snapshot: Vec<Listener<C>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(context);
        }
        snapshot.len()
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether nobody is listening
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl<C: ?Sized> Default for ChangeNotifier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for ChangeNotifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.len())
            .finish()
    }
}
