//! The board store: owns the current snapshot, applies mutations, notifies
//! subscribers, and writes through to session storage.

use crate::defaults::starter_board;
use crate::mutation::Mutation;
use crate::storage::{SessionStorage, BOARD_KEY, THEME_KEY};
use crate::types::Board;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type SubscriberList = Rc<RefCell<Vec<(u64, Rc<dyn Fn(&Board)>)>>>;

/// Owns the live board snapshot and the change pipeline around it.
///
/// Every mutation goes through [`apply`](BoardStore::apply): the next
/// snapshot is computed from the current one, swapped in as a single
/// assignment, subscribers are notified with the committed snapshot, and the
/// snapshot is written through to storage. Observers never see a
/// half-applied board.
///
/// The store is single-threaded; subscriptions use `Rc` internally.
pub struct BoardStore<S: SessionStorage> {
    snapshot: Board,
    dark_mode: bool,
    storage: S,
    subscribers: SubscriberList,
    next_subscriber: Cell<u64>,
}

/// Handle returned by [`BoardStore::subscribe`]. Dropping it removes the
/// subscriber; no explicit unsubscribe call exists.
pub struct Subscription {
    id: u64,
    subscribers: Weak<RefCell<Vec<(u64, Rc<dyn Fn(&Board)>)>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl<S: SessionStorage> BoardStore<S> {
    /// Create a store backed by the given storage.
    ///
    /// The previous session's board and theme are restored when present;
    /// otherwise the session starts from the starter board in light mode.
    pub fn new(storage: S) -> Self {
        let snapshot = storage.load(BOARD_KEY, starter_board());
        let dark_mode = storage.load(THEME_KEY, false);
        Self {
            snapshot,
            dark_mode,
            storage,
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_subscriber: Cell::new(0),
        }
    }

    /// The current committed snapshot
    pub fn board(&self) -> &Board {
        &self.snapshot
    }

    /// Apply a mutation: commit the next snapshot, notify subscribers, and
    /// write through to storage. Returns the mutation's output.
    pub fn apply<M: Mutation>(&mut self, mutation: M) -> M::Output {
        let (output, next) = mutation.apply(&self.snapshot);
        self.snapshot = next;
        tracing::debug!(
            columns = self.snapshot.columns.len(),
            cards = self.snapshot.cards.len(),
            "Committed board snapshot"
        );
        self.notify();
        self.storage.save(BOARD_KEY, &self.snapshot);
        output
    }

    /// Register a change callback, invoked after every commit with the new
    /// snapshot. Callbacks run in registration order. The subscription lasts
    /// until the returned handle is dropped.
    pub fn subscribe(&self, callback: impl Fn(&Board) + 'static) -> Subscription {
        let id = self.next_subscriber.get();
        self.next_subscriber.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    fn notify(&self) {
        // Snapshot the list first so a callback dropping its own
        // Subscription cannot invalidate the iteration.
        let callbacks: Vec<Rc<dyn Fn(&Board)>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(&self.snapshot);
        }
    }

    /// The current theme preference
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Set the theme preference. Persisted immediately; board subscribers
    /// are not notified since the snapshot is unchanged.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.storage.save(THEME_KEY, &self.dark_mode);
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
