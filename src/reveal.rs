//! Single-slot reveal coordination across sibling items
//!
//! At most one item is revealed (swiped open) at a time. Items share one
//! `RevealCoordinator`, passed in at construction, and subscribe to its
//! changes so that opening one item closes whichever item was open before.
//!
//! Everything here runs on the UI thread: `Rc`, `Cell` and `RefCell`, no locks.
//! The rules are "last claim wins" and "only the owner can release", so a
//! late release from a superseded item never clears a newer claim.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Stable identity of one interactive item; never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change pushed to every subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealChange {
    /// The slot now holds this item
    Claimed(ItemId),
    /// This item released the slot; it is now empty
    Released(ItemId),
    /// The slot was cleared externally; every item should close
    Reset,
}

impl RevealChange {
    /// Slot content after this change
    pub fn current(&self) -> Option<ItemId> {
        match self {
            RevealChange::Claimed(id) => Some(*id),
            RevealChange::Released(_) | RevealChange::Reset => None,
        }
    }
}

pub trait RevealObserver {
    fn reveal_changed(&self, change: RevealChange);
}

struct Subscriber {
    id: ItemId,
    observer: Weak<dyn RevealObserver>,
}

/// Process-wide register holding the currently revealed item
#[derive(Default)]
pub struct RevealCoordinator {
    slot: Cell<Option<ItemId>>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl RevealCoordinator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn subscribe(&self, id: ItemId, observer: Weak<dyn RevealObserver>) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|s| s.id != id);
        subscribers.push(Subscriber { id, observer });
    }

    pub fn unsubscribe(&self, id: ItemId) {
        self.subscribers.borrow_mut().retain(|s| s.id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|s| s.observer.strong_count() > 0)
            .count()
    }

    /// Take the slot, unconditionally replacing any previous owner
    pub fn claim(&self, id: ItemId) {
        let previous = self.slot.replace(Some(id));
        if previous == Some(id) {
            return;
        }

        debug!(item = %id, previous = ?previous.map(|p| p.to_string()), "Reveal slot claimed");
        self.notify(RevealChange::Claimed(id));
    }

    /// Clear the slot if `id` still owns it. Returns whether it did.
    pub fn release(&self, id: ItemId) -> bool {
        if self.slot.get() != Some(id) {
            debug!(item = %id, "Ignoring release from an item that does not own the slot");
            return false;
        }

        self.slot.set(None);
        debug!(item = %id, "Reveal slot released");
        self.notify(RevealChange::Released(id));
        true
    }

    /// Clear the slot and close every item
    pub fn reset(&self) {
        self.slot.set(None);
        debug!("Reveal slot reset");
        self.notify(RevealChange::Reset);
    }

    pub fn read(&self) -> Option<ItemId> {
        self.slot.get()
    }

    /// This item owns the slot
    pub fn is_revealed(&self, id: ItemId) -> bool {
        self.slot.get() == Some(id)
    }

    /// Some other item owns the slot
    pub fn is_blocked(&self, id: ItemId) -> bool {
        matches!(self.slot.get(), Some(owner) if owner != id)
    }

    fn notify(&self, change: RevealChange) {
        // Collect first so observers may call back into the coordinator
        let observers: Vec<Rc<dyn RevealObserver>> = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.retain(|s| s.observer.strong_count() > 0);
            subscribers.iter().filter_map(|s| s.observer.upgrade()).collect()
        };

        for observer in observers {
            observer.reveal_changed(change);
        }
    }
}

impl fmt::Debug for RevealCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealCoordinator")
            .field("slot", &self.slot.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
