//! Change notifications.
//!
//! A [`Signal`] holds connected slots and calls each of them, on the emitting
//! thread, whenever it is emitted. The icon provider announces default-option
//! resets through one; spin animations announce new angles through another.
//!
//! ```
//! use awesome_icons_core::Signal;
//!
//! let defaults_reset = Signal::<()>::new();
//! let id = defaults_reset.connect(|_| println!("repaint icons"));
//! defaults_reset.emit(());
//! defaults_reset.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of callbacks taking `&Args`.
///
/// Slots run without the connection table locked, so a slot may connect or
/// disconnect slots of the same signal. Changes take effect on the next emit.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// While blocked, [`emit`](Self::emit) calls nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::Release);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }

    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "emit suppressed, signal blocked");
            return;
        }

        // snapshot so slots can touch the table
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emit");
        for slot in &slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}
