use super::error::InventoryError;
use crate::item::InventoryItem;
use log::debug;
use std::rc::Rc;

/// One occupied inventory slot
///
/// Invariant: 1 <= count <= item.stack_size(). Slots never exist empty; a
/// count reaching zero deletes the slot.
#[derive(Clone)]
pub struct InventorySlot {
    pub item: Rc<dyn InventoryItem>,
    pub count: u32,
}

/// The player's item collection
///
/// An insertion-ordered sequence of slots bounded by a fixed capacity. Slot
/// position is meaningful: the UI binds slot N to display cell N, so slots
/// are only ever appended or deleted, never reordered.
///
/// Item identity is handle identity (`Rc::ptr_eq`), not value equality: two
/// structurally identical definitions only share a stack when they are the
/// same registered instance.
///
/// Construct one instance and pass it by reference to whoever needs it;
/// there is deliberately no global.
pub struct Inventory {
    slots: Vec<InventorySlot>,
    observers: Vec<Box<dyn FnMut()>>,
}

impl Inventory {
    /// Fixed slot capacity. The inventory UI is laid out for exactly 8.
    pub const CAPACITY: usize = 8;

    pub fn new() -> Self {
        Inventory {
            slots: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Registers a change observer
    ///
    /// Observers run synchronously, in registration order, once per
    /// successful structural change, before `add`/`remove` returns. An
    /// observer must not mutate this inventory from its callback.
    pub fn on_changed(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Adds one item, returning whether it was placed
    pub fn add(&mut self, item: Rc<dyn InventoryItem>) -> bool {
        self.try_add(item).is_ok()
    }

    /// Adds one item
    ///
    /// Stackable items first try to join an existing stack, scanning forward
    /// so the oldest eligible stack absorbs the addition. Otherwise a new
    /// slot is appended if capacity allows.
    pub fn try_add(&mut self, item: Rc<dyn InventoryItem>) -> Result<(), InventoryError> {
        // A non-stackable item can never fit into a full inventory
        if self.slots.len() >= Self::CAPACITY && !item.stackable() {
            debug!("inventory full, rejecting non-stackable item");
            return Err(InventoryError::Full);
        }

        if item.stackable() {
            let max = item.stack_size();
            let absorbing = self
                .slots
                .iter()
                .position(|slot| Rc::ptr_eq(&slot.item, &item) && slot.count < max);

            if let Some(index) = absorbing {
                self.slots[index].count += 1;
                self.notify();
                return Ok(());
            }
        }

        // No absorbing stack (or not stackable) - open a new slot if there is room
        if self.slots.len() < Self::CAPACITY {
            self.slots.push(InventorySlot { item, count: 1 });
            self.notify();
            return Ok(());
        }

        debug!("inventory full, no stack can absorb item");
        Err(InventoryError::Full)
    }

    /// Removes one item, returning whether anything changed
    pub fn remove(&mut self, item: &Rc<dyn InventoryItem>) -> bool {
        self.try_remove(item).is_ok()
    }

    /// Removes one item
    ///
    /// Stackable items are taken from the newest stack holding more than one
    /// (reverse scan); otherwise the last slot matching by identity is
    /// deleted outright. Asymmetric with `try_add` on purpose: additions fill
    /// the oldest stack, removals drain the newest.
    pub fn try_remove(&mut self, item: &Rc<dyn InventoryItem>) -> Result<(), InventoryError> {
        if item.stackable() {
            let draining = self
                .slots
                .iter()
                .rposition(|slot| Rc::ptr_eq(&slot.item, item) && slot.count > 1);

            if let Some(index) = draining {
                self.slots[index].count -= 1;
                self.notify();
                return Ok(());
            }
        }

        match self.slots.iter().rposition(|slot| Rc::ptr_eq(&slot.item, item)) {
            Some(index) => {
                self.slots.remove(index);
                self.notify();
                Ok(())
            }
            None => {
                debug!("no slot holds the item being removed");
                Err(InventoryError::NotFound)
            }
        }
    }

    /// Returns the ordered slot sequence for UI binding
    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= Self::CAPACITY
    }

    /// Total count of an item across all slots
    pub fn count_of(&self, item: &Rc<dyn InventoryItem>) -> u32 {
        self.slots
            .iter()
            .filter(|slot| Rc::ptr_eq(&slot.item, item))
            .map(|slot| slot.count)
            .sum()
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer();
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
