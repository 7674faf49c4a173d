// Inventory system module
//
// This module provides the stacking inventory for the mining core:
// - Capacity-bounded, insertion-ordered slot list
// - Per-item stack limits driven by the InventoryItem capability
// - Synchronous change notification for UI binding

pub mod error;
pub mod inventory;

// Re-export main types
pub use error::InventoryError;
pub use inventory::{Inventory, InventorySlot};
