//! tilemine - core logic for a destructible 2D tile world
//!
//! The world is a grid of diggable tiles. Digging wears a tile's per-cell
//! health down until it breaks and yields its item into a capacity-bounded,
//! stack-limited inventory.
//!
//! Rendering, input polling, and physics live outside this crate; they feed
//! cell coordinates in and bind UI to the inventory's change signal. The
//! crate is organised leaves-first:
//!
//! - [`cell_store`]: per-cell keyed property storage (the single source of
//!   truth for mutable tile state) with a flat save projection
//! - [`grid`]: cell coordinates and tile occupancy
//! - [`item`]: immutable tile definitions, capability traits, registry
//! - [`inventory`]: the stacking inventory with change observers
//! - [`reach`]: marker-calibrated dig-range validation
//! - [`dig`]: the dig workflow tying the above together
//! - [`save`]: JSON save files and slot management
//!
//! Everything is single-threaded and synchronous; operations run to
//! completion on the calling thread.

pub mod cell_store;
pub mod dig;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod reach;
pub mod save;

pub use cell_store::{CellKey, CellStore, CellStoreSaveData, CellValue, ObjectId};
pub use dig::{DigOutcome, Digger};
pub use grid::{CellPos, TileGrid, WorldGrid};
pub use inventory::{Inventory, InventoryError, InventorySlot};
pub use item::{InventoryItem, TileDefinition, TileRegistry, Tradeable};
pub use reach::{ReachBox, can_dig};
pub use save::{SaveFile, SaveManager};
