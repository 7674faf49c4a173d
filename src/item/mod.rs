// Item system module
//
// This module provides the item side of the mining core:
// - Capability traits items expose to the inventory and trade layers
// - Immutable tile definitions (templates backing occupied cells)
// - Tile registry for centralized definition storage

pub mod definition;
pub mod registry;
pub mod traits;

// Re-export main types
pub use definition::TileDefinition;
pub use registry::TileRegistry;
pub use traits::{InventoryItem, Tradeable};
