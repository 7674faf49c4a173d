//! Save/Load system
//!
//! JSON-based save files holding the grid occupancy and the flattened cell
//! property store, with numbered slots and timestamped autosaves.
//!
//! - `types`: save data structures and error types
//! - `manager`: SaveManager for file operations

pub mod manager;
pub mod types;

// Re-export commonly used types
pub use manager::SaveManager;
pub use types::*;
