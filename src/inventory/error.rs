use std::fmt;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// Inventory is full and no existing stack can absorb the item
    Full,

    /// No slot holds the requested item
    NotFound,
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryError::Full => {
                write!(f, "Inventory is full")
            }
            InventoryError::NotFound => {
                write!(f, "Item not found in inventory")
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<InventoryError> for String {
    fn from(error: InventoryError) -> Self {
        error.to_string()
    }
}
