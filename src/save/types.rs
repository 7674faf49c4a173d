//! Save data types
//!
//! Everything that crosses the save-file boundary lives here, serialized to
//! JSON via Serde. Runtime structures (CellStore, WorldGrid) convert through
//! their `to_save_data`/`from_save_data` methods.

use crate::cell_store::CellStoreSaveData;
use crate::grid::CellPos;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Current save format version; bump when the layout changes
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// The root save file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
    pub world: WorldSaveData,
    pub cell_data: CellStoreSaveData,
}

/// Metadata about the save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub game_version: String,
    pub player_name: Option<String>,
    pub playtime_seconds: u64,
    pub save_type: SaveType,
    pub save_slot: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SaveType {
    Manual,
    Auto,
    QuickSave,
}

/// Grid occupancy: which tile id occupies which cell
#[derive(Debug, Serialize, Deserialize)]
pub struct WorldSaveData {
    pub tiles: Vec<(CellPos, String)>,
}

/// Summary entry returned by SaveManager::list_saves
#[derive(Debug)]
pub struct SaveFileInfo {
    pub filename: String,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
}

/// Error types for save/load operations
#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
    CorruptedData(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            SaveError::InvalidVersion(v) => write!(f, "Invalid save version: {}", v),
            SaveError::CorruptedData(msg) => write!(f, "Corrupted save data: {}", msg),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(error: std::io::Error) -> Self {
        SaveError::IoError(error)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(error: serde_json::Error) -> Self {
        SaveError::SerializationError(error)
    }
}
