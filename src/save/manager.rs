//! Save manager for handling save/load operations
//!
//! This module provides the SaveManager struct which handles:
//! - Saving game state to files
//! - Loading game state from files
//! - Autosave timing
//! - Save file management (listing, cleanup)

use super::types::*;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Default save directory under the platform data dir
pub fn default_save_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("tilemine").join("saves"))
}

pub struct SaveManager {
    save_directory: PathBuf,
    current_save_slot: u8,
    autosave_interval: std::time::Duration,
    last_autosave: Option<SystemTime>,
}

impl SaveManager {
    /// Creates a new SaveManager with the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
            current_save_slot: 1,
            autosave_interval: std::time::Duration::from_secs(300), // 5 minutes
            last_autosave: None,
        })
    }

    /// Sets the current save slot (1-5)
    pub fn set_save_slot(&mut self, slot: u8) {
        self.current_save_slot = slot.clamp(1, 5);
    }

    /// Gets the current save slot
    pub fn get_save_slot(&self) -> u8 {
        self.current_save_slot
    }

    /// Save the game state to a file
    pub fn save_game(&mut self, save_file: &SaveFile) -> Result<PathBuf, SaveError> {
        let filename =
            self.generate_filename(&save_file.metadata.save_type, save_file.metadata.save_slot);
        let filepath = self.save_directory.join(&filename);

        // Pretty JSON for readability/debugging
        let json = serde_json::to_string_pretty(save_file)?;
        fs::write(&filepath, json)?;

        if matches!(save_file.metadata.save_type, SaveType::Auto) {
            self.last_autosave = Some(SystemTime::now());
        }

        info!("game saved to {}", filepath.display());

        Ok(filepath)
    }

    /// Load a save file from a specific slot
    pub fn load_game(&self, slot: u8) -> Result<SaveFile, SaveError> {
        let filename = format!("slot_{}.json", slot);
        self.load_game_by_filename(&filename)
    }

    /// Load a save file by filename
    pub fn load_game_by_filename(&self, filename: &str) -> Result<SaveFile, SaveError> {
        let filepath = self.save_directory.join(filename);

        if !filepath.exists() {
            return Err(SaveError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Save file not found: {}", filename),
            )));
        }

        let json = fs::read_to_string(&filepath)?;
        let save_file: SaveFile = serde_json::from_str(&json)?;

        if save_file.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(save_file.version));
        }

        Ok(save_file)
    }

    /// Check if autosave is needed
    pub fn should_autosave(&self) -> bool {
        if let Some(last_save) = self.last_autosave {
            if let Ok(elapsed) = SystemTime::now().duration_since(last_save) {
                return elapsed >= self.autosave_interval;
            }
        }
        true // Save if we've never autosaved
    }

    /// List all save files, newest first
    pub fn list_saves(&self) -> Result<Vec<SaveFileInfo>, SaveError> {
        let mut saves = Vec::new();

        for entry in fs::read_dir(&self.save_directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
                    if let Ok(save_file) = self.load_game_by_filename(filename) {
                        saves.push(SaveFileInfo {
                            filename: filename.to_string(),
                            timestamp: save_file.timestamp,
                            metadata: save_file.metadata,
                        });
                    }
                }
            }
        }

        saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(saves)
    }

    fn generate_filename(&self, save_type: &SaveType, slot: u8) -> String {
        match save_type {
            SaveType::Manual | SaveType::QuickSave => {
                format!("slot_{}.json", slot)
            }
            SaveType::Auto => {
                let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                format!("autosave_slot{}_{}.json", slot, timestamp)
            }
        }
    }

    /// Delete old autosaves, keeping only the N most recent per slot
    pub fn cleanup_autosaves(&self, keep_count: usize) -> Result<(), SaveError> {
        for slot in 1..=5u8 {
            let prefix = format!("autosave_slot{}_", slot);

            let mut autosaves: Vec<_> = fs::read_dir(&self.save_directory)?
                .filter_map(|entry| entry.ok())
                .filter(|entry| {
                    entry
                        .file_name()
                        .to_str()
                        .map(|s| s.starts_with(&prefix))
                        .unwrap_or(false)
                })
                .collect();

            // Newest first by modification time
            autosaves.sort_by_key(|entry| {
                entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .ok()
                    .map(std::cmp::Reverse)
            });

            for entry in autosaves.iter().skip(keep_count) {
                fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell_store::{CellStore, HEALTH_PROPERTY};
    use crate::grid::{CellPos, TileGrid, WorldGrid};
    use crate::item::TileRegistry;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tilemine_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn sample_save(slot: u8) -> SaveFile {
        let registry = TileRegistry::create_default();
        let mut grid = WorldGrid::new();
        let mut store = CellStore::new();

        grid.place_tile(CellPos::new(0, 0, 0), registry.get("dirt").unwrap(), &mut store);
        grid.place_tile(CellPos::new(1, 0, 0), registry.get("stone").unwrap(), &mut store);

        SaveFile {
            version: CURRENT_SAVE_VERSION,
            timestamp: SystemTime::now(),
            metadata: SaveMetadata {
                game_version: "0.1.0".to_string(),
                player_name: Some("miner".to_string()),
                playtime_seconds: 60,
                save_type: SaveType::Manual,
                save_slot: slot,
            },
            world: WorldSaveData {
                tiles: grid.to_save_data(),
            },
            cell_data: store.to_save_data(),
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = scratch_dir("round_trip");
        let mut manager = SaveManager::new(&dir).unwrap();

        manager.save_game(&sample_save(1)).unwrap();
        let loaded = manager.load_game(1).unwrap();

        assert_eq!(loaded.version, CURRENT_SAVE_VERSION);
        assert_eq!(loaded.metadata.save_slot, 1);
        assert_eq!(loaded.world.tiles.len(), 2);

        // Rebuild runtime state from the loaded payloads
        let registry = TileRegistry::create_default();
        let grid = WorldGrid::from_save_data(&loaded.world.tiles, &registry);
        let store = CellStore::from_save_data(&loaded.cell_data);

        assert_eq!(grid.len(), 2);
        assert_eq!(store.get_int(CellPos::new(1, 0, 0), HEALTH_PROPERTY, -1), 3);
        let restored = grid.tile_at(CellPos::new(0, 0, 0)).unwrap();
        assert_eq!(restored.id, "dirt");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_slot_fails() {
        let dir = scratch_dir("missing_slot");
        let manager = SaveManager::new(&dir).unwrap();

        assert!(matches!(manager.load_game(3), Err(SaveError::IoError(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = scratch_dir("version_gate");
        let mut manager = SaveManager::new(&dir).unwrap();

        let mut save = sample_save(2);
        save.version = CURRENT_SAVE_VERSION + 1;
        manager.save_game(&save).unwrap();

        assert!(matches!(
            manager.load_game(2),
            Err(SaveError::InvalidVersion(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_tile_ids_skipped_on_load() {
        let tiles = vec![
            (CellPos::new(0, 0, 0), "dirt".to_string()),
            (CellPos::new(1, 0, 0), "mystery_ore".to_string()),
        ];

        let registry = TileRegistry::create_default();
        let grid = WorldGrid::from_save_data(&tiles, &registry);

        assert_eq!(grid.len(), 1);
        assert!(grid.is_occupied(CellPos::new(0, 0, 0)));
    }

    #[test]
    fn test_autosave_filename_is_timestamped() {
        let dir = scratch_dir("auto_name");
        let mut manager = SaveManager::new(&dir).unwrap();

        let mut save = sample_save(1);
        save.metadata.save_type = SaveType::Auto;

        let path = manager.save_game(&save).unwrap();
        let filename = path.file_name().and_then(|f| f.to_str()).unwrap();

        assert!(filename.starts_with("autosave_slot1_"));
        assert!(filename.ends_with(".json"));
        // Autosaves never clobber the manual slot file
        assert!(matches!(manager.load_game(1), Err(SaveError::IoError(_))));
        // A fresh autosave resets the timer
        assert!(!manager.should_autosave());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_cleanup_keeps_newest_autosaves() {
        let dir = scratch_dir("auto_cleanup");
        let manager = SaveManager::new(&dir).unwrap();

        // Four autosaves with strictly increasing mtimes; the cleanup filter
        // only looks at the slot prefix, so the suffixes can be anything
        for i in 0..4 {
            fs::write(dir.join(format!("autosave_slot1_{}.json", i)), "{}").unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        // Another slot's autosave must not count against slot 1's quota
        fs::write(dir.join("autosave_slot2_0.json"), "{}").unwrap();

        manager.cleanup_autosaves(2).unwrap();

        let mut remaining: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .collect();
        remaining.sort();

        assert_eq!(
            remaining,
            vec![
                "autosave_slot1_2.json".to_string(),
                "autosave_slot1_3.json".to_string(),
                "autosave_slot2_0.json".to_string(),
            ]
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_default_save_dir_shape() {
        if let Some(dir) = default_save_dir() {
            assert!(dir.ends_with("tilemine/saves"));
        }
    }

    #[test]
    fn test_list_saves_sees_saved_slots() {
        let dir = scratch_dir("list_saves");
        let mut manager = SaveManager::new(&dir).unwrap();

        manager.save_game(&sample_save(1)).unwrap();
        manager.save_game(&sample_save(2)).unwrap();

        let saves = manager.list_saves().unwrap();
        assert_eq!(saves.len(), 2);

        let _ = fs::remove_dir_all(&dir);
    }
}
