use crate::grid::CellPos;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property name under which a cell's remaining health is stored
pub const HEALTH_PROPERTY: &str = "health";

/// Opaque handle to an engine-side object stored against a cell
///
/// The core never dereferences these; it only stores and returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Composite key for per-cell properties
///
/// Equality and hashing are structural over both fields: the same position
/// can carry any number of independently named properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub pos: CellPos,
    pub name: String,
}

impl CellKey {
    fn new(pos: CellPos, name: &str) -> Self {
        CellKey {
            pos,
            name: name.to_string(),
        }
    }
}

/// Tagged value stored against a cell key
///
/// The tag is fixed at write time; reads must ask for the matching tag or
/// they get their fallback default back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    Int(i32),
    ObjectRef(ObjectId),
}

/// Per-cell property storage for a tile grid
///
/// Single source of truth for all per-cell mutable state. Tile definitions
/// stay immutable; anything that changes while a tile sits in the world
/// (remaining health, attached effect handles) lives here, keyed by
/// (position, property name).
///
/// Single-writer, synchronous. Not designed for concurrent access; wrap the
/// whole store in one lock if that ever changes.
pub struct CellStore {
    storage: HashMap<CellKey, CellValue>,
}

impl CellStore {
    pub fn new() -> Self {
        CellStore {
            storage: HashMap::new(),
        }
    }

    /// Sets an integer property, inserting or overwriting
    ///
    /// Returns true; the bool mirrors `set_object` so callers can treat both
    /// setters uniformly.
    pub fn set_int(&mut self, pos: CellPos, name: &str, value: i32) -> bool {
        self.storage
            .insert(CellKey::new(pos, name), CellValue::Int(value));
        true
    }

    /// Sets an object-reference property, inserting or overwriting
    ///
    /// Refuses an absent handle: storing "nothing" is a caller bug, use
    /// `remove` to delete an entry.
    pub fn set_object(&mut self, pos: CellPos, name: &str, value: Option<ObjectId>) -> bool {
        let Some(id) = value else {
            warn!("refusing to store absent object for {:?} at {}", name, pos);
            return false;
        };
        self.storage
            .insert(CellKey::new(pos, name), CellValue::ObjectRef(id));
        true
    }

    /// Reads an integer property, falling back to `default`
    ///
    /// A missing key returns the default silently. A key present under the
    /// other tag is a caller error: logged, default returned.
    pub fn get_int(&self, pos: CellPos, name: &str, default: i32) -> i32 {
        match self.storage.get(&CellKey::new(pos, name)) {
            Some(CellValue::Int(v)) => *v,
            Some(CellValue::ObjectRef(_)) => {
                warn!("property {:?} at {} is not an integer", name, pos);
                default
            }
            None => default,
        }
    }

    /// Reads an object-reference property, falling back to `default`
    pub fn get_object(
        &self,
        pos: CellPos,
        name: &str,
        default: Option<ObjectId>,
    ) -> Option<ObjectId> {
        match self.storage.get(&CellKey::new(pos, name)) {
            Some(CellValue::ObjectRef(id)) => Some(*id),
            Some(CellValue::Int(_)) => {
                warn!("property {:?} at {} is not an object reference", name, pos);
                default
            }
            None => default,
        }
    }

    /// Deletes the entry for (pos, name)
    ///
    /// Returns whether an entry was actually removed; removing an absent key
    /// is a no-op.
    pub fn remove(&mut self, pos: CellPos, name: &str) -> bool {
        self.storage.remove(&CellKey::new(pos, name)).is_some()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Projects the store into its flat persisted form
    ///
    /// Entries are split by tag into parallel key/value vectors, sorted by
    /// key so the output is stable across runs.
    pub fn to_save_data(&self) -> CellStoreSaveData {
        let mut data = CellStoreSaveData::default();

        let mut entries: Vec<_> = self.storage.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (key, value) in entries {
            match value {
                CellValue::Int(v) => {
                    data.int_keys.push(key.clone());
                    data.int_values.push(*v);
                }
                CellValue::ObjectRef(id) => {
                    data.object_keys.push(key.clone());
                    data.object_values.push(*id);
                }
            }
        }

        data
    }

    /// Rebuilds a store from its flat persisted form
    ///
    /// Each tag's key/value vectors are zipped up to the shorter length and
    /// any surplus is discarded. Mismatched lengths mean the save was
    /// truncated or hand-edited; recovering the pairs that do line up beats
    /// rejecting the whole file.
    pub fn from_save_data(data: &CellStoreSaveData) -> Self {
        if data.int_keys.len() != data.int_values.len() {
            warn!(
                "integer key/value length mismatch ({} vs {}), truncating",
                data.int_keys.len(),
                data.int_values.len()
            );
        }
        if data.object_keys.len() != data.object_values.len() {
            warn!(
                "object key/value length mismatch ({} vs {}), truncating",
                data.object_keys.len(),
                data.object_values.len()
            );
        }

        let mut store = CellStore::new();

        for (key, value) in data.int_keys.iter().zip(data.int_values.iter()) {
            store.storage.insert(key.clone(), CellValue::Int(*value));
        }
        for (key, id) in data.object_keys.iter().zip(data.object_values.iter()) {
            store.storage.insert(key.clone(), CellValue::ObjectRef(*id));
        }

        store
    }
}

impl Default for CellStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat persisted layout of a CellStore
///
/// Two parallel key/value vector pairs, one per value tag. This is the only
/// shape that crosses the save-file boundary; the runtime map is rebuilt from
/// it on load.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CellStoreSaveData {
    pub int_keys: Vec<CellKey>,
    pub int_values: Vec<i32>,
    pub object_keys: Vec<CellKey>,
    pub object_values: Vec<ObjectId>,
}
