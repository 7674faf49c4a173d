use crate::cell_store::{CellStore, HEALTH_PROPERTY};
use crate::item::{TileDefinition, TileRegistry};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

/// Integer grid coordinates
///
/// External collaborators (rendering, physics) convert world-space positions
/// into cells before calling into the core; nothing here ever sees world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        CellPos { x, y, z }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::ops::Add for CellPos {
    type Output = CellPos;

    fn add(self, other: CellPos) -> CellPos {
        CellPos::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Occupancy view the dig workflow operates through
///
/// The grid layer owns *which* definition occupies a cell; per-cell mutable
/// state (health) lives in the CellStore. Implementations only need to answer
/// occupancy queries and clear destroyed cells.
pub trait TileGrid {
    /// Returns the definition occupying the cell, if any
    fn tile_at(&self, pos: CellPos) -> Option<Rc<TileDefinition>>;

    /// Clears the cell (called when its tile is destroyed)
    fn clear_tile(&mut self, pos: CellPos);
}

/// Sparse occupancy grid mapping cells to shared tile definitions
///
/// One TileDefinition instance backs many occupied cells; the definition is
/// never mutated per cell.
pub struct WorldGrid {
    tiles: HashMap<CellPos, Rc<TileDefinition>>,
}

impl WorldGrid {
    pub fn new() -> Self {
        WorldGrid {
            tiles: HashMap::new(),
        }
    }

    /// Places a tile and seeds its health entry in the cell store
    ///
    /// Overwrites any previous occupant at the cell, including its health.
    pub fn place_tile(&mut self, pos: CellPos, tile: Rc<TileDefinition>, store: &mut CellStore) {
        store.set_int(pos, HEALTH_PROPERTY, tile.health);
        self.tiles.insert(pos, tile);
    }

    pub fn is_occupied(&self, pos: CellPos) -> bool {
        self.tiles.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates over all occupied cells
    pub fn iter(&self) -> impl Iterator<Item = (&CellPos, &Rc<TileDefinition>)> {
        self.tiles.iter()
    }
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TileGrid for WorldGrid {
    fn tile_at(&self, pos: CellPos) -> Option<Rc<TileDefinition>> {
        self.tiles.get(&pos).cloned()
    }

    fn clear_tile(&mut self, pos: CellPos) {
        self.tiles.remove(&pos);
    }
}

// ==============================================================================
// Save/Load Support for WorldGrid
// ==============================================================================

impl WorldGrid {
    /// Converts occupancy to a save-friendly format (cell, tile id) pairs
    ///
    /// Sorted by cell so saves are stable across runs.
    pub fn to_save_data(&self) -> Vec<(CellPos, String)> {
        let mut data: Vec<(CellPos, String)> = self
            .tiles
            .iter()
            .map(|(pos, tile)| (*pos, tile.id.clone()))
            .collect();
        data.sort_by_key(|(pos, _)| *pos);
        data
    }

    /// Rebuilds a WorldGrid from saved occupancy against a registry
    ///
    /// Cells referencing an id the registry no longer knows are skipped with
    /// a warning rather than failing the whole load.
    pub fn from_save_data(data: &[(CellPos, String)], registry: &TileRegistry) -> Self {
        let mut grid = WorldGrid::new();

        for (pos, id) in data {
            match registry.get(id) {
                Some(tile) => {
                    grid.tiles.insert(*pos, tile);
                }
                None => {
                    warn!("unknown tile id {:?} at {}, skipping", id, pos);
                }
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::TileRegistry;

    #[test]
    fn test_place_tile_seeds_health() {
        let registry = TileRegistry::create_default();
        let dirt = registry.get("dirt").unwrap();

        let mut grid = WorldGrid::new();
        let mut store = CellStore::new();
        let pos = CellPos::new(2, -1, 0);

        grid.place_tile(pos, dirt.clone(), &mut store);

        assert!(grid.is_occupied(pos));
        assert_eq!(store.get_int(pos, "health", -1), dirt.health);
    }

    #[test]
    fn test_clear_tile_removes_occupant() {
        let registry = TileRegistry::create_default();
        let dirt = registry.get("dirt").unwrap();

        let mut grid = WorldGrid::new();
        let mut store = CellStore::new();
        let pos = CellPos::new(0, 0, 0);

        grid.place_tile(pos, dirt, &mut store);
        grid.clear_tile(pos);

        assert!(!grid.is_occupied(pos));
        assert!(grid.tile_at(pos).is_none());
    }

    #[test]
    fn test_tile_at_empty_cell() {
        let grid = WorldGrid::new();
        assert!(grid.tile_at(CellPos::new(5, 5, 0)).is_none());
    }

    #[test]
    fn test_shared_definition_backs_many_cells() {
        let registry = TileRegistry::create_default();
        let stone = registry.get("stone").unwrap();

        let mut grid = WorldGrid::new();
        let mut store = CellStore::new();

        grid.place_tile(CellPos::new(0, 0, 0), stone.clone(), &mut store);
        grid.place_tile(CellPos::new(1, 0, 0), stone.clone(), &mut store);

        let a = grid.tile_at(CellPos::new(0, 0, 0)).unwrap();
        let b = grid.tile_at(CellPos::new(1, 0, 0)).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }
}
