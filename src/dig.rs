use crate::cell_store::{CellStore, HEALTH_PROPERTY};
use crate::grid::{CellPos, TileGrid};
use crate::inventory::Inventory;
use crate::item::{InventoryItem, TileDefinition};
use crate::reach;
use log::warn;
use std::rc::Rc;

/// Terminal result of one dig attempt
#[derive(Debug, Clone)]
pub enum DigOutcome {
    /// Target cell is outside the actor's reach box; nothing changed
    OutOfRange,

    /// No tile occupies the target cell; nothing changed
    NothingToDig,

    /// Tile took damage and survived with `remaining` health
    Damaged { remaining: i32 },

    /// Tile was destroyed and its item yielded toward the inventory
    Destroyed { tile: Rc<TileDefinition> },
}

/// Orchestrates dig attempts against the grid, cell store and inventory
///
/// Holds only configuration (dig power, reach calibration); all mutable
/// state lives in the collaborators passed to `dig`, so attempts are
/// independent of each other.
pub struct Digger {
    /// Health subtracted per dig
    pub dig_power: i32,

    /// Reach calibration marker cells, relative to the actor's cell
    ///
    /// These travel with the actor; see `reach` for how they shape the box.
    pub reach_markers: Vec<CellPos>,
}

impl Digger {
    pub fn new(dig_power: i32) -> Self {
        Digger {
            dig_power,
            reach_markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: Vec<CellPos>) -> Self {
        self.reach_markers = markers;
        self
    }

    /// Attempts to dig the target cell from the actor's position
    ///
    /// Range is gated first, then the occupant is resolved, damaged, and on
    /// destruction cleared from the grid with its item sent to the inventory.
    /// A destroyed tile whose yield does not fit is still destroyed; the
    /// yield is dropped with a warning.
    pub fn dig(
        &self,
        actor: CellPos,
        target: CellPos,
        grid: &mut dyn TileGrid,
        store: &mut CellStore,
        inventory: &mut Inventory,
    ) -> DigOutcome {
        let markers: Vec<CellPos> = self.reach_markers.iter().map(|m| actor + *m).collect();
        if !reach::can_dig(actor, &markers, target) {
            return DigOutcome::OutOfRange;
        }

        let Some(tile) = grid.tile_at(target) else {
            return DigOutcome::NothingToDig;
        };

        let health = store.get_int(target, HEALTH_PROPERTY, -1);

        // An occupied cell should always carry positive health; keep going
        // with the recorded value so the tile still comes out of the world.
        if health <= 0 {
            warn!("occupied cell {} has health {}, tile should not be there", target, health);
        }

        let remaining = health - self.dig_power;

        if remaining <= 0 {
            store.remove(target, HEALTH_PROPERTY);
            grid.clear_tile(target);

            let yielded: Rc<dyn InventoryItem> = tile.clone();
            if !inventory.add(yielded) {
                warn!("inventory full, yield from {} was dropped", target);
            }

            DigOutcome::Destroyed { tile }
        } else {
            store.set_int(target, HEALTH_PROPERTY, remaining);
            DigOutcome::Damaged { remaining }
        }
    }
}
