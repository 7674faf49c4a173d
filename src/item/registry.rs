use super::definition::TileDefinition;
use std::collections::HashMap;
use std::rc::Rc;

/// Central registry of all tile definitions
///
/// This is the single source of truth for what tile types exist. Definitions
/// are handed out as shared Rc instances: every cell occupied by "dirt" and
/// every inventory slot holding dirt points at the same allocation, which is
/// what makes stacking identity work (see Inventory).
pub struct TileRegistry {
    tiles: HashMap<String, Rc<TileDefinition>>,
}

impl TileRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        TileRegistry {
            tiles: HashMap::new(),
        }
    }

    /// Creates a registry with all base tile types pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        registry.register_base_tiles();
        registry
    }

    /// Registers a new tile definition
    ///
    /// Returns an error if a definition with this id already exists.
    pub fn register(&mut self, tile: TileDefinition) -> Result<(), String> {
        if self.tiles.contains_key(&tile.id) {
            return Err(format!("Tile '{}' already registered", tile.id));
        }

        self.tiles.insert(tile.id.clone(), Rc::new(tile));
        Ok(())
    }

    /// Gets a shared handle to a definition by id
    pub fn get(&self, id: &str) -> Option<Rc<TileDefinition>> {
        self.tiles.get(id).cloned()
    }

    /// Returns true if a definition with this id exists
    pub fn exists(&self, id: &str) -> bool {
        self.tiles.contains_key(id)
    }

    /// Returns all registered ids
    pub fn all_ids(&self) -> Vec<&String> {
        self.tiles.keys().collect()
    }

    // ======================================================================
    // Tile Registration - Base Tiles
    // ======================================================================

    /// Registers all base tile types. Add new diggables here.
    fn register_base_tiles(&mut self) {
        self.register(
            TileDefinition::new("dirt", "Dirt", 1, 1, true, 32).with_sprites(vec![
                "tiles/dirt_0.png".to_string(),
                "tiles/dirt_1.png".to_string(),
            ]),
        )
        .expect("Failed to register dirt");

        self.register(
            TileDefinition::new("stone", "Stone", 3, 2, true, 32)
                .with_sprites(vec!["tiles/stone_0.png".to_string()]),
        )
        .expect("Failed to register stone");

        self.register(
            TileDefinition::new("coal", "Coal", 3, 5, true, 16)
                .with_sprites(vec!["tiles/coal_0.png".to_string()]),
        )
        .expect("Failed to register coal");

        self.register(
            TileDefinition::new("gold", "Gold", 5, 12, true, 8)
                .with_sprites(vec!["tiles/gold_0.png".to_string()]),
        )
        .expect("Failed to register gold");
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::create_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_base_tiles() {
        let registry = TileRegistry::create_default();
        assert!(registry.exists("dirt"));
        assert!(registry.exists("stone"));
        assert!(registry.exists("coal"));
        assert!(registry.exists("gold"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = TileRegistry::new();
        registry
            .register(TileDefinition::new("dirt", "Dirt", 1, 1, true, 32))
            .unwrap();

        let result = registry.register(TileDefinition::new("dirt", "Dirt", 1, 1, true, 32));
        assert!(result.is_err());
    }

    #[test]
    fn test_get_returns_same_instance() {
        let registry = TileRegistry::create_default();
        let a = registry.get("dirt").unwrap();
        let b = registry.get("dirt").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = TileRegistry::create_default();
        assert!(registry.get("bedrock").is_none());
    }
}
