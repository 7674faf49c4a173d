use super::traits::{InventoryItem, Tradeable};

/// The blueprint for a diggable tile type
///
/// This defines the static properties shared across all cells occupied by the
/// tile. Per-cell mutable state (remaining health) lives in the CellStore;
/// the definition itself is never mutated once registered.
#[derive(Debug, Clone)]
pub struct TileDefinition {
    /// Unique identifier (used for lookups and saves)
    pub id: String,

    /// Display name shown in UI
    pub name: String,

    /// How many hit points a freshly placed tile of this type has
    pub health: i32,

    /// Whether the trade hut accepts this tile
    pub tradeable: bool,

    /// Coins received when selling (always >= 1)
    pub sell_price: u32,

    /// Explicit buy price; None derives it from the sell price
    pub custom_buy_price: Option<u32>,

    /// Whether one inventory slot can hold several of these
    pub stackable: bool,

    /// Slot capacity when stackable
    pub stack_size: u32,

    /// Explicit inventory icon; None falls back to the first variant sprite
    pub inventory_icon: Option<String>,

    /// Visual variant sprite paths (variant selection is the render layer's job)
    pub sprites: Vec<String>,
}

impl TileDefinition {
    /// Creates a new tile definition
    ///
    /// Sell price and stack size are clamped to at least 1.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        health: i32,
        sell_price: u32,
        stackable: bool,
        stack_size: u32,
    ) -> Self {
        TileDefinition {
            id: id.into(),
            name: name.into(),
            health,
            tradeable: true,
            sell_price: sell_price.max(1),
            custom_buy_price: None,
            stackable,
            stack_size: stack_size.max(1),
            inventory_icon: None,
            sprites: Vec::new(),
        }
    }

    pub fn with_buy_price(mut self, buy_price: u32) -> Self {
        self.custom_buy_price = Some(buy_price);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.inventory_icon = Some(icon.into());
        self
    }

    pub fn with_sprites(mut self, sprites: Vec<String>) -> Self {
        self.sprites = sprites;
        self
    }

    pub fn not_tradeable(mut self) -> Self {
        self.tradeable = false;
        self
    }
}

impl Tradeable for TileDefinition {
    fn tradeable(&self) -> bool {
        self.tradeable
    }

    fn sell_price(&self) -> u32 {
        self.sell_price.max(1)
    }

    fn buy_price(&self) -> u32 {
        match self.custom_buy_price {
            Some(price) if price > 0 => price,
            _ => (self.sell_price() as f32 * 1.5).ceil() as u32,
        }
    }
}

impl InventoryItem for TileDefinition {
    fn inventory_icon(&self) -> Option<&str> {
        self.inventory_icon
            .as_deref()
            .or_else(|| self.sprites.first().map(|s| s.as_str()))
    }

    fn stackable(&self) -> bool {
        self.stackable
    }

    fn stack_size(&self) -> u32 {
        if self.stackable { self.stack_size } else { 1 }
    }
}
