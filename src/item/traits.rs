/// Capability for items the trade subsystem can buy and sell
pub trait Tradeable {
    /// Whether the item may be traded at all
    fn tradeable(&self) -> bool;

    /// Coins received when selling; providers clamp this to at least 1
    fn sell_price(&self) -> u32;

    /// Coins paid when buying
    ///
    /// Defaults to ceil(sell_price * 1.5) unless the provider carries an
    /// explicit override.
    fn buy_price(&self) -> u32;
}

/// Capability for items that can sit in an inventory slot
pub trait InventoryItem: Tradeable {
    /// Sprite path shown in the inventory UI
    fn inventory_icon(&self) -> Option<&str>;

    /// Whether one slot can hold more than one of this item
    fn stackable(&self) -> bool;

    /// How many fit in one slot; reports 1 for non-stackable items
    fn stack_size(&self) -> u32;
}
