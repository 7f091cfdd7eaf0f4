use serde::{Deserialize, Serialize};

use crate::model::{ItemStats, ModelReference};

/// A declaratively described custom item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier, compared case-insensitively.
    pub id: String,
    /// Name shown to players.
    pub display_name: String,
    /// The vanilla material the item is built on, e.g. `DIAMOND_SWORD`.
    pub base_type: String,
    /// Marker routing the base type to the custom model. 0 means no override.
    pub variant_id: i32,
    /// Lore lines in display order.
    pub lore: Vec<String>,
    /// Custom model, or [`ModelReference::NONE`].
    pub model: ModelReference,
    /// Stat payload.
    pub stats: ItemStats,
}

impl ItemDefinition {
    /// Create an item with the given id and base type. The display name
    /// defaults to the id; everything else is empty.
    pub fn new(id: impl Into<String>, base_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            base_type: base_type.into(),
            variant_id: 0,
            lore: Vec::new(),
            model: ModelReference::NONE,
            stats: ItemStats::EMPTY,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the variant id.
    pub fn with_variant(mut self, variant_id: i32) -> Self {
        self.variant_id = variant_id;
        self
    }

    /// Set the lore lines.
    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    /// Set the custom model.
    pub fn with_model(mut self, model: ModelReference) -> Self {
        self.model = model;
        self
    }

    /// Set the stats.
    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    /// Returns true if this item needs an entry in its base type's model
    /// override document.
    pub fn has_override(&self) -> bool {
        self.variant_id > 0 && !self.model.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let item = ItemDefinition::new("blade", "DIAMOND_SWORD");
        assert_eq!(item.display_name, "blade");
        assert_eq!(item.variant_id, 0);
        assert!(item.lore.is_empty());
        assert!(item.model.is_none());
        assert!(item.stats.is_empty());
    }

    #[test]
    fn override_requires_variant_and_model() {
        let model = ModelReference::new("models/item/blade.geo.json", "");
        let base = ItemDefinition::new("blade", "DIAMOND_SWORD");

        assert!(!base.clone().with_variant(10).has_override());
        assert!(!base.clone().with_model(model.clone()).has_override());
        assert!(!base.clone().with_variant(-3).with_model(model.clone()).has_override());
        assert!(base.with_variant(10).with_model(model).has_override());
    }
}
