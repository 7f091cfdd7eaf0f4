use std::collections::BTreeMap;

use crate::item::ItemDefinition;
use crate::mob::{EquipmentSlot, MobDefinition};
use crate::model::ModelReference;

/// A definition that can be stored in a [`Registry`].
pub trait Definition {
    /// The definition's id as written by the operator.
    fn id(&self) -> &str;

    /// The custom model, or [`ModelReference::NONE`].
    fn model(&self) -> &ModelReference;
}

impl Definition for ItemDefinition {
    fn id(&self) -> &str {
        &self.id
    }

    fn model(&self) -> &ModelReference {
        &self.model
    }
}

impl Definition for MobDefinition {
    fn id(&self) -> &str {
        &self.id
    }

    fn model(&self) -> &ModelReference {
        &self.model
    }
}

/// A keyed store of definitions. Keys are lower-cased ids, so lookups are
/// case-insensitive, and iteration follows id order.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Definition> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of definitions.
    pub fn from_definitions(definitions: impl IntoIterator<Item = T>) -> Self {
        let mut registry = Self::new();
        registry.replace_all(definitions);
        registry
    }

    /// Look up a definition by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(&id.to_lowercase())
    }

    /// Replace every definition. When two definitions share an id, the later
    /// one wins. Returns how many definitions were shadowed that way.
    pub fn replace_all(&mut self, definitions: impl IntoIterator<Item = T>) -> usize {
        self.entries.clear();
        let mut shadowed = 0;
        for definition in definitions {
            if self
                .entries
                .insert(definition.id().to_lowercase(), definition)
                .is_some()
            {
                shadowed += 1;
            }
        }
        shadowed
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All definitions in id order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// All ids as originally written, in id order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|d| d.id())
    }
}

/// A read-only view of both registries, taken once and handed to a pack build.
///
/// The caller is responsible for not replacing the snapshot while a build
/// borrows it.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSnapshot {
    /// Item definitions.
    pub items: Registry<ItemDefinition>,
    /// Mob definitions.
    pub mobs: Registry<MobDefinition>,
}

/// A mob equipment entry whose item id is not a known item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedEquipment {
    /// The mob declaring the equipment.
    pub mob_id: String,
    /// The slot the item would go into.
    pub slot: EquipmentSlot,
    /// The unknown item id.
    pub item_id: String,
}

impl DefinitionSnapshot {
    /// Build a snapshot from item and mob lists.
    pub fn new(
        items: impl IntoIterator<Item = ItemDefinition>,
        mobs: impl IntoIterator<Item = MobDefinition>,
    ) -> Self {
        Self {
            items: Registry::from_definitions(items),
            mobs: Registry::from_definitions(mobs),
        }
    }

    /// Every model reference that is not [`ModelReference::NONE`], items first.
    pub fn models(&self) -> impl Iterator<Item = &ModelReference> {
        self.items
            .values()
            .map(Definition::model)
            .chain(self.mobs.values().map(Definition::model))
            .filter(|m| !m.is_none())
    }

    /// Mob equipment entries that point at item ids the item registry lacks.
    pub fn unresolved_equipment(&self) -> Vec<UnresolvedEquipment> {
        self.mobs
            .values()
            .flat_map(|mob| {
                mob.equipment
                    .iter()
                    .filter(|(_, item_id)| self.items.get(item_id).is_none())
                    .map(|(slot, item_id)| UnresolvedEquipment {
                        mob_id: mob.id.clone(),
                        slot: *slot,
                        item_id: item_id.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_case_insensitive() {
        let registry = Registry::from_definitions([ItemDefinition::new("Blade", "DIAMOND_SWORD")]);
        assert!(registry.get("blade").is_some());
        assert!(registry.get("BLADE").is_some());
        assert!(registry.get("axe").is_none());
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["Blade"]);
    }

    #[test]
    fn replace_all_clears_previous_generation() {
        let mut registry = Registry::from_definitions([ItemDefinition::new("old", "STONE")]);
        registry.replace_all([ItemDefinition::new("new", "STONE")]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("old").is_none());
        assert!(registry.get("new").is_some());
    }

    #[test]
    fn replace_all_last_duplicate_wins() {
        let mut registry = Registry::new();
        let shadowed = registry.replace_all([
            ItemDefinition::new("blade", "STONE"),
            ItemDefinition::new("BLADE", "DIAMOND_SWORD"),
        ]);
        assert_eq!(shadowed, 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("blade").unwrap().base_type, "DIAMOND_SWORD");
    }

    #[test]
    fn values_in_id_order() {
        let registry = Registry::from_definitions([
            ItemDefinition::new("c", "STONE"),
            ItemDefinition::new("a", "STONE"),
            ItemDefinition::new("b", "STONE"),
        ]);
        let ids: Vec<_> = registry.values().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn models_skip_none() {
        let snapshot = DefinitionSnapshot::new(
            [
                ItemDefinition::new("plain", "STONE"),
                ItemDefinition::new("fancy", "STONE")
                    .with_model(ModelReference::new("models/fancy.json", "")),
            ],
            [MobDefinition::new("ghost", "ZOMBIE")
                .with_model(ModelReference::new("models/ghost.json", "textures/ghost.png"))],
        );
        assert_eq!(snapshot.models().count(), 2);
    }

    #[test]
    fn unresolved_equipment_reported() {
        let snapshot = DefinitionSnapshot::new(
            [ItemDefinition::new("blade", "DIAMOND_SWORD")],
            [MobDefinition::new("warrior", "ZOMBIE")
                .with_equipment(EquipmentSlot::Hand, "BLADE")
                .with_equipment(EquipmentSlot::Head, "crown")],
        );
        let unresolved = snapshot.unresolved_equipment();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].mob_id, "warrior");
        assert_eq!(unresolved[0].slot, EquipmentSlot::Head);
        assert_eq!(unresolved[0].item_id, "crown");
    }
}
