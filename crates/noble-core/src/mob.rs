use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ModelReference;

/// An equipment slot on a mob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Main hand.
    Hand,
    /// Off hand.
    OffHand,
    /// Helmet slot.
    Head,
    /// Chestplate slot.
    Chest,
    /// Leggings slot.
    Legs,
    /// Boots slot.
    Feet,
}

impl EquipmentSlot {
    /// Every slot, in equip order.
    pub const ALL: [EquipmentSlot; 6] = [
        Self::Hand,
        Self::OffHand,
        Self::Head,
        Self::Chest,
        Self::Legs,
        Self::Feet,
    ];

    /// Parse a slot name case-insensitively (`hand`, `OFF_HAND`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hand" => Some(Self::Hand),
            "off_hand" => Some(Self::OffHand),
            "head" => Some(Self::Head),
            "chest" => Some(Self::Chest),
            "legs" => Some(Self::Legs),
            "feet" => Some(Self::Feet),
            _ => None,
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hand => write!(f, "hand"),
            Self::OffHand => write!(f, "off_hand"),
            Self::Head => write!(f, "head"),
            Self::Chest => write!(f, "chest"),
            Self::Legs => write!(f, "legs"),
            Self::Feet => write!(f, "feet"),
        }
    }
}

/// A declaratively described custom mob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobDefinition {
    /// Unique identifier, compared case-insensitively.
    pub id: String,
    /// Name shown above the mob.
    pub display_name: String,
    /// The vanilla entity type, upper-cased, e.g. `ZOMBIE`.
    pub base_type: String,
    /// Maximum health.
    pub health_points: f64,
    /// Base attack damage.
    pub attack_power: f64,
    /// Custom model, or [`ModelReference::NONE`].
    pub model: ModelReference,
    /// Item ids worn in each slot.
    pub equipment: BTreeMap<EquipmentSlot, String>,
}

impl MobDefinition {
    /// Default entity type for mobs that do not name one.
    pub const DEFAULT_TYPE: &'static str = "ZOMBIE";
    /// Default maximum health.
    pub const DEFAULT_HEALTH: f64 = 20.0;
    /// Default attack damage.
    pub const DEFAULT_ATTACK: f64 = 3.0;

    /// Create a mob with default stats, no model and no equipment.
    pub fn new(id: impl Into<String>, base_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            base_type: base_type.into().to_uppercase(),
            health_points: Self::DEFAULT_HEALTH,
            attack_power: Self::DEFAULT_ATTACK,
            model: ModelReference::NONE,
            equipment: BTreeMap::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set health and attack.
    pub fn with_stats(mut self, health_points: f64, attack_power: f64) -> Self {
        self.health_points = health_points;
        self.attack_power = attack_power;
        self
    }

    /// Set the custom model.
    pub fn with_model(mut self, model: ModelReference) -> Self {
        self.model = model;
        self
    }

    /// Equip an item id in a slot, replacing any previous one.
    pub fn with_equipment(mut self, slot: EquipmentSlot, item_id: impl Into<String>) -> Self {
        self.equipment.insert(slot, item_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_parse_case_insensitive() {
        assert_eq!(EquipmentSlot::parse("hand"), Some(EquipmentSlot::Hand));
        assert_eq!(EquipmentSlot::parse("OFF_HAND"), Some(EquipmentSlot::OffHand));
        assert_eq!(EquipmentSlot::parse("Feet"), Some(EquipmentSlot::Feet));
        assert_eq!(EquipmentSlot::parse("tail"), None);
    }

    #[test]
    fn slot_display_roundtrips_through_parse() {
        for slot in EquipmentSlot::ALL {
            assert_eq!(EquipmentSlot::parse(&slot.to_string()), Some(slot));
        }
    }

    #[test]
    fn new_mob_defaults() {
        let mob = MobDefinition::new("warrior", "zombie");
        assert_eq!(mob.base_type, "ZOMBIE");
        assert_eq!(mob.display_name, "warrior");
        assert!((mob.health_points - 20.0).abs() < f64::EPSILON);
        assert!((mob.attack_power - 3.0).abs() < f64::EPSILON);
        assert!(mob.equipment.is_empty());
    }

    #[test]
    fn equipment_replaces_slot() {
        let mob = MobDefinition::new("warrior", "ZOMBIE")
            .with_equipment(EquipmentSlot::Hand, "blade")
            .with_equipment(EquipmentSlot::Hand, "axe");
        assert_eq!(mob.equipment.len(), 1);
        assert_eq!(mob.equipment[&EquipmentSlot::Hand], "axe");
    }
}
