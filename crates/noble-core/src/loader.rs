//! Definition files.
//!
//! Items live in `items.json` under an `"items"` object keyed by id, mobs in
//! `mobs.json` under `"mobs"`. Field names are kebab-case and every field is
//! optional.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{NobleError, NobleResult};
use crate::item::ItemDefinition;
use crate::mob::{EquipmentSlot, MobDefinition};
use crate::model::{ItemStats, ModelReference};
use crate::registry::DefinitionSnapshot;

/// File name of the item definitions inside a data directory.
pub const ITEMS_FILE: &str = "items.json";
/// File name of the mob definitions inside a data directory.
pub const MOBS_FILE: &str = "mobs.json";

/// Material used when an item does not name one.
pub const DEFAULT_MATERIAL: &str = "STONE";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemsFile {
    items: Option<BTreeMap<String, ItemSpec>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MobsFile {
    mobs: Option<BTreeMap<String, MobSpec>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct ItemSpec {
    display_name: Option<String>,
    material: Option<String>,
    custom_model_data: i32,
    lore: Vec<String>,
    stats: Option<StatsSpec>,
    blockbench: Option<ModelSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct MobSpec {
    display_name: Option<String>,
    #[serde(rename = "type")]
    entity_type: Option<String>,
    max_health: Option<f64>,
    attack_damage: Option<f64>,
    blockbench: Option<ModelSpec>,
    equipment: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct StatsSpec {
    damage: f64,
    defense: f64,
    critical_chance: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ModelSpec {
    model: String,
    texture: String,
    scale: f64,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            model: String::new(),
            texture: String::new(),
            scale: 1.0,
        }
    }
}

impl From<Option<ModelSpec>> for ModelReference {
    fn from(spec: Option<ModelSpec>) -> Self {
        match spec {
            Some(spec) => ModelReference::new(spec.model, spec.texture).with_scale(spec.scale),
            None => ModelReference::NONE,
        }
    }
}

impl From<Option<StatsSpec>> for ItemStats {
    fn from(spec: Option<StatsSpec>) -> Self {
        match spec {
            Some(spec) => ItemStats {
                damage: spec.damage,
                defense: spec.defense,
                critical_chance: spec.critical_chance,
            },
            None => ItemStats::EMPTY,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> NobleResult<T> {
    if !path.exists() {
        return Err(NobleError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| NobleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| NobleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load item definitions from a JSON file.
pub fn load_items(path: &Path) -> NobleResult<Vec<ItemDefinition>> {
    let file: ItemsFile = read_json(path)?;
    let Some(section) = file.items else {
        tracing::warn!("no items section found in {}", file_name(path));
        return Ok(Vec::new());
    };

    let items: Vec<_> = section
        .into_iter()
        .map(|(id, spec)| ItemDefinition {
            display_name: spec.display_name.unwrap_or_else(|| id.clone()),
            base_type: spec
                .material
                .unwrap_or_else(|| DEFAULT_MATERIAL.to_string()),
            variant_id: spec.custom_model_data,
            lore: spec.lore,
            model: spec.blockbench.into(),
            stats: spec.stats.into(),
            id,
        })
        .collect();

    tracing::info!("loaded {} items from {}", items.len(), file_name(path));
    Ok(items)
}

/// Load mob definitions from a JSON file.
pub fn load_mobs(path: &Path) -> NobleResult<Vec<MobDefinition>> {
    let file: MobsFile = read_json(path)?;
    let Some(section) = file.mobs else {
        tracing::warn!("no mobs section found in {}", file_name(path));
        return Ok(Vec::new());
    };

    let mobs: Vec<_> = section
        .into_iter()
        .map(|(id, spec)| {
            let equipment = parse_equipment(&id, spec.equipment);
            MobDefinition {
                display_name: spec.display_name.unwrap_or_else(|| id.clone()),
                base_type: spec
                    .entity_type
                    .map(|t| t.to_uppercase())
                    .unwrap_or_else(|| MobDefinition::DEFAULT_TYPE.to_string()),
                health_points: spec.max_health.unwrap_or(MobDefinition::DEFAULT_HEALTH),
                attack_power: spec.attack_damage.unwrap_or(MobDefinition::DEFAULT_ATTACK),
                model: spec.blockbench.into(),
                equipment,
                id,
            }
        })
        .collect();

    tracing::info!("loaded {} mobs from {}", mobs.len(), file_name(path));
    Ok(mobs)
}

fn parse_equipment(mob_id: &str, raw: BTreeMap<String, String>) -> BTreeMap<EquipmentSlot, String> {
    let mut equipment = BTreeMap::new();
    for (key, item_id) in raw {
        let Some(slot) = EquipmentSlot::parse(&key) else {
            tracing::warn!("skipping unknown equipment slot '{key}' for mob {mob_id}");
            continue;
        };
        if item_id.is_empty() {
            tracing::warn!("skipping empty item id in slot {slot} for mob {mob_id}");
            continue;
        }
        equipment.insert(slot, item_id);
    }
    equipment
}

/// A freshly loaded snapshot, with how many definitions a later one with the
/// same id shadowed.
#[derive(Debug, Clone, Default)]
pub struct LoadedDefinitions {
    /// The definitions that won.
    pub snapshot: DefinitionSnapshot,
    /// Item definitions dropped in favour of a later one.
    pub shadowed_items: usize,
    /// Mob definitions dropped in favour of a later one.
    pub shadowed_mobs: usize,
}

/// Load `items.json` and `mobs.json` from a data directory, keeping count of
/// shadowed ids.
pub fn load_definitions(data_dir: &Path) -> NobleResult<LoadedDefinitions> {
    let items = load_items(&data_dir.join(ITEMS_FILE))?;
    let mobs = load_mobs(&data_dir.join(MOBS_FILE))?;

    let mut snapshot = DefinitionSnapshot::default();
    let shadowed_items = snapshot.items.replace_all(items);
    let shadowed_mobs = snapshot.mobs.replace_all(mobs);
    if shadowed_items > 0 {
        tracing::warn!("{shadowed_items} item definitions share an id with a later one");
    }
    if shadowed_mobs > 0 {
        tracing::warn!("{shadowed_mobs} mob definitions share an id with a later one");
    }
    Ok(LoadedDefinitions {
        snapshot,
        shadowed_items,
        shadowed_mobs,
    })
}

/// Load `items.json` and `mobs.json` from a data directory into a snapshot.
pub fn load_snapshot(data_dir: &Path) -> NobleResult<DefinitionSnapshot> {
    load_definitions(data_dir).map(|loaded| loaded.snapshot)
}

const ITEMS_TEMPLATE: &str = r#"{
  "items": {
    "example_blade": {
      "display-name": "Example Blade",
      "material": "DIAMOND_SWORD",
      "custom-model-data": 1001,
      "lore": ["A blade forged for testing."],
      "stats": {
        "damage": 5.0,
        "defense": 0.0,
        "critical-chance": 0.1
      },
      "blockbench": {
        "model": "models/item/example_blade.geo.json",
        "texture": "textures/item/example_blade.png",
        "scale": 1.0
      }
    }
  }
}
"#;

const MOBS_TEMPLATE: &str = r#"{
  "mobs": {
    "example_warrior": {
      "display-name": "Example Warrior",
      "type": "ZOMBIE",
      "max-health": 30.0,
      "attack-damage": 7.0,
      "equipment": {
        "hand": "example_blade"
      }
    }
  }
}
"#;

/// Write starter `items.json` and `mobs.json` into `data_dir`, leaving any
/// existing file alone. Returns the files that were created.
pub fn write_templates(data_dir: &Path) -> NobleResult<Vec<PathBuf>> {
    fs::create_dir_all(data_dir).map_err(|source| NobleError::Io {
        path: data_dir.to_path_buf(),
        source,
    })?;

    let mut created = Vec::new();
    for (name, content) in [(ITEMS_FILE, ITEMS_TEMPLATE), (MOBS_FILE, MOBS_TEMPLATE)] {
        let path = data_dir.join(name);
        if path.exists() {
            continue;
        }
        fs::write(&path, content).map_err(|source| NobleError::Io {
            path: path.clone(),
            source,
        })?;
        created.push(path);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_items_and_mobs() {
        let dir = TempDir::new().unwrap();
        let items = write(
            &dir,
            ITEMS_FILE,
            r#"{"items": {"blade": {
                "display-name": "Blade",
                "material": "DIAMOND_SWORD",
                "custom-model-data": 10,
                "lore": ["Line"],
                "stats": {"damage": 5}
            }}}"#,
        );
        let mobs = write(
            &dir,
            MOBS_FILE,
            r#"{"mobs": {"warrior": {
                "display-name": "Warrior",
                "type": "zombie",
                "max-health": 30,
                "attack-damage": 7,
                "equipment": {"hand": "blade"}
            }}}"#,
        );

        let items = load_items(&items).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "blade");
        assert_eq!(items[0].variant_id, 10);
        assert_eq!(items[0].lore.len(), 1);
        assert!((items[0].stats.damage - 5.0).abs() < f64::EPSILON);
        assert!(items[0].model.is_none());

        let mobs = load_mobs(&mobs).unwrap();
        assert_eq!(mobs.len(), 1);
        assert_eq!(mobs[0].id, "warrior");
        assert_eq!(mobs[0].base_type, "ZOMBIE");
        assert!((mobs[0].health_points - 30.0).abs() < f64::EPSILON);
        assert_eq!(mobs[0].equipment[&EquipmentSlot::Hand], "blade");
    }

    #[test]
    fn item_defaults_applied() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, ITEMS_FILE, r#"{"items": {"rock": {}}}"#);
        let items = load_items(&path).unwrap();
        assert_eq!(items[0].display_name, "rock");
        assert_eq!(items[0].base_type, DEFAULT_MATERIAL);
        assert_eq!(items[0].variant_id, 0);
        assert!(items[0].stats.is_empty());
    }

    #[test]
    fn blockbench_section_parsed() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            ITEMS_FILE,
            r#"{"items": {"blade": {"blockbench": {
                "model": "models/item/blade.geo.json",
                "texture": "textures/item/blade.png"
            }}}}"#,
        );
        let items = load_items(&path).unwrap();
        assert_eq!(items[0].model.model_path, "models/item/blade.geo.json");
        assert_eq!(items[0].model.texture_path, "textures/item/blade.png");
        assert!((items[0].model.scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_blockbench_section_is_none() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, ITEMS_FILE, r#"{"items": {"blade": {"blockbench": {}}}}"#);
        let items = load_items(&path).unwrap();
        assert!(items[0].model.is_none());
    }

    #[test]
    fn missing_section_yields_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, MOBS_FILE, "{}");
        assert!(load_mobs(&path).unwrap().is_empty());
    }

    #[test]
    fn unknown_slot_and_empty_item_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            MOBS_FILE,
            r#"{"mobs": {"warrior": {"equipment": {"tail": "blade", "head": "", "FEET": "boots"}}}}"#,
        );
        let mobs = load_mobs(&path).unwrap();
        assert_eq!(mobs[0].equipment.len(), 1);
        assert_eq!(mobs[0].equipment[&EquipmentSlot::Feet], "boots");
        assert_eq!(mobs[0].base_type, MobDefinition::DEFAULT_TYPE);
    }

    #[test]
    fn missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_items(&dir.path().join(ITEMS_FILE)).unwrap_err();
        assert!(matches!(err, NobleError::MissingFile(_)));
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, ITEMS_FILE, "{ not json");
        let err = load_items(&path).unwrap_err();
        assert!(matches!(err, NobleError::Parse { .. }));
        assert!(err.to_string().contains(ITEMS_FILE));
    }

    #[test]
    fn templates_load_cleanly() {
        let dir = TempDir::new().unwrap();
        let created = write_templates(dir.path()).unwrap();
        assert_eq!(created.len(), 2);

        let snapshot = load_snapshot(dir.path()).unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.mobs.len(), 1);
        assert!(snapshot.unresolved_equipment().is_empty());
    }

    #[test]
    fn templates_do_not_overwrite() {
        let dir = TempDir::new().unwrap();
        write(&dir, ITEMS_FILE, r#"{"items": {}}"#);
        let created = write_templates(dir.path()).unwrap();
        assert_eq!(created, vec![dir.path().join(MOBS_FILE)]);
        assert_eq!(
            fs::read_to_string(dir.path().join(ITEMS_FILE)).unwrap(),
            r#"{"items": {}}"#
        );
    }

    #[test]
    fn case_variant_ids_are_counted_as_shadowed() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            ITEMS_FILE,
            r#"{"items": {"Blade": {"material": "STONE"}, "blade": {"material": "DIAMOND_SWORD"}}}"#,
        );
        write(&dir, MOBS_FILE, r#"{"mobs": {"ghost": {}}}"#);

        let loaded = load_definitions(dir.path()).unwrap();
        assert_eq!(loaded.shadowed_items, 1);
        assert_eq!(loaded.shadowed_mobs, 0);
        assert_eq!(loaded.snapshot.items.len(), 1);
        assert_eq!(loaded.snapshot.items.get("BLADE").unwrap().base_type, "DIAMOND_SWORD");
    }
}
