//! Item model override documents.
//!
//! The client looks up `assets/minecraft/models/item/<base type>.json` for
//! every vanilla item. Each generated document keeps the vanilla look as its
//! default and adds one override per custom item, selected by the item's
//! `custom_model_data` value.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use noble_core::ItemDefinition;
use serde::Serialize;

use crate::error::{PackError, PackResult};

/// Directory of the generated documents, relative to the pack root.
pub const OVERRIDE_DIR: &str = "assets/minecraft/models/item";

const HANDHELD_PARENT: &str = "minecraft:item/handheld";
const GENERATED_PARENT: &str = "minecraft:item/generated";
const HANDHELD_MARKERS: [&str; 5] = ["SWORD", "AXE", "HOE", "PICKAXE", "SHOVEL"];

/// One variant id routed to one custom model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    /// The `custom_model_data` value that selects the model.
    pub variant_id: i32,
    /// Namespaced model id, e.g. `nobleitems:item/blade.geo`.
    pub model: String,
}

/// The namespaced model id for a model file path.
///
/// Separators are normalized, a leading `models/` and a trailing `.json` are
/// dropped: `models/item/blade.geo.json` becomes `<namespace>:item/blade.geo`.
pub fn model_resource_id(namespace: &str, model_path: &str) -> String {
    let normalized = model_path.replace('\\', "/");
    let path = normalized.strip_prefix("models/").unwrap_or(&normalized);
    let path = path.strip_suffix(".json").unwrap_or(path);
    format!("{namespace}:{path}")
}

/// Whether items of this base type are held like tools.
pub fn is_handheld(base_type: &str) -> bool {
    let name = base_type.to_uppercase();
    HANDHELD_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Root-relative path of the document for a base type.
pub fn document_path(base_type: &str) -> String {
    format!("{OVERRIDE_DIR}/{}.json", base_type.to_lowercase())
}

/// Group overriding items by lower-cased base type, each group sorted by
/// variant id. Items sharing a variant id keep their input order.
pub fn collect<'a>(
    items: impl IntoIterator<Item = &'a ItemDefinition>,
    namespace: &str,
) -> BTreeMap<String, Vec<OverrideEntry>> {
    let mut groups: BTreeMap<String, Vec<OverrideEntry>> = BTreeMap::new();
    for item in items.into_iter().filter(|i| i.has_override()) {
        groups
            .entry(item.base_type.to_lowercase())
            .or_default()
            .push(OverrideEntry {
                variant_id: item.variant_id,
                model: model_resource_id(namespace, &item.model.model_path),
            });
    }
    for entries in groups.values_mut() {
        entries.sort_by_key(|e| e.variant_id);
    }
    groups
}

/// A generated item model with its override list.
#[derive(Debug, Clone, Serialize)]
pub struct ItemModelDocument {
    parent: String,
    textures: Textures,
    overrides: Vec<OverrideJson>,
}

#[derive(Debug, Clone, Serialize)]
struct Textures {
    layer0: String,
}

#[derive(Debug, Clone, Serialize)]
struct OverrideJson {
    predicate: Predicate,
    model: String,
}

#[derive(Debug, Clone, Serialize)]
struct Predicate {
    custom_model_data: i32,
}

impl ItemModelDocument {
    /// The document for `base_type` routing each entry, in the given order.
    pub fn for_base_type(base_type: &str, entries: &[OverrideEntry]) -> Self {
        let parent = if is_handheld(base_type) {
            HANDHELD_PARENT
        } else {
            GENERATED_PARENT
        };
        Self {
            parent: parent.to_string(),
            textures: Textures {
                layer0: format!("minecraft:item/{}", base_type.to_lowercase()),
            },
            overrides: entries
                .iter()
                .map(|e| OverrideJson {
                    predicate: Predicate {
                        custom_model_data: e.variant_id,
                    },
                    model: e.model.clone(),
                })
                .collect(),
        }
    }

    /// The parent model id.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Compact JSON text of the document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Write one document per group under `root`. Returns the root-relative
/// paths written, in base type order.
pub fn write_documents(
    root: &Path,
    groups: &BTreeMap<String, Vec<OverrideEntry>>,
) -> PackResult<Vec<String>> {
    let mut written = Vec::with_capacity(groups.len());
    for (base_type, entries) in groups {
        let relative = document_path(base_type);
        let path = root.join(&relative);
        let json = ItemModelDocument::for_base_type(base_type, entries)
            .to_json()
            .map_err(|source| PackError::Serialize {
                path: path.clone(),
                source,
            })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| PackError::WriteDocument {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, json).map_err(|source| PackError::WriteDocument {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("wrote {} overrides to {relative}", entries.len());
        written.push(relative);
    }
    Ok(written)
}

/// Several items claiming the same variant id on the same base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Lower-cased base type.
    pub base_type: String,
    /// The shared variant id.
    pub variant_id: i32,
    /// Ids of the colliding items, in input order.
    pub item_ids: Vec<String>,
}

/// Find variant id collisions among overriding items. Colliding items are
/// still all written to the document; this only reports them.
pub fn find_collisions<'a>(items: impl IntoIterator<Item = &'a ItemDefinition>) -> Vec<Collision> {
    let mut claims: BTreeMap<(String, i32), Vec<String>> = BTreeMap::new();
    for item in items.into_iter().filter(|i| i.has_override()) {
        claims
            .entry((item.base_type.to_lowercase(), item.variant_id))
            .or_default()
            .push(item.id.clone());
    }
    claims
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|((base_type, variant_id), item_ids)| Collision {
            base_type,
            variant_id,
            item_ids,
        })
        .collect()
}
