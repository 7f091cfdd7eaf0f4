use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;
use noble_core::loader::{self, LoadedDefinitions};
use noble_pack::locator::AssetLocator;
use noble_pack::overrides;

pub fn run(dir: &Path) -> Result<(), String> {
    let LoadedDefinitions {
        snapshot,
        shadowed_items,
        shadowed_mobs,
    } = loader::load_definitions(dir).map_err(|e| super::error_chain(&e))?;

    let mut warnings = Vec::new();
    if shadowed_items > 0 {
        warnings.push(format!(
            "{shadowed_items} item definition(s) shadowed by a later one with the same id"
        ));
    }
    if shadowed_mobs > 0 {
        warnings.push(format!(
            "{shadowed_mobs} mob definition(s) shadowed by a later one with the same id"
        ));
    }

    for collision in overrides::find_collisions(snapshot.items.values()) {
        warnings.push(format!(
            "variant {} of {} is claimed by {}",
            collision.variant_id,
            collision.base_type,
            collision.item_ids.join(", ")
        ));
    }

    for unresolved in snapshot.unresolved_equipment() {
        warnings.push(format!(
            "mob {} equips unknown item \"{}\" in slot {}",
            unresolved.mob_id, unresolved.item_id, unresolved.slot
        ));
    }

    let locator = AssetLocator::new(dir);
    let references: BTreeSet<&str> = snapshot
        .models()
        .flat_map(|model| model.asset_paths())
        .collect();
    for reference in references {
        if locator.locate(reference).is_none() {
            warnings.push(format!("missing asset: {reference}"));
        }
    }

    for warning in &warnings {
        tracing::debug!("check: {warning}");
    }

    println!(
        "  Checked {} items and {} mobs in {}.",
        snapshot.items.len(),
        snapshot.mobs.len(),
        dir.display()
    );

    if warnings.is_empty() {
        println!("  All checks passed.");
        return Ok(());
    }

    println!();
    for warning in &warnings {
        println!("  {} {warning}", "warning:".yellow().bold());
    }
    println!();
    println!(
        "  {} warning{}",
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
