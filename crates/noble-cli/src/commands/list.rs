use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use noble_core::DefinitionSnapshot;

use crate::ListKind;

pub fn run(dir: &Path, kind: Option<ListKind>) -> Result<(), String> {
    let snapshot = super::load(dir)?;

    match kind {
        Some(ListKind::Items) => print_items(&snapshot),
        Some(ListKind::Mobs) => print_mobs(&snapshot),
        None => {
            print_items(&snapshot);
            println!();
            print_mobs(&snapshot);
        }
    }

    Ok(())
}

fn print_items(snapshot: &DefinitionSnapshot) {
    if snapshot.items.is_empty() {
        println!("  No items defined.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Base type", "Variant", "Model"]);

    for item in snapshot.items.values() {
        let variant = if item.variant_id > 0 {
            item.variant_id.to_string()
        } else {
            "-".to_string()
        };
        let model = if item.model.is_none() {
            "-".to_string()
        } else {
            super::truncate(&item.model.model_path, 48)
        };
        table.add_row(vec![
            item.id.clone(),
            item.display_name.clone(),
            item.base_type.clone(),
            variant,
            model,
        ]);
    }

    println!("{table}");
    println!("  {} items", snapshot.items.len());
}

fn print_mobs(snapshot: &DefinitionSnapshot) {
    if snapshot.mobs.is_empty() {
        println!("  No mobs defined.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Type", "Health", "Attack", "Equipment"]);

    for mob in snapshot.mobs.values() {
        let equipment = if mob.equipment.is_empty() {
            "-".to_string()
        } else {
            let slots: Vec<_> = mob
                .equipment
                .iter()
                .map(|(slot, item)| format!("{slot}: {item}"))
                .collect();
            super::truncate(&slots.join(", "), 48)
        };
        table.add_row(vec![
            mob.id.clone(),
            mob.display_name.clone(),
            mob.base_type.clone(),
            format!("{:.1}", mob.health_points),
            format!("{:.1}", mob.attack_power),
            equipment,
        ]);
    }

    println!("{table}");
    println!("  {} mobs", snapshot.mobs.len());
}
