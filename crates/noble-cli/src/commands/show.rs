use std::path::Path;

use colored::Colorize;
use noble_core::{ItemDefinition, MobDefinition, ModelReference};

pub fn run(dir: &Path, id: &str, json: bool) -> Result<(), String> {
    let snapshot = super::load(dir)?;

    if let Some(item) = snapshot.items.get(id) {
        if json {
            return print_json(item);
        }
        show_item(item);
    } else if let Some(mob) = snapshot.mobs.get(id) {
        if json {
            return print_json(mob);
        }
        show_mob(mob, |item_id| snapshot.items.get(item_id).is_some());
    } else {
        return Err(format!("no item or mob with id \"{id}\""));
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(definition: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(definition)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}

fn show_item(item: &ItemDefinition) {
    println!("  {} [{}]", item.display_name.bold(), "item".dimmed());
    println!();
    println!("  id:         {}", item.id);
    println!("  base type:  {}", item.base_type);
    if item.variant_id > 0 {
        println!("  variant:    {}", item.variant_id);
    }
    if !item.lore.is_empty() {
        println!();
        for line in &item.lore {
            println!("  {}", line.italic());
        }
    }
    if !item.stats.is_empty() {
        println!();
        println!("  damage:     {}", item.stats.damage);
        println!("  defense:    {}", item.stats.defense);
        println!("  crit:       {:.0}%", item.stats.critical_chance * 100.0);
    }
    show_model(&item.model);
    if !item.model.is_none() && !item.has_override() {
        println!(
            "  {}",
            "no variant id: the model is packaged but not routed".yellow()
        );
    }
}

fn show_mob(mob: &MobDefinition, item_exists: impl Fn(&str) -> bool) {
    println!("  {} [{}]", mob.display_name.bold(), "mob".dimmed());
    println!();
    println!("  id:         {}", mob.id);
    println!("  type:       {}", mob.base_type);
    println!("  health:     {}", mob.health_points);
    println!("  attack:     {}", mob.attack_power);
    show_model(&mob.model);

    if !mob.equipment.is_empty() {
        println!();
        println!("  {}:", "Equipment".bold());
        for (slot, item_id) in &mob.equipment {
            let slot = slot.to_string();
            if item_exists(item_id) {
                println!("    {slot:<9} {item_id}");
            } else {
                println!("    {slot:<9} {} {}", item_id, "(unknown item)".red());
            }
        }
    }
}

fn show_model(model: &ModelReference) {
    if model.is_none() {
        return;
    }
    println!();
    println!("  {}:", "Model".bold());
    if !model.model_path.is_empty() {
        println!("    model:    {}", model.model_path);
    }
    if !model.texture_path.is_empty() {
        println!("    texture:  {}", model.texture_path);
    }
    println!("    scale:    {}", model.scale);
}
