use std::path::Path;

pub fn run(dir: &Path) -> Result<(), String> {
    let created = noble_core::loader::write_templates(dir).map_err(|e| super::error_chain(&e))?;

    if created.is_empty() {
        println!("  Definition files already present in {}", dir.display());
        return Ok(());
    }

    for path in &created {
        println!("  Created {}", path.display());
    }
    println!();
    println!("Get started:");
    println!("  # Edit items.json and mobs.json, then put models and textures");
    println!("  # under models/ and textures/ next to them");
    println!("  noble check       # Validate definitions and assets");
    println!("  noble list        # List all definitions");
    println!("  noble build-pack  # Build the resource pack");

    Ok(())
}
