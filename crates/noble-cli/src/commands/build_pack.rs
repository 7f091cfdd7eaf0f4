use std::path::Path;

use colored::Colorize;
use noble_pack::{PackBuilder, PackConfig};

pub fn run(dir: &Path, file: &Path, work_dir: Option<&Path>) -> Result<(), String> {
    let snapshot = super::load(dir)?;

    let mut config = PackConfig::default();
    if let Some(work_dir) = work_dir {
        config = config.with_work_root(work_dir);
    }

    let destination = dir.join(file);
    tracing::debug!(
        "building {} from {} in {}",
        destination.display(),
        dir.display(),
        config.work_root().display()
    );
    let report = PackBuilder::new(&snapshot, dir)
        .with_config(config)
        .build(&destination)
        .map_err(|e| format!("failed to build pack: {}", super::error_chain(&e)))?;

    let shown = report
        .destination()
        .canonicalize()
        .unwrap_or_else(|_| report.destination().to_path_buf());
    println!("  Built resource pack at {}", shown.display());
    println!();
    println!(
        "  {} assets copied, {} item models generated, {} archive entries",
        report.copied().count(),
        report.documents.len(),
        report.entries.len()
    );

    if !report.is_complete() {
        println!();
        for (reference, reason) in report.skipped_assets() {
            println!("  {} {reference}: {reason}", "skipped:".yellow().bold());
        }
        for entry in &report.skipped_entries {
            println!("  {} {}: {}", "skipped:".yellow().bold(), entry.name, entry.reason);
        }
    }

    Ok(())
}
