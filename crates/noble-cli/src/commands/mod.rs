pub mod build_pack;
pub mod check;
pub mod init;
pub mod list;
pub mod show;

use std::error::Error;
use std::path::Path;

use noble_core::DefinitionSnapshot;

/// Load the definition snapshot from a data directory.
fn load(dir: &Path) -> Result<DefinitionSnapshot, String> {
    noble_core::loader::load_snapshot(dir).map_err(|e| error_chain(&e))
}

/// Render an error and its sources as `outer: inner: ...`.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}

/// Truncate to `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
