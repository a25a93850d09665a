use anyhow::{Context, Result};
use std::{fs, path::Path};

use super::ProjectRecord;

/// Serialize the records as pretty JSON and write them where the site
/// expects them, creating missing parent directories on the way.
pub fn save_projects(path: &Path, projects: &[ProjectRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(projects)?;
    fs::write(path, &json).with_context(|| format!("Cannot write {}", path.display()))?;

    log::info!("Saved {} project(s) to {}", projects.len(), path.display());
    log::info!(
        "File size: {} bytes ({:.1} KB)",
        json.len(),
        json.len() as f64 / 1024.0
    );

    Ok(())
}
