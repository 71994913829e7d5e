use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::models::GeneratedRules;

/// Where the generator writes by default
pub const DEFAULT_OUTPUT_PATH: &str = "./output/GeneratedRules.json";

impl GeneratedRules {
    /// Pretty-printed JSON document
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rules")
    }

    /// Write to a JSON file, replacing any previous artifact atomically
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;

        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {:?}", parent_dir))?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", parent_dir))?;
        temp_file
            .write_all(json.as_bytes())
            .context("Failed to write JSON")?;
        temp_file
            .persist(path)
            .with_context(|| format!("Failed to replace file: {:?}", path))?;
        Ok(())
    }
}
