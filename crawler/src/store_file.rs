//! Store dataset files
//!
//! `json/<dataset>.json`: a pretty-printed array of stores, UTF-8 kept as is.

use std::path::Path;

use anyhow::{Context, Result};

use crate::parser::Store;

pub async fn save(path: &Path, stores: &[Store]) -> Result<()> {
    let mut output = serde_json::to_string_pretty(stores)?;
    output.push('\n');

    tokio::fs::write(path, output)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {} stores to {}", stores.len(), path.display());
    Ok(())
}

pub async fn load(path: &Path) -> Result<Vec<Store>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("Invalid store file {}", path.display()))
}
