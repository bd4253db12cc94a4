use anteup_core::Snapshot;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SAVE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRun {
    pub version: u32,
    pub snapshot: Snapshot,
}

pub fn default_state_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ANTEUP_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".anteup_state.json"))
}

pub fn save_run_file(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let payload = SavedRun {
        version: SAVE_SCHEMA_VERSION,
        snapshot: snapshot.clone(),
    };
    let body = serde_json::to_string_pretty(&payload)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

pub fn load_run_file(path: &Path) -> Result<Snapshot> {
    let body =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let payload: SavedRun = serde_json::from_str(&body)?;
    if payload.version != SAVE_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            payload.version,
            SAVE_SCHEMA_VERSION
        );
    }
    Ok(payload.snapshot)
}
