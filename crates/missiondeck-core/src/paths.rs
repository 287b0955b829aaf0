use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "deck.yaml";
pub const DEFAULT_PACKS_DIR: &str = "packs";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn packs_dir(root: &Path, packs_dir: &str) -> PathBuf {
    root.join(packs_dir)
}

/// One markdown file per date: `<packs_dir>/<YYYY-MM-DD>.md`.
pub fn pack_file(packs_dir: &Path, date: &str) -> PathBuf {
    packs_dir.join(format!("{date}.md"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
