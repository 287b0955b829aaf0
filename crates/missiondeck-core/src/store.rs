use crate::config::Config;
use crate::document::MissionDocument;
use crate::error::{DeckError, Result};
use crate::source::SourceTable;
use crate::{grammar, io, merge, paths, slug};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PackMeta / MergeOutcome
// ---------------------------------------------------------------------------

/// Listing entry for one pack file, scanned from its headers without a full
/// parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackMeta {
    pub date: String,
    pub mission_count: usize,
    pub titles: Vec<String>,
}

/// What an append did: merged into an existing pack, or stored a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub merged: bool,
    pub total_missions: usize,
}

// ---------------------------------------------------------------------------
// PackStore
// ---------------------------------------------------------------------------

/// File-backed store of mission packs, one markdown file per date.
#[derive(Debug, Clone)]
pub struct PackStore {
    packs_dir: PathBuf,
    sources: SourceTable,
}

impl PackStore {
    pub fn open(root: &Path, config: &Config) -> Self {
        Self {
            packs_dir: paths::packs_dir(root, &config.packs_dir),
            sources: config.source_table(),
        }
    }

    pub fn pack_path(&self, date: &str) -> PathBuf {
        paths::pack_file(&self.packs_dir, date)
    }

    /// Every pack in the store, newest first. Files whose stem is not a
    /// calendar date are ignored; an unreadable pack is skipped so one bad
    /// file cannot take down the listing.
    pub fn list(&self) -> Result<Vec<PackMeta>> {
        if !self.packs_dir.exists() {
            return Ok(Vec::new());
        }
        let mut metas = Vec::new();
        for entry in std::fs::read_dir(&self.packs_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !slug::is_valid_date(stem) {
                continue;
            }
            let Ok(raw) = std::fs::read_to_string(&path) else {
                continue;
            };
            let sections = grammar::numbered_sections(grammar::mission_header_re(), &raw);
            metas.push(PackMeta {
                date: stem.to_string(),
                mission_count: sections.len(),
                titles: sections.iter().map(|s| s.title.to_string()).collect(),
            });
        }
        metas.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(metas)
    }

    /// Read and parse the pack for `date`. A missing file is `None`, not an
    /// error.
    pub fn load(&self, date: &str) -> Result<Option<MissionDocument>> {
        if !slug::is_valid_date(date) {
            return Err(DeckError::InvalidDate(date.to_string()));
        }
        let path = self.pack_path(date);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(Some(MissionDocument::parse(&raw, date, &self.sources)))
    }

    pub fn latest(&self) -> Result<Option<MissionDocument>> {
        match self.list()?.first() {
            Some(meta) => self.load(&meta.date),
            None => Ok(None),
        }
    }

    pub fn save(&self, date: &str, markdown: &str) -> Result<()> {
        if !slug::is_valid_date(date) {
            return Err(DeckError::InvalidDate(date.to_string()));
        }
        io::atomic_write(&self.pack_path(date), markdown.as_bytes())
    }

    /// Store a fresh batch under `date`, merging with renumbering when a
    /// pack with missions already exists there. On any failure the existing
    /// file is left untouched.
    pub fn append(&self, date: &str, fresh: &str) -> Result<MergeOutcome> {
        if !slug::is_valid_date(date) {
            return Err(DeckError::InvalidDate(date.to_string()));
        }
        if merge::count_missions(fresh) == 0 {
            return Err(DeckError::EmptyBatch);
        }
        let path = self.pack_path(date);
        if path.exists() {
            let existing = std::fs::read_to_string(&path)?;
            // A headerless file holds no missions worth keeping and is
            // replaced outright.
            if merge::count_missions(&existing) > 0 {
                let merged = merge::append_batch(&existing, fresh)?;
                let total = merge::count_missions(&merged);
                io::atomic_write(&path, merged.as_bytes())?;
                return Ok(MergeOutcome {
                    merged: true,
                    total_missions: total,
                });
            }
        }
        io::atomic_write(&path, fresh.as_bytes())?;
        Ok(MergeOutcome {
            merged: false,
            total_missions: merge::count_missions(fresh),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, GeneratedMission};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> PackStore {
        PackStore::open(dir.path(), &Config::new("demo"))
    }

    fn batch(titles: &[&str], date: &str) -> String {
        let missions: Vec<GeneratedMission> = titles
            .iter()
            .map(|t| GeneratedMission {
                title: t.to_string(),
                description: format!("About {t}."),
                ..Default::default()
            })
            .collect();
        render(&missions, date, "Demo Missions")
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .save("2025-01-15", &batch(&["Alpha", "Beta"], "2025-01-15"))
            .unwrap();
        let doc = store.load("2025-01-15").unwrap().unwrap();
        assert_eq!(doc.date, "2025-01-15");
        assert_eq!(doc.missions.len(), 2);
        assert_eq!(doc.missions[0].title, "Alpha");
    }

    #[test]
    fn load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load("2025-01-15").unwrap().is_none());
    }

    #[test]
    fn load_rejects_bad_date() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).load("2025-13-99").unwrap_err();
        assert!(matches!(err, DeckError::InvalidDate(_)));
        let err = store(&dir).load("latest").unwrap_err();
        assert!(matches!(err, DeckError::InvalidDate(_)));
    }

    #[test]
    fn list_newest_first_skipping_foreign_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .save("2025-01-15", &batch(&["Alpha"], "2025-01-15"))
            .unwrap();
        store
            .save("2025-03-02", &batch(&["Beta", "Gamma"], "2025-03-02"))
            .unwrap();
        std::fs::write(dir.path().join("packs/notes.md"), "scratch").unwrap();
        std::fs::write(dir.path().join("packs/2025-02-02.txt"), "wrong ext").unwrap();

        let metas = store.list().unwrap();
        assert_eq!(metas.len(), 2);
        assert_eq!(metas[0].date, "2025-03-02");
        assert_eq!(metas[0].mission_count, 2);
        assert_eq!(metas[0].titles, vec!["Beta", "Gamma"]);
        assert_eq!(metas[1].date, "2025-01-15");
    }

    #[test]
    fn list_empty_store() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().unwrap().is_empty());
    }

    #[test]
    fn latest_picks_newest_date() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .save("2025-01-15", &batch(&["Old"], "2025-01-15"))
            .unwrap();
        store
            .save("2025-06-01", &batch(&["New"], "2025-06-01"))
            .unwrap();
        let doc = store.latest().unwrap().unwrap();
        assert_eq!(doc.date, "2025-06-01");
        assert_eq!(doc.missions[0].title, "New");
    }

    #[test]
    fn append_creates_then_merges() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let first = store
            .append("2025-01-15", &batch(&["Alpha", "Beta"], "2025-01-15"))
            .unwrap();
        assert_eq!(
            first,
            MergeOutcome {
                merged: false,
                total_missions: 2
            }
        );

        let second = store
            .append("2025-01-15", &batch(&["Gamma"], "2025-01-15"))
            .unwrap();
        assert_eq!(
            second,
            MergeOutcome {
                merged: true,
                total_missions: 3
            }
        );

        let doc = store.load("2025-01-15").unwrap().unwrap();
        assert_eq!(doc.missions.len(), 3);
        assert_eq!(doc.missions[2].index, 3);
        assert_eq!(doc.missions[2].title, "Gamma");
        assert!(!doc.has_errors());
    }

    #[test]
    fn append_replaces_headerless_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::create_dir_all(dir.path().join("packs")).unwrap();
        std::fs::write(dir.path().join("packs/2025-01-15.md"), "just notes\n").unwrap();

        let outcome = store
            .append("2025-01-15", &batch(&["Alpha"], "2025-01-15"))
            .unwrap();
        assert!(!outcome.merged);
        assert_eq!(outcome.total_missions, 1);
        let raw = std::fs::read_to_string(dir.path().join("packs/2025-01-15.md")).unwrap();
        assert!(!raw.contains("just notes"));
    }

    #[test]
    fn append_rejects_empty_batch() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir)
            .append("2025-01-15", &render(&[], "2025-01-15", "Demo Missions"))
            .unwrap_err();
        assert!(matches!(err, DeckError::EmptyBatch));
    }

    #[test]
    fn failed_append_leaves_existing_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let original = batch(&["Alpha"], "2025-01-15");
        store.save("2025-01-15", &original).unwrap();

        let err = store.append("2025-01-15", "no headers here").unwrap_err();
        assert!(matches!(err, DeckError::EmptyBatch));
        let raw = std::fs::read_to_string(store.pack_path("2025-01-15")).unwrap();
        assert_eq!(raw, original);
    }
}
