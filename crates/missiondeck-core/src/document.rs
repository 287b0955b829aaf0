use crate::grammar;
use crate::mission::{self, Mission};
use crate::source::SourceTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// IntegrityIssue / IssueLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityIssue {
    pub level: IssueLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// MissionDocument
// ---------------------------------------------------------------------------

/// One day's mission pack: the parsed missions plus the original markdown,
/// retained verbatim so raw slicing and appends never re-generate text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDocument {
    pub date: String,
    pub missions: Vec<Mission>,
    pub raw: String,
}

impl MissionDocument {
    /// Parse a pack. Never fails: unparseable regions simply contribute
    /// nothing, and numbering damage is surfaced by [`validate`] instead
    /// of rejected here.
    ///
    /// [`validate`]: MissionDocument::validate
    pub fn parse(raw: &str, date: &str, sources: &SourceTable) -> Self {
        let missions = grammar::numbered_sections(grammar::mission_header_re(), raw)
            .into_iter()
            .map(|sec| mission::parse_mission(sec.number, sec.title, sec.body, date, sources))
            .collect();
        MissionDocument {
            date: date.to_string(),
            missions,
            raw: raw.to_string(),
        }
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.slug == slug)
    }

    /// The raw markdown of one mission, re-headered.
    ///
    /// Slicing is positional: the document is split on header lines and the
    /// section at position `mission.index` is taken, which is exact for
    /// contiguously numbered documents. `None` when the index points past
    /// the end.
    pub fn mission_markdown(&self, mission: &Mission) -> Option<String> {
        let sections: Vec<&str> = grammar::mission_header_re().split(&self.raw).collect();
        let section = sections.get(mission.index as usize)?;
        Some(format!(
            "## Mission {}: {}\n{}",
            mission.index,
            mission.title,
            section.trim()
        ))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Structural lint over the parsed document. Numbering damage is an
    /// error; oddities that parsing tolerates are warnings.
    pub fn validate(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        if self.missions.is_empty() {
            issues.push(IntegrityIssue {
                level: IssueLevel::Warning,
                message: "document has no missions".to_string(),
            });
        }

        let mut seen_slugs: HashSet<&str> = HashSet::new();
        for (i, m) in self.missions.iter().enumerate() {
            let expected = i as u32 + 1;
            if m.index != expected {
                issues.push(IntegrityIssue {
                    level: IssueLevel::Error,
                    message: format!(
                        "mission at position {} is numbered {} (expected {})",
                        i + 1,
                        m.index,
                        expected
                    ),
                });
            }

            for (j, s) in m.steps.iter().enumerate() {
                let expected = j as u32 + 1;
                if s.number != expected {
                    issues.push(IntegrityIssue {
                        level: IssueLevel::Error,
                        message: format!(
                            "mission {}: step at position {} is numbered {} (expected {})",
                            m.index,
                            j + 1,
                            s.number,
                            expected
                        ),
                    });
                }
            }

            if m.steps.is_empty() {
                issues.push(IntegrityIssue {
                    level: IssueLevel::Warning,
                    message: format!("mission {} has no steps", m.index),
                });
            }

            if !seen_slugs.insert(&m.slug) {
                issues.push(IntegrityIssue {
                    level: IssueLevel::Warning,
                    message: format!("duplicate slug '{}'", m.slug),
                });
            }
        }

        issues
    }

    /// Whether [`validate`] found any error-level issue.
    ///
    /// [`validate`]: MissionDocument::validate
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.level == IssueLevel::Error)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
