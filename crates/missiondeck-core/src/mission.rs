use crate::extract;
use crate::grammar;
use crate::slug;
use crate::source::{self, SourceRef, SourceTable};
use crate::step::{self, Step};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Mission
// ---------------------------------------------------------------------------

/// One parsed mission. Metadata fields hold `""` when the line is absent;
/// section lists are empty when their heading is absent. Only the citation
/// is an `Option`, since an unlinked label and no citation differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub index: u32,
    pub title: String,
    pub slug: String,
    pub time_estimate: String,
    pub difficulty: String,
    pub tools: String,
    pub description: String,
    pub source: Option<SourceRef>,
    pub youll_build: Vec<String>,
    pub prerequisites: Vec<String>,
    pub steps: Vec<Step>,
    pub success_criteria: Vec<String>,
    pub next_steps: Vec<String>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse one mission from its header capture and body text.
pub(crate) fn parse_mission(
    number: u32,
    title: &str,
    body: &str,
    date: &str,
    sources: &SourceTable,
) -> Mission {
    Mission {
        index: number,
        title: title.to_string(),
        slug: slug::mission_slug(date, title),
        time_estimate: extract::meta_field(body, grammar::TIME_LABEL),
        difficulty: extract::meta_field(body, grammar::DIFFICULTY_LABEL),
        tools: extract::meta_field(body, grammar::TOOLS_LABEL),
        description: joined_description(body),
        source: source::parse_source(body, sources),
        youll_build: extract::bullet_list(body, grammar::YOULL_HAVE_MARKER, grammar::SUBHEADING),
        prerequisites: extract::bullet_list(body, grammar::PREREQS_HEADING, grammar::SUBHEADING),
        steps: step::parse_steps(body),
        success_criteria: extract::bullet_list(
            body,
            grammar::CRITERIA_HEADING,
            grammar::SUBHEADING,
        ),
        next_steps: extract::bullet_list(body, grammar::NEXT_STEPS_PREFIX, grammar::RULE),
    }
}

/// The 💡 section joined into one line of text. Bold marker lines are
/// skipped; bullet lines inside the region are joined in along with the
/// prose, so the deliverables list bleeds into the description when the
/// section carries one. Known lossy normalization, kept for compatibility
/// with every document already on disk.
fn joined_description(body: &str) -> String {
    let section = extract::between(body, grammar::BUILDING_HEADING, grammar::SUBHEADING);
    let lines: Vec<&str> = section
        .lines()
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with("**")
        })
        .collect();
    lines.join(" ").trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
