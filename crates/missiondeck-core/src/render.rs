use crate::grammar;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GeneratedMission / GeneratedStep
// ---------------------------------------------------------------------------

/// A mission as produced by the generation pipeline, before it is laid out
/// as markdown. This is the JSON shape `deck add` reads. Every field
/// defaults, so a sparse batch renders rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedMission {
    pub title: String,
    pub description: String,
    pub time_estimate: String,
    pub difficulty: String,
    pub tools: Vec<String>,
    pub what_youll_build: Vec<String>,
    pub prerequisites: Vec<String>,
    pub steps: Vec<GeneratedStep>,
    pub success_criteria: Vec<String>,
    pub next_steps: Vec<String>,
    /// Free-text citation; `""` means no citation line is rendered.
    pub inspiration_source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedStep {
    pub title: String,
    pub description: String,
    pub commands: Vec<String>,
    pub checklist: Vec<String>,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Lay a batch of missions out as a pack document.
///
/// Mission and step numbers are assigned from position, so the input order
/// is the document order. The output is exactly the grammar the parser
/// consumes; parsing it back yields the same missions modulo the documented
/// joins (tools become one string, the description is re-joined, difficulty
/// is capitalized, the citation is classified).
pub fn render(missions: &[GeneratedMission], date: &str, pack_title: &str) -> String {
    let mut lines: Vec<String> = vec![
        format!("# 🎯 {pack_title} - {date}\n"),
        format!(
            "**Today's hands-on projects:** {} practical missions\n",
            missions.len()
        ),
        "**Sources:** Product Hunt, HackerNews, GitHub Trending, X\n".to_string(),
        "**Difficulty:** Mix of beginner to advanced\n".to_string(),
        format!("\n{}\n", grammar::RULE),
    ];

    for (idx, m) in missions.iter().enumerate() {
        lines.push(format!("\n## Mission {}: {}\n", idx + 1, m.title));
        lines.push(format!("{} {}  ", grammar::TIME_MARKER, m.time_estimate));
        lines.push(format!(
            "{} {}  ",
            grammar::DIFFICULTY_MARKER,
            capitalize(&m.difficulty)
        ));
        lines.push(format!("{} {}\n", grammar::TOOLS_MARKER, m.tools.join(", ")));

        lines.push(format!("\n{}\n", grammar::BUILDING_HEADING));
        lines.push(format!("{}\n", m.description));
        lines.push(format!("\n{}", grammar::YOULL_HAVE_MARKER));
        for item in &m.what_youll_build {
            lines.push(format!("- {item}"));
        }

        lines.push(format!("\n{}\n", grammar::PREREQS_HEADING));
        for item in &m.prerequisites {
            lines.push(format!("- {item}"));
        }

        lines.push(format!("\n{}\n", grammar::STEPS_HEADING));
        lines.push("**Work through each step in order:**\n".to_string());

        for (si, step) in m.steps.iter().enumerate() {
            lines.push(format!("\n#### Step {}: {}\n", si + 1, step.title));
            lines.push(format!("{}\n", step.description));
            if !step.commands.is_empty() {
                lines.push("```bash".to_string());
                for cmd in &step.commands {
                    lines.push(cmd.clone());
                }
                lines.push("```\n".to_string());
            }
            lines.push(grammar::CHECKLIST_MARKER.to_string());
            for item in &step.checklist {
                lines.push(format!("- [ ] {item}"));
            }
            lines.push(String::new());
        }

        lines.push(format!("\n{}\n", grammar::CRITERIA_HEADING));
        for item in &m.success_criteria {
            lines.push(format!("- [ ] {item}"));
        }

        lines.push(format!("\n{}\n", grammar::NEXT_STEPS_HEADING));
        lines.push("Once you've completed the basics, try:\n".to_string());
        for item in &m.next_steps {
            lines.push(format!("- {item}"));
        }

        if !m.inspiration_source.is_empty() {
            lines.push(format!("\n*Inspired by: {}*", m.inspiration_source));
        }

        lines.push(format!("\n{}", grammar::RULE));
    }

    lines.join("\n")
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
