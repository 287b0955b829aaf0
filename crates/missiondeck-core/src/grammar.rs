//! The mission pack markdown grammar, defined once.
//!
//! Every marker string and regex the parser, generator, and merge engine
//! consume lives here. No other module declares a heading literal or a
//! header pattern of its own.

use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Section markers
// ---------------------------------------------------------------------------

pub const BUILDING_HEADING: &str = "### 💡 What You're Building";
pub const PREREQS_HEADING: &str = "### ✅ Prerequisites";
pub const STEPS_HEADING: &str = "### 🚀 Step-by-Step Instructions";
pub const CRITERIA_HEADING: &str = "### 🎯 Success Criteria";

/// Parse-side prefix; the generator writes [`NEXT_STEPS_HEADING`], which
/// starts with this, so lookups match either form.
pub const NEXT_STEPS_PREFIX: &str = "### 🐰 Next Steps";
pub const NEXT_STEPS_HEADING: &str = "### 🐰 Next Steps (Optional)";

pub const YOULL_HAVE_MARKER: &str = "**You'll have:**";
pub const CHECKLIST_MARKER: &str = "**Success Checklist:**";

pub const TIME_MARKER: &str = "**⏱️ Time:**";
pub const DIFFICULTY_MARKER: &str = "**📊 Difficulty:**";
pub const TOOLS_MARKER: &str = "**🛠️ Tools:**";

/// Labels used for metadata lookup. Matching is emoji-agnostic: any bold
/// line whose text ends with the label hits, so `**Time:**` works too.
pub const TIME_LABEL: &str = "Time";
pub const DIFFICULTY_LABEL: &str = "Difficulty";
pub const TOOLS_LABEL: &str = "Tools";

/// Generic sub-heading marker, used as the end delimiter for sections that
/// run up to whatever heading comes next.
pub const SUBHEADING: &str = "###";

/// Horizontal rule; terminates a mission and separates appended batches.
pub const RULE: &str = "---";

/// Literal prefix of every mission header line.
pub const MISSION_HEADER_PREFIX: &str = "## Mission";

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static MISSION_HEADER_RE: OnceLock<Regex> = OnceLock::new();
static STEP_HEADER_RE: OnceLock<Regex> = OnceLock::new();
static CODE_FENCE_RE: OnceLock<Regex> = OnceLock::new();
static INSPIRED_BY_RE: OnceLock<Regex> = OnceLock::new();
static BULLET_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
static CHECKBOX_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

/// `## Mission <n>: <title>` at line start. Capture 1 is the numeral,
/// capture 2 the raw title text.
pub fn mission_header_re() -> &'static Regex {
    MISSION_HEADER_RE.get_or_init(|| Regex::new(r"(?m)^## Mission (\d+): (.+)$").unwrap())
}

/// `#### Step <n>: <title>` at line start.
pub fn step_header_re() -> &'static Regex {
    STEP_HEADER_RE.get_or_init(|| Regex::new(r"(?m)^#### Step (\d+): (.+)$").unwrap())
}

/// First fenced code block, tagged `bash` or untagged. Capture 1 is the
/// interior including its newlines.
pub fn code_fence_re() -> &'static Regex {
    CODE_FENCE_RE.get_or_init(|| Regex::new(r"(?s)```(?:bash)?\n(.*?)```").unwrap())
}

/// `*Inspired by: <text>*` citation line.
pub fn inspired_by_re() -> &'static Regex {
    INSPIRED_BY_RE.get_or_init(|| Regex::new(r"\*Inspired by:\s*(.+?)\*").unwrap())
}

/// Leading `- ` of a bullet, with an optional `[x]`/`[ ]` checkbox.
pub fn bullet_prefix_re() -> &'static Regex {
    BULLET_PREFIX_RE.get_or_init(|| Regex::new(r"^-\s*(\[.\]\s*)?").unwrap())
}

/// Leading `- [x] `/`- [ ] ` of a checklist item.
pub fn checkbox_prefix_re() -> &'static Regex {
    CHECKBOX_PREFIX_RE.get_or_init(|| Regex::new(r"^-\s*\[.\]\s*").unwrap())
}

/// Case-insensitive matcher for a `**<label>:** <value>` metadata line.
/// Leading emoji or other decoration inside the bold span is ignored.
pub fn meta_field_re(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)\*\*.*?{}:?\*\* (.+)",
        regex::escape(label)
    ))
    .unwrap()
}

/// Anchored matcher for the header line of mission number `n`, used when
/// renumbering an appended batch. The colon keeps `Mission 1` from
/// matching the front of `Mission 10`.
pub fn numbered_header_re(n: u32) -> Regex {
    Regex::new(&format!(r"(?m)^## Mission {n}:")).unwrap()
}

// ---------------------------------------------------------------------------
// Numbered section splitting
// ---------------------------------------------------------------------------

/// One numbered header and the text that follows it, up to the next header
/// of the same kind or the end of input.
#[derive(Debug)]
pub struct NumberedSection<'a> {
    pub number: u32,
    pub title: &'a str,
    pub body: &'a str,
}

/// Split `text` on a numbered-header pattern (mission or step header).
/// Anything before the first header is not returned; the document preamble
/// is recovered separately where it matters.
pub fn numbered_sections<'a>(re: &Regex, text: &'a str) -> Vec<NumberedSection<'a>> {
    let marks: Vec<(u32, &str, usize, usize)> = re
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            let title = caps.get(2)?.as_str();
            Some((number, title, whole.start(), whole.end()))
        })
        .collect();

    marks
        .iter()
        .enumerate()
        .map(|(i, &(number, title, _, body_start))| {
            let body_end = marks.get(i + 1).map_or(text.len(), |m| m.2);
            NumberedSection {
                number,
                title: title.trim(),
                body: &text[body_start..body_end],
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
