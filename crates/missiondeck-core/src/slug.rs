use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

fn date_re() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Lowercase `text` and collapse every run of characters outside `[a-z0-9]`
/// into a single hyphen, with leading and trailing hyphens stripped.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    non_alnum_re()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Stable identifier for a mission: pack date plus slugified title.
///
/// Slugs are always derived, never stored, so retitling a mission changes
/// its slug and breaks previously handed-out links. Accepted trade-off.
pub fn mission_slug(date: &str, title: &str) -> String {
    format!("{date}-{}", slugify(title))
}

/// Whether `s` is a real calendar date in canonical `YYYY-MM-DD` form.
pub fn is_valid_date(s: &str) -> bool {
    date_re().is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// The date prefix of a mission slug, when its first ten characters form a
/// valid date.
pub fn slug_date(slug: &str) -> Option<&str> {
    let date = slug.get(0..10)?;
    is_valid_date(date).then_some(date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
