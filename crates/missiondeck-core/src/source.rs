use crate::grammar;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// SourceRef
// ---------------------------------------------------------------------------

/// A resolved mission citation: a display label and a destination URL.
/// The URL is empty when the citation could not be linked anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub label: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Citation patterns
// ---------------------------------------------------------------------------

static LINK_RE: OnceLock<Regex> = OnceLock::new();
static HACKERNEWS_RE: OnceLock<Regex> = OnceLock::new();
static GH_TRENDING_RE: OnceLock<Regex> = OnceLock::new();
static PRODUCT_HUNT_RE: OnceLock<Regex> = OnceLock::new();
static X_SEARCH_RE: OnceLock<Regex> = OnceLock::new();
static OWNER_REPO_RE: OnceLock<Regex> = OnceLock::new();
static BARE_REPO_RE: OnceLock<Regex> = OnceLock::new();
static NAME_DASH_RE: OnceLock<Regex> = OnceLock::new();

fn link_re() -> &'static Regex {
    LINK_RE.get_or_init(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)$").unwrap())
}

fn hackernews_re() -> &'static Regex {
    HACKERNEWS_RE.get_or_init(|| Regex::new(r"(?i)^HackerNews:\s*(.+)$").unwrap())
}

fn gh_trending_re() -> &'static Regex {
    GH_TRENDING_RE.get_or_init(|| Regex::new(r"(?i)^GitHub Trending:\s*(.+)$").unwrap())
}

fn product_hunt_re() -> &'static Regex {
    PRODUCT_HUNT_RE.get_or_init(|| Regex::new(r"(?i)^Product Hunt:\s*(.+)$").unwrap())
}

fn x_search_re() -> &'static Regex {
    X_SEARCH_RE.get_or_init(|| Regex::new(r"(?i)^X:\s*(.+)$").unwrap())
}

fn owner_repo_re() -> &'static Regex {
    OWNER_REPO_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_.-]+/[a-zA-Z0-9_.-]+$").unwrap())
}

fn bare_repo_re() -> &'static Regex {
    BARE_REPO_RE
        .get_or_init(|| Regex::new(r"^([a-zA-Z0-9_.-]+/[a-zA-Z0-9_.-]+)(?:\s*-\s*.+)?$").unwrap())
}

fn name_dash_re() -> &'static Regex {
    NAME_DASH_RE.get_or_init(|| Regex::new(r"^(.+?)\s*-\s*.+$").unwrap())
}

fn google_search_url(query: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(query)
    )
}

// ---------------------------------------------------------------------------
// SourceTable
// ---------------------------------------------------------------------------

/// Named sources the generator cites by blog or community name, in
/// "Name - description" form. Keys are lowercase and matched by
/// containment, so "Lenny's Newsletter #42" still resolves.
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("lenny's newsletter", "https://www.lennysnewsletter.com/"),
    ("lennys newsletter", "https://www.lennysnewsletter.com/"),
    ("product talk", "https://www.producttalk.org/"),
    ("mind the product", "https://www.mindtheproduct.com/"),
    ("reforge", "https://www.reforge.com/blog"),
    ("product coalition", "https://productcoalition.com/"),
    ("indie hackers", "https://www.indiehackers.com/"),
    ("x (twitter)", "https://x.com/"),
];

/// Ordered lookup table for named citation sources. Earlier entries win,
/// and config-supplied extras are appended after the builtins.
#[derive(Debug, Clone)]
pub struct SourceTable {
    entries: Vec<(String, String)>,
}

impl Default for SourceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SourceTable {
    pub fn builtin() -> Self {
        SourceTable {
            entries: BUILTIN_SOURCES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn with_extras<I>(extras: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = Self::builtin();
        table
            .entries
            .extend(extras.into_iter().map(|(k, v)| (k.to_lowercase(), v)));
        table
    }

    fn lookup(&self, name_lower: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| name_lower.contains(key.as_str()))
            .map(|(_, url)| url.as_str())
    }

    /// Resolve a citation payload (the text inside `*Inspired by: ...*`)
    /// into a labeled link. First matching rule wins:
    ///
    /// 1. An explicit markdown link is taken as-is.
    /// 2. `HackerNews: <title>` links a site-scoped search for the title.
    /// 3. `GitHub Trending: <repo>` links the repo when it is an
    ///    `owner/name` pair, otherwise the trending page.
    /// 4. `Product Hunt: <name>` and `X: <term>` link their searches.
    /// 5. `Name - description` with a known name links the table entry.
    /// 6. A bare `owner/name` (with or without a description) links GitHub.
    /// 7. Any other `Name - description` links a web search for the name.
    /// 8. Everything else becomes an unlinked label.
    pub fn classify(&self, raw: &str) -> SourceRef {
        let raw = raw.trim();

        if let Some(caps) = link_re().captures(raw) {
            return SourceRef {
                label: caps[1].to_string(),
                url: caps[2].to_string(),
            };
        }

        if let Some(caps) = hackernews_re().captures(raw) {
            let title = caps[1].trim();
            return SourceRef {
                label: "HackerNews".to_string(),
                url: format!(
                    "https://www.google.com/search?q=site:news.ycombinator.com+{}",
                    urlencoding::encode(title)
                ),
            };
        }

        if let Some(caps) = gh_trending_re().captures(raw) {
            let repo = caps[1].trim();
            let url = if owner_repo_re().is_match(repo) {
                format!("https://github.com/{repo}")
            } else {
                "https://github.com/trending".to_string()
            };
            return SourceRef {
                label: "GitHub".to_string(),
                url,
            };
        }

        if let Some(caps) = product_hunt_re().captures(raw) {
            let name = caps[1].trim();
            return SourceRef {
                label: "Product Hunt".to_string(),
                url: format!(
                    "https://www.producthunt.com/search?q={}",
                    urlencoding::encode(name)
                ),
            };
        }

        if let Some(caps) = x_search_re().captures(raw) {
            let term = caps[1].trim();
            return SourceRef {
                label: "X".to_string(),
                url: format!(
                    "https://x.com/search?q={}&src=typed_query",
                    urlencoding::encode(term)
                ),
            };
        }

        // Name extraction is lazy, so the name runs up to the first
        // hyphen that can serve as a separator.
        if let Some(caps) = name_dash_re().captures(raw) {
            let name = caps[1].trim();
            if let Some(url) = self.lookup(&name.to_lowercase()) {
                return SourceRef {
                    label: name.to_string(),
                    url: url.to_string(),
                };
            }
        }

        if let Some(caps) = bare_repo_re().captures(raw) {
            let repo = caps[1].trim();
            return SourceRef {
                label: "GitHub".to_string(),
                url: format!("https://github.com/{repo}"),
            };
        }

        if let Some(caps) = name_dash_re().captures(raw) {
            let name = caps[1].trim();
            return SourceRef {
                label: name.to_string(),
                url: google_search_url(name),
            };
        }

        SourceRef {
            label: raw.to_string(),
            url: String::new(),
        }
    }
}

/// Find and classify the `*Inspired by: ...*` citation in a mission body.
pub fn parse_source(body: &str, table: &SourceTable) -> Option<SourceRef> {
    grammar::inspired_by_re()
        .captures(body)
        .map(|caps| table.classify(&caps[1]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
