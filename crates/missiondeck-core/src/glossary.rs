use std::collections::HashSet;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// GlossaryTerm
// ---------------------------------------------------------------------------

/// A jargon term with a plain-English definition, matched case-insensitively
/// in mission text.
#[derive(Debug)]
pub struct GlossaryTerm {
    /// Canonical display form.
    pub term: &'static str,
    pub definition: &'static str,
    /// Additional exact match strings.
    pub aliases: &'static [&'static str],
}

pub static GLOSSARY: &[GlossaryTerm] = &[
    GlossaryTerm {
        term: "MCP",
        definition: "Model Context Protocol, a standard way for AI assistants to connect to external tools, databases, and services.",
        aliases: &["MCP server", "MCP servers"],
    },
    GlossaryTerm {
        term: "LLM",
        definition: "Large Language Model, the kind of AI that understands and generates human-like text.",
        aliases: &["LLMs", "large language model", "large language models"],
    },
    GlossaryTerm {
        term: "RAG",
        definition: "Retrieval-Augmented Generation, where an AI looks up relevant information before answering to make responses more accurate.",
        aliases: &[],
    },
    GlossaryTerm {
        term: "Vector Database",
        definition: "A database that stores information as mathematical patterns so content can be found by meaning rather than exact keywords.",
        aliases: &["vector store", "vector databases", "vector embeddings", "embeddings"],
    },
    GlossaryTerm {
        term: "API",
        definition: "Application Programming Interface, a way for two pieces of software to talk to each other.",
        aliases: &["APIs", "API key", "API keys"],
    },
    GlossaryTerm {
        term: "API key",
        definition: "A secret token that proves you are allowed to use a particular online service.",
        aliases: &["API keys"],
    },
    GlossaryTerm {
        term: "Webhook",
        definition: "A notification one service sends another automatically when something happens.",
        aliases: &["webhooks"],
    },
    GlossaryTerm {
        term: "Prompt",
        definition: "The instruction or question you give to an AI. Better prompts lead to better answers.",
        aliases: &["prompts", "system prompt", "system prompts"],
    },
    GlossaryTerm {
        term: "SQLite",
        definition: "A lightweight database that keeps all its data in a single file, handy for small apps.",
        aliases: &["sqlite3"],
    },
    GlossaryTerm {
        term: "PostgreSQL",
        definition: "A powerful open-source database used by many professional web applications.",
        aliases: &["Postgres"],
    },
    GlossaryTerm {
        term: "Redis",
        definition: "An in-memory database used for caching, sessions, and real-time features.",
        aliases: &[],
    },
    GlossaryTerm {
        term: "virtual environment",
        definition: "An isolated Python workspace that keeps one project's libraries separate from the rest of your machine.",
        aliases: &["venv", "virtualenv", "virtual environments"],
    },
    GlossaryTerm {
        term: "Docker",
        definition: "A tool that packages an app and everything it needs into a portable container that runs the same way anywhere.",
        aliases: &["containers", "container", "Dockerfile", "docker-compose"],
    },
    GlossaryTerm {
        term: "CLI",
        definition: "Command Line Interface, a text-based way to control software by typing commands.",
        aliases: &["command line", "terminal", "shell"],
    },
    GlossaryTerm {
        term: "SSH",
        definition: "Secure Shell, a secure way to control another computer remotely by typing commands.",
        aliases: &[],
    },
    GlossaryTerm {
        term: "Git",
        definition: "A version control system that tracks every change to your code.",
        aliases: &["GitHub", "repository", "repo"],
    },
    GlossaryTerm {
        term: "WebSocket",
        definition: "A connection a browser keeps open to a server for real-time updates without refreshing.",
        aliases: &["WebSockets", "websocket"],
    },
    GlossaryTerm {
        term: "cron job",
        definition: "A task scheduled to run automatically at set times, like an alarm clock for your server.",
        aliases: &["cron", "cronjob"],
    },
    GlossaryTerm {
        term: "AI agent",
        definition: "An AI that can take actions on your behalf, such as browsing, running code, or calling services.",
        aliases: &["AI agents", "agent", "agents", "agentic"],
    },
    GlossaryTerm {
        term: "tool use",
        definition: "A feature that lets an AI call external functions or APIs during a conversation.",
        aliases: &["tool calling", "function calling"],
    },
    GlossaryTerm {
        term: "JSON",
        definition: "A common text format for sending structured data between programs.",
        aliases: &[],
    },
    GlossaryTerm {
        term: "YAML",
        definition: "A human-friendly text format for configuration files.",
        aliases: &[],
    },
    GlossaryTerm {
        term: "Markdown",
        definition: "A simple way to format text with symbols like **bold** and # headings.",
        aliases: &[],
    },
    GlossaryTerm {
        term: "open-source",
        definition: "Software whose code is publicly available for anyone to read, use, and improve.",
        aliases: &["open source"],
    },
    GlossaryTerm {
        term: "self-hosted",
        definition: "Running software on your own machine instead of paying a company to run it for you.",
        aliases: &["self-host", "self hosting"],
    },
];

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

static INDEX: OnceLock<Vec<(String, &'static GlossaryTerm)>> = OnceLock::new();

/// Lowercased match string to term, longest key first so phrases win over
/// their own words. A canonical term takes over a key that an earlier
/// entry claimed as an alias; an alias never displaces anything.
fn sorted_index() -> &'static [(String, &'static GlossaryTerm)] {
    INDEX
        .get_or_init(|| {
            let mut index: Vec<(String, &'static GlossaryTerm)> = Vec::new();
            for entry in GLOSSARY {
                let key = entry.term.to_ascii_lowercase();
                match index.iter_mut().find(|(k, _)| *k == key) {
                    Some(slot) => slot.1 = entry,
                    None => index.push((key, entry)),
                }
                for alias in entry.aliases {
                    let key = alias.to_ascii_lowercase();
                    if !index.iter().any(|(k, _)| *k == key) {
                        index.push((key, entry));
                    }
                }
            }
            index.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
            index
        })
        .as_slice()
}

/// Look a match string up directly.
pub fn lookup(key: &str) -> Option<&'static GlossaryTerm> {
    let key = key.to_ascii_lowercase();
    sorted_index()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, term)| *term)
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// A run of text, either plain or matching a glossary term. Matched runs
/// keep the casing they had in the input.
#[derive(Debug)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub term: Option<&'static GlossaryTerm>,
}

/// Word boundary characters: whitespace plus the punctuation that commonly
/// wraps a term in prose. An underscore is deliberately not a boundary, so
/// identifiers like `API_KEY` stay plain.
fn is_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | ':'
                | ';'
                | '"'
                | '\''
                | '`'
                | '-'
                | '/'
        )
}

/// Split `text` into plain and term-matching segments.
///
/// Longer keys are tried anywhere in the remaining text before shorter
/// keys are tried at all, so "MCP server" beats "MCP" even when "MCP"
/// appears first. An occurrence failing the word-boundary check does not
/// disqualify the key; the scan moves to its next occurrence.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut remaining = text;

    'outer: while !remaining.is_empty() {
        // ASCII lowering keeps byte offsets aligned with `remaining`.
        let lower = remaining.to_ascii_lowercase();
        for (key, term) in sorted_index() {
            let mut from = 0;
            while let Some(rel) = lower[from..].find(key.as_str()) {
                let idx = from + rel;
                let end = idx + key.len();
                let before_ok = remaining[..idx].chars().next_back().is_none_or(is_boundary);
                let after_ok = remaining[end..].chars().next().is_none_or(is_boundary);
                if before_ok && after_ok {
                    if idx > 0 {
                        out.push(Segment {
                            text: &remaining[..idx],
                            term: None,
                        });
                    }
                    out.push(Segment {
                        text: &remaining[idx..end],
                        term: Some(term),
                    });
                    remaining = &remaining[end..];
                    continue 'outer;
                }
                from = idx + 1;
            }
        }
        out.push(Segment {
            text: remaining,
            term: None,
        });
        break;
    }

    out
}

/// Distinct glossary terms appearing in `text`, in order of first match.
pub fn terms_in(text: &str) -> Vec<&'static GlossaryTerm> {
    let mut seen = HashSet::new();
    segments(text)
        .into_iter()
        .filter_map(|s| s.term)
        .filter(|t| seen.insert(t.term))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
