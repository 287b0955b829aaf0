use crate::grammar;

// ---------------------------------------------------------------------------
// Section extraction
// ---------------------------------------------------------------------------

/// Slice the text between the first occurrence of `start` and the next
/// occurrence of `end` after it, trimmed.
///
/// Absent `start` yields `""`. Absent `end` yields everything after `start`.
/// Markers match literally, so a short marker like `"###"` also matches the
/// front of any longer heading, which is how "up to the next section" is
/// expressed throughout the grammar.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(si) = text.find(start) else {
        return "";
    };
    let after = &text[si + start.len()..];
    match after.find(end) {
        Some(ei) => after[..ei].trim(),
        None => after.trim(),
    }
}

/// Value of a `**<label>:** <value>` metadata line, trimmed; `""` when the
/// line is absent. Label matching is case-insensitive and tolerates a
/// leading emoji inside the bold span.
pub fn meta_field(text: &str, label: &str) -> String {
    grammar::meta_field_re(label)
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}

/// Bullet items of the section between `start` and `end`, in order.
///
/// A line counts as a bullet when its trimmed form starts with `-`; the
/// dash and an optional `[x]`/`[ ]` checkbox marker are stripped. Blank
/// lines and prose mixed into a bullet section are ignored rather than
/// rejected.
pub fn bullet_list(text: &str, start: &str, end: &str) -> Vec<String> {
    between(text, start, end)
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with('-'))
        .map(|l| {
            grammar::bullet_prefix_re()
                .replace(l, "")
                .trim()
                .to_string()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
