use crate::error::{DeckError, Result};
use crate::grammar;

// ---------------------------------------------------------------------------
// Counting and slicing
// ---------------------------------------------------------------------------

/// Number of mission headers in a document.
pub fn count_missions(text: &str) -> usize {
    grammar::mission_header_re().find_iter(text).count()
}

/// Everything from the first mission header onward. A batch carries its own
/// document preamble; appending keeps only the existing document's.
pub fn strip_preamble(text: &str) -> &str {
    match text.find(grammar::MISSION_HEADER_PREFIX) {
        Some(pos) => &text[pos..],
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Renumbering
// ---------------------------------------------------------------------------

/// Rewrite the header numerals of a fresh batch so they continue after
/// `existing_count`. Mission `i` (1-based) becomes `existing_count + i`.
///
/// Headers are rewritten from the highest numeral down. Rewritten numerals
/// are always above every numeral still waiting its turn, so a half-done
/// pass can never produce a header that a later substitution would match
/// by mistake, whatever the ratio of existing to fresh missions.
///
/// A missing expected header aborts the whole operation: renumbering a
/// batch whose numbering is already broken would bake duplicate numerals
/// into the stored document.
pub fn renumber_batch(fresh: &str, existing_count: usize) -> Result<String> {
    let batch_size = count_missions(fresh);
    let mut renumbered = fresh.to_string();

    for i in (0..batch_size).rev() {
        let old = i as u32 + 1;
        let new = existing_count as u32 + i as u32 + 1;
        let re = grammar::numbered_header_re(old);
        if !re.is_match(&renumbered) {
            return Err(DeckError::RenumberMismatch {
                expected: old,
                position: i + 1,
            });
        }
        renumbered = re
            .replace(&renumbered, format!("## Mission {new}:"))
            .into_owned();
    }

    Ok(renumbered)
}

// ---------------------------------------------------------------------------
// Appending
// ---------------------------------------------------------------------------

/// Splice a fresh batch onto an existing document: renumber the batch to
/// continue the existing numbering, drop its preamble, and join with a
/// rule separator. The existing text passes through byte for byte.
///
/// A batch with no mission headers is rejected; gluing a bare preamble
/// onto a real document would corrupt it silently.
pub fn append_batch(existing: &str, fresh: &str) -> Result<String> {
    if count_missions(fresh) == 0 {
        return Err(DeckError::EmptyBatch);
    }
    let renumbered = renumber_batch(fresh, count_missions(existing))?;
    Ok(format!(
        "{}\n\n---\n\n{}",
        existing.trim_end(),
        strip_preamble(&renumbered)
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
