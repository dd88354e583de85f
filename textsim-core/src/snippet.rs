//! Evidence snippets around substring matches
//!
//! Locates the first case-insensitive occurrence of a query and returns a
//! whitespace-collapsed window around it, for display in match reports.

/// Default window radius in code points on either side of the match
pub const DEFAULT_SNIPPET_RADIUS: usize = 80;

// Lowercase a char to its first scalar. One-to-one, so offsets in the
// folded text line up with the original.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Code-point offset of the first case-insensitive occurrence of `query`
///
/// An empty query matches at position 0. Case folding is per code point,
/// so multi-character lowercase expansions (for example ẞ) do not match.
fn find_case_insensitive(text: &str, query: &str) -> Option<usize> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return Some(0);
    }

    let haystack: Vec<char> = text.chars().map(fold).collect();
    if needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
}

/// Find a snippet of text around a case-insensitive match.
///
/// Returns `None` when `query` does not occur in `text`. The window spans
/// `radius` code points on either side of the match and clamps to the text
/// bounds; whitespace runs in the window collapse to single spaces. An
/// empty `query` counts as a match at the start of `text`, and
/// `radius == 0` yields a snippet no larger than the query itself.
pub fn find_evidence_snippet(text: &str, query: &str, radius: usize) -> Option<String> {
    let match_position = find_case_insensitive(text, query)?;

    let start_index = match_position.saturating_sub(radius);
    let snippet_length = query.chars().count() + radius * 2;

    let window: String = text
        .chars()
        .skip(start_index)
        .take(snippet_length)
        .collect();

    // Collapse whitespace for cleaner display output.
    Some(window.split_whitespace().collect::<Vec<_>>().join(" "))
}
