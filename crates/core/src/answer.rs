//! Answer normalization and matching.
//!
//! Matching is exact after normalization: no partial credit, no fuzzy
//! matching and no locale-aware case folding beyond `char::to_lowercase`.

/// Lower-cases `s` and drops every whitespace character.
///
/// ```
/// use hanzi_core::answer::normalize;
///
/// assert_eq!(normalize("  Hot Dog "), "hotdog");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns true if `given` matches at least one accepted meaning after
/// normalizing both sides.
#[must_use]
pub fn is_correct<S: AsRef<str>>(given: &str, accepted: &[S]) -> bool {
    let given = normalize(given);
    accepted
        .iter()
        .any(|meaning| normalize(meaning.as_ref()) == given)
}
