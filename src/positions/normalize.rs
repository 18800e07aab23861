use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical form used to compare a quiz guess against a stored position
/// name: trimmed, lower-cased, with diacritics dropped (NFD decomposition,
/// then combining marks removed) and internal whitespace runs collapsed to a
/// single space. Idempotent, so both sides of a comparison can be normalized
/// any number of times.
pub fn normalize(s: &str) -> String {
    let stripped: String = s
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
