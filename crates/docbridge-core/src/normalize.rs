//! Filename normalization for fuzzy matching.
//!
//! These helpers only decide whether two names are "the same document";
//! they are never used to build paths.

use std::sync::LazyLock;

use regex::Regex;

/// A trailing extension: a dot, a letter, then one to four alphanumerics.
///
/// Requiring a leading letter keeps classification codes (`4.2.1`) and
/// revision markers (`Rev.3`) from being mistaken for extensions.
static EXTENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([A-Za-z][A-Za-z0-9]{1,4})$").expect("extension pattern is valid")
});

/// Characters dropped before fuzzy comparison.
const SEPARATORS: [char; 3] = [' ', '_', '-'];

/// Split `name` into `(stem, extension)`, the extension without its dot.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match EXTENSION_PATTERN.captures(name) {
        Some(caps) => {
            let whole = caps.get(0).map_or(name.len(), |m| m.start());
            let ext = caps.get(1).map(|m| m.as_str());
            (&name[..whole], ext)
        }
        None => (name, None),
    }
}

/// Lowercased extension of `name`, if it has one.
pub fn extension_of(name: &str) -> Option<String> {
    split_extension(name).1.map(str::to_lowercase)
}

/// Whether a logical path segment looks like a filename rather than a folder.
pub fn looks_like_filename(segment: &str) -> bool {
    split_extension(segment).1.is_some()
}

/// Normalize a filename for fuzzy comparison.
///
/// Drops the extension, lowercases, and strips spaces, underscores and
/// hyphens: `"4.2.1_Gestione Documenti.docx"` becomes `"4.2.1gestionedocumenti"`.
pub fn normalize(name: &str) -> String {
    let (stem, _) = split_extension(name);
    stem.chars()
        .filter(|c| !SEPARATORS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive equality for file and folder names.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
