//! URL-safe identifiers derived from display names.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Create a slug from a display name.
///
/// The name is lowercased, every character that is not a word character,
/// whitespace or a hyphen is dropped, runs of whitespace, underscores and
/// hyphens become a single hyphen, and leading/trailing hyphens are trimmed.
///
/// Punctuation is removed rather than treated as a separator, so
/// `"CI/CD Pipeline"` becomes `"cicd-pipeline"`. An input with no word
/// characters yields an empty slug.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let kept = DISALLOWED.replace_all(&lowered, "");
    let joined = SEPARATORS.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}
