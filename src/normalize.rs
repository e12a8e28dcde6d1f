//! Name canonicalization helpers
//!
//! Both the exact-match stage and the fuzzy stage compare names through
//! these functions, so primary filenames and roster names agree on what
//! "the same name" means.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Characters that are not portable in filenames
    static ref UNSAFE_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*]"#).unwrap();
}

/// Canonicalize a person name for similarity comparison.
///
/// Lowercases, turns hyphens and periods into spaces, collapses whitespace
/// runs and trims. Idempotent: `normalize_name(normalize_name(x)) == normalize_name(x)`.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['-', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip characters that cannot appear in filenames and trim.
///
/// Matches the convention used when the primary picture set was written,
/// so a sanitized roster name probes the exact filename a download would
/// have produced.
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize_name("O'Brien-Smith."), "o'brien smith");
        assert_eq!(normalize_name("  Maria   Ressa "), "maria ressa");
        assert_eq!(normalize_name("Jamal-Khashoggi"), "jamal khashoggi");
    }

    #[test]
    fn test_normalize_idempotent() {
        for name in ["O'Brien-Smith.", "  A  .  B  ", "already normal", ""] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn test_normalize_total_on_edge_inputs() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("---"), "");
        assert_eq!(normalize_name(". . ."), "");
    }

    #[test]
    fn test_sanitize_strips_unsafe_chars() {
        assert_eq!(sanitize_filename(r#"A<B>C:D"E/F\G|H?I*J"#), "ABCDEFGHIJ");
        assert_eq!(sanitize_filename("  Maria Ressa  "), "Maria Ressa");
        assert_eq!(sanitize_filename("Jamal K."), "Jamal K.");
    }
}
