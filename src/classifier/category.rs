//! Category name grammar.
//!
//! Category names are 1-64 characters from `[A-Za-z0-9_-]`. Case is kept for
//! display and persistence, while lookups use the lowercase form.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TextBayesError};

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LEN: usize = 64;

static CATEGORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{1,64}$").expect("category pattern is a valid regex")
});

/// Check a name against the category grammar without trimming it.
///
/// # Examples
///
/// ```
/// use textbayes::classifier::is_valid_category_name;
///
/// assert!(is_valid_category_name("spam"));
/// assert!(is_valid_category_name("Tech_News-2"));
/// assert!(!is_valid_category_name("two words"));
/// assert!(!is_valid_category_name(""));
/// ```
pub fn is_valid_category_name(name: &str) -> bool {
    CATEGORY_PATTERN.is_match(name)
}

/// Trim and validate a caller-supplied category name.
pub fn normalize_category(category: &str) -> Result<&str> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(TextBayesError::invalid_argument("category is required"));
    }

    if !is_valid_category_name(trimmed) {
        return Err(TextBayesError::invalid_argument(format!(
            "category must be 1-{MAX_CATEGORY_NAME_LEN} characters and contain only letters, numbers, underscore, or hyphen: {category:?}"
        )));
    }

    Ok(trimmed)
}

/// Lookup key for a valid category name.
pub(crate) fn category_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_category_name("a"));
        assert!(is_valid_category_name("UPPER_lower-123"));
        assert!(is_valid_category_name(&"x".repeat(64)));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_category_name(&"x".repeat(65)));
        assert!(!is_valid_category_name("café"));
        assert!(!is_valid_category_name("a.b"));
        assert!(!is_valid_category_name(" padded "));
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_category("  sports ").unwrap(), "sports");
    }

    #[test]
    fn test_normalize_rejects() {
        for bad in ["", "   ", "bad category", "slash/name", "emoji🙂"] {
            let err = normalize_category(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_category_key_is_case_insensitive() {
        assert_eq!(category_key("Spam"), category_key("sPAM"));
    }
}
