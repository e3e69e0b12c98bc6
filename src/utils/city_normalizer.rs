//! City name validation and URL-key normalization.
//!
//! The normalized city key is the canonical, URL-safe form of a city name
//! used to build source URLs. It is a pure, deterministic function of the
//! input; nothing about the query is persisted.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Allow-listed city pattern: letters (including combining marks), spaces,
/// apostrophes, hyphens and periods, 2-50 characters.
static CITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\s'’.-]{2,50}$").unwrap());

/// Validates a trimmed city query against the allow-listed pattern.
pub fn is_valid_city(city: &str) -> bool {
    CITY_PATTERN.is_match(city)
}

/// Produces the normalized city key used to build source URLs.
///
/// # Normalization Rules
///
/// 1. Unicode NFD decomposition with combining marks stripped
///    (`São Paulo` → `Sao Paulo`)
/// 2. Apostrophes (`'` and `’`) removed
/// 3. Whitespace runs collapsed to a single hyphen
/// 4. Lowercased
///
/// # Examples
///
/// ```
/// use skycast::utils::city_normalizer::normalize_city_key;
///
/// assert_eq!(normalize_city_key("New York"), "new-york");
/// assert_eq!(normalize_city_key("São Paulo"), "sao-paulo");
/// assert_eq!(normalize_city_key("N'Djamena"), "ndjamena");
/// ```
pub fn normalize_city_key(city: &str) -> String {
    let folded: String = city
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| *c != '\'' && *c != '’')
        .collect();

    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
