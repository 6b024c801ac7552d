//! `.bizscope.toml` loading. Problems never abort startup: anything that cannot
//! be read or understood falls back to defaults with a warning.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::directory::{Business, Directory};
use crate::filters::ModalVariant;

/// Name of the per-directory config file.
pub const CONFIG_FILE: &str = ".bizscope.toml";

const KNOWN_CONFIG_KEYS: &[&str] =
    &["categories", "initial_search", "initial_category", "variant", "businesses"];

/// Everything the desktop app needs to seed the directory and the filters modal.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub directory: Directory,
    pub initial_search: String,
    pub initial_category: Option<String>,
    pub variant: ModalVariant,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            directory: Directory::sample(),
            initial_search: String::new(),
            initial_category: None,
            variant: ModalVariant::Full,
        }
    }
}

/// Levenshtein distance, used for "did you mean" hints on unknown keys.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known key within three edits, if any.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|k| (*k, edit_distance(key, k)))
        .min_by_key(|(_, d)| *d)
        .filter(|(_, d)| *d <= 3)
        .map(|(k, _)| k)
}

/// String value for `key`, warning when the key is present with another type.
fn string_value<'a>(table: &'a toml::Table, key: &str) -> Option<&'a str> {
    let value = table.get(key)?;
    match value.as_str() {
        Some(s) => Some(s),
        None => {
            warn!(key, found = value.type_str(), "Expected a string in {CONFIG_FILE}, ignoring");
            None
        }
    }
}

/// Parse config file contents.
///
/// Only a syntactically invalid document is an error. Unknown keys, wrongly
/// typed values and malformed business rows are skipped with a warning.
pub fn parse_directory_config(content: &str) -> Result<DirectoryConfig, String> {
    let table = content
        .parse::<toml::Table>()
        .map_err(|e| format!("invalid {CONFIG_FILE}: {e}"))?;

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE}, did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    let mut config = DirectoryConfig::default();

    let categories: Vec<String> = match table.get("categories") {
        Some(toml::Value::Array(arr)) => arr
            .iter()
            .filter_map(|v| match v.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    warn!(found = v.type_str(), "Skipping non-string entry in 'categories'");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(found = other.type_str(), "Expected 'categories' to be an array of strings, ignoring");
            Vec::new()
        }
        None => Vec::new(),
    };

    if let Some(search) = string_value(&table, "initial_search") {
        config.initial_search = search.to_string();
    }

    if let Some(category) = string_value(&table, "initial_category") {
        config.initial_category = Some(category.to_string());
    }

    if let Some(name) = string_value(&table, "variant") {
        match ModalVariant::from_name(name) {
            Some(variant) => config.variant = variant,
            None => warn!(variant = name, "Unknown variant (expected 'compact' or 'full'), using 'full'"),
        }
    }

    let businesses = match table.get("businesses") {
        Some(toml::Value::Array(rows)) => rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| match row.clone().try_into::<Business>() {
                Ok(b) => Some(b),
                Err(e) => {
                    warn!(row = idx, "Skipping invalid business entry: {e}");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(found = other.type_str(), "Expected 'businesses' to be an array of tables, using sample listings");
            Directory::sample().businesses().to_vec()
        }
        None => {
            debug!("No businesses configured, using sample listings");
            Directory::sample().businesses().to_vec()
        }
    };

    config.directory = Directory::new(businesses, categories);
    Ok(config)
}

/// Load `.bizscope.toml` from `root`, or built-in defaults when it is absent
/// or unusable.
pub fn load_directory_config(root: &Path) -> DirectoryConfig {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!("No {CONFIG_FILE} found, using sample directory");
        return DirectoryConfig::default();
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %config_path.display(), "Could not read {CONFIG_FILE}: {e}");
            return DirectoryConfig::default();
        }
    };

    match parse_directory_config(&content) {
        Ok(config) => {
            info!(
                businesses = config.directory.len(),
                categories = config.directory.categories().len(),
                "Loaded {CONFIG_FILE}"
            );
            config
        }
        Err(e) => {
            warn!("{e}; using defaults");
            DirectoryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::PriceRange;

    #[test]
    fn suggestion_for_near_miss() {
        assert_eq!(suggest_key("categores"), Some("categories"));
        assert_eq!(suggest_key("varient"), Some("variant"));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_directory_config(
            r#"
            categories = ["Food", "Retail"]
            initial_search = "diner"
            initial_category = "Food"
            variant = "compact"

            [[businesses]]
            name = "Joe's Diner"
            category = "Food"
            location = "Springfield"
            price = "$"
            rating = 4.5

            [[businesses]]
            name = "Pop-up Stand"
            category = "Events"
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_search, "diner");
        assert_eq!(config.initial_category.as_deref(), Some("Food"));
        assert_eq!(config.variant, ModalVariant::Compact);
        assert_eq!(config.directory.len(), 2);
        assert_eq!(config.directory.businesses()[0].price, PriceRange::One);
        assert_eq!(config.directory.businesses()[1].price, PriceRange::All);
        assert_eq!(
            config.directory.categories(),
            &["Food".to_string(), "Retail".to_string(), "Events".to_string()]
        );
    }

    #[test]
    fn bad_rows_and_values_are_skipped() {
        let config = parse_directory_config(
            r#"
            variant = "huge"

            [[businesses]]
            name = "Fine"
            category = "Food"

            [[businesses]]
            name = "Missing category"

            [[businesses]]
            name = "Bad price"
            category = "Food"
            price = "cheap"
            "#,
        )
        .unwrap();

        assert_eq!(config.variant, ModalVariant::Full);
        assert_eq!(config.directory.len(), 1);
        assert_eq!(config.directory.businesses()[0].name, "Fine");
    }

    #[test]
    fn wrongly_typed_values_are_ignored() {
        let config = parse_directory_config(
            r#"
            categories = "Food"
            initial_search = 5
            initial_category = 1
            variant = true
            businesses = "none"
            "#,
        )
        .unwrap();

        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn non_string_categories_are_skipped() {
        let config = parse_directory_config(
            r#"
            categories = ["Food", 7, "Retail"]
            businesses = []
            "#,
        )
        .unwrap();

        assert!(config.directory.is_empty());
        assert_eq!(config.directory.categories(), &["Food".to_string(), "Retail".to_string()]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_directory_config("categories = [").is_err());
    }

    #[test]
    fn empty_document_uses_sample_listings() {
        let config = parse_directory_config("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }
}
