/// Character catalog: the one read of external data at startup.
///
/// Source is a local JSON file or an http(s) URL. The document is an array of
/// records with a `name`, an optional `gender`, and any other fields, which
/// are kept as string attributes.
use pairsort_core::Item;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch catalog from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Catalog is not a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog record {index} has no name")]
    MissingName { index: usize },

    #[error("Catalog does not contain any characters")]
    Empty,
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load and parse the catalog from a file path or URL.
pub async fn load_catalog(source: &str) -> Result<Vec<Item>, CatalogError> {
    let text = if is_url(source) {
        debug!(url = source, "fetching catalog");
        let response = reqwest::get(source).await.map_err(|e| CatalogError::Fetch {
            url: source.to_string(),
            source: e,
        })?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                url: source.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(|e| CatalogError::Fetch {
            url: source.to_string(),
            source: e,
        })?
    } else {
        debug!(path = source, "reading catalog");
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| CatalogError::Read {
                path: PathBuf::from(source),
                source: e,
            })?
    };

    parse_catalog(&text)
}

/// Parse a catalog document.
pub fn parse_catalog(text: &str) -> Result<Vec<Item>, CatalogError> {
    let records: Vec<Map<String, Value>> = serde_json::from_str(text)?;
    if records.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(records.len());

    for (index, mut record) in records.into_iter().enumerate() {
        let name = match record.remove("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Err(CatalogError::MissingName { index }),
        };

        let gender = record.remove("gender").map(value_text).unwrap_or_default();

        if !seen.insert(name.clone()) {
            warn!(name = %name, "duplicate name in catalog; only one copy can be ranked per session");
        }

        let mut item = Item::new(name, gender);
        for (key, value) in record {
            item.attributes.insert(key, value_text(value));
        }
        items.push(item);
    }

    Ok(items)
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Keep characters whose gender matches, ignoring case.
pub fn filter_by_gender(items: Vec<Item>, gender: &str) -> Vec<Item> {
    let wanted = gender.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| item.gender.to_lowercase() == wanted)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Ayla", "gender": "Female", "age": 19, "house": "North"},
        {"name": " Bram ", "gender": "Male"},
        {"name": "Cass", "gender": "female", "alias": null}
    ]"#;

    #[test]
    fn test_parse_catalog_fields() {
        let items = parse_catalog(SAMPLE).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Ayla");
        assert_eq!(items[0].gender, "Female");
        assert_eq!(items[0].attributes.get("age").map(String::as_str), Some("19"));
        assert_eq!(items[0].attributes.get("house").map(String::as_str), Some("North"));
        assert_eq!(items[1].name, "Bram");
        assert_eq!(items[2].attributes.get("alias").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_catalog_missing_gender_defaults_empty() {
        let items = parse_catalog(r#"[{"name": "Solo"}]"#).unwrap();
        assert_eq!(items[0].gender, "");
    }

    #[test]
    fn test_parse_catalog_errors() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
        assert!(matches!(parse_catalog("{\"name\": 1}"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            parse_catalog(r#"[{"name": "A"}, {"gender": "m"}]"#),
            Err(CatalogError::MissingName { index: 1 })
        ));
        assert!(matches!(
            parse_catalog(r#"[{"name": "   "}]"#),
            Err(CatalogError::MissingName { index: 0 })
        ));
    }

    #[test]
    fn test_filter_by_gender_ignores_case() {
        let items = parse_catalog(SAMPLE).unwrap();
        let names: Vec<String> = filter_by_gender(items, "FEMALE")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Ayla", "Cass"]);
    }

    #[tokio::test]
    async fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let items = load_catalog(path.to_str().unwrap()).await.unwrap();
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let err = load_catalog("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
