//! Config file discovery and merging.

use serde_json::{Map, Value};
use std::path::Path;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON error in {path}: {source}")]
    Json {
        /// The file that failed to parse
        path: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A config file parsed but its top level is not a JSON object
    #[error("config file {0} is not a JSON object")]
    NotAnObject(String),
}

/// Merged configuration with its provenance trail.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: Map<String, Value>,
    provenance: Vec<String>,
}

impl Config {
    /// Look up a merged value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Source files that contributed to the merge, in merge order.
    pub fn provenance(&self) -> &[String] {
        &self.provenance
    }

    /// The merged mapping as a JSON object, including the `_provenance`
    /// key as an array of source locations.
    pub fn to_value(&self) -> Value {
        let mut map = self.values.clone();
        map.insert(
            "_provenance".to_string(),
            Value::Array(
                self.provenance
                    .iter()
                    .map(|p| Value::String(p.clone()))
                    .collect(),
            ),
        );
        Value::Object(map)
    }
}

/// Config files probed under the root, in merge order.
const SOURCES: [&str; 2] = ["evosuite.json", ".evosuite/config.json"];

/// Load and merge configuration found under a root directory.
///
/// Each file present is parsed as a JSON object and shallow-merged; a file
/// later in the probe order overrides earlier ones key by key. Missing
/// files are skipped, but a file that exists and fails to parse is an
/// error. The harness itself never interprets the merged values.
pub fn load_config(root: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let root = root.as_ref();
    let mut config = Config::default();

    for source in SOURCES {
        let path = root.join(source);
        if !path.exists() {
            continue;
        }

        let text = std::fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&text).map_err(|e| ConfigError::Json {
            path: path.display().to_string(),
            source: e,
        })?;
        let Value::Object(map) = value else {
            return Err(ConfigError::NotAnObject(path.display().to_string()));
        };

        for (key, value) in map {
            config.values.insert(key, value);
        }
        config.provenance.push(path.display().to_string());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_files_give_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();

        assert!(config.provenance().is_empty());
        assert!(config.get("anything").is_none());
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("evosuite.json"),
            r#"{"generations": 3, "namespace": "evosuite.plugins"}"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join(".evosuite")).unwrap();
        fs::write(
            dir.path().join(".evosuite/config.json"),
            r#"{"generations": 5}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();

        assert_eq!(config.get("generations"), Some(&serde_json::json!(5)));
        assert_eq!(
            config.get("namespace"),
            Some(&serde_json::json!("evosuite.plugins"))
        );
        assert_eq!(config.provenance().len(), 2);
        assert!(config.provenance()[0].ends_with("evosuite.json"));
    }

    #[test]
    fn test_provenance_key_in_merged_value() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("evosuite.json"), r#"{"a": 1}"#).unwrap();

        let value = load_config(dir.path()).unwrap().to_value();

        let provenance = value["_provenance"].as_array().unwrap();
        assert_eq!(provenance.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("evosuite.json"), "not json").unwrap();

        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn test_non_object_top_level_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("evosuite.json"), "[1, 2]").unwrap();

        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::NotAnObject(_))
        ));
    }
}
