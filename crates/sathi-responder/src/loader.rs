//! Response table files
//!
//! ```yaml
//! fallback: "Please choose a topic."
//! responses:
//!   hello: "Hi!"
//! ```

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use sathi_core::{Result, SathiError};

use crate::builtin::FALLBACK_RESPONSE;
use crate::table::ResponseTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTableSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

impl ResponseTableSpec {
    pub fn into_table(self) -> Result<ResponseTable> {
        let fallback = self
            .fallback
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string());
        if fallback.is_empty() {
            return Err(SathiError::Config("fallback must not be empty".into()));
        }

        let mut table = ResponseTable::new(fallback);
        for (key, response) in self.responses {
            table.insert(&key, response)?;
        }
        Ok(table)
    }
}

impl ResponseTable {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let spec: ResponseTableSpec = serde_yaml::from_str(yaml)?;
        spec.into_table()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                SathiError::NotFound(format!("Response table {}", path.display()))
            }
            _ => SathiError::Config(format!("Failed to read {}: {}", path.display(), e)),
        })?;
        let table = Self::from_yaml_str(&content).map_err(|e| match e {
            SathiError::Yaml(err) => {
                SathiError::Config(format!("Invalid response table {}: {}", path.display(), err))
            }
            SathiError::Config(msg) => {
                SathiError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!(
            path = %path.display(),
            entries = table.len(),
            "Loaded response table"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
fallback: "Try again."
responses:
  Hello: "Hi!"
  "how to apply": "Pick a scheme."
"#;
        let table = ResponseTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("hello"), "Hi!");
        assert_eq!(table.lookup("HOW TO APPLY"), "Pick a scheme.");
        assert_eq!(table.lookup("bye"), "Try again.");
    }

    #[test]
    fn test_default_fallback() {
        let table = ResponseTable::from_yaml_str("responses:\n  ping: pong\n").unwrap();
        assert_eq!(table.fallback(), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let err = ResponseTable::from_yaml_str("fallback: \"\"\n").unwrap_err();
        assert!(matches!(err, SathiError::Config(_)));
    }

    #[test]
    fn test_colliding_keys_rejected() {
        let yaml = "responses:\n  hello: a\n  HELLO: b\n";
        let err = ResponseTable::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate response key"));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("responses.yaml");
        fs::write(&path, "responses:\n  namaste: \"Namaste!\"\n").unwrap();

        let table = ResponseTable::from_file(&path).unwrap();
        assert_eq!(table.lookup("Namaste"), "Namaste!");
    }

    #[test]
    fn test_from_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = ResponseTable::from_file(temp_dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, SathiError::NotFound(_)));
    }

    #[test]
    fn test_from_file_unreadable_is_not_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = ResponseTable::from_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, SathiError::Config(_)));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "responses: [unclosed").unwrap();

        let err = ResponseTable::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
