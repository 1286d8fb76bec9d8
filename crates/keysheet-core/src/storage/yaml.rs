//! YAML document loading.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::Result;

/// Load a YAML file into an untyped value.
pub fn load_yaml(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    parse_yaml_content(&content)
}

/// Parse YAML text into an untyped value.
///
/// Empty input parses to `Value::Null`; the validator reports that as an
/// empty document instead of this layer failing.
pub fn parse_yaml_content(content: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_mapping() {
        let value = parse_yaml_content("title: T\nshortcuts: {}\n").unwrap();
        assert!(value.is_mapping());
    }

    #[test]
    fn empty_content_parses_to_null() {
        assert!(parse_yaml_content("").unwrap().is_null());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(parse_yaml_content("title: [unclosed").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_yaml(Path::new("/nonexistent/file.yaml")).unwrap_err();
        assert!(matches!(err, crate::error::KeysheetError::Io(_)));
    }

    #[test]
    fn loads_a_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yaml");
        std::fs::write(&path, "title: From Disk\nshortcuts: {}\n").unwrap();
        let value = load_yaml(&path).unwrap();
        assert_eq!(
            value.get("title").and_then(Value::as_str),
            Some("From Disk")
        );
    }
}
