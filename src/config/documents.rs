use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

/// Parse a TOML, YAML or JSON document, choosing the format from the file extension of `path`.
///
/// # Errors
///
/// Returns an error if the extension is not recognized or the text does not parse.
pub fn parse_document<T: DeserializeOwned>(path: &Utf8Path, text: &str) -> Result<T> {
    let extension = path.extension().unwrap_or_default();
    let document = match extension {
        "toml" => toml::from_str(text).into_app_err_with(|| format!("parsing TOML from {path}"))?,
        "yml" | "yaml" => serde_yaml::from_str(text).into_app_err_with(|| format!("parsing YAML from {path}"))?,
        "json" => serde_json::from_str(text).into_app_err_with(|| format!("parsing JSON from {path}"))?,
        _ => return Err(app_err!("unsupported file extension '{extension}' for {path}; expected toml, yml, yaml or json")),
    };

    Ok(document)
}

/// Read and parse a document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_document<T: DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading {path}"))?;
    parse_document(path, &text)
}

/// Serialize `value` in the format chosen by the file extension of `path` and write it out.
///
/// # Errors
///
/// Returns an error if the extension is not recognized, serialization fails, or the file cannot be written.
pub fn write_document<T: Serialize>(path: &Utf8Path, value: &T) -> Result<()> {
    let extension = path.extension().unwrap_or_default();
    let text = match extension {
        "toml" => toml::to_string_pretty(value).into_app_err_with(|| format!("serializing TOML for {path}"))?,
        "yml" | "yaml" => serde_yaml::to_string(value).into_app_err_with(|| format!("serializing YAML for {path}"))?,
        "json" => serde_json::to_string_pretty(value).into_app_err_with(|| format!("serializing JSON for {path}"))?,
        _ => return Err(app_err!("unsupported file extension '{extension}' for {path}; expected toml, yml, yaml or json")),
    };

    fs::write(path, text).into_app_err_with(|| format!("writing {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    type Doc = BTreeMap<String, f64>;

    #[test]
    fn test_dispatch_on_extension() {
        let toml: Doc = parse_document(Utf8Path::new("w.toml"), "a = 1.5").unwrap();
        let yaml: Doc = parse_document(Utf8Path::new("w.yml"), "a: 1.5").unwrap();
        let json: Doc = parse_document(Utf8Path::new("w.json"), r#"{"a": 1.5}"#).unwrap();

        assert_eq!(toml, yaml);
        assert_eq!(yaml, json);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = parse_document::<Doc>(Utf8Path::new("w.ini"), "a = 1").unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"), "{err}");

        assert!(parse_document::<Doc>(Utf8Path::new("weights"), "a = 1").is_err());
    }

    #[test]
    fn test_parse_errors_name_the_file() {
        let err = parse_document::<Doc>(Utf8Path::new("broken.json"), "{").unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"), "{err:#}");
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let doc = Doc::from([("bleu".to_string(), 2.0), ("ter".to_string(), 0.5)]);

        for name in ["w.toml", "w.yaml", "w.json"] {
            let path = root.join(name);
            write_document(&path, &doc).unwrap();
            assert_eq!(read_document::<Doc>(&path).unwrap(), doc);
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(read_document::<Doc>(Utf8Path::new("/nonexistent/weights.toml")).is_err());
    }
}
