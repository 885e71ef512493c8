use addon_fs::{ConfigStore, Error, NormalizedPath};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq, Deserialize)]
struct Settings {
    #[serde(default)]
    name: String,
    #[serde(default)]
    retries: u32,
}

#[rstest]
#[case("settings.toml", "name = \"world\"\nretries = 3\n")]
#[case("settings.json", "{\"name\": \"world\", \"retries\": 3}")]
fn test_load_detects_format(#[case] file: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(file));
    fs::write(path.to_native(), content).unwrap();

    let loaded: Settings = ConfigStore::new().load(&path).unwrap();

    assert_eq!(
        loaded,
        Settings {
            name: "world".into(),
            retries: 3
        }
    );
}

#[test]
fn test_load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("addons.toml"));

    let loaded: Settings = ConfigStore::new().load_or_default(&path).unwrap();

    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_load_invalid_toml_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("addons.toml"));
    fs::write(path.to_native(), "name = [unterminated").unwrap();

    let result: Result<Settings, _> = ConfigStore::new().load(&path);

    assert!(matches!(result, Err(Error::ConfigParse { ref format, .. }) if format == "TOML"));
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("addons.ini"));
    fs::write(path.to_native(), "x").unwrap();

    let result: Result<Settings, _> = ConfigStore::new().load(&path);

    assert!(matches!(result, Err(Error::UnsupportedFormat { ref extension }) if extension == "ini"));
}
