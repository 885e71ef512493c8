//! Pack manifest reader
//!
//! Only `header.uuid` and `header.version` of `<folder>/manifest.json`
//! are read; the rest of the document is ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use addon_fs::WorldPath;
use serde_json::Value;

use crate::error::ManifestError;
use crate::ledger::{PackEntry, PackVersion};

/// Read the pack identifier and version declared by `folder`.
pub fn read_manifest(folder: &Path) -> Result<PackEntry, ManifestError> {
    let path = folder.join(WorldPath::Manifest);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ManifestError::Missing { path });
        }
        Err(e) => return Err(ManifestError::malformed(&path, format!("failed to read: {e}"))),
    };

    // Some editors save manifests with a byte order mark
    let content = content.trim_start_matches('\u{feff}');
    let document: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::malformed(&path, format!("invalid JSON: {e}")))?;

    parse_header(&document).map_err(|reason| ManifestError::malformed(&path, reason))
}

fn parse_header(document: &Value) -> Result<PackEntry, String> {
    let header = document
        .get("header")
        .and_then(Value::as_object)
        .ok_or("no header section")?;

    let pack_id = match header.get("uuid") {
        // The identifier is opaque and stored exactly as declared
        Some(Value::String(uuid)) if !uuid.is_empty() => uuid.clone(),
        Some(Value::String(_)) | None => return Err("no uuid found in header".into()),
        Some(_) => return Err("header uuid is not a string".into()),
    };

    let version = match header.get("version") {
        Some(Value::Array(parts)) if !parts.is_empty() => parts
            .iter()
            .map(Value::as_u64)
            .collect::<Option<Vec<u64>>>()
            .ok_or("header version must contain non-negative integers")?,
        Some(Value::Array(_)) | None => return Err("no version found in header".into()),
        Some(_) => return Err("header version is not an array".into()),
    };

    Ok(PackEntry::new(pack_id, PackVersion::new(version)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn reads_uuid_and_version() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("manifest.json"),
            json!({
                "format_version": 2,
                "header": {
                    "name": "Test Pack",
                    "uuid": "5f3ab0d6-0000-4000-8000-000000000001",
                    "version": [1, 2, 3],
                    "min_engine_version": [1, 20, 0]
                },
                "modules": []
            })
            .to_string(),
        )
        .unwrap();

        let entry = read_manifest(dir.path()).unwrap();
        assert_eq!(entry.pack_id, "5f3ab0d6-0000-4000-8000-000000000001");
        assert_eq!(entry.version, PackVersion::from([1, 2, 3]));
    }

    #[test]
    fn missing_manifest_is_reported_as_missing() {
        let dir = tempdir().unwrap();
        let err = read_manifest(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Missing { .. }));
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let dir = tempdir().unwrap();
        let body = "\u{feff}{\"header\":{\"uuid\":\"abc\",\"version\":[0,1,0]}}";
        fs::write(dir.path().join("manifest.json"), body).unwrap();

        let entry = read_manifest(dir.path()).unwrap();
        assert_eq!(entry.pack_id, "abc");
    }

    #[rstest]
    #[case(json!({}), "no header section")]
    #[case(json!({"header": {"version": [1, 0, 0]}}), "no uuid found in header")]
    #[case(json!({"header": {"uuid": "", "version": [1, 0, 0]}}), "no uuid found in header")]
    #[case(json!({"header": {"uuid": 7, "version": [1, 0, 0]}}), "header uuid is not a string")]
    #[case(json!({"header": {"uuid": "abc"}}), "no version found in header")]
    #[case(json!({"header": {"uuid": "abc", "version": []}}), "no version found in header")]
    #[case(json!({"header": {"uuid": "abc", "version": "1.0.0"}}), "header version is not an array")]
    #[case(
        json!({"header": {"uuid": "abc", "version": [1, "x", 0]}}),
        "header version must contain non-negative integers"
    )]
    fn wrong_shapes_are_malformed(#[case] document: Value, #[case] expected: &str) {
        assert_eq!(parse_header(&document).unwrap_err(), expected);
    }

    #[rstest]
    #[case("  uuid-sp  ")]
    #[case(" ")]
    fn uuid_is_kept_verbatim(#[case] uuid: &str) {
        let document = json!({"header": {"uuid": uuid, "version": [1, 0, 0]}});
        assert_eq!(parse_header(&document).unwrap().pack_id, uuid);
    }

    #[test]
    fn invalid_json_is_malformed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("manifest.json"), "{ not json").unwrap();

        let err = read_manifest(dir.path()).unwrap_err();
        assert!(err.reason().starts_with("invalid JSON"));
    }
}
