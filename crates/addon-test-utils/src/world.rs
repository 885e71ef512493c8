//! [`TestWorld`] builder for scan and extraction scenarios.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::FileOptions;

/// A temporary Bedrock world directory with helpers for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use addon_test_utils::TestWorld;
///
/// let world = TestWorld::new();
/// world.add_pack("resource_packs", "Faithful RP", "uuid-1", &[1, 0, 0]);
/// world.write_ledger("world_resource_packs.json", &[("stale", &[0, 1, 0])]);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an empty world with `resource_packs/` and `behavior_packs/`.
    pub fn new() -> Self {
        let world = Self::bare();
        fs::create_dir_all(world.path("resource_packs")).unwrap();
        fs::create_dir_all(world.path("behavior_packs")).unwrap();
        world
    }

    /// Create an empty temporary directory with no pack directories.
    pub fn bare() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the world.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path relative to the world root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create a pack folder with a valid manifest.
    pub fn add_pack(&self, pack_dir: &str, folder: &str, uuid: &str, version: &[u64]) -> PathBuf {
        self.add_pack_with_manifest(pack_dir, folder, &manifest_json(uuid, version))
    }

    /// Create a pack folder with an arbitrary manifest document.
    pub fn add_pack_with_manifest(&self, pack_dir: &str, folder: &str, manifest: &Value) -> PathBuf {
        let dir = self.path(pack_dir).join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("manifest.json"),
            serde_json::to_string_pretty(manifest).unwrap(),
        )
        .unwrap();
        dir
    }

    /// Create a pack folder with a raw (possibly invalid) manifest body.
    pub fn add_pack_with_raw_manifest(&self, pack_dir: &str, folder: &str, body: &str) -> PathBuf {
        let dir = self.path(pack_dir).join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("manifest.json"), body).unwrap();
        dir
    }

    /// Create a pack folder without any manifest.
    pub fn add_folder(&self, pack_dir: &str, folder: &str) -> PathBuf {
        let dir = self.path(pack_dir).join(folder);
        fs::create_dir_all(dir.join("textures")).unwrap();
        dir
    }

    /// Write a ledger file from `(pack_id, version)` pairs.
    pub fn write_ledger(&self, file: &str, entries: &[(&str, &[u64])]) {
        let value: Vec<Value> = entries
            .iter()
            .map(|(id, version)| json!({"pack_id": id, "version": version}))
            .collect();
        self.write_file(file, &serde_json::to_string_pretty(&value).unwrap());
    }

    /// Write an arbitrary file relative to the world root.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file relative to the world root.
    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Parse a ledger file into `(pack_id, version)` pairs, in file order.
    pub fn read_ledger(&self, file: &str) -> Vec<(String, Vec<u64>)> {
        let value: Value = serde_json::from_str(&self.read_file(file)).unwrap();
        value
            .as_array()
            .expect("ledger must be a JSON array")
            .iter()
            .map(|entry| {
                let id = entry["pack_id"].as_str().unwrap().to_string();
                let version = entry["version"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|v| v.as_u64().unwrap())
                    .collect();
                (id, version)
            })
            .collect()
    }

    /// Write a zip archive under `downloaded_addons/`.
    ///
    /// `files` are `(path inside archive, content)` pairs; directories are
    /// implied by the paths.
    pub fn add_archive(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let path = self.path("downloaded_addons").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut zip = ZipWriter::new(File::create(&path).unwrap());
        let options = FileOptions::default();
        for (entry, content) in files {
            zip.start_file(*entry, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    /// Assert that a path relative to the world root exists.
    pub fn assert_exists(&self, rel: &str) {
        assert!(self.path(rel).exists(), "expected {rel} to exist");
    }

    /// Assert that a path relative to the world root does not exist.
    pub fn assert_missing(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "expected {rel} not to exist");
    }
}

/// A minimal manifest document declaring `uuid` and `version`.
pub fn manifest_json(uuid: &str, version: &[u64]) -> Value {
    json!({
        "format_version": 2,
        "header": {
            "name": "Test Pack",
            "description": "fixture",
            "uuid": uuid,
            "version": version,
            "min_engine_version": [1, 20, 0]
        },
        "modules": [
            {"type": "resources", "uuid": format!("{uuid}-module"), "version": version}
        ]
    })
}
