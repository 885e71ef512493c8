//! Synchronizer behaviour against real world folders

use addon_core::{
    Error, FolderOutcome, PackCategory, PackSynchronizer, PackVersion, ScanReport, SyncOptions,
    World,
};
use addon_fs::NormalizedPath;
use addon_test_utils::TestWorld;
use pretty_assertions::assert_eq;
use serde_json::json;

const RP: &str = "resource_packs";
const RP_LEDGER: &str = "world_resource_packs.json";
const BP: &str = "behavior_packs";
const BP_LEDGER: &str = "world_behavior_packs.json";

fn sync_resource(world: &TestWorld) -> ScanReport {
    World::new(world.root())
        .sync(PackCategory::Resource, &SyncOptions::default())
        .unwrap()
}

#[test]
fn test_fresh_world_writes_empty_ledger() {
    let world = TestWorld::new();

    let report = sync_resource(&world);

    assert!(report.ledger_created);
    assert_eq!(report.total, 0);
    assert_eq!(world.read_file(RP_LEDGER).trim(), "[]");
}

#[test]
fn test_new_packs_are_added_in_folder_order() {
    let world = TestWorld::new();
    world.add_pack(RP, "b_pack", "uuid-b", &[1, 0, 0]);
    world.add_pack(RP, "a_pack", "uuid-a", &[2, 1, 0]);

    let report = sync_resource(&world);

    assert_eq!(report.processed, 2);
    assert_eq!(report.added_ids(), vec!["uuid-a", "uuid-b"]);
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![
            ("uuid-a".to_string(), vec![2, 1, 0]),
            ("uuid-b".to_string(), vec![1, 0, 0]),
        ]
    );
}

#[test]
fn test_sync_is_idempotent() {
    let world = TestWorld::new();
    world.add_pack(RP, "Alpha RP", "uuid-alpha", &[1, 0, 0]);
    world.add_pack(RP, "Beta RP", "uuid-beta", &[0, 3, 1]);
    world.add_folder(RP, "Loose textures");

    sync_resource(&world);
    let first = world.read_file(RP_LEDGER);
    let second_report = sync_resource(&world);
    let second = world.read_file(RP_LEDGER);

    assert_eq!(first, second);
    assert_eq!(second_report.duplicates, 0);
    assert_eq!(second_report.removed, 0);
    assert_eq!(second_report.processed, 2);
    assert!(!second_report.has_changes());
    assert!(!second_report.ledger_created);
}

#[test]
fn test_orphan_entries_are_removed() {
    let world = TestWorld::new();
    world.write_ledger(RP_LEDGER, &[("A", &[1, 0, 0])]);
    world.add_pack(RP, "X", "B", &[1, 0, 0]);

    let report = sync_resource(&world);

    assert_eq!(report.removed, 1);
    assert_eq!(report.processed, 1);
    assert_eq!(report.removed_ids, vec!["A".to_string()]);
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("B".to_string(), vec![1, 0, 0])]
    );
}

#[test]
fn test_duplicate_identifier_first_folder_wins() {
    let world = TestWorld::new();
    world.add_pack(RP, "F1", "C", &[1, 0, 0]);
    world.add_pack(RP, "F2", "C", &[2, 0, 0]);

    let report = sync_resource(&world);

    assert_eq!(report.duplicates, 1);
    assert_eq!(report.duplicate_folders(), vec![("F2", "C")]);
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("C".to_string(), vec![1, 0, 0])]
    );
}

#[test]
fn test_duplicate_does_not_override_existing_ledger_version() {
    let world = TestWorld::new();
    world.write_ledger(RP_LEDGER, &[("C", &[1, 0, 0])]);
    world.add_pack(RP, "F1", "C", &[1, 0, 0]);
    world.add_pack(RP, "F2", "C", &[9, 9, 9]);

    sync_resource(&world);

    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("C".to_string(), vec![1, 0, 0])]
    );
}

#[test]
fn test_missing_manifest_is_reported_not_fatal() {
    let world = TestWorld::new();
    world.add_folder(RP, "No Manifest RP");
    world.add_pack(RP, "Good RP", "uuid-good", &[1, 0, 0]);

    let report = sync_resource(&world);

    assert_eq!(report.skipped, 1);
    assert_eq!(report.missing_manifest(), vec!["No Manifest RP"]);
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("uuid-good".to_string(), vec![1, 0, 0])]
    );
}

#[test]
fn test_malformed_manifest_is_skipped() {
    let world = TestWorld::new();
    world.add_pack_with_raw_manifest(RP, "Broken RP", "{ \"header\": ");
    world.add_pack_with_manifest(RP, "No Version RP", &json!({"header": {"uuid": "v"}}));

    let report = sync_resource(&world);

    assert_eq!(report.skipped, 2);
    assert_eq!(report.total, 0);
    let malformed: Vec<&str> = report.malformed().into_iter().map(|(f, _)| f).collect();
    assert_eq!(malformed, vec!["Broken RP", "No Version RP"]);
}

#[test]
fn test_version_is_updated_from_folder() {
    let world = TestWorld::new();
    world.write_ledger(RP_LEDGER, &[("D", &[1, 0, 0])]);
    world.add_pack(RP, "D pack", "D", &[1, 0, 1]);

    let report = sync_resource(&world);

    assert_eq!(
        report.folders[0].outcome,
        FolderOutcome::Updated {
            pack_id: "D".into(),
            previous: PackVersion::from([1, 0, 0]),
            version: PackVersion::from([1, 0, 1]),
        }
    );
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("D".to_string(), vec![1, 0, 1])]
    );
}

#[test]
fn test_version_arity_is_not_fixed() {
    let world = TestWorld::new();
    world.add_pack(RP, "Long", "long", &[1, 2, 3, 4]);

    sync_resource(&world);

    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("long".to_string(), vec![1, 2, 3, 4])]
    );
}

#[test]
fn test_existing_order_is_kept_and_new_entries_appended() {
    let world = TestWorld::new();
    world.write_ledger(RP_LEDGER, &[("zz", &[1, 0, 0]), ("aa", &[1, 0, 0])]);
    world.add_pack(RP, "1", "aa", &[1, 0, 0]);
    world.add_pack(RP, "2", "new", &[1, 0, 0]);
    world.add_pack(RP, "3", "zz", &[1, 0, 0]);

    sync_resource(&world);

    let ids: Vec<String> = world
        .read_ledger(RP_LEDGER)
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec!["zz", "aa", "new"]);
}

#[test]
fn test_unknown_ledger_fields_are_preserved() {
    let world = TestWorld::new();
    world.write_file(
        RP_LEDGER,
        r#"[{"pack_id": "keep", "version": [1, 0, 0], "subpack": "high_res"}]"#,
    );
    world.add_pack(RP, "Keep RP", "keep", &[1, 1, 0]);

    sync_resource(&world);

    let raw: serde_json::Value = serde_json::from_str(&world.read_file(RP_LEDGER)).unwrap();
    assert_eq!(
        raw,
        json!([{"pack_id": "keep", "version": [1, 1, 0], "subpack": "high_res"}])
    );
}

#[test]
fn test_corrupt_ledger_is_fatal_and_left_intact() {
    let world = TestWorld::new();
    world.write_file(RP_LEDGER, "{ this is not a ledger");
    world.add_pack(RP, "Pack", "uuid", &[1, 0, 0]);

    let result = World::new(world.root()).sync(PackCategory::Resource, &SyncOptions::default());

    assert!(matches!(result, Err(Error::LedgerParse { .. })));
    assert_eq!(world.read_file(RP_LEDGER), "{ this is not a ledger");
}

#[test]
fn test_corrupt_ledger_does_not_block_other_category() {
    let world = TestWorld::new();
    world.write_file(RP_LEDGER, "not json");
    world.add_pack(BP, "Mobs BP", "uuid-bp", &[1, 0, 0]);

    let results = World::new(world.root()).sync_all(&SyncOptions::default());

    assert_eq!(results.len(), 2);
    assert!(results[0].1.is_err());
    let behavior = results[1].1.as_ref().unwrap();
    assert_eq!(behavior.processed, 1);
    assert_eq!(
        world.read_ledger(BP_LEDGER),
        vec![("uuid-bp".to_string(), vec![1, 0, 0])]
    );
}

#[test]
fn test_missing_pack_root_leaves_ledger_untouched() {
    let world = TestWorld::bare();
    world.write_ledger(RP_LEDGER, &[("A", &[1, 0, 0])]);
    let before = world.read_file(RP_LEDGER);

    let report = sync_resource(&world);

    assert!(report.pack_root_missing);
    assert_eq!(world.read_file(RP_LEDGER), before);
}

#[test]
fn test_dry_run_writes_nothing() {
    let world = TestWorld::new();
    world.add_pack(RP, "Pack", "uuid", &[1, 0, 0]);

    let report = PackSynchronizer::new(SyncOptions { dry_run: true })
        .sync(
            &NormalizedPath::new(world.path(RP)),
            &NormalizedPath::new(world.path(RP_LEDGER)),
        )
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.total, 1);
    world.assert_missing(RP_LEDGER);
}

#[test]
fn test_files_in_pack_root_are_ignored() {
    let world = TestWorld::new();
    world.write_file("resource_packs/readme.txt", "hello");
    world.write_file("resource_packs/stray.mcpack", "zip");

    let report = sync_resource(&world);

    assert_eq!(report.folders.len(), 0);
    assert_eq!(report.skipped, 0);
}

#[cfg(unix)]
#[test]
fn test_folder_name_with_backslash_is_read() {
    let world = TestWorld::new();
    world.add_pack(RP, "Faithful\\RP", "uuid-bs", &[1, 0, 0]);

    let report = sync_resource(&world);

    assert_eq!(report.skipped, 0);
    assert_eq!(report.folders[0].folder, "Faithful\\RP");
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("uuid-bs".to_string(), vec![1, 0, 0])]
    );
}

#[cfg(unix)]
#[test]
fn test_non_utf8_folder_name_is_read() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let world = TestWorld::new();
    let dir = world.path(RP).join(OsStr::from_bytes(b"Pack \xff RP"));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("manifest.json"),
        addon_test_utils::world::manifest_json("uuid-raw", &[2, 0, 0]).to_string(),
    )
    .unwrap();

    let report = sync_resource(&world);

    assert_eq!(report.processed, 1);
    assert_eq!(report.folders[0].folder, "Pack \u{fffd} RP");
    assert_eq!(
        world.read_ledger(RP_LEDGER),
        vec![("uuid-raw".to_string(), vec![2, 0, 0])]
    );
}

#[test]
fn test_unwritable_ledger_is_fatal_and_keeps_previous_bytes() {
    let world = TestWorld::new();
    world.write_ledger(RP_LEDGER, &[("A", &[1, 0, 0])]);
    let before = world.read_file(RP_LEDGER);
    world.add_pack(RP, "X", "B", &[1, 0, 0]);
    // A directory where the atomic writer puts its temp file blocks the write
    let temp_name = format!(".{RP_LEDGER}.{}.tmp", std::process::id());
    std::fs::create_dir_all(world.path(&temp_name).join("occupied")).unwrap();

    let result = World::new(world.root()).sync(PackCategory::Resource, &SyncOptions::default());

    assert!(matches!(result, Err(Error::Fs(_))));
    assert_eq!(world.read_file(RP_LEDGER), before);
}
