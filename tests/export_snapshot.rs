mod common;
use common::cli::{NtWorkspace, run_nt};

use std::fs;

#[test]
fn test_export_copies_database_bytes() {
    let workspace = NtWorkspace::new();
    run_nt(&workspace, ["init"], "init");
    run_nt(&workspace, ["add", "Groceries", "Milk, eggs"], "add");

    let export = run_nt(&workspace, ["export", "backup"], "export");
    assert!(export.status.success(), "export failed: {}", export.stderr);
    assert!(export.stdout.contains("Exported database to"));

    let src = workspace.path().join(".notes/notes.db");
    let dest = workspace.path().join("backup/notes.db");
    assert_eq!(
        fs::read(&src).unwrap(),
        fs::read(&dest).unwrap(),
        "snapshot is not byte-identical to the backing file"
    );
}

#[test]
fn test_export_uses_config_export_dir() {
    let workspace = NtWorkspace::new();
    run_nt(&workspace, ["init"], "init");
    run_nt(&workspace, ["add", "a", "1"], "add");

    fs::write(
        workspace.path().join(".notes/config.yaml"),
        "export_dir: from-config\n",
    )
    .unwrap();

    let export = run_nt(&workspace, ["export"], "export_config");
    assert!(export.status.success(), "export failed: {}", export.stderr);
    assert!(workspace.path().join("from-config/notes.db").exists());
}

#[test]
fn test_export_defaults_to_notes_export_dir() {
    let workspace = NtWorkspace::new();
    run_nt(&workspace, ["init"], "init");

    let export = run_nt(&workspace, ["export"], "export_default");
    assert!(export.status.success(), "export failed: {}", export.stderr);
    assert!(workspace.path().join("notes-export/notes.db").exists());
}

#[test]
fn test_add_with_export_flag_snapshots() {
    let workspace = NtWorkspace::new();
    run_nt(&workspace, ["init"], "init");

    let add = run_nt(&workspace, ["add", "a", "1", "--export"], "add_export");
    assert!(add.status.success(), "add --export failed: {}", add.stderr);
    assert!(add.stdout.contains("Created note 1"));
    assert!(workspace.path().join("notes-export/notes.db").exists());
}

#[test]
fn test_export_requires_init() {
    let workspace = NtWorkspace::new();
    let export = run_nt(&workspace, ["export"], "export_uninit");
    assert!(!export.status.success());
    assert!(export.stderr.contains("nt init"));
}
