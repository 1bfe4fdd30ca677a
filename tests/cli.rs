//! End-to-end CLI tests exercising init -> ingest -> correct -> export.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn rhetor(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rhetor").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd.env_remove("RHETOR_DATA");
    cmd
}

#[test]
fn init_creates_backing_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    rhetor(&dir).arg("init").assert().success();

    assert!(dir.join("text.txt").exists());
    assert!(dir.join("clauses.csv").exists());
    assert!(dir.join("sequences.csv").exists());

    let clauses = fs::read_to_string(dir.join("clauses.csv")).unwrap();
    assert_eq!(clauses.trim(), "range_id,start,end");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir).arg("init").assert().failure().code(3);
    rhetor(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn commands_fail_before_init() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("never-initialized");

    let assert = rhetor(&dir)
        .args(["clause", "list"])
        .assert()
        .failure()
        .code(3);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("rhetor init"), "expected init hint, got: {stderr}");
}

#[test]
fn ingest_then_correct_then_export() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    let text_path = tmp.path().join("text.txt");
    fs::write(&text_path, "The sky darkened. Rain began to fall.").unwrap();

    let seed_path = tmp.path().join("seed.csv");
    fs::write(
        &seed_path,
        "c1_start,c1_end,c2_start,c2_end,linkage_words,predicted_classes\n\
         0,17,18,37,began,5\n",
    )
    .unwrap();

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir)
        .arg("ingest")
        .arg(&text_path)
        .arg("--sequences")
        .arg(&seed_path)
        .assert()
        .success();

    // Seeding is idempotent: a second ingest adds nothing.
    rhetor(&dir)
        .arg("ingest")
        .arg(&text_path)
        .arg("--sequences")
        .arg(&seed_path)
        .assert()
        .success();

    let assert = rhetor(&dir)
        .args(["sequence", "list", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let sequences: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sequences.as_array().unwrap().len(), 1);

    rhetor(&dir)
        .args(["sequence", "correct", "1", "SEQ", "CON"])
        .assert()
        .success();

    let out_path = tmp.path().join("export.csv");
    rhetor(&dir).arg("export").arg(&out_path).assert().success();

    let export = fs::read_to_string(&out_path).unwrap();
    let mut lines = export.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("sequence_id,c1,c1_start"));
    let row = lines.next().unwrap();
    assert!(row.contains("The sky darkened."));
    assert!(row.contains("\"SEQ,CON\"") || row.contains("SEQ,CON"));
}

#[test]
fn duplicate_pair_is_skipped_not_failed() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    let text_path = tmp.path().join("text.txt");
    fs::write(&text_path, "One. Two.").unwrap();

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir).arg("ingest").arg(&text_path).assert().success();
    rhetor(&dir).args(["clause", "add", "0", "4"]).assert().success();
    rhetor(&dir).args(["clause", "add", "5", "9"]).assert().success();

    rhetor(&dir).args(["sequence", "add", "1", "2"]).assert().success();
    // Same pair in the opposite orientation is a no-op, not an error.
    rhetor(&dir).args(["sequence", "add", "2", "1"]).assert().success();

    let assert = rhetor(&dir)
        .args(["sequence", "list", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let sequences: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sequences.as_array().unwrap().len(), 1);
}

#[test]
fn deleted_sequence_ids_are_never_reused() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    let text_path = tmp.path().join("text.txt");
    fs::write(&text_path, "a b c d").unwrap();

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir).arg("ingest").arg(&text_path).assert().success();
    for (start, end) in [(0, 1), (2, 3), (4, 5), (6, 7)] {
        rhetor(&dir)
            .args(["clause", "add", &start.to_string(), &end.to_string()])
            .assert()
            .success();
    }
    rhetor(&dir).args(["sequence", "add", "1", "2"]).assert().success();
    rhetor(&dir).args(["sequence", "add", "2", "3"]).assert().success();

    rhetor(&dir).args(["sequence", "delete", "1"]).assert().success();

    let assert = rhetor(&dir)
        .args(["sequence", "add", "3", "4", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let created: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(created["sequence_id"], 3);
}

#[test]
fn sequence_add_requires_existing_clauses() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    rhetor(&dir).arg("init").assert().success();

    // No clauses exist yet, so linking is a validation error, not a
    // poisoned row that breaks later reads.
    rhetor(&dir)
        .args(["sequence", "add", "5", "6"])
        .assert()
        .failure()
        .code(4);
    rhetor(&dir).args(["sequence", "list"]).assert().success();
}

#[test]
fn sequence_list_filters_by_clause() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    let text_path = tmp.path().join("text.txt");
    fs::write(&text_path, "a b c").unwrap();

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir).arg("ingest").arg(&text_path).assert().success();
    for (start, end) in [(0, 1), (2, 3), (4, 5)] {
        rhetor(&dir)
            .args(["clause", "add", &start.to_string(), &end.to_string()])
            .assert()
            .success();
    }
    rhetor(&dir).args(["sequence", "add", "1", "2"]).assert().success();
    rhetor(&dir).args(["sequence", "add", "2", "3"]).assert().success();

    let assert = rhetor(&dir)
        .args(["sequence", "list", "--clause", "2", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let touching: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(touching.as_array().unwrap().len(), 2);

    let assert = rhetor(&dir)
        .args(["sequence", "list", "--clause", "1", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let touching: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(touching.as_array().unwrap().len(), 1);
}

#[test]
fn text_range_is_byte_addressed() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    let text_path = tmp.path().join("text.txt");
    fs::write(&text_path, "hello world").unwrap();

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir).arg("ingest").arg(&text_path).assert().success();

    let assert = rhetor(&dir)
        .args(["text", "--start", "6", "--end", "11"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.trim(), "world");

    rhetor(&dir)
        .args(["text", "--start", "6", "--end", "99"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn clear_requires_force() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    rhetor(&dir).arg("init").assert().success();
    rhetor(&dir).arg("clear").assert().failure().code(4);
    rhetor(&dir).args(["clear", "--force"]).assert().success();
}
