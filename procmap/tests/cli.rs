use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const BROKEN: &str = r#"{
  "game.exe": ["Game Title", "action", "wrong_key"],
  "other.exe": ["Other Game", "other.exe"]
}"#;

fn procmap(mapping: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_procmap"));
    cmd.env_remove("GAME_DATA_JSON")
        .env_remove("PROCMAP_LOG")
        .arg("--mapping")
        .arg(mapping);
    cmd
}

#[test]
fn validate_reports_without_writing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, BROKEN).expect("write mapping");

    let output = procmap(&path).arg("validate").output().expect("run validate");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("game.exe is not the last element in the array (found 'wrong_key')"));
    assert!(!stderr.contains("other.exe is not"));
    assert_eq!(fs::read_to_string(&path).expect("read mapping"), BROKEN);
}

#[test]
fn validate_write_repairs_in_place() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, BROKEN).expect("write mapping");

    procmap(&path).args(["validate", "--write"]).assert().success();

    let repaired = fs::read_to_string(&path).expect("read mapping");
    assert_eq!(
        repaired,
        "{\n  \"game.exe\": [\n    \"Game Title\",\n    \"action\",\n    \"game.exe\"\n  ],\n  \"other.exe\": [\n    \"Other Game\",\n    \"other.exe\"\n  ]\n}\n"
    );

    // second run finds nothing
    procmap(&path).args(["validate", "--check"]).assert().success();
}

#[test]
fn validate_check_fails_on_mismatch() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, BROKEN).expect("write mapping");

    procmap(&path).args(["validate", "--check"]).assert().code(1);
    assert_eq!(fs::read_to_string(&path).expect("read mapping"), BROKEN);
}

#[test]
fn validate_json_report() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, BROKEN).expect("write mapping");

    let output = procmap(&path)
        .args(["--quiet", "validate", "--json"])
        .output()
        .expect("run validate");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["checked"], 2);
    assert_eq!(report["diagnostics"][0]["key"], "game.exe");
    assert_eq!(report["diagnostics"][0]["found"], "wrong_key");
}

#[test]
fn empty_record_aborts() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, r#"{"a.exe": ["A", "x"], "b.exe": []}"#).expect("write mapping");

    let output = procmap(&path).args(["validate", "--write"]).output().expect("run validate");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Malformed record for 'b.exe'"));
    assert_eq!(
        fs::read_to_string(&path).expect("read mapping"),
        r#"{"a.exe": ["A", "x"], "b.exe": []}"#
    );
}

#[test]
fn malformed_json_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, "{ not json").expect("write mapping");

    let output = procmap(&path).arg("validate").output().expect("run validate");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON"));
}

#[test]
fn sort_to_stdout() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, r#"{"b.exe": ["B", "b.exe"], "a.exe": ["A", "a.exe"]}"#).expect("write mapping");

    let output = procmap(&path).args(["sort", "--output", "-"]).output().expect("run sort");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8 stdout"),
        "{\n  \"a.exe\": [\n    \"A\",\n    \"a.exe\"\n  ],\n  \"b.exe\": [\n    \"B\",\n    \"b.exe\"\n  ]\n}\n"
    );
}

#[test]
fn export_fixed_layout_to_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    let csv = dir.path().join("games.csv");
    fs::write(&path, BROKEN).expect("write mapping");

    procmap(&path)
        .args(["export", "--layout", "fixed", "--output"])
        .arg(&csv)
        .assert()
        .success();

    let text = fs::read_to_string(&csv).expect("read csv");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[1], "game.exe,Game Title,action,-,-,-");
    assert_eq!(lines[2], "other.exe,Other Game,-,-,-,-");
}

#[test]
fn find_and_list() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, BROKEN).expect("write mapping");

    let output = procmap(&path).args(["find", "ACTION"]).output().expect("run find");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "game.exe\n");

    procmap(&path).args(["find", "nothing"]).assert().code(1);

    let output = procmap(&path).args(["list", "--search", "other"]).output().expect("run list");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Other Game :: other.exe\n");
}

#[test]
fn validate_json_replaces_warnings() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, BROKEN).expect("write mapping");

    let output = procmap(&path).args(["validate", "--json"]).output().expect("run validate");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(!stderr.contains("is not the last element"));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is only the report");
    assert_eq!(report["diagnostics"].as_array().map(Vec::len), Some(1));
}

#[test]
fn validate_output_and_json_conflict() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, r#"{"a.exe": ["A", "x"]}"#).expect("write mapping");

    let output = procmap(&path)
        .args(["--quiet", "validate", "--output", "-", "--json"])
        .output()
        .expect("run validate");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}

#[test]
fn validate_warnings_listed_under_results() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(&path, r#"{"a.exe": ["A", "x"], "b.exe": ["B", "y"]}"#).expect("write mapping");

    let output = procmap(&path).arg("validate").output().expect("run validate");
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");

    let results = stderr.find("📊 Results: 2 checked, 2 repaired").expect("results line");
    let first = stderr.find("a.exe is not the last element").expect("a.exe warning");
    let second = stderr.find("b.exe is not the last element").expect("b.exe warning");
    assert!(results < first && first < second);
    assert!(stderr.contains("     ⚠️ a.exe is not the last element in the array (found 'x')"));
}

#[test]
fn export_fixed_layout_warns_on_truncation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("process_mapping.json");
    fs::write(
        &path,
        r#"{"hl2.exe": ["half life 2", "valve", "fps", "source", "physics", "gordon", "hl2.exe"]}"#,
    )
    .expect("write mapping");

    let output = procmap(&path)
        .args(["export", "--layout", "fixed", "--output", "-"])
        .output()
        .expect("run export");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("hl2.exe has 5 keywords, only the first 4 are exported"));

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout.lines().nth(1), Some("hl2.exe,half life 2,valve,fps,source,physics"));
}
