use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const GHE_META: &str = r#"{
  "short_name": "ghe",
  "fields": {
    "country": {"title": "Country"},
    "dalys": {
      "title": "DALYs",
      "processing_log": [
        {"variable": "dalys", "parents": ["data/meadow/who/ghe"], "operation": "load", "target": "dalys#1"},
        {"variable": "dalys_total", "parents": ["dalys#1"], "operation": "rename", "target": "dalys_total#1"}
      ]
    }
  }
}"#;

fn dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ghe.meta.json"), GHE_META).unwrap();
    dir
}

fn lineage(workdir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lineage"));
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env_remove("LINEAGE_LOG_DIR")
        .env_remove("LINEAGE_RENDER_DIRECTION");
    cmd
}

#[test]
fn test_show_text_prints_collapsed_diagram() {
    let dir = dataset();
    lineage(dir.path())
        .args(["show", ".", "ghe", "dalys", "--format", "text"])
        .assert()
        .success()
        .stdout(
            "graph TB;\ndata_x2F_meadow_x2F_who_x2F_ghe[\"data/meadow/who/ghe\"] -->|\"load\"| dalys__total#1[\"dalys_total\"]\n",
        );
}

#[test]
fn test_show_raw_keeps_rename() {
    let dir = dataset();
    lineage(dir.path())
        .args(["show", ".", "ghe", "dalys", "--format", "text", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "dalys#1[\"dalys\"] -->|\"rename\"| dalys__total#1[\"dalys_total\"]",
        ));
}

#[test]
fn test_show_dot() {
    let dir = dataset();
    lineage(dir.path())
        .args(["show", ".", "ghe", "dalys", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph {"))
        .stdout(predicate::str::contains("label = \"dalys_total\""));
}

#[test]
fn test_show_html_writes_file_without_opening() {
    let dir = dataset();
    let output = lineage(dir.path())
        .args(["show", ".", "ghe", "dalys", "--skip-auto-open"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let path = stdout
        .trim()
        .strip_prefix("Lineage diagram written to ")
        .unwrap();
    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("mermaid.initialize({startOnLoad:true});"));
    assert!(html.contains("dalys__total#1[\"dalys_total\"]"));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_show_unknown_indicator_lists_available() {
    let dir = dataset();
    lineage(dir.path())
        .args(["show", ".", "ghe", "yll", "--format", "text"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Indicator yll not found in table ghe. Available indicators:\n  country\n  dalys",
        ));
}

#[test]
fn test_show_missing_table() {
    let dir = dataset();
    lineage(dir.path())
        .args(["show", ".", "wdi", "gdp", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINEAGE-010"));
}

#[test]
fn test_show_missing_config_file_fails() {
    let dir = dataset();
    lineage(dir.path())
        .args([
            "show", ".", "ghe", "dalys", "--format", "text", "--config", "nope.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINEAGE-031"));
}

#[test]
fn test_show_reads_direction_from_workspace_config() {
    let dir = dataset();
    fs::write(dir.path().join("lineage.toml"), "[render]\ndirection = \"LR\"\n").unwrap();
    lineage(dir.path())
        .args(["show", ".", "ghe", "dalys", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph LR;\n"));
}

#[test]
fn test_list_prints_entry_counts() {
    let dir = dataset();
    lineage(dir.path())
        .args(["list", ".", "ghe"])
        .assert()
        .success()
        .stdout("country\t0\ndalys\t2\n");
}

#[test]
fn test_list_json() {
    let dir = dataset();
    let output = lineage(dir.path())
        .args(["list", ".", "ghe", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[1]["indicator"], "dalys");
    assert_eq!(parsed[1]["entries"], 2);
    assert_eq!(parsed[1]["title"], "DALYs");
}

#[test]
fn test_check_reports_counts() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dalys.yml"),
        "- variable: dalys\n  parents: [data/meadow/who/ghe]\n  operation: load\n  target: dalys#1\n- variable: dalys_total\n  parents: [dalys#1]\n  operation: rename\n  target: dalys_total#1\n",
    )
    .unwrap();

    lineage(dir.path())
        .args(["check", "dalys.yml"])
        .assert()
        .success()
        .stdout("dalys.yml: 2 entries (1 after collapsing)\n");
}

#[test]
fn test_check_rejects_duplicates() {
    let dir = TempDir::new().unwrap();
    let entry = r#"{"variable": "x", "parents": [], "operation": "load", "target": "x#1"}"#;
    fs::write(dir.path().join("x.json"), format!("[{entry}, {entry}]")).unwrap();

    lineage(dir.path())
        .args(["check", "x.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINEAGE-001"))
        .stderr(predicate::str::contains("variable 'x'"));
}

#[test]
fn test_check_reports_missing_field() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("x.json"),
        r#"[{"variable": "x", "parents": [], "operation": "load"}]"#,
    )
    .unwrap();

    lineage(dir.path())
        .args(["check", "x.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "record 0 is missing required field 'target'",
        ));
}

#[test]
fn test_help_uses_lineage_template() {
    lineage(Path::new("."))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LINEAGE COMMANDS"))
        .stdout(predicate::str::contains("show"));
}
