use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn stdin_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo_bin!("ductus-cli"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn kern_fixture_writes_one_line_per_context() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("text").join("headings.html");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let expected = fs::read_to_string(&fixture)
        .expect("read fixture")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count();

    let output = Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .current_dir(&root)
        .args(["kern", fixture.to_string_lossy().as_ref()])
        .output()
        .expect("run ductus-cli");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), expected);
    assert!(stdout.lines().all(|l| l.contains(r#"<span class="kern-"#)));
}

#[test]
fn kern_reads_stdin_by_default() {
    let output = stdin_cmd().write_stdin("VA\n").output().expect("run");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        concat!(
            r#"<span class="kern-1" style="letter-spacing: -0.640px">V</span>"#,
            r#"<span class="kern-2" style="letter-spacing: 0px">A</span>"#,
            "\n"
        )
    );
}

#[test]
fn format_flags_override_defaults() {
    let output = stdin_cmd()
        .args(["--font-size", "1", "--unit", "em", "--precision", "2"])
        .args(["--class-prefix", "k", "-"])
        .write_stdin("VA")
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(
        stdout.starts_with(r#"<span class="k1" style="letter-spacing: -0.04em">V</span>"#),
        "unexpected output: {stdout}"
    );
}

#[test]
fn no_tag_classes_leaves_tags_verbatim() {
    let annotated = stdin_cmd().write_stdin("<b>ab</b>").output().expect("run");
    assert!(stdout_of(&annotated).starts_with(r#"<b class="kern-tag-1"><span"#));

    let plain = stdin_cmd()
        .arg("--no-tag-classes")
        .write_stdin("<b>ab</b>")
        .output()
        .expect("run");
    assert!(stdout_of(&plain).starts_with("<b><span"));
}

#[test]
fn config_file_is_merged_over_defaults() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("config.json");
    fs::write(&config, r#"{"classPrefix":"cfg-","unit":"rem"}"#).expect("write config");

    let output = stdin_cmd()
        .args(["--config", config.to_string_lossy().as_ref()])
        .write_stdin("ab")
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains(r#"class="cfg-1""#), "{stdout}");
    assert!(stdout.contains("rem\">"), "{stdout}");
}

#[test]
fn out_flag_writes_to_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.html");

    stdin_cmd()
        .args(["kern", "--out", out.to_string_lossy().as_ref()])
        .write_stdin("ab\n")
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("read out");
    assert!(html.starts_with(r#"<span class="kern-1""#));
}

#[test]
fn sequence_prints_json_per_context() {
    let output = stdin_cmd()
        .arg("sequence")
        .write_stdin("ab\n\n<i>c</i>\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("json");
    let sequences = json.as_array().expect("array");
    assert_eq!(sequences.len(), 2);
    assert_eq!(sequences[0]["context"], 0);
    assert_eq!(sequences[1]["context"], 1);
    assert_eq!(sequences[0]["pairs"].as_array().map(Vec::len), Some(1));
    assert_eq!(sequences[1]["nodes"].as_array().map(Vec::len), Some(3));
}

#[test]
fn stats_counts_repeated_pairs() {
    let output = stdin_cmd()
        .args(["stats", "--pretty"])
        .write_stdin("aaa\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("json");
    let pairs = json["pairs"].as_array().expect("pairs");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0]["text"], "aa");
    assert_eq!(pairs[0]["count"], 2);
    assert_eq!(pairs[0]["letterSpace"], "-0.280px");
}

#[test]
fn catalog_dumps_builtin_tables() {
    let output = Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .arg("catalog")
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["strokes"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["pairs"].as_array().map(Vec::len), Some(36));
    assert!(
        json["characters"]
            .as_array()
            .is_some_and(|c| c.len() > 100)
    );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .arg("--bogus")
        .assert()
        .code(2);

    Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .args(["--font-size", "-3"])
        .assert()
        .code(2);
}

#[test]
fn invalid_catalog_fails_with_error_exit() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let catalog = tmp.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"strokes":[{"code":"|","name":"vertical","weight":0.5}],
            "characters":[{"glyph":"x","before":"|","after":"?"}]}"#,
    )
    .expect("write catalog");

    Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .args(["catalog", "--catalog", catalog.to_string_lossy().as_ref()])
        .assert()
        .code(1);
}

#[test]
fn missing_input_file_fails_with_error_exit() {
    Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .arg("does-not-exist.html")
        .assert()
        .code(1);
}

#[test]
fn catalog_dump_loads_back_as_catalog() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let catalog = tmp.path().join("catalog.json");

    Command::new(assert_cmd::cargo_bin!("ductus-cli"))
        .args(["catalog", "--out", catalog.to_string_lossy().as_ref()])
        .assert()
        .success();

    let output = stdin_cmd()
        .args(["--catalog", catalog.to_string_lossy().as_ref()])
        .write_stdin("VA")
        .output()
        .expect("run");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("-0.640px"));
}
