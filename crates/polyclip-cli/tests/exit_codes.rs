use std::path::PathBuf;
use std::process::Command;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

#[test]
fn exit_code_usage_is_1_for_missing_args() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let status = Command::new(bin)
        .args(["replay"])
        .status()
        .expect("run polyclip");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn help_exits_cleanly() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let status = Command::new(bin)
        .args(["--help"])
        .status()
        .expect("run polyclip --help");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn exit_code_input_is_2_for_missing_file() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");

    let status = Command::new(bin)
        .args(["replay", missing.to_string_lossy().as_ref()])
        .status()
        .expect("run polyclip replay");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_input_is_2_for_invalid_yaml() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("bad.yaml");
    std::fs::write(&bad, "events: [1, 2,").expect("write bad yaml");

    let status = Command::new(bin)
        .args(["replay", bad.to_string_lossy().as_ref()])
        .status()
        .expect("run polyclip replay");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_input_is_2_for_unknown_config_key() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "drag_throttle: 5\n").expect("write config");
    let script = workspace_root().join("fixtures/overlap_squares.yaml");

    let status = Command::new(bin)
        .args([
            "replay",
            script.to_string_lossy().as_ref(),
            "--config",
            config.to_string_lossy().as_ref(),
        ])
        .status()
        .expect("run polyclip replay");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_processing_is_3_for_rejected_polygon() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.json");
    std::fs::write(
        &input,
        r#"{"primary": [[[0, 0], [1, 0]]], "clip": [[[0, 0], [1, 0], [1, 1]]]}"#,
    )
    .expect("write input");

    let status = Command::new(bin)
        .args(["clip", input.to_string_lossy().as_ref()])
        .status()
        .expect("run polyclip clip");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn exit_code_processing_is_3_for_bad_drag_target() {
    let bin = env!("CARGO_BIN_EXE_polyclip");
    let dir = tempfile::tempdir().expect("tempdir");
    let script = dir.path().join("script.yaml");
    std::fs::write(&script, "events:\n  - drag_end: { target: 0, x: 1, y: 1 }\n")
        .expect("write script");

    let status = Command::new(bin)
        .args(["replay", script.to_string_lossy().as_ref()])
        .status()
        .expect("run polyclip replay");
    assert_eq!(status.code(), Some(3));
}
