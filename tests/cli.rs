use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn freedraw_cmd() -> Command {
    Command::cargo_bin("freedraw").expect("binary exists")
}

fn write_script(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("gestures.json");
    std::fs::write(&path, json).unwrap();
    path
}

const CORNER_SCRIPT: &str = r##"{
    "actions": [
        { "type": "color", "color": "#ff0000" },
        { "type": "down", "x": 10, "y": 10 },
        { "type": "move", "x": 20, "y": 10 },
        { "type": "move", "x": 20, "y": 20 },
        { "type": "up" }
    ]
}"##;

#[test]
fn freedraw_help_prints_usage() {
    freedraw_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing canvas with pen, eraser, undo and PNG export",
        ));
}

#[test]
fn no_subcommand_prints_overview() {
    freedraw_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("freedraw replay <SCRIPT>"));
}

#[test]
fn replay_writes_canvas_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), CORNER_SCRIPT);
    let out = temp.path().join("out");

    freedraw_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .arg("--output-dir")
        .arg(&out)
        .args(["--width", "64", "--height", "48"])
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas.png"));

    let png = std::fs::read(out.join("canvas.png")).unwrap();
    let surface = cairo::ImageSurface::create_from_png(&mut png.as_slice()).unwrap();
    assert_eq!((surface.width(), surface.height()), (64, 48));
}

#[test]
fn replay_uses_config_file() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), CORNER_SCRIPT);
    let out = temp.path().join("from-config");
    let config = temp.path().join("freedraw.toml");
    std::fs::write(
        &config,
        format!(
            "[canvas]\nwidth = 32\nheight = 24\n\n[export]\ndirectory = {:?}\n",
            out.display().to_string()
        ),
    )
    .unwrap();

    freedraw_cmd()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg(&script)
        .assert()
        .success();

    let png = std::fs::read(out.join("canvas.png")).unwrap();
    let surface = cairo::ImageSurface::create_from_png(&mut png.as_slice()).unwrap();
    assert_eq!((surface.width(), surface.height()), (32, 24));
}

#[test]
fn replay_rejects_out_of_range_canvas_size() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), CORNER_SCRIPT);
    let out = temp.path().join("never-created");

    for width in ["0", "5", "9000"] {
        freedraw_cmd()
            .env("XDG_CONFIG_HOME", temp.path())
            .arg("replay")
            .arg(&script)
            .arg("--output-dir")
            .arg(&out)
            .args(["--width", width])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--width"));
    }

    assert!(!out.exists());
}

#[test]
fn replay_rejects_malformed_script() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), r#"{"actions": [{"type": "wiggle"}]}"#);

    freedraw_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));

    assert!(!temp.path().join("canvas.png").exists());
}

#[test]
fn replay_reports_missing_script() {
    let temp = TempDir::new().unwrap();

    freedraw_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));
}
