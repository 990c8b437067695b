//! End-to-end tests for the pyblock binary.

use std::process::Command;

const MANIFEST: &str = r#"
[[declarations]]
kind = "enum"
name = "Color"

[[declarations.members]]
name = "RED"
value = '"red"'

[[declarations]]
kind = "union"
name = "Shape"
content = "Circle, Square"
"#;

fn pyblock() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pyblock"))
}

#[test]
fn test_render_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pyblock.toml");
    std::fs::write(&config, MANIFEST).unwrap();

    let output = pyblock()
        .args(["render", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "class Color(Enum):\n    RED = \"red\"\n\n__GQL_CODEGEN_Color__ = Color\n\n\
         Shape = Union[Circle, Square]\n__GQL_CODEGEN_Shape__ = Shape\n"
    );
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pyblock.toml");
    let out = dir.path().join("types.py");
    std::fs::write(&config, MANIFEST).unwrap();

    let status = pyblock()
        .args(["render", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .status()
        .unwrap();

    assert!(status.success());
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.ends_with("__GQL_CODEGEN_Shape__ = Shape\n"));
}

#[test]
fn test_check_reports_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pyblock.toml");
    std::fs::write(&config, MANIFEST).unwrap();

    let output = pyblock()
        .args(["check", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2 declarations"));
    assert!(stdout.contains("enum: 1"));
    assert!(stdout.contains("union: 1"));
}

#[test]
fn test_invalid_manifest_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pyblock.toml");
    std::fs::write(
        &config,
        "[[declarations]]\nkind = \"plain\"\nname = \"User\"\n\n[[declarations.members]]\nname = \"A\"\nvalue = \"1\"\n",
    )
    .unwrap();

    let output = pyblock()
        .args(["check", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not an enum"));
}
