//! Integration tests for the mindmap-ascii binary.
//!
//! These tests run the compiled binary with stdin input and check stdout,
//! stderr and the files it writes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_mindmap-ascii");

/// Run the binary with the given stdin input and CLI args.
fn run(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(input.as_bytes()).ok();
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

/// Run and require success. Returns stdout.
fn run_ok(input: &str, args: &[&str]) -> String {
    let output = run(input, args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

/// A scratch path unique to this test process.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mindmap-ascii-{}-{name}", std::process::id()))
}

const MAP_JSON: &str = r##"{
    "nodes": [{"id": "Idea", "color": "#ff0000", "size": 600}, {"id": "Task"}],
    "links": [{"source": "Idea", "target": "Task"}]
}"##;

// ─── flow ───────────────────────────────────────────────────────────────────

#[test]
fn test_flow_chain() {
    let out = run_ok("A\n  B\n", &["flow"]);
    let expected = "\
┌───┐
│ A │
└─┬─┘
  │
  │
  ▼
┌───┐
│ B │
└───┘
";
    assert_eq!(out, expected);
}

#[test]
fn test_flow_ascii_flag() {
    let out = run_ok("A\n  B\n", &["flow", "--ascii"]);
    assert!(!out.contains('┌'), "Unicode char found in --ascii output");
    assert!(out.contains("+---+"));
    assert!(out.contains('v'));
}

#[test]
fn test_flow_padding() {
    let out = run_ok("A\n", &["flow", "--padding", "3"]);
    assert_eq!(out, "┌───────┐\n│   A   │\n└───────┘\n");
}

#[test]
fn test_flow_empty_input_prints_nothing() {
    assert_eq!(run_ok("\n\n", &["flow"]), "");
}

#[test]
fn test_flow_svg_format() {
    let out = run_ok("Root\n  Leaf\n", &["flow", "--format", "svg"]);
    assert!(out.starts_with("<svg "));
    assert_eq!(out.matches("<circle").count(), 2);
}

#[test]
fn test_flow_reads_file_and_writes_output() {
    let input = scratch("in.txt");
    let output = scratch("out.svg");
    fs::write(&input, "Root\n  Leaf\n").unwrap();
    let stdout = run_ok(
        "",
        &["flow", input.to_str().unwrap(), "-o", output.to_str().unwrap()],
    );
    assert_eq!(stdout, "");
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(">Leaf</text>"));
    fs::remove_file(input).ok();
    fs::remove_file(output).ok();
}

#[test]
fn test_flow_json_is_refused() {
    let output = run("A\n", &["flow", "--format", "json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("only available for mind maps"));
}

#[test]
fn test_missing_input_file() {
    let output = run("", &["flow", "/definitely/not/here.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: cannot read"));
}

// ─── map ────────────────────────────────────────────────────────────────────

#[test]
fn test_map_text() {
    let out = run_ok(MAP_JSON, &["map"]);
    assert!(out.contains("│ Idea │"));
    assert!(out.contains("│ Task │"));
}

#[test]
fn test_map_json_round_trip() {
    let out = run_ok(MAP_JSON, &["map", "--format", "json"]);
    assert!(out.contains("\n    \"directed\": true"));
    assert!(out.contains("\"size\": 300"));
}

#[test]
fn test_map_rejects_dangling_link() {
    let output = run(
        r#"{"nodes": [], "links": [{"source": "x", "target": "y"}]}"#,
        &["map"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().any(|l| l.starts_with("Error importing JSON:")), "{stderr}");
    assert!(!stderr.contains("error: Error"));
    assert!(stderr.contains("unknown node 'x'"));
}

#[cfg(feature = "png")]
#[test]
fn test_map_png_by_extension() {
    let output = scratch("map.png");
    run_ok(MAP_JSON, &["map", "-o", output.to_str().unwrap()]);
    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
    fs::remove_file(output).ok();
}

// ─── shell ──────────────────────────────────────────────────────────────────

#[test]
fn test_shell_session() {
    let exported = scratch("shell.json");
    let script = format!(
        "node Idea --color red\nnode Task\nedge Idea Task\nexport {}\nquit\n",
        exported.display()
    );
    let out = run_ok(&script, &["shell"]);
    assert!(out.contains("ok: Node 'Idea' added!"));
    assert!(out.contains("ok: Connection from 'Idea' to 'Task' added!"));

    let json = fs::read_to_string(&exported).unwrap();
    assert!(json.contains("\"color\": \"red\""));
    fs::remove_file(exported).ok();
}

#[test]
fn test_shell_load() {
    let file = scratch("load.json");
    fs::write(&file, MAP_JSON).unwrap();
    let out = run_ok("nodes\n", &["shell", "--load", file.to_str().unwrap()]);
    assert!(out.contains("Idea\n"));
    assert!(out.contains("Task\n"));
    fs::remove_file(file).ok();
}

#[test]
fn test_version_flag() {
    let out = run_ok("", &["--version"]);
    assert!(out.starts_with("mindmap-ascii "));
}
