//! Unit-тесты отчета `simple`.

use regex::Regex;

use super::super::run_simple;
use super::super::simple::major_minor;

fn run() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_simple(&mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).to_string(),
        String::from_utf8_lossy(&err).to_string(),
    )
}

#[test]
fn report_has_exactly_three_lines_and_exit_zero() {
    let (code, out, err) = run();
    assert_eq!(code, 0);
    assert_eq!(out.lines().count(), 3);
    assert!(err.is_empty());
}

#[test]
fn first_line_is_the_greeting() {
    let (_code, out, _err) = run();
    assert_eq!(out.lines().next().unwrap(), "Hello from Rust script");
}

#[test]
fn version_line_has_major_minor_shape() {
    let (_code, out, _err) = run();
    let line = out.lines().nth(1).unwrap();
    let re = Regex::new(r"^Fixture version: \d+\.\d+$").unwrap();
    assert!(re.is_match(line), "unexpected version line: {line}");
}

#[test]
fn directory_line_matches_process_cwd() {
    let (_code, out, _err) = run();
    let line = out.lines().nth(2).unwrap();
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(line, format!("Current directory: {}", cwd.display()));
}

#[test]
fn major_minor_drops_patch_component() {
    assert_eq!(major_minor("0.1.0"), "0.1");
    assert_eq!(major_minor("12.34.56"), "12.34");
}

#[test]
fn major_minor_keeps_short_versions_intact() {
    assert_eq!(major_minor("1.2"), "1.2");
    assert_eq!(major_minor("7"), "7");
}

#[test]
fn major_minor_ignores_prerelease_suffix() {
    assert_eq!(major_minor("1.2.3-rc.1"), "1.2");
}
