use std::process::{Command, Output};

fn tinyc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tinyc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_parse_success() {
    let output = tinyc(&["parse", &fixture("counter.tokens")]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "(statements (int c) (= c 0) (if (== c 0) (statements (= c (+ c 1)))))\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_check_success() {
    let path = fixture("counter.tokens");
    let output = tinyc(&["check", &path]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        format!("OK: {path}\n")
    );
}

#[test]
fn test_syntax_error_exits_with_diagnostic() {
    let path = fixture("missing_semicolon.tokens");
    let output = tinyc(&["parse", &path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        format!("{path}: Syntax error at token 2: Expected ';' after variable declaration, found ''\n")
    );
}

#[test]
fn test_listing_error_exits_with_diagnostic() {
    let output = tinyc(&["check", &fixture("bad_kind.tokens")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Listing error at line 2"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_exits_with_diagnostic() {
    let output = tinyc(&["parse", &fixture("does_not_exist.tokens")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error reading "));
}
