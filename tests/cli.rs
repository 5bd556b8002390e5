//! End-to-end tests for the xurl binary
//!
//! Every input here is a local file (or an unreachable loopback URL), so the
//! tests never need real network access.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn xurl() -> Command {
    Command::cargo_bin("xurl").unwrap()
}

fn write_page(dir: &TempDir, name: &str, html: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, html).unwrap();
    path.to_string_lossy().into_owned()
}

// The summary is the last `n` newline-terminated lines of stdout; transient
// "\r" frames before them are dropped
fn summary_lines(stdout: &[u8], n: usize) -> Vec<String> {
    let text = String::from_utf8_lossy(stdout);
    let lines: Vec<String> = text
        .lines()
        .map(|line| line.rsplit('\r').next().unwrap_or("").to_string())
        .collect();
    lines[lines.len() - n..].to_vec()
}

#[test]
fn test_no_arguments_fails() {
    xurl()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No URLs provided. Stopping script."));
}

#[test]
fn test_help() {
    xurl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL_OR_FILE"));
}

#[test]
fn test_page_without_links_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "sample.html", "<html><body>plain</body></html>");

    let output = xurl().arg(&page).assert().success().get_output().clone();
    assert_eq!(summary_lines(&output.stdout, 1), vec![format!("{} 0", page)]);
}

#[test]
fn test_one_summary_line_per_token_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_page(&dir, "first.html", "<p>nothing</p>");
    let internal = write_page(
        &dir,
        "sample.html",
        r#"<a href="http://sample.com/x">home</a><a href="/about">about</a>"#,
    );
    let missing = dir.path().join("missing.html").to_string_lossy().into_owned();

    let output = xurl()
        .args([&first, &missing, &internal])
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        summary_lines(&output.stdout, 3),
        vec![
            format!("{} 0", first),
            format!("{} 0", missing),
            format!("{} 0", internal),
        ]
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Error opening file {}. File may not exist", missing)));
}

#[test]
fn test_empty_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_page(&dir, "empty.html", "");

    xurl()
        .arg(&empty)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{} Invalid HTML. Unable to parse", empty)))
        .stdout(predicate::str::ends_with(format!("{} 0\n", empty)));
}

#[test]
fn test_unreachable_external_link_prints_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(
        &dir,
        "sample.html",
        r#"<a href="http://127.0.0.1:1/gone">gone</a>"#,
    );

    xurl()
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid URL: http://127.0.0.1:1/gone"))
        .stdout(predicate::str::ends_with(format!("{} 0\n", page)));
}

#[test]
fn test_bare_file_name_is_treated_as_url() {
    // No directory part, so it goes down the URL path and fails to fetch
    xurl()
        .arg("page.html")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error opening page.html. URL syntax maybe wrong"))
        .stdout(predicate::str::ends_with("page.html 0\n"));
}

#[test]
fn test_progress_bar_is_drawn_when_piped() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(
        &dir,
        "sample.html",
        r#"<a href="http://127.0.0.1:1/gone">gone</a>"#,
    );

    let output = xurl().arg(&page).assert().success().get_output().clone();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains(&format!("Progress on {} : [", page)));
    assert!(stdout.contains("] 1/1\r"));
    assert_eq!(summary_lines(&output.stdout, 1), vec![format!("{} 0", page)]);
}

#[test]
fn test_directory_token_reports_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let token = format!("{}/", dir.path().display());

    xurl()
        .arg(&token)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Error opening file {}. File may not exist",
            token
        )))
        .stdout(predicate::str::ends_with(format!("{} 0\n", token)));
}
