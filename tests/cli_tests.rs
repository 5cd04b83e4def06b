mod common;
use common::{tdy, temp_out, temp_state, write_sample_csv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_load_then_preview_inventory() {
    let state = temp_state("load_preview");
    let csv = write_sample_csv("load_preview");

    tdy()
        .args(["--state", &state, "load", &csv])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 4 records"));

    tdy()
        .args(["--state", &state, "preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cover"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("January 6, 2025"));
}

#[test]
fn test_unsupported_extension_reports_error() {
    let state = temp_state("bad_ext");
    tdy()
        .args(["--state", &state, "load", "tasks.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_invalid_link_rejected_without_fetching() {
    let state = temp_state("bad_link");
    tdy()
        .args(["--state", &state, "fetch", "https://example.com/data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid spreadsheet link"));
}

#[test]
fn test_build_writes_document_model_json() {
    let state = temp_state("build_json");
    let csv = write_sample_csv("build_json");
    let out = temp_out("build_json", "json");

    tdy()
        .args(["--state", &state, "load", &csv])
        .assert()
        .success();

    tdy()
        .args([
            "--state", &state, "user", "--name", "Jane Doe", "--id-no", "21BCS123",
        ])
        .assert()
        .success();

    tdy()
        .args(["--state", &state, "build", "--out", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document model written"));

    let content = fs::read_to_string(&out).expect("read document model");
    assert!(content.contains("\"page\": \"cover\""));
    assert!(content.contains("Jane Doe"));
    // Holiday and leave rows end up on the summary page
    assert!(content.contains("\"page\": \"summary\""));
    assert!(content.contains("HOLIDAY"));
    // Markdown made it through compilation with resolved faces
    assert!(content.contains("Helvetica-Bold"));
}

#[test]
fn test_build_refuses_overwrite_without_force() {
    let state = temp_state("build_force");
    let csv = write_sample_csv("build_force");
    let out = temp_out("build_force", "json");

    tdy()
        .args(["--state", &state, "load", &csv])
        .assert()
        .success();

    fs::write(&out, "occupied").expect("pre-create output");

    tdy()
        .args(["--state", &state, "build", "--out", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tdy()
        .args(["--state", &state, "build", "--out", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_edit_rewrites_one_record_and_reclassifies() {
    let state = temp_state("edit_record");
    let csv = write_sample_csv("edit_record");

    tdy()
        .args(["--state", &state, "load", &csv])
        .assert()
        .success();

    // Sample has 2 content pages; rewrite the second one
    tdy()
        .args(["--state", &state, "edit", "2", "Completely new notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated record"));

    tdy()
        .args(["--state", &state, "preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completely new notes"));

    // Rewriting it as a holiday removes it from the content stream
    tdy()
        .args(["--state", &state, "edit", "2", "HOLIDAY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("content pages now: 1"));
}

#[test]
fn test_edit_out_of_range_page() {
    let state = temp_state("edit_range");
    let csv = write_sample_csv("edit_range");

    tdy()
        .args(["--state", &state, "load", &csv])
        .assert()
        .success();

    tdy()
        .args(["--state", &state, "edit", "9", "whatever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No content page"));
}

#[test]
fn test_first_run_preview_has_cover_only() {
    let state = temp_state("first_run");
    tdy()
        .args(["--state", &state, "preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cover"));
}
