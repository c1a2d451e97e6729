use crate::common::REPO;
use crate::common::command::{add_line, run_session};
use predicates::prelude::predicate;

#[test]
fn invalid_lines_are_reported_and_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let good = add_line(REPO, "5", "alice", &[], "Good");
    let bad_date = format!("add {REPO} 6 --date yesterday -- Bad");
    let bad_action = add_line(REPO, "7", "bob", &["X:/a.rs"], "Bad");

    run_session(&[&bad_date, &good, &bad_action, "launch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid date: yesterday"))
        .stderr(predicate::str::contains("X"))
        .stderr(predicate::str::contains("launch"))
        .stderr(predicate::str::contains("3 command(s) failed"))
        .stdout(predicate::str::ends_with(format!(
            "▾ {REPO}  1 revision\n  ▸ Good  r5, alice, 2024-01-15 09:30\n"
        )));

    Ok(())
}

#[test]
fn diff_of_a_commit_row_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(REPO, "5", "alice", &["M:/a.rs"], "Good");
    let diff = format!("diff {REPO} 6 /a.rs");

    run_session(&[&add, &diff])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "error: path /a.rs in r6 of {REPO} is not in the viewer"
        )));

    Ok(())
}
