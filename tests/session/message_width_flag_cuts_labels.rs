use crate::common::REPO;
use crate::common::command::{add_line, run_revview};
use predicates::prelude::predicate;

#[test]
fn message_width_flag_cuts_labels() -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(REPO, "5", "alice", &[], "Refactor the whole parser");

    run_revview(&["--message-width", "12"])
        .write_stdin(format!("{add}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("  ▸ Refactor th…  r5, alice"));

    Ok(())
}

#[test]
fn date_format_comes_from_the_environment() -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(REPO, "5", "alice", &[], "Fix");

    run_revview(&[])
        .env("REVVIEW_DATE_FORMAT", "%d.%m.%Y")
        .write_stdin(format!("{add}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("  ▸ Fix  r5, alice, 15.01.2024"));

    Ok(())
}

#[test]
fn unusable_date_format_is_rejected_at_startup() -> Result<(), Box<dyn std::error::Error>> {
    run_revview(&[])
        .env("REVVIEW_DATE_FORMAT", "%Q")
        .write_stdin("tree\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid REVVIEW_DATE_FORMAT: %Q"));

    Ok(())
}
