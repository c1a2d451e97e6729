use crate::common::command::run_session;
use predicates::prelude::predicate;

#[test]
fn empty_session_shows_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    run_session(&["# nothing picked yet", "", "tree"])
        .assert()
        .success()
        .stdout(predicate::eq("  No revisions added\n"));

    Ok(())
}

#[test]
fn clearing_brings_placeholder_back() -> Result<(), Box<dyn std::error::Error>> {
    let add = crate::common::command::add_line(crate::common::REPO, "3", "alice", &[], "Init");

    run_session(&[&add, "clear"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("  No revisions added\n"));

    Ok(())
}
