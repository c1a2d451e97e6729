use crate::common::command::{add_line, run_session};
use crate::common::{DATE, REPO};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::single_revision(&["5"], "5")]
#[case::whole_repository(&["5", "7"], "")]
fn removing_last_revision_removes_repository(
    #[case] revisions: &[&str],
    #[case] removed: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines: Vec<String> = revisions
        .iter()
        .map(|revision| add_line(REPO, revision, "alice", &[], "Work"))
        .collect();
    lines.push(format!("add svn://host/other 1 --date {DATE} -- Keep"));
    lines.push(format!("remove {REPO} {removed}"));
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

    run_session(&lines)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "▾ svn://host/other  1 revision\n  ▸ Keep  r1, (no author), 2024-01-15 09:30\n",
        ));

    Ok(())
}

#[test]
fn remove_all_drops_every_revision_of_a_repository() -> Result<(), Box<dyn std::error::Error>> {
    let five = add_line(REPO, "5", "alice", &[], "Five");
    let seven = add_line(REPO, "7", "bob", &[], "Seven");
    let remove_all = format!("remove-all {REPO}");

    run_session(&[&five, &seven, &remove_all])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("  No revisions added\n"));

    Ok(())
}
