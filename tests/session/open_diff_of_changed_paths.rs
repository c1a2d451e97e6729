use crate::common::command::{add_line, run_session};
use crate::common::{DATE, REPO};
use predicates::prelude::predicate;
use rstest::rstest;

const FILE: &str = "svn://host/repo/trunk/a.rs";

#[rstest]
#[case::modified("M:/trunk/a.rs", "a.rs (r6 ↔ r7)", Some("6"), Some("7"))]
#[case::added("A:/trunk/a.rs", "a.rs (none ↔ r7)", None, Some("7"))]
#[case::deleted("D:/trunk/a.rs", "a.rs (r6 ↔ none)", Some("6"), None)]
fn open_diff_of_changed_paths(
    #[case] change: &str,
    #[case] title: &str,
    #[case] left: Option<&str>,
    #[case] right: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(REPO, "7", "alice", &[change], "Change");
    let diff = format!("diff {REPO} 7 /trunk/a.rs");
    let location = |side: Option<&str>| match side {
        Some(revision) => format!("{FILE}@{revision}"),
        None => "/dev/null".to_string(),
    };
    let (left, right) = (location(left), location(right));

    run_session(&[&add, &diff])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "Opening {title}\n--- {left}\n+++ {right}\n"
        )));

    Ok(())
}

#[test]
fn copied_path_diffs_against_its_source() -> Result<(), Box<dyn std::error::Error>> {
    let add = format!(
        "add {REPO} 9 --date {DATE} --path A:/branches/b/a.rs --copy-from /trunk/a.rs@8 -- Branch"
    );
    let diff = format!("diff {REPO} 9 /branches/b/a.rs");

    run_session(&[&add, &diff])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Opening a.rs (r8 ↔ r9)\n\
             --- svn://host/repo/trunk/a.rs@8\n\
             +++ svn://host/repo/branches/b/a.rs@9\n",
        ));

    Ok(())
}
