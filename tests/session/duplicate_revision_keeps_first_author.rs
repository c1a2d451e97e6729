use crate::common::REPO;
use crate::common::command::{add_line, run_session};
use fake::Fake;
use fake::faker::name::en::FirstName;
use predicates::prelude::predicate;

#[test]
fn duplicate_revision_keeps_first_author() -> Result<(), Box<dyn std::error::Error>> {
    let first_author: String = FirstName().fake();
    let second_author = format!("{first_author}-again");
    let first = add_line(REPO, "3", &first_author, &[], "Fix");
    let second = add_line(REPO, "3", &second_author, &[], "Fix");

    let output = run_session(&[&first, &second])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("r3, {first_author},")));
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert!(!stdout.contains(&second_author));
    assert!(stdout.ends_with(&format!(
        "▾ {REPO}  1 revision\n  ▸ Fix  r3, {first_author}, 2024-01-15 09:30\n"
    )));

    Ok(())
}
