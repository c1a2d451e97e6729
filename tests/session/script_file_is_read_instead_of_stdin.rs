use crate::common::REPO;
use crate::common::command::{add_line, run_revview, script_dir};
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn script_file_is_read_instead_of_stdin(
    script_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = script_dir.child("session.txt");
    script.write_str(&format!(
        "# picked from the log\n{}\ntree\n",
        add_line(REPO, "5", "alice", &[], "Scripted")
    ))?;

    run_revview(&["--script", &script.path().display().to_string()])
        .write_stdin("clear\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "▾ {REPO}  1 revision\n  ▸ Scripted  r5, alice, 2024-01-15 09:30\n"
        )));

    Ok(())
}

#[rstest]
fn missing_script_file_fails(script_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let missing = script_dir.child("missing.txt");

    run_revview(&["--script", &missing.path().display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open script"));

    Ok(())
}
