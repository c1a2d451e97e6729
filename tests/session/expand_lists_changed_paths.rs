use crate::common::REPO;
use crate::common::command::{add_line, run_session};
use predicates::prelude::predicate;

#[test]
fn expand_lists_changed_paths() -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(
        REPO,
        "r12",
        "alice",
        &["M:/trunk/src/lib.rs", "A:/trunk/README", "R:/trunk/build.rs"],
        "Rework the build",
    );
    let expand = format!("expand {REPO} 12");

    run_session(&[&add, &expand])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "▾ {REPO}  1 revision\n\
             \x20 ▾ Rework the build  r12, alice, 2024-01-15 09:30\n\
             \x20     M lib.rs  /trunk/src\n\
             \x20     A README  /trunk\n\
             \x20     R build.rs  /trunk\n"
        )));

    Ok(())
}

#[test]
fn collapse_hides_changed_paths_again() -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(REPO, "4", "bob", &["M:/a.rs"], "Touch");
    let expand = format!("expand {REPO} 4");
    let collapse = format!("collapse {REPO} 4");

    run_session(&[&add, &expand, &collapse])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "▾ {REPO}  1 revision\n  ▸ Touch  r4, bob, 2024-01-15 09:30\n"
        )));

    Ok(())
}
