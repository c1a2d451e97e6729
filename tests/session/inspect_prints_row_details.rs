use crate::common::REPO;
use crate::common::command::{add_line, run_revview};
use predicates::prelude::predicate;

#[test]
fn inspect_prints_row_details() -> Result<(), Box<dyn std::error::Error>> {
    let add = add_line(REPO, "5", "alice", &["D:/trunk/old.rs"], "Drop old code");

    run_revview(&[])
        .env("REVVIEW_ICON_ROOT", "/opt/icons")
        .write_stdin(format!("{add}\ninspect {REPO} 5 /trunk/old.rs\ninspect {REPO}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "label: old.rs\n\
             description: /trunk\n\
             tooltip:\n\
             \x20 Deleted: /trunk/old.rs\n\
             icon: /opt/icons/light/status-deleted.svg \
             (dark: /opt/icons/dark/status-deleted.svg)\n\
             command: revview.openDiff (Open Diff)\n",
        ))
        .stdout(predicate::str::ends_with(format!(
            "label: {REPO}\ndescription: 1 revision\ntooltip:\n  {REPO}\n\
             icon: /opt/icons/light/repo.svg (dark: /opt/icons/dark/repo.svg)\n"
        )));

    Ok(())
}
