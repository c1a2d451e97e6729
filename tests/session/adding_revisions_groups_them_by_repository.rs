use crate::common::command::{add_line, run_session};
use pretty_assertions::assert_eq;

#[test]
fn adding_revisions_groups_them_by_repository() -> Result<(), Box<dyn std::error::Error>> {
    let first = add_line("svn://host/repo", "5", "alice", &["M:/trunk/a.rs"], "First");
    let other = add_line("svn://host/other", "2", "bob", &["A:/b.rs"], "Other");
    let second = add_line("SVN://host/repo/", "7", "carol", &["D:/trunk/c.rs"], "Second");

    let output = run_session(&[&first, &other, &second, "tree"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    // Each add redraws the tree; the last block is the explicit `tree`
    let last_tree: Vec<&str> = stdout.lines().rev().take(5).collect();
    assert_eq!(
        last_tree.into_iter().rev().collect::<Vec<_>>(),
        vec![
            "▾ svn://host/repo  2 revisions",
            "  ▸ First  r5, alice, 2024-01-15 09:30",
            "  ▸ Second  r7, carol, 2024-01-15 09:30",
            "▾ svn://host/other  1 revision",
            "  ▸ Other  r2, bob, 2024-01-15 09:30",
        ]
    );

    Ok(())
}
