use crate::common::DATE;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;

#[fixture]
pub fn script_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_revview(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("revview").expect("Failed to find revview binary");
    cmd.env("NO_COLOR", "1");
    for name in [
        "RUST_LOG",
        "REVVIEW_MESSAGE_WIDTH",
        "REVVIEW_DATE_FORMAT",
        "REVVIEW_ICON_ROOT",
    ] {
        cmd.env_remove(name);
    }
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Feed `lines` to a session on stdin
pub fn run_session(lines: &[&str]) -> Command {
    let mut cmd = run_revview(&[]);
    cmd.write_stdin(format!("{}\n", lines.join("\n")));
    cmd
}

/// `add` line for a revision touching `paths`
pub fn add_line(repo: &str, revision: &str, author: &str, paths: &[&str], message: &str) -> String {
    let paths: String = paths.iter().map(|path| format!(" --path {path}")).collect();
    format!("add {repo} {revision} --author {author} --date {DATE}{paths} -- {message}")
}
