//! Line-oriented host for the revision viewer
//!
//! Plays the part of the editor: feeds commands to the viewer, keeps the
//! expansion state of the rows it shows, and redraws the tree whenever the
//! viewer reports a change.

pub mod command;

use crate::areas::viewer::RevisionViewer;
use crate::artifacts::core::ChangeListener;
use crate::artifacts::tree::expansion::ExpansionState;
use crate::shell::command::{ShellCommand, node_key, parse_line};
use clap::error::ErrorKind;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub struct Session {
    viewer: RevisionViewer,
    listener: ChangeListener,
    expansion: ExpansionState,
}

impl Session {
    pub fn new(viewer: RevisionViewer) -> Self {
        let listener = viewer.subscribe();

        Session {
            viewer,
            listener,
            expansion: ExpansionState::new(),
        }
    }

    pub fn viewer(&self) -> &RevisionViewer {
        &self.viewer
    }

    /// Run every line of `input`, returning how many lines failed
    ///
    /// A failing line is reported on stderr and the session goes on.
    pub fn run(&mut self, input: impl BufRead) -> anyhow::Result<usize> {
        let mut failures = 0;

        for (number, line) in input.lines().enumerate() {
            let line = line?;
            if let Err(err) = self.run_line(&line) {
                match err.downcast_ref::<clap::Error>() {
                    Some(clap_err)
                        if matches!(
                            clap_err.kind(),
                            ErrorKind::DisplayHelp
                                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                        ) =>
                    {
                        write!(self.viewer.writer(), "{}", clap_err.render())?;
                        continue;
                    }
                    Some(clap_err) => eprint!("{}", clap_err.render()),
                    None => eprintln!("error: {err:#}"),
                }
                warn!(line = number + 1, "command failed");
                failures += 1;
            }
        }

        Ok(failures)
    }

    /// Run one line and redraw the tree if the viewer changed
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<()> {
        let Some(command) = parse_line(line)? else {
            return Ok(());
        };
        debug!(?command, "running shell command");

        let redraw = self.execute(command)?;
        if self.listener.has_changed() || redraw {
            self.refresh()?;
        }

        Ok(())
    }

    /// Returns whether the command asks for a redraw on its own
    fn execute(&mut self, command: ShellCommand) -> anyhow::Result<bool> {
        match command {
            ShellCommand::Add(args) => {
                let (repo_key, entry) = args.to_entry()?;
                self.viewer.add_revision(repo_key, entry);
            }
            ShellCommand::Remove { repo, revision } => {
                let key = node_key(&repo, revision.as_deref(), None)?;
                self.viewer.remove(&key);
            }
            ShellCommand::RemoveAll { repo } => {
                let key = node_key(&repo, None, None)?;
                self.viewer.remove_all(key.repo_key());
            }
            ShellCommand::Clear => self.viewer.clear(),
            ShellCommand::Expand { repo, revision } => {
                self.expansion
                    .expand(node_key(&repo, Some(&revision), None)?);
                return Ok(true);
            }
            ShellCommand::Collapse { repo, revision } => {
                self.expansion
                    .collapse(node_key(&repo, Some(&revision), None)?);
                return Ok(true);
            }
            ShellCommand::Tree => return Ok(true),
            ShellCommand::Inspect {
                repo,
                revision,
                path,
            } => {
                self.viewer
                    .inspect(&node_key(&repo, revision.as_deref(), path.as_deref())?)?;
            }
            ShellCommand::Diff {
                repo,
                revision,
                path,
            } => {
                self.viewer
                    .open_diff(&node_key(&repo, Some(&revision), Some(&path))?)?;
            }
        }

        Ok(false)
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        let tree = self.viewer.tree();
        self.expansion.retain(|key| tree.resolve(key).is_some());

        self.viewer.show_tree(&self.expansion)
    }
}
