use crate::areas::viewer::RevisionViewer;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::tree::node::NodeKey;
use crate::artifacts::tree::tree_item::TreeAction;
use anyhow::{Context, bail};
use std::io::Write;
use tracing::info;

impl RevisionViewer {
    /// Run the open-diff action bound to a changed path row
    ///
    /// The host has no diff editor here, so the target is written out as a
    /// unified-diff header naming both sides.
    pub fn open_diff(&self, key: &NodeKey) -> anyhow::Result<()> {
        let tree = self.tree();
        let node = tree
            .resolve(key)
            .with_context(|| format!("{} is not in the viewer", describe(key)))?;

        let Some(action) = tree.display(&node).action else {
            bail!("{} has no diff to open", describe(key));
        };
        let TreeAction::OpenDiff(path) = action;

        let target = DiffTarget::from_path_node(&path);
        info!(command = action.command_id(), title = %target.title(), "opening diff");

        let mut writer = self.writer();
        writeln!(writer, "Opening {}", target.title())?;
        writeln!(writer, "{}", target)?;

        Ok(())
    }
}

pub(crate) fn describe(key: &NodeKey) -> String {
    match key {
        NodeKey::Repo(repo_key) => format!("repository {repo_key}"),
        NodeKey::Commit(repo_key, revision) => format!("revision r{revision} of {repo_key}"),
        NodeKey::Path(repo_key, revision, path) => {
            format!("path {path} in r{revision} of {repo_key}")
        }
    }
}
