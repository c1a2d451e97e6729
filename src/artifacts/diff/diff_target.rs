use crate::artifacts::log::log_entry::ChangeAction;
use crate::artifacts::log::repository_key::RepositoryKey;
use crate::artifacts::log::revision::Revision;
use crate::artifacts::tree::node::PathNode;
use derive_new::new;

const NULL_PATH: &str = "/dev/null";

/// One side of a diff: a path at a revision
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffSide {
    pub(crate) path: String,
    pub(crate) revision: Revision,
}

impl DiffSide {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    /// Location understood by the version-control client, `<url>@<rev>`
    pub fn location(&self, repo_key: &RepositoryKey) -> String {
        format!("{}@{}", repo_key.join(&self.path), self.revision)
    }
}

/// What the diff opener needs to show one changed path
///
/// A missing side means the file did not exist there: no left side for a
/// plain addition, no right side for a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget<'c> {
    pub(crate) repo_key: &'c RepositoryKey,
    pub(crate) path: &'c str,
    pub(crate) left: Option<DiffSide>,
    pub(crate) right: Option<DiffSide>,
}

impl<'c> DiffTarget<'c> {
    pub fn from_path_node(node: &PathNode<'c>) -> Self {
        let change = node.change();
        let revision = node.revision();
        let path = change.path();

        let previous = || {
            revision
                .previous()
                .map(|previous| DiffSide::new(path.to_string(), previous))
        };
        let copied = || {
            change
                .copy_from()
                .map(|source| DiffSide::new(source.path.clone(), source.revision.clone()))
        };
        let current = || Some(DiffSide::new(path.to_string(), revision.clone()));

        let (left, right) = match change.action() {
            ChangeAction::Modified => (previous(), current()),
            ChangeAction::Added => (copied(), current()),
            ChangeAction::Deleted => (previous(), None),
            ChangeAction::Replaced => (copied().or_else(previous), current()),
        };

        DiffTarget {
            repo_key: node.repo_key(),
            path,
            left,
            right,
        }
    }

    pub fn repo_key(&self) -> &'c RepositoryKey {
        self.repo_key
    }

    pub fn path(&self) -> &'c str {
        self.path
    }

    pub fn left(&self) -> Option<&DiffSide> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&DiffSide> {
        self.right.as_ref()
    }

    /// Editor title, e.g. `main.rs (r4 ↔ r5)`
    pub fn title(&self) -> String {
        let file_name = self.path.rsplit('/').next().unwrap_or(self.path);
        let side = |side: Option<&DiffSide>| match side {
            Some(side) => format!("r{}", side.revision),
            None => "none".to_string(),
        };
        format!(
            "{} ({} ↔ {})",
            file_name,
            side(self.left()),
            side(self.right())
        )
    }

    fn side_location(&self, side: Option<&DiffSide>) -> String {
        side.map(|side| side.location(self.repo_key))
            .unwrap_or_else(|| NULL_PATH.to_string())
    }
}

impl std::fmt::Display for DiffTarget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- {}", self.side_location(self.left()))?;
        write!(f, "+++ {}", self.side_location(self.right()))
    }
}
