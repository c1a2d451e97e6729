//! Tree nodes derived from the revision cache
//!
//! Nodes are transient: every query builds them fresh from the cache and
//! they borrow from it, so a node cannot outlive the state it was derived
//! from. Children hold their parent by value, which is itself only a set of
//! borrows, so walking up to the repository costs nothing.

use crate::artifacts::log::log_entry::{LogEntry, PathChange};
use crate::artifacts::log::repository_key::RepositoryKey;
use crate::artifacts::log::revision::Revision;
use crate::artifacts::tree::tree_item::TreeItem;
use derive_new::new;

#[derive(Debug, Clone, PartialEq)]
pub enum Node<'c> {
    Repo(RepoNode<'c>),
    Commit(CommitNode<'c>),
    Path(PathNode<'c>),
    Raw(RawNode<'c>),
}

impl<'c> Node<'c> {
    /// Owned identity of the node, stable across refreshes
    ///
    /// Raw nodes have no identity in the cache.
    pub fn key(&self) -> Option<NodeKey> {
        match self {
            Node::Repo(repo) => Some(NodeKey::Repo(repo.repo_key().clone())),
            Node::Commit(commit) => Some(NodeKey::Commit(
                commit.repo_key().clone(),
                commit.revision().clone(),
            )),
            Node::Path(path) => Some(NodeKey::Path(
                path.repo_key().clone(),
                path.revision().clone(),
                path.change().path().to_string(),
            )),
            Node::Raw(_) => None,
        }
    }

    /// Repository the node belongs to, if any
    pub fn repository_key(&self) -> Option<&'c RepositoryKey> {
        match self {
            Node::Repo(repo) => Some(repo.repo_key()),
            Node::Commit(commit) => Some(commit.repo_key()),
            Node::Path(path) => Some(path.repo_key()),
            Node::Raw(_) => None,
        }
    }
}

/// Identity of a node that does not borrow the cache
///
/// Nodes borrow the cache, so a host holds on to keys between refreshes and
/// passes them to mutating commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Repo(RepositoryKey),
    Commit(RepositoryKey, Revision),
    Path(RepositoryKey, Revision, String),
}

impl NodeKey {
    pub fn repo_key(&self) -> &RepositoryKey {
        match self {
            NodeKey::Repo(repo_key)
            | NodeKey::Commit(repo_key, _)
            | NodeKey::Path(repo_key, _, _) => repo_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RepoNode<'c> {
    repo_key: &'c RepositoryKey,
}

impl<'c> RepoNode<'c> {
    pub fn repo_key(&self) -> &'c RepositoryKey {
        self.repo_key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CommitNode<'c> {
    entry: &'c LogEntry,
    parent: RepoNode<'c>,
}

impl<'c> CommitNode<'c> {
    pub fn entry(&self) -> &'c LogEntry {
        self.entry
    }

    pub fn parent(&self) -> RepoNode<'c> {
        self.parent
    }

    pub fn repo_key(&self) -> &'c RepositoryKey {
        self.parent.repo_key()
    }

    pub fn revision(&self) -> &'c Revision {
        self.entry.revision()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PathNode<'c> {
    change: &'c PathChange,
    parent: CommitNode<'c>,
}

impl<'c> PathNode<'c> {
    pub fn change(&self) -> &'c PathChange {
        self.change
    }

    pub fn parent(&self) -> CommitNode<'c> {
        self.parent
    }

    pub fn repo_key(&self) -> &'c RepositoryKey {
        self.parent.repo_key()
    }

    pub fn revision(&self) -> &'c Revision {
        self.parent.revision()
    }
}

/// Leaf wrapping an item that is already fully formed
///
/// Lets collaborators place placeholders or other opaque rows in the tree.
#[derive(Debug, Clone, PartialEq, new)]
pub struct RawNode<'c> {
    item: TreeItem<'c>,
}

impl<'c> RawNode<'c> {
    pub fn item(&self) -> &TreeItem<'c> {
        &self.item
    }
}
