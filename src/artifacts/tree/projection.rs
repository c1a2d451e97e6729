//! Lazy tree view over the revision cache
//!
//! Nothing here is stored: each call walks the cache and builds the nodes
//! it was asked for, one level at a time. The tree can therefore never
//! drift from the cache, whatever mutations happened in between.

use crate::areas::revision_cache::RevisionCache;
use crate::artifacts::log::repository_key::RepositoryKey;
use crate::artifacts::log::revision::Revision;
use crate::artifacts::tree::display_options::DisplayOptions;
use crate::artifacts::tree::format;
use crate::artifacts::tree::node::{CommitNode, Node, NodeKey, PathNode, RepoNode};
use crate::artifacts::tree::tree_item::{Collapsible, Icon, TreeAction, TreeItem};
use derive_new::new;
use tracing::trace;

#[derive(Debug, Clone, Copy, new)]
pub struct TreeProjection<'c> {
    cache: &'c RevisionCache,
    options: &'c DisplayOptions,
}

impl<'c> TreeProjection<'c> {
    /// Children of `node`, or the root level for `None`
    pub fn children(&self, node: Option<&Node<'c>>) -> Vec<Node<'c>> {
        let children: Vec<Node<'c>> = match node {
            None => self
                .cache
                .repositories()
                .map(|repo_key| Node::Repo(RepoNode::new(repo_key)))
                .collect(),
            Some(Node::Repo(repo)) => self
                .cache
                .entries(repo.repo_key())
                .map(|entry| Node::Commit(CommitNode::new(entry, *repo)))
                .collect(),
            Some(Node::Commit(commit)) => commit
                .entry()
                .paths()
                .iter()
                .map(|change| Node::Path(PathNode::new(change, *commit)))
                .collect(),
            Some(Node::Path(_)) | Some(Node::Raw(_)) => Vec::new(),
        };

        trace!(count = children.len(), "computed tree children");
        children
    }

    /// Row descriptor of `node`
    pub fn display(&self, node: &Node<'c>) -> TreeItem<'c> {
        match node {
            Node::Repo(repo) => self.repo_item(*repo),
            Node::Commit(commit) => self.commit_item(*commit),
            Node::Path(path) => self.path_item(*path),
            Node::Raw(raw) => raw.item().clone(),
        }
    }

    pub fn repo_node(&self, repo_key: &RepositoryKey) -> Option<RepoNode<'c>> {
        self.cache
            .repositories()
            .find(|key| *key == repo_key)
            .map(RepoNode::new)
    }

    pub fn commit_node(
        &self,
        repo_key: &RepositoryKey,
        revision: &Revision,
    ) -> Option<CommitNode<'c>> {
        let repo = self.repo_node(repo_key)?;
        self.cache
            .entry(repo.repo_key(), revision)
            .map(|entry| CommitNode::new(entry, repo))
    }

    pub fn path_node(
        &self,
        repo_key: &RepositoryKey,
        revision: &Revision,
        path: &str,
    ) -> Option<PathNode<'c>> {
        let commit = self.commit_node(repo_key, revision)?;
        commit
            .entry()
            .paths()
            .iter()
            .find(|change| change.path() == path)
            .map(|change| PathNode::new(change, commit))
    }

    /// Re-derive the node `key` identifies, if it is still cached
    pub fn resolve(&self, key: &NodeKey) -> Option<Node<'c>> {
        match key {
            NodeKey::Repo(repo_key) => self.repo_node(repo_key).map(Node::Repo),
            NodeKey::Commit(repo_key, revision) => {
                self.commit_node(repo_key, revision).map(Node::Commit)
            }
            NodeKey::Path(repo_key, revision, path) => {
                self.path_node(repo_key, revision, path).map(Node::Path)
            }
        }
    }

    fn repo_item(&self, repo: RepoNode<'c>) -> TreeItem<'c> {
        let count = self.cache.entries(repo.repo_key()).count();
        let noun = if count == 1 { "revision" } else { "revisions" };

        TreeItem::new(
            repo.repo_key().display_name().to_string(),
            self.icon("repo"),
            Collapsible::Expanded,
        )
        .with_description(format!("{count} {noun}"))
        .with_tooltip(repo.repo_key().to_string())
    }

    fn commit_item(&self, commit: CommitNode<'c>) -> TreeItem<'c> {
        let entry = commit.entry();

        TreeItem::new(
            format::commit_label(entry, self.options),
            self.icon("commit"),
            Collapsible::Collapsed,
        )
        .with_description(format::commit_description(entry, self.options))
        .with_tooltip(format::commit_tooltip(entry))
    }

    fn path_item(&self, path: PathNode<'c>) -> TreeItem<'c> {
        let change = path.change();

        TreeItem::new(
            change.file_name().to_string(),
            Icon::for_action(change.action()),
            Collapsible::None,
        )
        .with_description(change.parent_dir().to_string())
        .with_tooltip(format::path_tooltip(change))
        .with_action(TreeAction::OpenDiff(path))
    }

    fn icon(&self, name: &'static str) -> Icon {
        Icon::named(name).unwrap_or_else(|| unreachable!("icon {name} is not registered"))
    }
}
