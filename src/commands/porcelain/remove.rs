use crate::areas::viewer::RevisionViewer;
use crate::artifacts::log::repository_key::RepositoryKey;
use crate::artifacts::tree::node::NodeKey;

impl RevisionViewer {
    /// Remove whatever `key` points at
    ///
    /// A commit removes that revision (and its repository if it was the
    /// last one), a repository removes the whole group, a path removes
    /// nothing. Missing targets are ignored. Always notifies.
    pub fn remove(&mut self, key: &NodeKey) -> bool {
        let removed = match key {
            NodeKey::Commit(repo_key, revision) => {
                self.cache_mut().remove_revision(repo_key, revision)
            }
            NodeKey::Repo(repo_key) => self.cache_mut().remove_repository(repo_key),
            NodeKey::Path(..) => false,
        };
        self.notify_changed();

        removed
    }

    /// Remove every revision of a repository. Always notifies.
    pub fn remove_all(&mut self, repo_key: &RepositoryKey) -> bool {
        let removed = self.cache_mut().remove_repository(repo_key);
        self.notify_changed();

        removed
    }

    /// Forget every cached revision. Always notifies.
    pub fn clear(&mut self) {
        self.cache_mut().clear();
        self.notify_changed();
    }
}
