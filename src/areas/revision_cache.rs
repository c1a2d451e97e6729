//! Volatile store of the revisions a user picked for viewing
//!
//! Two levels: repository key → revisions of that repository. Both levels
//! keep insertion order. A repository never stays in the cache without at
//! least one revision: removing its last revision removes the repository in
//! the same call.

use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::log::repository_key::RepositoryKey;
use crate::artifacts::log::revision::Revision;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RepositoryLog {
    key: RepositoryKey,
    entries: Vec<LogEntry>,
}

impl RepositoryLog {
    fn position(&self, revision: &Revision) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.revision() == revision)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionCache {
    repositories: Vec<RepositoryLog>,
}

impl RevisionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` under `repo_key` unless that revision is already there
    ///
    /// The first inserted entry wins; a duplicate is ignored without
    /// touching the stored one. Returns whether the entry was inserted.
    pub fn add_revision(&mut self, repo_key: RepositoryKey, entry: LogEntry) -> bool {
        let index = match self.index_of(&repo_key) {
            Some(index) => index,
            None => {
                debug!(repository = %repo_key, "creating repository group");
                self.repositories.push(RepositoryLog {
                    key: repo_key,
                    entries: Vec::new(),
                });
                self.repositories.len() - 1
            }
        };

        let log = &mut self.repositories[index];
        if log.position(entry.revision()).is_some() {
            debug!(
                repository = %log.key,
                revision = %entry.revision(),
                "revision already cached, ignoring"
            );
            return false;
        }

        debug!(repository = %log.key, revision = %entry.revision(), "adding revision");
        log.entries.push(entry);
        true
    }

    /// Remove one revision, dropping the repository if it was its last one
    ///
    /// Returns whether anything was removed.
    pub fn remove_revision(&mut self, repo_key: &RepositoryKey, revision: &Revision) -> bool {
        let Some(index) = self.index_of(repo_key) else {
            return false;
        };
        let log = &mut self.repositories[index];
        let Some(position) = log.position(revision) else {
            return false;
        };

        log.entries.remove(position);
        debug!(repository = %repo_key, revision = %revision, "removed revision");

        if log.entries.is_empty() {
            self.repositories.remove(index);
            debug!(repository = %repo_key, "removed empty repository group");
        }

        true
    }

    /// Remove a repository with all of its revisions
    pub fn remove_repository(&mut self, repo_key: &RepositoryKey) -> bool {
        match self.index_of(repo_key) {
            Some(index) => {
                let log = self.repositories.remove(index);
                debug!(
                    repository = %repo_key,
                    revisions = log.entries.len(),
                    "removed repository"
                );
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        debug!(repositories = self.repositories.len(), "clearing cache");
        self.repositories.clear();
    }

    /// Cached repository keys, in insertion order
    pub fn repositories(&self) -> impl Iterator<Item = &RepositoryKey> {
        self.repositories.iter().map(|log| &log.key)
    }

    /// Entries cached for `repo_key`, in insertion order
    ///
    /// Empty when the repository is not cached.
    pub fn entries<'c>(
        &'c self,
        repo_key: &RepositoryKey,
    ) -> impl Iterator<Item = &'c LogEntry> + use<'c> {
        self.repositories
            .iter()
            .find(|log| &log.key == repo_key)
            .into_iter()
            .flat_map(|log| log.entries.iter())
    }

    pub fn entry(&self, repo_key: &RepositoryKey, revision: &Revision) -> Option<&LogEntry> {
        self.entries(repo_key)
            .find(|entry| entry.revision() == revision)
    }

    pub fn contains(&self, repo_key: &RepositoryKey, revision: &Revision) -> bool {
        self.entry(repo_key, revision).is_some()
    }

    /// Number of cached entries across all repositories
    pub fn len(&self) -> usize {
        self.repositories.iter().map(|log| log.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    fn index_of(&self, repo_key: &RepositoryKey) -> Option<usize> {
        self.repositories.iter().position(|log| &log.key == repo_key)
    }
}
