use crate::areas::viewer::RevisionViewer;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::log::repository_key::RepositoryKey;

impl RevisionViewer {
    /// Add a revision picked elsewhere (e.g. from a repository log)
    ///
    /// Adding a revision that is already cached changes nothing, but still
    /// notifies listeners. Returns whether the entry was inserted.
    pub fn add_revision(&mut self, repo_key: RepositoryKey, entry: LogEntry) -> bool {
        let inserted = self.cache_mut().add_revision(repo_key, entry);
        self.notify_changed();

        inserted
    }
}
