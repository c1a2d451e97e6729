//! Log entries as produced by the version-control client
//!
//! A `LogEntry` is one commit: its revision, author, date, message and the
//! ordered list of paths it touched. Entries arrive already parsed; nothing
//! in this crate reads raw log output.

use crate::artifacts::log::revision::Revision;
use derive_new::new;

/// Single-character action code of a changed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeAction {
    Added,
    Modified,
    Deleted,
    Replaced,
}

impl ChangeAction {
    pub fn code(&self) -> char {
        match self {
            ChangeAction::Added => 'A',
            ChangeAction::Modified => 'M',
            ChangeAction::Deleted => 'D',
            ChangeAction::Replaced => 'R',
        }
    }
}

impl TryFrom<char> for ChangeAction {
    type Error = anyhow::Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(ChangeAction::Added),
            'M' => Ok(ChangeAction::Modified),
            'D' => Ok(ChangeAction::Deleted),
            'R' => Ok(ChangeAction::Replaced),
            other => anyhow::bail!("unknown change action: {}", other),
        }
    }
}

impl From<&ChangeAction> for &str {
    fn from(action: &ChangeAction) -> Self {
        match action {
            ChangeAction::Added => "Added",
            ChangeAction::Modified => "Modified",
            ChangeAction::Deleted => "Deleted",
            ChangeAction::Replaced => "Replaced",
        }
    }
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Origin of a path that was copied with history
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CopySource {
    pub path: String,
    pub revision: Revision,
}

impl CopySource {
    /// Parse `path@revision`
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let (path, revision) = raw
            .rsplit_once('@')
            .ok_or_else(|| anyhow::anyhow!("copy source must be <path>@<revision>: {}", raw))?;
        if path.is_empty() {
            anyhow::bail!("copy source path cannot be empty");
        }

        Ok(Self::new(path.to_string(), Revision::try_parse(revision)?))
    }
}

impl std::fmt::Display for CopySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.path, self.revision)
    }
}

/// One path touched by a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathChange {
    path: String,
    action: ChangeAction,
    copy_from: Option<CopySource>,
}

impl PathChange {
    pub fn new(path: String, action: ChangeAction) -> Self {
        PathChange {
            path,
            action,
            copy_from: None,
        }
    }

    pub fn with_copy_from(mut self, copy_from: CopySource) -> Self {
        self.copy_from = Some(copy_from);
        self
    }

    /// Parse the `<action>:<path>` shorthand, e.g. `M:/trunk/src/lib.rs`
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let (action, path) = raw
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("path change must be <action>:<path>: {}", raw))?;

        let mut chars = action.chars();
        let action = match (chars.next(), chars.next()) {
            (Some(code), None) => ChangeAction::try_from(code)?,
            _ => anyhow::bail!("action must be a single character: {}", action),
        };
        if path.is_empty() {
            anyhow::bail!("path cannot be empty");
        }

        Ok(Self::new(path.to_string(), action))
    }

    /// Repository-relative path
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn action(&self) -> ChangeAction {
        self.action
    }

    pub fn copy_from(&self) -> Option<&CopySource> {
        self.copy_from.as_ref()
    }

    /// Last component of the path
    pub fn file_name(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some((_, name)) => name,
            None => trimmed,
        }
    }

    /// Everything before the last component, `/` for top-level paths
    pub fn parent_dir(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some(("", _)) | None => "/",
            Some((dir, _)) => dir,
        }
    }
}

/// One commit of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    revision: Revision,
    author: Option<String>,
    date: chrono::DateTime<chrono::FixedOffset>,
    message: String,
    paths: Vec<PathChange>,
}

impl LogEntry {
    pub fn new(
        revision: Revision,
        author: Option<String>,
        date: chrono::DateTime<chrono::FixedOffset>,
        message: String,
        paths: Vec<PathChange>,
    ) -> Self {
        LogEntry {
            revision,
            author,
            date,
            message,
            paths,
        }
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn date(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    pub fn paths(&self) -> &[PathChange] {
        &self.paths
    }
}
