use crate::artifacts::log::log_entry::{CopySource, LogEntry, PathChange};
use crate::artifacts::log::repository_key::RepositoryKey;
use crate::artifacts::log::revision::Revision;
use crate::artifacts::tree::node::NodeKey;
use anyhow::Context;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};

const TOKEN_REGEX: &str = r#""([^"]*)"|(\S+)"#;

/// One line of a viewer session
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    #[command(about = "Add a revision taken from a repository log")]
    Add(AddArgs),
    #[command(about = "Remove a revision, or a whole repository without <REVISION>")]
    Remove {
        repo: String,
        revision: Option<String>,
    },
    #[command(about = "Remove every revision of a repository")]
    RemoveAll { repo: String },
    #[command(about = "Remove every revision")]
    Clear,
    #[command(about = "Show the changed paths of a revision")]
    Expand { repo: String, revision: String },
    #[command(about = "Hide the changed paths of a revision")]
    Collapse { repo: String, revision: String },
    #[command(about = "Print the tree")]
    Tree,
    #[command(about = "Print the tooltip, icons and command of one row")]
    Inspect {
        repo: String,
        revision: Option<String>,
        path: Option<String>,
    },
    #[command(about = "Open the diff of a changed path")]
    Diff {
        repo: String,
        revision: String,
        path: String,
    },
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    pub repo: String,
    pub revision: String,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long, help = "RFC 3339 timestamp of the revision")]
    pub date: String,
    #[arg(
        long = "path",
        value_name = "ACTION:PATH",
        help = "Changed path, e.g. M:/trunk/a.rs"
    )]
    pub paths: Vec<String>,
    #[arg(
        long = "copy-from",
        value_name = "PATH@REV",
        help = "Copy source of the preceding --path"
    )]
    pub copy_from: Vec<String>,
    #[arg(last = true)]
    pub message: Vec<String>,
    /// Index into `paths` of the path each `copy_from` belongs to
    #[arg(skip)]
    pub copy_owners: Vec<usize>,
}

impl AddArgs {
    pub fn to_entry(&self) -> anyhow::Result<(RepositoryKey, LogEntry)> {
        let repo_key = RepositoryKey::try_parse(&self.repo)?;
        let revision = Revision::try_parse(&self.revision)?;
        let date = chrono::DateTime::parse_from_rfc3339(&self.date)
            .with_context(|| format!("invalid date: {}", self.date))?;

        let mut paths = self
            .paths
            .iter()
            .map(|raw| PathChange::try_parse(raw))
            .collect::<anyhow::Result<Vec<_>>>()?;
        for (raw, owner) in self.copy_from.iter().zip(&self.copy_owners) {
            let source = CopySource::try_parse(raw)?;
            let change = paths
                .get_mut(*owner)
                .with_context(|| format!("--copy-from {raw} has no matching --path"))?;
            *change = change.clone().with_copy_from(source);
        }

        let entry = LogEntry::new(
            revision,
            self.author.clone(),
            date,
            self.message.join(" "),
            paths,
        );

        Ok((repo_key, entry))
    }
}

/// Split a line into words, keeping double-quoted runs together
pub fn tokenize(line: &str) -> anyhow::Result<Vec<String>> {
    let token_re = regex::Regex::new(TOKEN_REGEX)?;

    Ok(token_re
        .captures_iter(line)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|token| token.as_str().to_string())
        .collect())
}

/// Parse one session line; `None` for blank lines and `#` comments
pub fn parse_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let matches = ShellLine::command().try_get_matches_from(tokens)?;
    let mut parsed = ShellLine::from_arg_matches(&matches)?;

    if let (ShellCommand::Add(args), Some(add)) =
        (&mut parsed.command, matches.subcommand_matches("add"))
    {
        let path_indices: Vec<usize> = add.indices_of("paths").into_iter().flatten().collect();
        args.copy_owners = add
            .indices_of("copy_from")
            .into_iter()
            .flatten()
            .map(|index| {
                path_indices
                    .iter()
                    .rposition(|path_index| *path_index < index)
                    .context("--copy-from must follow the --path it belongs to")
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
    }

    Ok(Some(parsed.command))
}

/// Node a `repo [revision [path]]` triple points at
pub fn node_key(repo: &str, revision: Option<&str>, path: Option<&str>) -> anyhow::Result<NodeKey> {
    let repo_key = RepositoryKey::try_parse(repo)?;

    Ok(match (revision.map(Revision::try_parse).transpose()?, path) {
        (None, _) => NodeKey::Repo(repo_key),
        (Some(revision), None) => NodeKey::Commit(repo_key, revision),
        (Some(revision), Some(path)) => NodeKey::Path(repo_key, revision, path.to_string()),
    })
}
