use crate::artifacts::log::URL_SCHEME_REGEX;

/// Canonical identifier of a repository root (a URL or a filesystem path).
///
/// Every cache operation takes an already parsed key, so the same
/// normalization applies to inserts, lookups and removals alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryKey(String);

impl RepositoryKey {
    /// Normalize a raw repository location into a key
    ///
    /// - surrounding whitespace is trimmed
    /// - `\` separators become `/`
    /// - the URL scheme, if any, is lowercased
    /// - trailing `/` are stripped, except for a bare root
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            anyhow::bail!("repository key cannot be empty");
        }

        let mut key = raw.replace('\\', "/");

        let scheme_re = regex::Regex::new(URL_SCHEME_REGEX)?;
        let root_len = match scheme_re.find(&key) {
            Some(scheme) => {
                let end = scheme.end();
                let lowered = scheme.as_str().to_ascii_lowercase();
                key.replace_range(..end, &lowered);
                end
            }
            None if key.starts_with('/') => 1,
            None => 0,
        };

        while key.len() > root_len && key.ends_with('/') {
            key.pop();
        }

        Ok(Self(key))
    }

    /// The string shown to the user, identical to the canonical form
    pub fn display_name(&self) -> &str {
        &self.0
    }

    /// Join a repository-relative path onto the key
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl AsRef<str> for RepositoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for RepositoryKey {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}
