use crate::artifacts::log::REVISION_REGEX;
use std::cmp::Ordering;

/// Revision identifier, unique within a repository
///
/// Kept in string form, with numeric revisions stripped of leading zeros so
/// `05` and `5` are the same revision. Numeric revisions sort first, by
/// value; anything else follows in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Parse user input such as `42` or `r42`
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            anyhow::bail!("revision cannot be empty");
        }

        let re = regex::Regex::new(REVISION_REGEX)?;
        let caps = re
            .captures(raw)
            .ok_or_else(|| anyhow::anyhow!("invalid revision: {}", raw))?;
        if let Some(digits) = caps.get(1) {
            return Ok(Self(canonical_digits(digits.as_str())));
        }
        let revision = caps
            .get(2)
            .ok_or_else(|| anyhow::anyhow!("invalid revision: {}", raw))?;

        Ok(Self(revision.as_str().to_string()))
    }

    /// Numeric value of the revision, if it has one that fits a `u64`
    pub fn number(&self) -> Option<u64> {
        if self.is_numeric() {
            self.0.parse().ok()
        } else {
            None
        }
    }

    fn is_numeric(&self) -> bool {
        self.0.bytes().all(|byte| byte.is_ascii_digit())
    }

    /// The revision right before this one, when there is one
    pub fn previous(&self) -> Option<Revision> {
        match self.number() {
            Some(n) if n > 0 => Some(Self((n - 1).to_string())),
            _ => None,
        }
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Revision {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Revision {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical digit strings order by length first, then digit by digit
        let rank = |rev: &Self| match rev.is_numeric() {
            true => (false, rev.0.len()),
            false => (true, 0),
        };

        rank(self)
            .cmp(&rank(other))
            .then_with(|| self.0.cmp(&other.0))
    }
}

fn canonical_digits(digits: &str) -> String {
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}
