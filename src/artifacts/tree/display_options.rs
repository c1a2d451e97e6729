use anyhow::Context;
use chrono::format::{Item, StrftimeItems};
use std::path::PathBuf;

pub const DEFAULT_MESSAGE_WIDTH: usize = 50;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DEFAULT_ICON_ROOT: &str = "resources/icons";

/// Parameters of the display mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Commit labels longer than this many characters are cut
    pub message_width: usize,
    /// `chrono` format of the date in commit descriptions
    pub date_format: String,
    pub icon_root: PathBuf,
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            message_width: DEFAULT_MESSAGE_WIDTH,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            icon_root: PathBuf::from(DEFAULT_ICON_ROOT),
            color: true,
        }
    }
}

impl DisplayOptions {
    /// Load options from environment variables, falling back to defaults
    ///
    /// Reads REVVIEW_MESSAGE_WIDTH, REVVIEW_DATE_FORMAT, REVVIEW_ICON_ROOT
    /// and NO_COLOR.
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    fn load_from(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut options = Self::default();

        if let Some(width) = var("REVVIEW_MESSAGE_WIDTH") {
            options.message_width = width
                .trim()
                .parse()
                .with_context(|| format!("invalid REVVIEW_MESSAGE_WIDTH: {width}"))?;
        }
        if let Some(date_format) = var("REVVIEW_DATE_FORMAT") {
            check_date_format(&date_format)
                .with_context(|| format!("invalid REVVIEW_DATE_FORMAT: {date_format}"))?;
            options.date_format = date_format;
        }
        if let Some(icon_root) = var("REVVIEW_ICON_ROOT") {
            options.icon_root = PathBuf::from(icon_root);
        }
        if var("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            options.color = false;
        }

        Ok(options)
    }
}

/// Reject `chrono` format strings that would fail when rendered
pub fn check_date_format(date_format: &str) -> anyhow::Result<()> {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("unsupported date specifier in {date_format:?}");
    }

    Ok(())
}
