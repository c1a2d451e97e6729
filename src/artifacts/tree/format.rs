//! Text shown for commits and changed paths
//!
//! All of these are pure functions of their inputs; nothing reads the clock
//! or the environment.

use crate::artifacts::log::log_entry::{LogEntry, PathChange};
use crate::artifacts::tree::display_options::{
    DEFAULT_DATE_FORMAT, DisplayOptions, check_date_format,
};

const NO_AUTHOR: &str = "(no author)";
const ELLIPSIS: char = '…';
const TOOLTIP_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

pub fn author_name(entry: &LogEntry) -> &str {
    entry.author().unwrap_or(NO_AUTHOR)
}

/// Cut `text` to at most `width` characters, marking the cut with `…`
pub fn excerpt(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push(ELLIPSIS);
    cut
}

/// First message line, or `r<rev>` for an empty message
pub fn commit_label(entry: &LogEntry, options: &DisplayOptions) -> String {
    match entry.short_message() {
        "" => format!("r{}", entry.revision()),
        message => excerpt(message, options.message_width),
    }
}

/// `r<rev>, <author>, <date>`; an unusable date format falls back to the default
pub fn commit_description(entry: &LogEntry, options: &DisplayOptions) -> String {
    let date_format = match check_date_format(&options.date_format) {
        Ok(()) => options.date_format.as_str(),
        Err(_) => DEFAULT_DATE_FORMAT,
    };

    format!(
        "r{}, {}, {}",
        entry.revision(),
        author_name(entry),
        entry.date().format(date_format)
    )
}

pub fn commit_tooltip(entry: &LogEntry) -> String {
    format!(
        "Author: {}\n{}\nRevision: {}\n\n{}",
        author_name(entry),
        entry.date().format(TOOLTIP_DATE_FORMAT),
        entry.revision(),
        entry.message()
    )
}

pub fn path_tooltip(change: &PathChange) -> String {
    let action: &str = (&change.action()).into();
    match change.copy_from() {
        Some(source) => format!("{}: {}\nCopied from {}", action, change.path(), source),
        None => format!("{}: {}", action, change.path()),
    }
}
