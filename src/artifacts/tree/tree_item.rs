//! What a host needs to draw one row of the tree

use crate::artifacts::log::log_entry::ChangeAction;
use crate::artifacts::tree::node::PathNode;
use std::path::{Path, PathBuf};

pub const OPEN_DIFF_COMMAND: &str = "revview.openDiff";

/// Semantic icon name → icon file stem
static ICON_FILES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "repo" => "repo",
    "commit" => "icon-commit",
    "info" => "info",
    "added" => "status-added",
    "modified" => "status-modified",
    "deleted" => "status-deleted",
    "replaced" => "status-replaced",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collapsible {
    #[default]
    None,
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    name: &'static str,
    file: &'static str,
}

/// Icon files for light and dark themes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub light: PathBuf,
    pub dark: PathBuf,
}

impl Icon {
    /// Look an icon up by its semantic name
    pub fn named(name: &str) -> Option<Icon> {
        ICON_FILES
            .get_entry(name)
            .map(|(name, file)| Icon {
                name: *name,
                file: *file,
            })
    }

    /// Icon shown next to a path with the given action
    pub fn for_action(action: ChangeAction) -> Icon {
        let name = match action {
            ChangeAction::Added => "added",
            ChangeAction::Modified => "modified",
            ChangeAction::Deleted => "deleted",
            ChangeAction::Replaced => "replaced",
        };
        Self::named(name).unwrap_or(Icon { name, file: name })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn paths(&self, icon_root: &Path) -> IconPaths {
        let file_name = format!("{}.svg", self.file);
        IconPaths {
            light: icon_root.join("light").join(&file_name),
            dark: icon_root.join("dark").join(&file_name),
        }
    }
}

/// Action run when a row is activated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeAction<'c> {
    OpenDiff(PathNode<'c>),
}

impl TreeAction<'_> {
    pub fn command_id(&self) -> &'static str {
        match self {
            TreeAction::OpenDiff(_) => OPEN_DIFF_COMMAND,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TreeAction::OpenDiff(_) => "Open Diff",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem<'c> {
    pub label: String,
    pub description: Option<String>,
    pub tooltip: Option<String>,
    pub icon: Icon,
    pub action: Option<TreeAction<'c>>,
    pub collapsible: Collapsible,
}

impl<'c> TreeItem<'c> {
    pub fn new(label: String, icon: Icon, collapsible: Collapsible) -> Self {
        TreeItem {
            label,
            description: None,
            tooltip: None,
            icon,
            action: None,
            collapsible,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_tooltip(mut self, tooltip: String) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn with_action(mut self, action: TreeAction<'c>) -> Self {
        self.action = Some(action);
        self
    }
}
