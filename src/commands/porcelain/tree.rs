use crate::areas::viewer::RevisionViewer;
use crate::artifacts::tree::expansion::ExpansionState;
use crate::artifacts::tree::node::{Node, RawNode};
use crate::artifacts::tree::projection::TreeProjection;
use crate::artifacts::log::log_entry::ChangeAction;
use crate::artifacts::tree::tree_item::{Collapsible, Icon, TreeAction, TreeItem};
use colored::{ColoredString, Colorize};
use std::io::Write;

const INDENT: &str = "  ";
const EMPTY_LABEL: &str = "No revisions added";
const EMPTY_TOOLTIP: &str = "Add revisions from a repository log to compare them here";

impl RevisionViewer {
    /// Render the tree, descending only into expanded rows
    ///
    /// Collapsed commits never have their paths computed. An empty cache
    /// renders a single placeholder row.
    pub fn show_tree(&self, expansion: &ExpansionState) -> anyhow::Result<()> {
        let tree = self.tree();
        let mut roots = tree.children(None);

        if roots.is_empty() {
            roots.push(Node::Raw(RawNode::new(
                TreeItem::new(
                    EMPTY_LABEL.to_string(),
                    Icon::named("info").ok_or_else(|| anyhow::anyhow!("missing info icon"))?,
                    Collapsible::None,
                )
                .with_tooltip(EMPTY_TOOLTIP.to_string()),
            )));
        }

        for root in &roots {
            self.show_node(&tree, root, expansion, 0)?;
        }

        Ok(())
    }

    fn show_node<'c>(
        &self,
        tree: &TreeProjection<'c>,
        node: &Node<'c>,
        expansion: &ExpansionState,
        depth: usize,
    ) -> anyhow::Result<()> {
        let item = tree.display(node);
        let key = node.key();
        let expanded = expansion.is_expanded(key.as_ref(), item.collapsible);

        let row = self.format_row(node, &item, expanded, depth);
        writeln!(self.writer(), "{row}")?;

        if expanded {
            for child in tree.children(Some(node)) {
                self.show_node(tree, &child, expansion, depth + 1)?;
            }
        }

        Ok(())
    }

    fn format_row(
        &self,
        node: &Node<'_>,
        item: &TreeItem<'_>,
        expanded: bool,
        depth: usize,
    ) -> String {
        let twisty = match (item.collapsible, expanded) {
            (Collapsible::None, _) => "  ",
            (_, true) => "▾ ",
            (_, false) => "▸ ",
        };

        let mut row = format!("{}{}", INDENT.repeat(depth), twisty);
        if let Some(TreeAction::OpenDiff(path)) = item.action {
            row.push_str(&self.action_tag(path.change().action()));
            row.push(' ');
        }

        let label = match node {
            Node::Repo(_) => self.paint(&item.label, |s| s.bold()),
            _ => item.label.clone(),
        };
        row.push_str(&label);

        if let Some(description) = &item.description {
            row.push_str(INDENT);
            row.push_str(&self.paint(description, |s| s.dimmed()));
        }

        row
    }

    fn action_tag(&self, action: ChangeAction) -> String {
        let code = action.code().to_string();
        match action {
            ChangeAction::Added => self.paint(&code, |s| s.green()),
            ChangeAction::Modified => self.paint(&code, |s| s.yellow()),
            ChangeAction::Deleted => self.paint(&code, |s| s.red()),
            ChangeAction::Replaced => self.paint(&code, |s| s.cyan()),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.options().color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}
