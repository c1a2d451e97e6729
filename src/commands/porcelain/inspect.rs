use crate::areas::viewer::RevisionViewer;
use crate::artifacts::tree::node::NodeKey;
use crate::commands::porcelain::diff::describe;
use anyhow::Context;
use std::io::Write;

impl RevisionViewer {
    /// Print everything a host would draw for one row
    pub fn inspect(&self, key: &NodeKey) -> anyhow::Result<()> {
        let tree = self.tree();
        let node = tree
            .resolve(key)
            .with_context(|| format!("{} is not in the viewer", describe(key)))?;
        let item = tree.display(&node);
        let icons = item.icon.paths(&self.options().icon_root);

        let mut writer = self.writer();
        writeln!(writer, "label: {}", item.label)?;
        if let Some(description) = &item.description {
            writeln!(writer, "description: {description}")?;
        }
        if let Some(tooltip) = &item.tooltip {
            writeln!(writer, "tooltip:")?;
            for line in tooltip.lines() {
                writeln!(writer, "  {line}")?;
            }
        }
        writeln!(
            writer,
            "icon: {} (dark: {})",
            icons.light.display(),
            icons.dark.display()
        )?;
        if let Some(action) = item.action {
            writeln!(writer, "command: {} ({})", action.command_id(), action.title())?;
        }

        Ok(())
    }
}
