use crate::areas::revision_cache::RevisionCache;
use crate::artifacts::core::{ChangeListener, ChangeNotifier};
use crate::artifacts::tree::display_options::DisplayOptions;
use crate::artifacts::tree::projection::TreeProjection;
use std::cell::{RefCell, RefMut};

/// The revision viewer as a host sees it
///
/// Owns the cache and the change channel. Commands (see `commands`) mutate
/// the cache and fire exactly one notification per call; hosts re-pull the
/// tree through `tree()` when notified.
pub struct RevisionViewer {
    cache: RevisionCache,
    options: DisplayOptions,
    notifier: ChangeNotifier,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl RevisionViewer {
    pub fn new(options: DisplayOptions, writer: Box<dyn std::io::Write>) -> Self {
        RevisionViewer {
            cache: RevisionCache::new(),
            options,
            notifier: ChangeNotifier::new(),
            writer: RefCell::new(writer),
        }
    }

    pub fn cache(&self) -> &RevisionCache {
        &self.cache
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn subscribe(&self) -> ChangeListener {
        self.notifier.subscribe()
    }

    /// Lazy tree over the current cache contents
    pub fn tree(&self) -> TreeProjection<'_> {
        TreeProjection::new(&self.cache, &self.options)
    }

    pub(crate) fn cache_mut(&mut self) -> &mut RevisionCache {
        &mut self.cache
    }

    pub(crate) fn notify_changed(&self) {
        self.notifier.fire();
    }
}
