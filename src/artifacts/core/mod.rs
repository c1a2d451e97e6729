//! Core utilities and shared types
//!
//! This module contains the change-notification channel shared by the
//! viewer and whatever renders it.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::trace;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Coarse "something changed" broadcast
///
/// Carries no payload: listeners re-pull whatever they display. Firing with
/// no listener attached is fine.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<()>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        ChangeNotifier { sender }
    }

    pub fn subscribe(&self) -> ChangeListener {
        ChangeListener {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn fire(&self) {
        let receivers = self.sender.send(()).unwrap_or(0);
        trace!(receivers, "fired change notification");
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of a `ChangeNotifier`
#[derive(Debug)]
pub struct ChangeListener {
    receiver: broadcast::Receiver<()>,
}

impl ChangeListener {
    /// Drain pending notifications, returning how many arrived
    ///
    /// A listener that fell behind the channel capacity counts the skipped
    /// notifications as well.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Lagged(skipped)) => count += skipped as usize,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return count,
            }
        }
    }

    /// Whether anything changed since the last check
    pub fn has_changed(&mut self) -> bool {
        self.drain() > 0
    }
}
