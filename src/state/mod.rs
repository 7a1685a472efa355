mod chat;
mod entry;
mod form;
mod leaderboard;
mod overlay;
mod window;

pub use chat::ChatError;
pub use entry::{SubmitError, VoteResult};
pub use leaderboard::rank;
pub use window::VisibilityWindow;

use crate::protocol::ServerMessage;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Canonical archive, insertion order, newest-submitted first
    pub entries: Arc<RwLock<Vec<MysteryEntry>>>,
    /// Append-only chat log
    pub chat: Arc<RwLock<Vec<ChatMessage>>>,
    pub window: Arc<RwLock<VisibilityWindow>>,
    pub overlays: Arc<RwLock<Overlays>>,
    /// Submission form staging buffer
    pub draft: Arc<RwLock<EntryDraft>>,
    /// Broadcast channel for fanning projections out to all clients
    pub broadcast: broadcast::Sender<ServerMessage>,
}

impl AppState {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            chat: Arc::new(RwLock::new(Vec::new())),
            window: Arc::new(RwLock::new(VisibilityWindow::default())),
            overlays: Arc::new(RwLock::new(Overlays::default())),
            draft: Arc::new(RwLock::new(EntryDraft::default())),
            broadcast: tx,
        }
    }

    /// Send a message to every connected client.
    /// Send errors (no receivers connected) are fine.
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        let _ = self.broadcast.send(msg);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_entries;

    #[tokio::test]
    async fn test_new_state_is_empty() {
        let state = AppState::new();

        assert!(state.snapshot().await.is_empty());
        assert!(state.chat_snapshot().await.is_empty());
        assert_eq!(state.draft_snapshot().await, EntryDraft::default());

        let overlays = state.overlay_snapshot().await;
        assert_eq!(overlays.detail, Overlay::Hidden);
        assert_eq!(overlays.form, Overlay::Hidden);
        assert_eq!(overlays.chat, Overlay::Hidden);
        assert!(overlays.selected.is_none());
    }

    #[tokio::test]
    async fn test_seed_establishes_canonical_order() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[0].title, "The Voynich Manuscript");
        assert_eq!(snapshot[3].title, "The Antikythera Mechanism");
    }
}
