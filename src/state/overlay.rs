use super::AppState;
use crate::protocol::ServerMessage;
use crate::types::*;

/// A click inside the panel must never dismiss an overlay; only the scrim
/// or an explicit close control may.
fn close_allowed(origin: CloseOrigin) -> bool {
    match origin {
        CloseOrigin::Control | CloseOrigin::Scrim => true,
        CloseOrigin::Panel => false,
    }
}

impl AppState {
    /// Open the detail overlay on an entry. Unknown ids are ignored, the
    /// same policy as a no-match vote.
    pub async fn open_detail(&self, entry_id: &str) -> Option<MysteryEntry> {
        let entry = self.get_entry(entry_id).await?;

        let mut overlays = self.overlays.write().await;
        overlays.detail = Overlay::Visible;
        overlays.selected = Some(entry.id.clone());

        Some(entry)
    }

    /// Returns true if the overlay actually transitioned to Hidden
    pub async fn close_detail(&self, origin: CloseOrigin) -> bool {
        if !close_allowed(origin) {
            return false;
        }
        let mut overlays = self.overlays.write().await;
        overlays.detail = Overlay::Hidden;
        overlays.selected = None;
        true
    }

    pub async fn open_form(&self) {
        self.overlays.write().await.form = Overlay::Visible;
    }

    pub async fn close_form(&self, origin: CloseOrigin) -> bool {
        if !close_allowed(origin) {
            return false;
        }
        self.overlays.write().await.form = Overlay::Hidden;
        true
    }

    pub async fn open_chat(&self) {
        self.overlays.write().await.chat = Overlay::Visible;
    }

    pub async fn close_chat(&self, origin: CloseOrigin) -> bool {
        if !close_allowed(origin) {
            return false;
        }
        self.overlays.write().await.chat = Overlay::Hidden;
        true
    }

    pub async fn overlay_snapshot(&self) -> Overlays {
        self.overlays.read().await.clone()
    }

    pub async fn broadcast_overlays(&self) {
        self.broadcast_to_all(ServerMessage::OverlayState {
            overlays: self.overlay_snapshot().await,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_entries;

    #[tokio::test]
    async fn test_overlays_start_hidden() {
        let state = AppState::new();
        let overlays = state.overlay_snapshot().await;

        assert_eq!(overlays.detail, Overlay::Hidden);
        assert_eq!(overlays.form, Overlay::Hidden);
        assert_eq!(overlays.chat, Overlay::Hidden);
    }

    #[tokio::test]
    async fn test_open_detail_records_selection() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;
        let target = state.snapshot().await[0].clone();

        let opened = state.open_detail(&target.id).await;
        assert!(opened.is_some());

        let overlays = state.overlay_snapshot().await;
        assert_eq!(overlays.detail, Overlay::Visible);
        assert_eq!(overlays.selected, Some(target.id));
    }

    #[tokio::test]
    async fn test_open_detail_unknown_id_is_noop() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;

        assert!(state.open_detail("no-such-entry").await.is_none());

        let overlays = state.overlay_snapshot().await;
        assert_eq!(overlays.detail, Overlay::Hidden);
        assert!(overlays.selected.is_none());
    }

    #[tokio::test]
    async fn test_close_detail_clears_selection() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;
        let target = state.snapshot().await[0].clone();
        state.open_detail(&target.id).await;

        assert!(state.close_detail(CloseOrigin::Control).await);

        let overlays = state.overlay_snapshot().await;
        assert_eq!(overlays.detail, Overlay::Hidden);
        assert!(overlays.selected.is_none());
    }

    #[tokio::test]
    async fn test_panel_click_never_closes() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;
        let target = state.snapshot().await[0].clone();

        state.open_detail(&target.id).await;
        state.open_form().await;
        state.open_chat().await;

        assert!(!state.close_detail(CloseOrigin::Panel).await);
        assert!(!state.close_form(CloseOrigin::Panel).await);
        assert!(!state.close_chat(CloseOrigin::Panel).await);

        let overlays = state.overlay_snapshot().await;
        assert_eq!(overlays.detail, Overlay::Visible);
        assert_eq!(overlays.form, Overlay::Visible);
        assert_eq!(overlays.chat, Overlay::Visible);
        assert_eq!(overlays.selected, Some(target.id));
    }

    #[tokio::test]
    async fn test_scrim_click_closes() {
        let state = AppState::new();

        state.open_form().await;
        assert!(state.close_form(CloseOrigin::Scrim).await);
        assert_eq!(state.overlay_snapshot().await.form, Overlay::Hidden);

        state.open_chat().await;
        assert!(state.close_chat(CloseOrigin::Scrim).await);
        assert_eq!(state.overlay_snapshot().await.chat, Overlay::Hidden);
    }

    #[tokio::test]
    async fn test_overlays_are_independent() {
        let state = AppState::new();

        state.open_form().await;
        state.open_chat().await;
        state.close_form(CloseOrigin::Control).await;

        let overlays = state.overlay_snapshot().await;
        assert_eq!(overlays.form, Overlay::Hidden);
        assert_eq!(overlays.chat, Overlay::Visible);
    }
}
