use super::{AppState, SubmitError};
use crate::types::*;

impl AppState {
    /// Replace the staged draft with the form's current fields
    pub async fn stage_draft(&self, draft: EntryDraft) {
        *self.draft.write().await = draft;
    }

    pub async fn draft_snapshot(&self) -> EntryDraft {
        self.draft.read().await.clone()
    }

    /// Clear all draft fields back to empty
    pub async fn reset_draft(&self) {
        *self.draft.write().await = EntryDraft::default();
    }

    /// Commit the staged draft to the archive. On success the draft is
    /// cleared and the form overlay hides; on rejection both are left in
    /// place so the user can correct the input.
    pub async fn commit_draft(&self) -> Result<MysteryEntry, SubmitError> {
        let draft = self.draft.read().await.clone();
        let entry = self.submit_entry(&draft).await?;

        self.reset_draft().await;
        self.overlays.write().await.form = Overlay::Hidden;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_entries;

    fn valid_draft() -> EntryDraft {
        EntryDraft {
            title: "The Dancing Plague".to_string(),
            era: "1518".to_string(),
            body: "In Strasbourg, hundreds danced for days without rest.".to_string(),
            source: String::new(),
        }
    }

    #[tokio::test]
    async fn test_commit_resets_draft_and_hides_form() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;
        state.open_form().await;
        state.stage_draft(valid_draft()).await;

        let entry = state.commit_draft().await.unwrap();
        assert_eq!(entry.title, "The Dancing Plague");

        assert_eq!(state.draft_snapshot().await, EntryDraft::default());
        assert_eq!(state.overlay_snapshot().await.form, Overlay::Hidden);
    }

    #[tokio::test]
    async fn test_rejected_commit_keeps_form_populated_and_open() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;
        state.open_form().await;

        let mut incomplete = valid_draft();
        incomplete.era = String::new();
        state.stage_draft(incomplete.clone()).await;

        let result = state.commit_draft().await;
        assert_eq!(result, Err(SubmitError::MissingField("era")));

        // Nothing mutated: archive, draft, and overlay all untouched
        assert_eq!(state.snapshot().await.len(), 4);
        assert_eq!(state.draft_snapshot().await, incomplete);
        assert_eq!(state.overlay_snapshot().await.form, Overlay::Visible);
    }

    #[tokio::test]
    async fn test_duplicate_title_commit_keeps_draft() {
        let state = AppState::new();
        state.seed_archive(initial_entries()).await;

        let mut dup = valid_draft();
        dup.title = "The Lost City of Atlantis".to_string();
        state.stage_draft(dup.clone()).await;

        assert_eq!(state.commit_draft().await, Err(SubmitError::DuplicateTitle));
        assert_eq!(state.draft_snapshot().await, dup);
    }
}
