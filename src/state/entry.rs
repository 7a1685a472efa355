use super::AppState;
use crate::protocol::{EntryInfo, ServerMessage};
use crate::types::*;
use thiserror::Error;

/// Normalize a title for duplicate comparison (trim whitespace, lowercase)
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Outcome of a vote request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteResult {
    Recorded { entry_id: EntryId, votes: u32 },
    /// No entry with that id; nothing changed
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0} must not be blank")]
    MissingField(&'static str),
    #[error("an entry with this title already exists")]
    DuplicateTitle,
}

impl SubmitError {
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::MissingField(_) => "MISSING_FIELD",
            SubmitError::DuplicateTitle => "DUPLICATE_TITLE",
        }
    }
}

impl AppState {
    /// Establish the starting collection. Replaces the whole archive, so
    /// this runs once at startup (and in tests).
    pub async fn seed_archive(&self, seed: Vec<MysteryEntry>) {
        *self.entries.write().await = seed;
    }

    /// Increment the matching entry's counter by exactly one.
    /// Votes only ever go up; there is no down-vote or reset.
    pub async fn cast_vote(&self, entry_id: &str) -> VoteResult {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => {
                entry.votes += 1;
                VoteResult::Recorded {
                    entry_id: entry.id.clone(),
                    votes: entry.votes,
                }
            }
            None => VoteResult::NoMatch,
        }
    }

    /// Commit a draft as a new entry, prepended to the canonical order.
    /// Rejection leaves the archive untouched.
    pub async fn submit_entry(&self, draft: &EntryDraft) -> Result<MysteryEntry, SubmitError> {
        if draft.title.trim().is_empty() {
            return Err(SubmitError::MissingField("title"));
        }
        if draft.era.trim().is_empty() {
            return Err(SubmitError::MissingField("era"));
        }
        if draft.body.trim().is_empty() {
            return Err(SubmitError::MissingField("body"));
        }

        let mut entries = self.entries.write().await;

        let normalized_new = normalize(&draft.title);
        if entries.iter().any(|e| normalize(&e.title) == normalized_new) {
            return Err(SubmitError::DuplicateTitle);
        }

        let source = if draft.source.trim().is_empty() {
            PLACEHOLDER_SOURCE.to_string()
        } else {
            draft.source.clone()
        };

        let entry = MysteryEntry {
            id: ulid::Ulid::new().to_string(),
            title: draft.title.clone(),
            era: draft.era.clone(),
            summary: draft.body.chars().take(SUMMARY_MAX_CHARS).collect(),
            body: draft.body.clone(),
            source,
            votes: 0,
        };
        entries.insert(0, entry.clone());

        Ok(entry)
    }

    /// Read-only snapshot in canonical (insertion) order
    pub async fn snapshot(&self) -> Vec<MysteryEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get_entry(&self, entry_id: &str) -> Option<MysteryEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.id == entry_id)
            .cloned()
    }

    /// The canonical slice exposed by the visibility window, clamped to
    /// the archive length
    pub async fn visible_entries(&self) -> Vec<MysteryEntry> {
        let entries = self.entries.read().await;
        let count = self.window.read().await.visible_count().min(entries.len());
        entries[..count].to_vec()
    }

    /// Fan the archive projections out to all clients after a mutation.
    /// The leaderboard is recomputed from a fresh snapshot, never cached.
    pub async fn broadcast_archive(&self) {
        let list: Vec<EntryInfo> = self.visible_entries().await.iter().map(Into::into).collect();
        let window = self.window.read().await.clone();
        tracing::debug!("Broadcasting {} visible entries", list.len());

        self.broadcast_to_all(ServerMessage::Entries {
            list,
            visible_count: window.visible_count(),
            expanded: window.is_expanded(),
        });
        self.broadcast_to_all(ServerMessage::Leaderboard {
            list: self.leaderboard().await,
        });
    }
}
