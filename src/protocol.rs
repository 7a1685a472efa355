use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Upvote an entry. Unknown ids are ignored.
    Vote {
        entry_id: EntryId,
    },
    /// Stage the given draft and commit it as a new entry.
    SubmitEntry {
        title: String,
        era: String,
        body: String,
        #[serde(default)]
        source: String,
    },
    SendChatMessage {
        text: String,
    },
    ExpandArchive,
    CollapseArchive,
    OpenDetail {
        entry_id: EntryId,
    },
    CloseDetail {
        origin: CloseOrigin,
    },
    OpenForm,
    CloseForm {
        origin: CloseOrigin,
    },
    OpenChat,
    CloseChat {
        origin: CloseOrigin,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full state sync sent to every client on connect
    Welcome {
        protocol: String,
        server_now: String,
        entries: Vec<EntryInfo>,
        visible_count: usize,
        expanded: bool,
        leaderboard: Vec<LeaderboardRow>,
        chat: Vec<ChatMessage>,
        overlays: Overlays,
    },
    /// Canonical-order slice exposed by the visibility window
    Entries {
        list: Vec<EntryInfo>,
        visible_count: usize,
        expanded: bool,
    },
    Leaderboard {
        list: Vec<LeaderboardRow>,
    },
    ChatHistory {
        list: Vec<ChatMessage>,
    },
    /// Single-message fan-out after an append
    ChatAppended {
        message: ChatMessage,
    },
    OverlayState {
        overlays: Overlays,
    },
    VoteAck {
        entry_id: EntryId,
        votes: u32,
    },
    /// Sent to the detail overlay when an entry is opened
    EntryDetail {
        entry: EntryDetailInfo,
    },
    /// Sent to the submitter when their entry is committed
    EntryAccepted {
        entry: EntryDetailInfo,
    },
    /// Sent to the submitter when validation rejected the draft.
    /// The draft stays staged so the form can be corrected.
    EntryRejected {
        code: String,
        msg: String,
    },
    Error {
        code: String,
        msg: String,
    },
}

/// Card projection of an entry (no body, the detail overlay carries that)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryInfo {
    pub id: EntryId,
    pub title: String,
    pub era: String,
    pub summary: String,
    pub votes: u32,
}

impl From<&MysteryEntry> for EntryInfo {
    fn from(e: &MysteryEntry) -> Self {
        Self {
            id: e.id.clone(),
            title: e.title.clone(),
            era: e.era.clone(),
            summary: e.summary.clone(),
            votes: e.votes,
        }
    }
}

/// Full projection for the detail overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDetailInfo {
    pub id: EntryId,
    pub title: String,
    pub era: String,
    pub body: String,
    pub source: String,
    pub votes: u32,
}

impl From<&MysteryEntry> for EntryDetailInfo {
    fn from(e: &MysteryEntry) -> Self {
        Self {
            id: e.id.clone(),
            title: e.title.clone(),
            era: e.era.clone(),
            body: e.body.clone(),
            source: e.source.clone(),
            votes: e.votes,
        }
    }
}

/// One ranked leaderboard row, position is 1-based
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub position: usize,
    pub id: EntryId,
    pub title: String,
    pub votes: u32,
}
