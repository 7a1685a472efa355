use serde::{Deserialize, Serialize};

/// Opaque ID type for type safety
pub type EntryId = String;

/// One historical-mystery record in the archive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MysteryEntry {
    pub id: EntryId,
    /// Display name, unique within the archive (enforced at submission)
    pub title: String,
    pub era: String,
    /// First chunk of `body`, shown on the card
    pub summary: String,
    pub body: String,
    /// External reference link, `"#"` when the submitter left it blank
    pub source: String,
    pub votes: u32,
}

/// A chatroom message from an anonymous sender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub name: String,
    pub message: String,
    pub ts: String,
}

/// Draft fields staged by the submission form before commit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub era: String,
    pub body: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    Hidden,
    Visible,
}

impl Overlay {
    pub fn is_visible(&self) -> bool {
        matches!(self, Overlay::Visible)
    }
}

/// Where a close request came from. Clicks inside the panel must never
/// dismiss the overlay; only the scrim or an explicit control may.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CloseOrigin {
    Control,
    Scrim,
    Panel,
}

/// Visibility state of the three modal surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overlays {
    pub detail: Overlay,
    /// Entry shown in the detail overlay, if any
    pub selected: Option<EntryId>,
    pub form: Overlay,
    pub chat: Overlay,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            detail: Overlay::Hidden,
            selected: None,
            form: Overlay::Hidden,
            chat: Overlay::Hidden,
        }
    }
}

/// Fixed sender label for the unauthenticated chatroom
pub const ANON_SENDER: &str = "Anon";

/// Placeholder reference when a submission omits the source link
pub const PLACEHOLDER_SOURCE: &str = "#";

/// Characters of `body` kept as the card summary
pub const SUMMARY_MAX_CHARS: usize = 80;

/// Entries exposed before the first expand, and after a collapse
pub const INITIAL_VISIBLE: usize = 4;

/// Entries added per expand step
pub const VISIBLE_STEP: usize = 4;
