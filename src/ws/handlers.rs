//! Intent dispatch
//!
//! Applies each client intent to the shared state, then fans the affected
//! projections out to every connected client. The returned message, if
//! any, goes only to the requesting client.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::{AppState, VoteResult};
use crate::types::*;
use std::sync::Arc;

pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    match msg {
        ClientMessage::Vote { entry_id } => handle_vote(state, entry_id).await,
        ClientMessage::SubmitEntry {
            title,
            era,
            body,
            source,
        } => {
            handle_submit_entry(
                state,
                EntryDraft {
                    title,
                    era,
                    body,
                    source,
                },
            )
            .await
        }
        ClientMessage::SendChatMessage { text } => handle_chat_message(state, text).await,
        ClientMessage::ExpandArchive => {
            state.expand_archive().await;
            state.broadcast_archive().await;
            None
        }
        ClientMessage::CollapseArchive => {
            state.collapse_archive().await;
            state.broadcast_archive().await;
            None
        }
        ClientMessage::OpenDetail { entry_id } => match state.open_detail(&entry_id).await {
            Some(entry) => {
                state.broadcast_overlays().await;
                Some(ServerMessage::EntryDetail {
                    entry: (&entry).into(),
                })
            }
            None => {
                tracing::warn!("Detail requested for unknown entry {}, ignoring", entry_id);
                None
            }
        },
        ClientMessage::CloseDetail { origin } => {
            if state.close_detail(origin).await {
                state.broadcast_overlays().await;
            }
            None
        }
        ClientMessage::OpenForm => {
            state.open_form().await;
            state.broadcast_overlays().await;
            None
        }
        ClientMessage::CloseForm { origin } => {
            if state.close_form(origin).await {
                state.broadcast_overlays().await;
            }
            None
        }
        ClientMessage::OpenChat => {
            state.open_chat().await;
            state.broadcast_overlays().await;
            Some(ServerMessage::ChatHistory {
                list: state.chat_snapshot().await,
            })
        }
        ClientMessage::CloseChat { origin } => {
            if state.close_chat(origin).await {
                state.broadcast_overlays().await;
            }
            None
        }
    }
}

async fn handle_vote(state: &Arc<AppState>, entry_id: EntryId) -> Option<ServerMessage> {
    match state.cast_vote(&entry_id).await {
        VoteResult::Recorded { entry_id, votes } => {
            tracing::debug!("Vote recorded for {}", entry_id);
            state.broadcast_archive().await;
            Some(ServerMessage::VoteAck { entry_id, votes })
        }
        VoteResult::NoMatch => {
            tracing::warn!("Vote for unknown entry {}, ignoring", entry_id);
            None
        }
    }
}

async fn handle_submit_entry(state: &Arc<AppState>, draft: EntryDraft) -> Option<ServerMessage> {
    state.stage_draft(draft).await;

    match state.commit_draft().await {
        Ok(entry) => {
            tracing::info!("Entry accepted: {}", entry.title);
            state.broadcast_archive().await;
            state.broadcast_overlays().await;
            Some(ServerMessage::EntryAccepted {
                entry: (&entry).into(),
            })
        }
        // The draft stays staged and the form stays open for correction
        Err(e) => Some(ServerMessage::EntryRejected {
            code: e.code().to_string(),
            msg: e.to_string(),
        }),
    }
}

async fn handle_chat_message(state: &Arc<AppState>, text: String) -> Option<ServerMessage> {
    match state.append_chat_message(&text, ANON_SENDER).await {
        Ok(message) => {
            state.broadcast_to_all(ServerMessage::ChatAppended { message });
            None
        }
        Err(e) => Some(ServerMessage::Error {
            code: "EMPTY_MESSAGE".to_string(),
            msg: e.to_string(),
        }),
    }
}
