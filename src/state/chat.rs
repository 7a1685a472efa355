use super::AppState;
use crate::types::ChatMessage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("message must not be blank")]
    EmptyMessage,
}

impl AppState {
    /// Append a message to the log. Blank or whitespace-only input is
    /// rejected without mutation; accepted text is stored trimmed.
    pub async fn append_chat_message(
        &self,
        text: &str,
        sender: &str,
    ) -> Result<ChatMessage, ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let message = ChatMessage {
            name: sender.to_string(),
            message: trimmed.to_string(),
            ts: chrono::Utc::now().to_rfc3339(),
        };
        self.chat.write().await.push(message.clone());

        Ok(message)
    }

    /// Append-order snapshot of the log. Messages are never reordered,
    /// deduplicated, or removed.
    pub async fn chat_snapshot(&self) -> Vec<ChatMessage> {
        self.chat.read().await.clone()
    }
}
