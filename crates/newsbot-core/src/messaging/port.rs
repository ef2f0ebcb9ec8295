use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::InlineKeyboard,
    Result,
};

/// Outbound messaging port.
///
/// The conversation layer only talks to this trait; the Telegram adapter
/// implements it over the Bot API.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Send plain text (no parse mode).
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    /// Send text rendered with the legacy Markdown dialect (`*bold*`, `_italic_`, `[text](url)`).
    async fn send_markdown(&self, chat_id: ChatId, markdown: &str) -> Result<MessageRef>;

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef>;

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
