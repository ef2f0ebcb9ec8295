//! Telegram adapter (teloxide).
//!
//! This crate implements the `newsbot-core` MessagingPort over Telegram Bot API
//! and routes incoming updates into the conversation handlers.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
};

pub mod handlers;
pub mod router;

use newsbot_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::InlineKeyboard},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    fn msg_ref(chat_id: ChatId, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    // Article templates use the legacy Markdown delimiters, not MarkdownV2.
    #[allow(deprecated)]
    async fn send_markdown(&self, chat_id: ChatId, markdown: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), markdown.to_string())
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef> {
        let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
            .buttons
            .into_iter()
            .map(|b| vec![InlineKeyboardButton::callback(b.label, b.callback_data)])
            .collect();
        let markup = InlineKeyboardMarkup::new(rows);

        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .reply_markup(markup)
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut req = self.bot.answer_callback_query(callback_id.to_string());
        if let Some(t) = text {
            req = req.text(t.to_string());
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }
}
