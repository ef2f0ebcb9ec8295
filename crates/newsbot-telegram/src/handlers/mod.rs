//! Telegram update handlers.
//!
//! Each handler converts a teloxide update into the core update model and
//! hands it to the conversation layer. Failures are logged, never returned to
//! the dispatcher.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(msg, state).await;
        }
    }

    tracing::debug!(chat_id = msg.chat.id.0, "ignoring non-command message");
    Ok(())
}
