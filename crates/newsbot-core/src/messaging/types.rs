use crate::domain::{ChatId, UserId};

/// Cross-messenger incoming update model.
///
/// Telegram-specific fields live in the Telegram adapter.
#[derive(Clone, Debug)]
pub enum IncomingUpdate {
    Command(Command),
    Callback(CallbackQuery),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub username: Option<String>,
    pub name: String,
    pub args: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackQuery {
    /// `None` when the originating message is unavailable (e.g. inline mode).
    pub chat_id: Option<ChatId>,
    pub user_id: UserId,
    pub username: Option<String>,
    pub callback_id: String,
    pub data: String,
}

/// Inline keyboard (buttons) attached to an outgoing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    /// Keyboard with exactly one button.
    pub fn single(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            buttons: vec![InlineButton {
                label: label.into(),
                callback_data: callback_data.into(),
            }],
        }
    }
}
