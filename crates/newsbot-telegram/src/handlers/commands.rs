use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use newsbot_core::{
    domain::{ChatId, UserId},
    messaging::types::{Command, IncomingUpdate},
};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

fn to_command(msg: &Message) -> Option<Command> {
    let user = msg.from()?;
    let text = msg.text()?;
    let (name, args) = parse_command(text);

    Some(Command {
        chat_id: ChatId(msg.chat.id.0),
        user_id: UserId(user.id.0 as i64),
        username: user.username.clone(),
        name,
        args,
    })
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(cmd) = to_command(&msg) else {
        return Ok(());
    };
    let name = cmd.name.clone();
    let user_id = cmd.user_id.0;

    if let Err(e) = state
        .conversation
        .handle_update(IncomingUpdate::Command(cmd))
        .await
    {
        warn!(command = %name, user_id, "command failed: {e}");
    }

    Ok(())
}
