use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use newsbot_core::{
    domain::{ChatId, UserId},
    messaging::types::{CallbackQuery as CoreCallback, IncomingUpdate},
};

use crate::router::AppState;

fn to_core(q: &CallbackQuery) -> CoreCallback {
    CoreCallback {
        chat_id: q.message.as_ref().map(|m| ChatId(m.chat.id.0)),
        user_id: UserId(q.from.id.0 as i64),
        username: q.from.username.clone(),
        callback_id: q.id.clone(),
        data: q.data.clone().unwrap_or_default(),
    }
}

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let cb = to_core(&q);
    let user_id = cb.user_id.0;

    if let Err(e) = state
        .conversation
        .handle_update(IncomingUpdate::Callback(cb))
        .await
    {
        warn!(user_id, "callback failed: {e}");
    }

    Ok(())
}
