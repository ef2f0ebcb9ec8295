use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};
use tracing::{info, warn};

use newsbot_core::{
    config::Config, conversation::NewsConversation, messaging::port::MessagingPort,
    news::NewsSource,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<NewsConversation>,
}

pub async fn run_polling(cfg: Arc<Config>, news: Arc<dyn NewsSource>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => info!("newsbot started: @{}", me.username()),
        Err(e) => warn!("getMe failed: {e}"),
    }
    info!("news endpoint: {}", cfg.news_api_url);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        conversation: Arc::new(NewsConversation::new(news, messenger)),
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
