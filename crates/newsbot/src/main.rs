use std::sync::Arc;

use newsbot_core::{config::Config, news::NewsSource};
use newsbot_newsapi::NewsApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    newsbot_core::logging::init("newsbot")?;

    let cfg = Arc::new(Config::load()?);
    let news: Arc<dyn NewsSource> = Arc::new(NewsApiClient::new(
        cfg.news_api_key.clone(),
        cfg.news_api_url.clone(),
    ));

    if let Err(e) = newsbot_telegram::router::run_polling(cfg, news).await {
        tracing::error!("telegram bot failed: {e}");
        return Err(e);
    }

    Ok(())
}
