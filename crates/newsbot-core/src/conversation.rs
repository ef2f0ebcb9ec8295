use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    cursor::{SessionCursors, SessionLocks},
    domain::{ChatId, UserId},
    formatting::format_article,
    messaging::{
        port::MessagingPort,
        types::{CallbackQuery, Command, IncomingUpdate, InlineKeyboard},
    },
    news::{Article, NewsSource},
    Result,
};

pub const NEXT_NEWS_CALLBACK: &str = "next_news";
pub const NEXT_NEWS_LABEL: &str = "Next 5 News";

const GREETING: &str = "Hi! Use /news <keyword> to get the latest news.";
const KEYWORD_PROMPT: &str = "Please provide a keyword.";
const NO_ARTICLES: &str = "No articles found.";
const NO_MORE_ARTICLES: &str = "No more articles found.";
const NO_ACTIVE_SEARCH: &str = "Start a search first with /news <keyword>.";
const SHOW_MORE: &str = "Show more news?";
const FETCH_FAILED: &str = "Something went wrong while fetching news. Please try again later.";

/// Conversation handlers for `/start`, `/news` and the next-page button.
///
/// Owns the per-session cursors. Every step for a given session runs under that
/// session's lock, so repeated button presses advance the page one at a time.
pub struct NewsConversation {
    news: Arc<dyn NewsSource>,
    messenger: Arc<dyn MessagingPort>,
    cursors: SessionCursors,
    locks: SessionLocks,
}

impl NewsConversation {
    pub fn new(news: Arc<dyn NewsSource>, messenger: Arc<dyn MessagingPort>) -> Self {
        Self {
            news,
            messenger,
            cursors: SessionCursors::new(),
            locks: SessionLocks::default(),
        }
    }

    pub fn cursors(&self) -> &SessionCursors {
        &self.cursors
    }

    pub async fn handle_update(&self, update: IncomingUpdate) -> Result<()> {
        match update {
            IncomingUpdate::Command(cmd) => self.handle_command(cmd).await,
            IncomingUpdate::Callback(q) => self.handle_callback(q).await,
        }
    }

    pub async fn handle_command(&self, cmd: Command) -> Result<()> {
        debug!(
            command = %cmd.name,
            user_id = cmd.user_id.0,
            username = cmd.username.as_deref().unwrap_or("unknown"),
            "command received"
        );
        match cmd.name.as_str() {
            "start" => self.start(cmd.chat_id).await,
            "news" => self.search(cmd.chat_id, cmd.user_id, &cmd.args).await,
            other => {
                debug!(command = other, user_id = cmd.user_id.0, "ignoring unknown command");
                Ok(())
            }
        }
    }

    pub async fn handle_callback(&self, q: CallbackQuery) -> Result<()> {
        debug!(
            data = %q.data,
            user_id = q.user_id.0,
            username = q.username.as_deref().unwrap_or("unknown"),
            "callback received"
        );
        if q.data == NEXT_NEWS_CALLBACK {
            return self.next_page(q).await;
        }
        debug!(data = %q.data, user_id = q.user_id.0, "ignoring unknown callback");
        self.messenger.answer_callback_query(&q.callback_id, None).await
    }

    pub async fn start(&self, chat_id: ChatId) -> Result<()> {
        self.messenger.send_text(chat_id, GREETING).await?;
        Ok(())
    }

    /// First page of a keyword search. Replaces any previous cursor on success.
    pub async fn search(&self, chat_id: ChatId, user_id: UserId, args: &str) -> Result<()> {
        let query = join_query(args);
        if query.is_empty() {
            self.messenger.send_text(chat_id, KEYWORD_PROMPT).await?;
            return Ok(());
        }

        let _guard = self.locks.lock_session(user_id).await;
        info!(user_id = user_id.0, query = %query, "news search");

        let articles = match self.news.fetch_news(&query, 1).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(user_id = user_id.0, query = %query, "news fetch failed: {e}");
                self.messenger.send_text(chat_id, FETCH_FAILED).await?;
                return Ok(());
            }
        };

        if articles.is_empty() {
            self.messenger.send_text(chat_id, NO_ARTICLES).await?;
            return Ok(());
        }

        self.cursors.start(user_id, &query).await;
        self.send_page(chat_id, &articles).await
    }

    /// Advance the session's cursor and send the next page.
    ///
    /// The page stays incremented even when the fetch comes back empty or fails.
    pub async fn next_page(&self, q: CallbackQuery) -> Result<()> {
        let Some(chat_id) = q.chat_id else {
            return self
                .messenger
                .answer_callback_query(&q.callback_id, None)
                .await;
        };

        let _guard = self.locks.lock_session(q.user_id).await;

        let Some(cursor) = self.cursors.advance(q.user_id).await else {
            return self
                .messenger
                .answer_callback_query(&q.callback_id, Some(NO_ACTIVE_SEARCH))
                .await;
        };
        info!(user_id = q.user_id.0, query = %cursor.query, page = cursor.page, "next page");

        let articles = match self.news.fetch_news(&cursor.query, cursor.page).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(
                    user_id = q.user_id.0,
                    query = %cursor.query,
                    page = cursor.page,
                    "news fetch failed: {e}"
                );
                return self
                    .messenger
                    .answer_callback_query(&q.callback_id, Some(FETCH_FAILED))
                    .await;
            }
        };

        if articles.is_empty() {
            return self
                .messenger
                .answer_callback_query(&q.callback_id, Some(NO_MORE_ARTICLES))
                .await;
        }

        // The callback is answered even if the page could not be delivered.
        let sent = self.send_page(chat_id, &articles).await;
        self.messenger
            .answer_callback_query(&q.callback_id, None)
            .await?;
        sent
    }

    /// Send every article, skipping ones Telegram rejects, then the next-page button.
    async fn send_page(&self, chat_id: ChatId, articles: &[Article]) -> Result<()> {
        for article in articles {
            if let Err(e) = self
                .messenger
                .send_markdown(chat_id, &format_article(article))
                .await
            {
                warn!(chat_id = chat_id.0, url = %article.url, "article send failed: {e}");
            }
        }
        self.messenger
            .send_inline_keyboard(
                chat_id,
                SHOW_MORE,
                InlineKeyboard::single(NEXT_NEWS_LABEL, NEXT_NEWS_CALLBACK),
            )
            .await?;
        Ok(())
    }
}

/// Re-join whitespace-separated command arguments with single spaces.
fn join_query(args: &str) -> String {
    args.split_whitespace().collect::<Vec<_>>().join(" ")
}
