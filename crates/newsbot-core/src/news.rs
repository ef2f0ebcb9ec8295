use async_trait::async_trait;

use crate::Result;

/// Fixed page size requested from the news service.
pub const PAGE_SIZE: u32 = 5;

/// One news-search result item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub source_name: String,
    pub description: Option<String>,
    pub url: String,
}

/// Port for the external news search service.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch one page (1-based) of at most [`PAGE_SIZE`] articles for `query`.
    ///
    /// An empty vec means "no results" and is not an error.
    async fn fetch_news(&self, query: &str, page: u32) -> Result<Vec<Article>>;
}
