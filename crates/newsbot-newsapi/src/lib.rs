//! NewsAPI adapter (article search).
//!
//! Implements the `newsbot-core` NewsSource port over the `v2/everything` endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use newsbot_core::{
    errors::Error,
    news::{Article, NewsSource, PAGE_SIZE},
    Result,
};

#[derive(Clone, Debug)]
pub struct NewsApiClient {
    api_key: String,
    endpoint: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: Option<String>,
    code: Option<String>,
    message: Option<String>,
    articles: Option<Vec<RawArticle>>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    source: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            source_name: raw.source.and_then(|s| s.name).unwrap_or_default(),
            description: raw.description,
            url: raw.url.unwrap_or_default(),
        }
    }
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_news(&self, query: &str, page: u32) -> Result<Vec<Article>> {
        let page = page.to_string();
        let page_size = PAGE_SIZE.to_string();

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("apiKey", self.api_key.as_str()),
                ("page", page.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::External(format!("news api request error: {}", e.without_url())))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::External(format!("news api read error: {}", e.without_url())))?;

        let parsed: SearchResponse = serde_json::from_str(&body)?;

        if parsed.status.as_deref() == Some("error") {
            warn!(
                http_status = status.as_u16(),
                code = parsed.code.as_deref().unwrap_or(""),
                "news api returned an error: {}",
                parsed.message.as_deref().unwrap_or("")
            );
        }

        let articles: Vec<Article> = parsed
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(Article::from)
            .collect();
        debug!(query, page = %page, count = articles.len(), "news api response");

        Ok(articles)
    }
}
