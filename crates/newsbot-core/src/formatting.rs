//! Message formatting for Telegram legacy Markdown parse mode.

use crate::news::Article;

/// Render one article as a Markdown message.
///
/// Field values are inserted verbatim; the delimiters are interpreted by Telegram.
pub fn format_article(article: &Article) -> String {
    format!(
        "*{}*\n_{}_\n\n{}\n[Read more]({})",
        article.title,
        article.source_name,
        article.description.as_deref().unwrap_or(""),
        article.url
    )
}
