/// Core error type for the news bot.
///
/// Adapter crates map their specific errors into this type so the conversation
/// layer can handle failures consistently (user-facing notice vs. fatal).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
