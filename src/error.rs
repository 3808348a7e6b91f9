use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
