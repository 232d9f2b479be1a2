use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to reach the dataset resource: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The dataset resource returned a non-success status: {0}")]
    Transport(reqwest::StatusCode),

    #[error("Failed to parse the dataset body: {0}")]
    Parse(String),
}
