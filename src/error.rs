#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No element with id '{0}'")]
    TargetNotFound(String),

    #[cfg(feature = "fetch")]
    #[error("HTTP client error: {0}")]
    Http(String),
}
