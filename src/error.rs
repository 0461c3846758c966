#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write conversion result")]
    Write(#[from] std::io::Error),
    #[error("failed to encode conversion result as JSON")]
    Json(#[from] serde_json::Error),
}
