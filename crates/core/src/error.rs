#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The QR symbol cannot represent the requested content
    /// (typically: exceeds symbol capacity).
    #[error("QR encoding failed: {0}")]
    Encoding(String),

    /// PNG serialization failed.
    #[error("Image encoding failed: {0}")]
    Image(String),

    /// Page or asset storage failed.
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}
