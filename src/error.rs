// Error types for key export and inspection

use thiserror::Error;

/// Errors that can occur while obtaining or inspecting public key material
#[derive(Debug, Error)]
pub enum ExportError {
    /// The key source could not produce raw public key bytes
    #[error("public key material is unavailable")]
    UnavailableKeyMaterial,

    /// The DER input does not have the expected structure
    #[error("malformed DER input: {0}")]
    MalformedInput(&'static str),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
