// src/error.rs
//
// Failure kinds of one submit/response cycle

use thiserror::Error;

/// Transport-level failure: the request never produced a readable reply
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Why a submission did not produce a rendered result.
///
/// `Display` yields the text shown in the blocking alert.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No file selected; the request was never sent
    #[error("Please select an audio file")]
    NoFile,
    /// Same wording as the server's own rejection of the file type
    #[error("Error: Invalid file type. Allowed: {allowed}")]
    UnsupportedType { file_name: String, allowed: String },
    #[error("Error: File too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
    /// Non-2xx reply; carries the server's message or the generic fallback
    #[error("Error: {message}")]
    Server { status: u16, message: String },
    #[error("Error: {0}")]
    Transport(#[from] TransportError),
    /// Reply body was not the expected JSON
    #[error("Error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SubmitError {
    /// True when the failure was caught before any network traffic
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SubmitError::NoFile | SubmitError::UnsupportedType { .. } | SubmitError::TooLarge { .. }
        )
    }
}
