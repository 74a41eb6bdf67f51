use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The edge returned 403 even though the TLS handshake passed its
    /// fingerprint check. This is IP reputation, not fingerprint detection,
    /// and is reported separately so the operator knows which one to fix.
    #[error("Blocked by anti-bot edge (403 after TLS impersonation)")]
    AntiBotBlocked,

    #[error("API error (status {status})")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),
}

impl From<rquest::Error> for FetchError {
    fn from(err: rquest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
