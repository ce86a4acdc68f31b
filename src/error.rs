//! Error codes shared by the chat pipeline and the remote model client.

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag, logged as structured fields.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
