// src/fetch/error.rs
// =============================================================================
// The ways a page fetch can fail.
//
// The crawler only swallows three kinds of failure: transport problems,
// invalid URLs and timeouts. Everything else is handed back to the caller
// and ends the crawl session.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display for our enum
// - matches!: A compact way to test an enum against several variants
// =============================================================================

use thiserror::Error;

// Each variant carries the message that ends up in the
// "Error crawling <url>: <message>" diagnostic, so Display is just the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS failure, redirect loop, broken body stream...
    #[error("{0}")]
    Transport(String),

    /// The URL could not be parsed or uses a scheme we can't request
    #[error("{0}")]
    InvalidUrl(String),

    /// The server did not answer within the request timeout
    #[error("{0}")]
    Timeout(String),

    /// The body arrived but could not be turned into text
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns true for the failures the crawler logs and moves past.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FetchError::Transport(_) | FetchError::InvalidUrl(_) | FetchError::Timeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = FetchError::Transport("Test Error".to_string());
        assert_eq!(err.to_string(), "Test Error");

        let err = FetchError::Timeout("Timeout Error".to_string());
        assert_eq!(err.to_string(), "Timeout Error");
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(FetchError::Transport("x".into()).is_recoverable());
        assert!(FetchError::InvalidUrl("x".into()).is_recoverable());
        assert!(FetchError::Timeout("x".into()).is_recoverable());
        assert!(!FetchError::Decode("x".into()).is_recoverable());
    }
}
