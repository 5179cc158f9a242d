//! Page load errors.

use storefront_core::StorefrontError;

/// Error returned by a data source.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum SourceError {
    #[error("{source_name} request failed: {message}")]
    Request {
        source_name: &'static str,
        message: String,
    },

    #[error("{source_name} returned malformed data: {message}")]
    Malformed {
        source_name: &'static str,
        message: String,
    },
}

/// Why a page could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] SourceError),

    #[error(transparent)]
    Storefront(#[from] StorefrontError),
}

impl PageError {
    /// HTTP status the host should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            PageError::NotFound(_) => 404,
            PageError::Upstream(_) => 502,
            PageError::Storefront(_) => 500,
        }
    }
}
