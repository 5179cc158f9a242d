//! Page loaders.
//!
//! A loader gathers everything a page needs from the upstream sources,
//! runs the derived-state engines and keeps the result for rendering.

mod cart;
mod home;
mod product;

pub use cart::CartDrawer;
pub use home::HomePage;
pub use product::ProductPage;

use storefront_observability::{LogFormat, LogLevel, RequestId, StructuredLogger};

use crate::source::{CommerceSource, ContentSource};

/// How loaders log one request.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Id handed over by the host; a fresh one is generated when unset.
    pub request_id: Option<RequestId>,
    pub min_level: LogLevel,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            request_id: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }
}

/// Upstream sources and request context handed to loaders by the host.
#[derive(Clone)]
pub struct Sources<'a> {
    pub commerce: &'a dyn CommerceSource,
    pub content: &'a dyn ContentSource,
    pub logging: LogSettings,
}

impl<'a> Sources<'a> {
    pub fn new(commerce: &'a dyn CommerceSource, content: &'a dyn ContentSource) -> Self {
        Self {
            commerce,
            content,
            logging: LogSettings::default(),
        }
    }

    pub fn with_logging(mut self, logging: LogSettings) -> Self {
        self.logging = logging;
        self
    }

    fn logger(&self, page: &str, route: String) -> StructuredLogger {
        let request_id = self
            .logging
            .request_id
            .clone()
            .unwrap_or_else(RequestId::generate);

        StructuredLogger::new(request_id)
            .with_page(page)
            .with_route(route)
            .with_min_level(self.logging.min_level)
            .with_format(self.logging.format)
    }
}
