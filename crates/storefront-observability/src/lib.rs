//! Observability for storefront page renders.
//!
//! This crate provides:
//! - `RequestId` - Unique id correlating every log line of one page render
//! - `StructuredLogger` - Structured logging with page/route context

mod logging;
mod request;

pub use logging::*;
pub use request::*;
