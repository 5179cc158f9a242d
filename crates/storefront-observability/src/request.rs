//! Request identifiers.

use std::fmt;

use serde::Serialize;
use storefront_core::ids::generate_id;

/// Unique identifier for one page render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new request ID, in the same format as the entity ids.
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Reuse an id handed over by the host (e.g. an `x-request-id` header).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_generated_id_is_hex_pair() {
        let id = RequestId::generate();
        let (time, seq) = id.as_str().split_once('-').unwrap();
        assert!(u128::from_str_radix(time, 16).is_ok());
        assert!(u64::from_str_radix(seq, 16).is_ok());
    }

    #[test]
    fn test_from_string() {
        let id = RequestId::from_string("req-42");
        assert_eq!(id.as_str(), "req-42");
        assert_eq!(id.to_string(), "req-42");
    }
}
