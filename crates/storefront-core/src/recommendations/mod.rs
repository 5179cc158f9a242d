//! "You may also like" product recommendations.

mod merge;

pub use merge::{merge_recommendations, RecommendationResponse};
