//! Filter implementations used by the recommendation engine.

pub mod already_liked;
pub mod distinct_title;

pub use already_liked::AlreadyLikedFilter;
pub use distinct_title::DistinctTitleFilter;
