//! Genre-overlap recommendations over validated movie and user catalogs.
//!
//! This crate provides:
//! - CatalogIndex for id and genre lookups over a parsed catalog
//! - UserProfile (liked ids + liked-genre union) per user
//! - Filter trait, filters and FilterPipeline for narrowing candidates
//! - Recommender for one user or a whole batch
//! - Report rendering and the stream-level `run::process` orchestration
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{Recommender, report};
//!
//! let recommender = Recommender::new(&movies);
//! let recommendations = recommender.generate_for_all(&users);
//! report::write_report(&mut std::io::stdout(), &recommendations)?;
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod index;
pub mod profile;
pub mod report;
pub mod run;
pub mod traits;

// Re-export main types
pub use engine::{Recommender, UserRecommendations, generate_for_all, recommend};
pub use filter_pipeline::FilterPipeline;
pub use index::CatalogIndex;
pub use profile::{UserProfile, build_user_profile};
pub use report::format_recommendations;
pub use run::{RunOutcome, process};
pub use traits::Filter;
