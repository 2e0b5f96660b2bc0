//! Care Match - provider matching service for mental health care seekers
//!
//! This library ranks providers from a fixed catalog against free-text search
//! criteria. Providers are scored by substring matches across specialization,
//! treatment modality and identity preferences, filtered by location and
//! language, and the top three are returned.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{FieldScorer, MatchResult, Matcher, SubstringScorer, Terms, MAX_RESULTS};
pub use models::{Catalog, Criteria, FindProvidersRequest, ProviderRecord, ProviderResponse, ScoredProvider};
pub use services::{CatalogError, CatalogStore};
