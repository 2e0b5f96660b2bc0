// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod terms;

pub use filters::{filter_providers, matches_any_term};
pub use matcher::{rank_and_select, MatchResult, Matcher, MAX_RESULTS};
pub use scoring::{score_provider, score_providers, FieldScorer, ScoringTerms, SubstringScorer};
pub use terms::Terms;
