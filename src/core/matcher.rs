use crate::models::{Catalog, Criteria, ProviderRecord, ScoredProvider};
use crate::core::{
    filters::filter_providers,
    scoring::{score_providers, FieldScorer, SubstringScorer},
};

/// Maximum number of providers returned for a search
pub const MAX_RESULTS: usize = 3;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Best matches, highest score first, at most [`MAX_RESULTS`]
    pub providers: Vec<ProviderRecord>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Sort by score descending and keep the top [`MAX_RESULTS`]
///
/// The sort is stable: equal scores keep their input order. Scores are
/// stripped from the returned records.
pub fn rank_and_select(mut providers: Vec<ScoredProvider<'_>>) -> Vec<ProviderRecord> {
    providers.sort_by(|a, b| b.score.cmp(&a.score));

    providers
        .into_iter()
        .take(MAX_RESULTS)
        .map(|scored| scored.provider.clone())
        .collect()
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every catalog record against the scoring criteria
/// 2. Drop records failing the location and language filters
/// 3. Rank by score and keep the top results
///
/// The matcher holds no per-request state; one instance can serve any number
/// of concurrent searches against shared catalog snapshots.
#[derive(Debug, Clone, Default)]
pub struct Matcher<S = SubstringScorer> {
    scorer: S,
}

impl Matcher<SubstringScorer> {
    pub fn with_default_scorer() -> Self {
        Self {
            scorer: SubstringScorer,
        }
    }
}

impl<S: FieldScorer> Matcher<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Find the best providers in `catalog` for `criteria`
    ///
    /// Deterministic: the same catalog and criteria always produce the same
    /// ordered result.
    pub fn find_matches(&self, catalog: &Catalog, criteria: &Criteria) -> MatchResult {
        let total_candidates = catalog.len();

        if !criteria.payment_methods.is_empty() {
            tracing::debug!(
                "Ignoring {} payment method terms, catalog has no payment attribute",
                criteria.payment_methods.len()
            );
        }

        let scored = score_providers(
            &self.scorer,
            catalog.providers(),
            &criteria.areas_of_concern,
            &criteria.preferred_treatment_modality,
            &criteria.therapist_preferences,
        );

        let eligible = filter_providers(scored, &criteria.locations, &criteria.languages);
        let eligible_candidates = eligible.len();

        tracing::debug!(
            "{} of {} providers passed filters",
            eligible_candidates,
            total_candidates
        );

        MatchResult {
            providers: rank_and_select(eligible),
            total_candidates,
            eligible_candidates,
        }
    }
}
