use crate::core::terms::Terms;
use crate::models::{ProviderField, ProviderRecord, ScoredProvider};

/// Strategy for scoring one provider attribute against a list of terms
///
/// Implementations must return 0 for a missing value or an empty term list.
pub trait FieldScorer {
    fn score_field(&self, terms: &Terms, value: Option<&str>) -> u32;
}

/// Counts the terms that occur as case-insensitive substrings of the value
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringScorer;

impl FieldScorer for SubstringScorer {
    #[inline]
    fn score_field(&self, terms: &Terms, value: Option<&str>) -> u32 {
        terms.count_in(value)
    }
}

/// Prepared terms for the three scoring dimensions
#[derive(Debug, Clone, Default)]
pub struct ScoringTerms {
    pub areas_of_concern: Terms,
    pub preferred_treatment_modality: Terms,
    pub therapist_preferences: Terms,
}

impl ScoringTerms {
    pub fn new(
        areas_of_concern: &[String],
        preferred_treatment_modality: &[String],
        therapist_preferences: &[String],
    ) -> Self {
        Self {
            areas_of_concern: Terms::new(areas_of_concern),
            preferred_treatment_modality: Terms::new(preferred_treatment_modality),
            therapist_preferences: Terms::new(therapist_preferences),
        }
    }
}

/// Total relevance score of a single provider
///
/// score = area_score + modality_score + preference_score, where
/// preference_score counts therapist preference terms against both the
/// ethnic and the gender identity. A term found in both counts twice.
pub fn score_provider<S: FieldScorer + ?Sized>(
    scorer: &S,
    provider: &ProviderRecord,
    terms: &ScoringTerms,
) -> u32 {
    let area_score = scorer.score_field(
        &terms.areas_of_concern,
        provider.get(ProviderField::AreasOfSpecialization),
    );

    let modality_score = scorer.score_field(
        &terms.preferred_treatment_modality,
        provider.get(ProviderField::TreatmentModality),
    );

    let preference_score = scorer.score_field(
        &terms.therapist_preferences,
        provider.get(ProviderField::EthnicIdentity),
    ) + scorer.score_field(
        &terms.therapist_preferences,
        provider.get(ProviderField::GenderIdentity),
    );

    area_score + modality_score + preference_score
}

/// Score every provider in the catalog
///
/// Scoring never drops a provider; those matching nothing score 0. Output
/// order is catalog order.
pub fn score_providers<'a, S: FieldScorer + ?Sized>(
    scorer: &S,
    catalog: &'a [ProviderRecord],
    areas_of_concern: &[String],
    preferred_treatment_modality: &[String],
    therapist_preferences: &[String],
) -> Vec<ScoredProvider<'a>> {
    let terms = ScoringTerms::new(
        areas_of_concern,
        preferred_treatment_modality,
        therapist_preferences,
    );

    catalog
        .iter()
        .map(|provider| ScoredProvider {
            provider,
            score: score_provider(scorer, provider, &terms),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> ProviderRecord {
        ProviderRecord {
            first_name: Some("Dana".to_string()),
            last_name: Some("Reyes".to_string()),
            ethnic_identity: Some("Hispanic or Latino".to_string()),
            gender_identity: Some("Female".to_string()),
            language: Some("English, Spanish".to_string()),
            location: Some("San Diego, CA".to_string()),
            bio: None,
            treatment_modality: Some("CBT, EMDR".to_string()),
            areas_of_specialization: Some("Anxiety, Trauma, Low Self-Esteem".to_string()),
        }
    }

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_sums_dimensions() {
        let provider = create_test_provider();
        let scoring = ScoringTerms::new(
            &terms(&["anxiety", "trauma", "ocd"]),
            &terms(&["cbt"]),
            &terms(&["latino"]),
        );

        assert_eq!(score_provider(&SubstringScorer, &provider, &scoring), 4);
    }

    #[test]
    fn test_preference_counts_both_identity_fields() {
        let provider = ProviderRecord {
            ethnic_identity: Some("Female-identified collective".to_string()),
            gender_identity: Some("Female".to_string()),
            ..Default::default()
        };
        let scoring = ScoringTerms::new(&[], &[], &terms(&["female"]));

        assert_eq!(score_provider(&SubstringScorer, &provider, &scoring), 2);
    }

    #[test]
    fn test_empty_criteria_scores_zero() {
        let provider = create_test_provider();
        let scoring = ScoringTerms::default();

        assert_eq!(score_provider(&SubstringScorer, &provider, &scoring), 0);
    }

    #[test]
    fn test_missing_fields_score_zero() {
        let provider = ProviderRecord {
            first_name: Some("Sam".to_string()),
            ..Default::default()
        };
        let scoring = ScoringTerms::new(&terms(&["anxiety"]), &terms(&["cbt"]), &terms(&["male"]));

        assert_eq!(score_provider(&SubstringScorer, &provider, &scoring), 0);
    }

    #[test]
    fn test_score_providers_keeps_everyone_in_order() {
        let catalog = vec![
            ProviderRecord {
                first_name: Some("A".to_string()),
                ..Default::default()
            },
            create_test_provider(),
        ];

        let scored = score_providers(&SubstringScorer, &catalog, &terms(&["trauma"]), &[], &[]);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, 0);
        assert_eq!(scored[1].score, 1);
        assert!(std::ptr::eq(scored[1].provider, &catalog[1]));
    }

    #[test]
    fn test_custom_scorer() {
        struct PresenceScorer;

        impl FieldScorer for PresenceScorer {
            fn score_field(&self, terms: &Terms, value: Option<&str>) -> u32 {
                terms.any_in(value) as u32
            }
        }

        let provider = create_test_provider();
        let scoring = ScoringTerms::new(&terms(&["anxiety", "trauma"]), &[], &[]);

        assert_eq!(score_provider(&PresenceScorer, &provider, &scoring), 1);
    }
}
