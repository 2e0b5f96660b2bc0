// Unit tests for Care Match

use care_match::core::{
    filters::{filter_providers, matches_any_term},
    matcher::rank_and_select,
    scoring::{score_provider, score_providers, ScoringTerms, SubstringScorer},
    terms::Terms,
};
use care_match::models::{ProviderRecord, ScoredProvider};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_provider() -> ProviderRecord {
    ProviderRecord {
        first_name: Some("Rosa".to_string()),
        last_name: Some("Lindqvist".to_string()),
        ethnic_identity: Some("White".to_string()),
        gender_identity: Some("Female".to_string()),
        language: Some("English, Swedish".to_string()),
        location: Some("Minneapolis, MN".to_string()),
        bio: Some("Helping adults through life transitions.".to_string()),
        treatment_modality: Some("ACT, Mindfulness-Based Therapy".to_string()),
        areas_of_specialization: Some("Life Transitions, Low Self-Esteem, Anxiety".to_string()),
    }
}

#[test]
fn test_terms_match_ignoring_case() {
    let terms = Terms::new(&["SELF-ESTEEM"]);
    assert!(terms.any_in(Some("Low Self-Esteem")));
    assert_eq!(terms.count_in(Some("low self-esteem")), 1);
}

#[test]
fn test_male_term_matches_female_value() {
    // Substring matching, not token matching
    let terms = Terms::new(&["male"]);
    assert!(terms.any_in(Some("Female")));
}

#[test]
fn test_score_is_sum_of_dimensions() {
    let provider = create_provider();
    let terms = ScoringTerms::new(
        &strings(&["anxiety", "low self-esteem"]),
        &strings(&["mindfulness"]),
        &strings(&["female", "white"]),
    );

    assert_eq!(score_provider(&SubstringScorer, &provider, &terms), 5);
}

#[test]
fn test_adding_terms_never_lowers_score() {
    let catalog = vec![create_provider()];
    let base = score_providers(&SubstringScorer, &catalog, &strings(&["anxiety"]), &[], &[]);
    let more = score_providers(
        &SubstringScorer,
        &catalog,
        &strings(&["anxiety", "ptsd"]),
        &strings(&["emdr"]),
        &strings(&["nonbinary"]),
    );

    assert!(more[0].score >= base[0].score);
}

#[test]
fn test_bio_is_not_scored() {
    let provider = create_provider();
    let terms = ScoringTerms::new(&strings(&["adults"]), &[], &[]);

    assert_eq!(score_provider(&SubstringScorer, &provider, &terms), 0);
}

#[test]
fn test_matches_any_term_missing_value() {
    assert!(!matches_any_term(None, &Terms::new(&["mn"])));
}

#[test]
fn test_filter_then_rank() {
    let catalog = vec![
        ProviderRecord {
            first_name: Some("North".to_string()),
            location: Some("Duluth, MN".to_string()),
            ..Default::default()
        },
        ProviderRecord {
            first_name: Some("South".to_string()),
            location: Some("Austin, TX".to_string()),
            ..Default::default()
        },
        create_provider(),
    ];

    let scored: Vec<ScoredProvider<'_>> = catalog
        .iter()
        .zip([0, 5, 2])
        .map(|(provider, score)| ScoredProvider { provider, score })
        .collect();

    let filtered = filter_providers(scored, &strings(&["mn"]), &[]);
    let selected = rank_and_select(filtered);

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].first_name.as_deref(), Some("Rosa"));
    assert_eq!(selected[1].first_name.as_deref(), Some("North"));
}
