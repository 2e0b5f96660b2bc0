// Criterion benchmarks for Care Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use care_match::core::{filters::filter_providers, scoring::score_providers, Matcher, SubstringScorer, Terms};
use care_match::models::{Catalog, Criteria, ProviderRecord};

const AREAS: [&str; 5] = ["Anxiety", "Depression", "Trauma", "Grief", "Low Self-Esteem"];
const MODALITIES: [&str; 4] = ["CBT", "DBT", "EMDR", "ACT"];
const STATES: [&str; 5] = ["CA", "NY", "TX", "WA", "IL"];

fn create_provider(id: usize) -> ProviderRecord {
    ProviderRecord {
        first_name: Some(format!("Provider {}", id)),
        last_name: Some("Bench".to_string()),
        ethnic_identity: Some(if id % 3 == 0 { "Asian" } else { "White" }.to_string()),
        gender_identity: Some(if id % 2 == 0 { "Female" } else { "Male" }.to_string()),
        language: Some(if id % 4 == 0 { "English, Spanish" } else { "English" }.to_string()),
        location: Some(format!("City {}, {}", id, STATES[id % STATES.len()])),
        bio: None,
        treatment_modality: Some(MODALITIES[id % MODALITIES.len()].to_string()),
        areas_of_specialization: Some(format!(
            "{}, {}",
            AREAS[id % AREAS.len()],
            AREAS[(id + 2) % AREAS.len()]
        )),
    }
}

fn create_criteria() -> Criteria {
    Criteria {
        areas_of_concern: vec!["anxiety".to_string(), "trauma".to_string()],
        preferred_treatment_modality: vec!["cbt".to_string()],
        therapist_preferences: vec!["female".to_string()],
        locations: vec!["ca".to_string(), "wa".to_string()],
        payment_methods: vec![],
        languages: vec!["english".to_string()],
    }
}

fn bench_terms(c: &mut Criterion) {
    let terms = Terms::new(&["anxiety", "trauma", "low self-esteem"]);

    c.bench_function("terms_count_in", |b| {
        b.iter(|| terms.count_in(black_box(Some("Life Transitions, Low Self-Esteem, Anxiety"))));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_scorer();
    let criteria = create_criteria();

    let mut group = c.benchmark_group("matching");

    for provider_count in [10, 100, 1000, 10000].iter() {
        let catalog = Catalog::new((0..*provider_count).map(create_provider).collect());

        group.bench_with_input(
            BenchmarkId::new("find_matches", provider_count),
            provider_count,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&catalog), black_box(&criteria)));
            },
        );
    }

    group.finish();
}

fn bench_scoring_and_filtering(c: &mut Criterion) {
    let criteria = create_criteria();
    let catalog: Vec<ProviderRecord> = (0..1000).map(create_provider).collect();

    c.bench_function("score_and_filter_1000_providers", |b| {
        b.iter(|| {
            let scored = score_providers(
                &SubstringScorer,
                black_box(&catalog),
                &criteria.areas_of_concern,
                &criteria.preferred_treatment_modality,
                &criteria.therapist_preferences,
            );

            black_box(filter_providers(scored, &criteria.locations, &criteria.languages))
        });
    });
}

criterion_group!(benches, bench_terms, bench_matching, bench_scoring_and_filtering);

criterion_main!(benches);
