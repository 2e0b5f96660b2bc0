use crate::core::terms::Terms;
use crate::models::{ProviderField, ScoredProvider};

/// Inclusive substring filter on a single attribute
///
/// A provider passes when any term occurs in the attribute value. A missing
/// value never passes.
#[inline]
pub fn matches_any_term(value: Option<&str>, terms: &Terms) -> bool {
    terms.any_in(value)
}

/// Drop providers failing the location or language filters
///
/// An empty term list disables its filter. Active filters compose by AND.
/// Relative order of the survivors is preserved.
pub fn filter_providers<'a>(
    providers: Vec<ScoredProvider<'a>>,
    locations: &[String],
    languages: &[String],
) -> Vec<ScoredProvider<'a>> {
    let active: Vec<(ProviderField, Terms)> = [
        (ProviderField::Location, locations),
        (ProviderField::Language, languages),
    ]
    .into_iter()
    .filter(|(_, candidates)| !candidates.is_empty())
    .map(|(field, candidates)| (field, Terms::new(candidates)))
    .collect();

    if active.is_empty() {
        return providers;
    }

    providers
        .into_iter()
        .filter(|scored| {
            active
                .iter()
                .all(|(field, terms)| matches_any_term(scored.provider.get(*field), terms))
        })
        .collect()
}
