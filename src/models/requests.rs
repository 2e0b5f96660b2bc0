use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Criteria;

/// Request to search for providers
///
/// Every list is optional in the request body and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindProvidersRequest {
    #[validate(length(max = 64))]
    #[serde(default)]
    pub areas_of_concern: Vec<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub preferred_treatment_modality: Vec<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub therapist_preferences: Vec<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub locations: Vec<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub languages: Vec<String>,
}

impl From<FindProvidersRequest> for Criteria {
    fn from(req: FindProvidersRequest) -> Self {
        Criteria {
            areas_of_concern: req.areas_of_concern,
            preferred_treatment_modality: req.preferred_treatment_modality,
            therapist_preferences: req.therapist_preferences,
            locations: req.locations,
            payment_methods: req.payment_methods,
            languages: req.languages,
        }
    }
}
