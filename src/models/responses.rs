use serde::{Deserialize, Serialize};
use crate::models::domain::ProviderRecord;

/// A matched provider as returned to clients
///
/// The specialization attribute is exposed as `areas_of_concern`, which is
/// the name existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub ethnic_identity: Option<String>,
    pub gender_identity: Option<String>,
    pub language: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub treatment_modality: Option<String>,
    pub areas_of_concern: Option<String>,
}

impl From<ProviderRecord> for ProviderResponse {
    fn from(record: ProviderRecord) -> Self {
        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            ethnic_identity: record.ethnic_identity,
            gender_identity: record.gender_identity,
            language: record.language,
            location: record.location,
            bio: record.bio,
            treatment_modality: record.treatment_modality,
            areas_of_concern: record.areas_of_specialization,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub providers: usize,
    pub catalog_loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Catalog reload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub providers: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
