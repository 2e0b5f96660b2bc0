// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Catalog, Criteria, ProviderField, ProviderRecord, ScoredProvider};
pub use requests::FindProvidersRequest;
pub use responses::{ErrorResponse, HealthResponse, ProviderResponse, ReloadResponse};
