use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the provider catalog
///
/// Every attribute is free text and may be missing. The serde names are the
/// column headers of the catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(rename = "First Name", default)]
    pub first_name: Option<String>,
    #[serde(rename = "Last Name", default)]
    pub last_name: Option<String>,
    #[serde(rename = "Ethnic Identity", default)]
    pub ethnic_identity: Option<String>,
    #[serde(rename = "Gender Identity", default)]
    pub gender_identity: Option<String>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Bio", default)]
    pub bio: Option<String>,
    #[serde(rename = "Treatment Modality", default)]
    pub treatment_modality: Option<String>,
    #[serde(rename = "Areas of Specialization", default)]
    pub areas_of_specialization: Option<String>,
}

impl ProviderRecord {
    /// Value of an attribute, treating an empty string as absent
    #[inline]
    pub fn get(&self, field: ProviderField) -> Option<&str> {
        let value = match field {
            ProviderField::FirstName => &self.first_name,
            ProviderField::LastName => &self.last_name,
            ProviderField::EthnicIdentity => &self.ethnic_identity,
            ProviderField::GenderIdentity => &self.gender_identity,
            ProviderField::Language => &self.language,
            ProviderField::Location => &self.location,
            ProviderField::Bio => &self.bio,
            ProviderField::TreatmentModality => &self.treatment_modality,
            ProviderField::AreasOfSpecialization => &self.areas_of_specialization,
        };

        value.as_deref().filter(|v| !v.is_empty())
    }

    /// True when every attribute is missing or empty
    pub fn is_blank(&self) -> bool {
        ProviderField::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// The attributes of a provider record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderField {
    FirstName,
    LastName,
    EthnicIdentity,
    GenderIdentity,
    Language,
    Location,
    Bio,
    TreatmentModality,
    AreasOfSpecialization,
}

impl ProviderField {
    pub const ALL: [ProviderField; 9] = [
        ProviderField::FirstName,
        ProviderField::LastName,
        ProviderField::EthnicIdentity,
        ProviderField::GenderIdentity,
        ProviderField::Language,
        ProviderField::Location,
        ProviderField::Bio,
        ProviderField::TreatmentModality,
        ProviderField::AreasOfSpecialization,
    ];

    /// Column header used by the catalog file
    pub fn header(&self) -> &'static str {
        match self {
            ProviderField::FirstName => "First Name",
            ProviderField::LastName => "Last Name",
            ProviderField::EthnicIdentity => "Ethnic Identity",
            ProviderField::GenderIdentity => "Gender Identity",
            ProviderField::Language => "Language",
            ProviderField::Location => "Location",
            ProviderField::Bio => "Bio",
            ProviderField::TreatmentModality => "Treatment Modality",
            ProviderField::AreasOfSpecialization => "Areas of Specialization",
        }
    }
}

/// Immutable snapshot of the provider catalog
///
/// Blank records are dropped on construction, so a catalog never contains a
/// record with every attribute empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    providers: Vec<ProviderRecord>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(providers: Vec<ProviderRecord>) -> Self {
        Self {
            providers: providers.into_iter().filter(|p| !p.is_blank()).collect(),
            loaded_at: Utc::now(),
        }
    }

    pub fn providers(&self) -> &[ProviderRecord] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A care-seeker's search criteria
///
/// Each list holds case-insensitive match terms. An empty list means "no
/// preference" for scoring fields and "no filter" for filtering fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub areas_of_concern: Vec<String>,
    #[serde(default)]
    pub preferred_treatment_modality: Vec<String>,
    #[serde(default)]
    pub therapist_preferences: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Reserved. The catalog has no payment attribute yet, so these terms are
    /// accepted and logged but neither score nor filter. Add a catalog column
    /// and a filter in `core::filters` to activate them.
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// A provider paired with its relevance score for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredProvider<'a> {
    pub provider: &'a ProviderRecord,
    pub score: u32,
}
