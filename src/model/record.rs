use serde::{Deserialize, Serialize};

/// Gender as it appears in the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse the serialized form. Anything outside the enumerated set is rejected.
    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// The other variant — the edit form toggles between the two.
    pub fn toggled(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// A single user record as loaded from the data source.
///
/// `id` is assigned at load time and never regenerated; everything else is
/// fair game for the inline editor (subject to field validation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub first: String,
    pub last: String,
    /// Date of birth, `YYYY-MM-DD`. Optional in the source data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Stored age. Only authoritative under the `editable` age policy;
    /// under `derived` the rendered age always comes from `dob`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub gender: Gender,
    pub country: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
}

impl UserRecord {
    /// Full display name, `First Last`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}
