use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which source of truth the age column uses.
///
/// The two observed variants of this tool disagree: one derives age from the
/// date of birth, the other stores age as its own editable field. This is a
/// configuration choice, not something we pick silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeField {
    /// Age is computed from `dob`; the edit form has no age input.
    #[default]
    Derived,
    /// Age is a stored numeric field, editable directly.
    Editable,
}

/// Configuration from roster.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub age_field: AgeField,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
