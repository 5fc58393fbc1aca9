use crate::model::{Gender, UserRecord};

/// An editable field of a user record. `Age` only appears in the edit form
/// under the `editable` age policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    First,
    Last,
    Dob,
    Age,
    Gender,
    Country,
    Description,
    Picture,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::First => "First name",
            Field::Last => "Last name",
            Field::Dob => "Date of birth",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Country => "Country",
            Field::Description => "Description",
            Field::Picture => "Picture",
        }
    }

    /// Whether a character may be typed into this field at all. Rejected
    /// keystrokes are silently dropped — the field visually does not change.
    pub fn accepts_char(self, c: char) -> bool {
        match self {
            Field::First | Field::Last | Field::Country => c.is_alphabetic(),
            Field::Age => c.is_ascii_digit(),
            Field::Dob => c.is_ascii_digit() || c == '-',
            // Gender is a toggle, not a text input
            Field::Gender => false,
            Field::Description | Field::Picture => true,
        }
    }
}

/// Letters only, at least one. Digits, spaces, and punctuation are all
/// rejected for name and country fields; so is the empty string.
fn is_alphabetic_value(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_alphabetic())
}

/// Apply a field edit to the draft, validating first.
///
/// Returns `true` if the value was applied. An invalid value leaves the
/// draft untouched — rejection is a no-op, never an error.
pub fn set_field(draft: &mut UserRecord, field: Field, value: &str) -> bool {
    match field {
        Field::First => {
            if !is_alphabetic_value(value) {
                return false;
            }
            draft.first = value.to_string();
        }
        Field::Last => {
            if !is_alphabetic_value(value) {
                return false;
            }
            draft.last = value.to_string();
        }
        Field::Country => {
            if !is_alphabetic_value(value) {
                return false;
            }
            draft.country = value.to_string();
        }
        Field::Age => match value.parse::<u32>() {
            Ok(n) => draft.age = Some(n),
            Err(_) => return false,
        },
        Field::Gender => match Gender::parse(value) {
            Some(g) => draft.gender = g,
            None => return false,
        },
        Field::Dob => {
            draft.dob = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        Field::Description => draft.description = value.to_string(),
        Field::Picture => draft.picture = value.to_string(),
    }
    true
}

/// The current text of a field, as shown in the edit form.
pub fn field_value(record: &UserRecord, field: Field) -> String {
    match field {
        Field::First => record.first.clone(),
        Field::Last => record.last.clone(),
        Field::Dob => record.dob.clone().unwrap_or_default(),
        Field::Age => record.age.map(|a| a.to_string()).unwrap_or_default(),
        Field::Gender => record.gender.as_str().to_string(),
        Field::Country => record.country.clone(),
        Field::Description => record.description.clone(),
        Field::Picture => record.picture.clone(),
    }
}

/// Dirty check: does the draft differ from the record currently in the
/// store? Save is only permitted while this holds. `id` is immutable so it
/// never participates.
pub fn modified(draft: &UserRecord, original: &UserRecord) -> bool {
    draft.first != original.first
        || draft.last != original.last
        || draft.dob != original.dob
        || draft.age != original.age
        || draft.gender != original.gender
        || draft.country != original.country
        || draft.description != original.description
        || draft.picture != original.picture
}
