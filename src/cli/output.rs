use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{AgeField, UserRecord};
use crate::ops::age::age_on;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct RecordJson<'a> {
    pub id: &'a str,
    pub first: &'a str,
    pub last: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<&'a str>,
    /// Resolved per the active age policy; absent when unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub gender: &'a str,
    pub country: &'a str,
    pub description: &'a str,
    pub picture: &'a str,
}

/// The age reported for a record: derived from dob, or the stored value
/// under the `editable` policy (falling back to derivation).
pub fn resolve_age(record: &UserRecord, policy: AgeField, today: NaiveDate) -> Option<u32> {
    let derived = age_on(record.dob.as_deref(), today);
    match policy {
        AgeField::Derived => derived,
        AgeField::Editable => record.age.or(derived),
    }
}

pub fn record_json(record: &UserRecord, policy: AgeField, today: NaiveDate) -> RecordJson<'_> {
    RecordJson {
        id: &record.id,
        first: &record.first,
        last: &record.last,
        dob: record.dob.as_deref(),
        age: resolve_age(record, policy, today),
        gender: record.gender.as_str(),
        country: &record.country,
        description: &record.description,
        picture: &record.picture,
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn age_cell(age: Option<u32>) -> String {
    match age {
        Some(n) => n.to_string(),
        None => "N/A".to_string(),
    }
}

/// One line per record: id, name, age, gender, country.
pub fn print_records(records: &[&UserRecord], policy: AgeField, today: NaiveDate) {
    for record in records {
        println!(
            "{:<6} {:<24} {:>4}  {:<7} {}",
            record.id,
            record.full_name(),
            age_cell(resolve_age(record, policy, today)),
            record.gender.as_str(),
            record.country,
        );
    }
}

/// Full detail for a single record.
pub fn print_record_detail(record: &UserRecord, policy: AgeField, today: NaiveDate) {
    println!("{} {}", record.first, record.last);
    println!("  id:          {}", record.id);
    if let Some(dob) = &record.dob {
        println!("  dob:         {}", dob);
    }
    println!("  age:         {}", age_cell(resolve_age(record, policy, today)));
    println!("  gender:      {}", record.gender.as_str());
    println!("  country:     {}", record.country);
    if !record.description.is_empty() {
        println!("  description: {}", record.description);
    }
    if !record.picture.is_empty() {
        println!("  picture:     {}", record.picture);
    }
}
