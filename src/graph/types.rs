use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender of a person, as stored by the app.
///
/// Anything other than the two known markers deserializes to `Other`, so a
/// record with a missing or free-form gender still loads; it only loses
/// gendered kinship wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "MALE")]
    Male,
    #[serde(rename = "FEMALE")]
    Female,
    #[default]
    #[serde(rename = "OTHER", other)]
    Other,
}

/// A person record as supplied by the app's persistence layer.
///
/// Parent and spouse links are weak references by id; nothing guarantees the
/// referenced record exists. A dangling link means "unknown" and simply ends
/// a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Maiden name, rendered with the French "née" convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_name: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_id: Option<String>,
}

impl Person {
    /// "First Last", plus the maiden name when it differs from the married name.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        match &self.birth_name {
            Some(birth) if *birth != self.last_name => format!("{} (née {})", name, birth),
            _ => name,
        }
    }
}
