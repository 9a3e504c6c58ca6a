//! Company record model.
//!
//! # Responsibility
//! - Define the finalized, typed Company → Employee → {Skill, Education} tree.
//! - Own the JSON blob shape used for persistence.
//!
//! # Invariants
//! - Ownership is a strict tree; records carry no identity besides position.
//! - `created_at` is assigned once at first save and copied verbatim after.
//! - Serialized field names match the persisted layout (`companyName`,
//!   `empInfo`, `skillInfo`, ...).

use crate::model::catalog::{Designation, SkillName};
use crate::validation::rules::rating_in_range;
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Top-level persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    pub email: String,
    pub phone_number: String,
    /// Local timestamp text of the first successful save.
    ///
    /// Empty only for blobs written without it.
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "empInfo", default)]
    pub employees: Vec<Employee>,
}

/// Employee owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "empName")]
    pub name: String,
    /// Older blobs store an unset designation as `""`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "designation_or_empty"
    )]
    pub designation: Option<Designation>,
    /// Serialized as `YYYY-MM-DD`.
    pub join_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    #[serde(rename = "skillInfo", default)]
    pub skills: Vec<Skill>,
    #[serde(rename = "educationInfo", default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: SkillName,
    /// Accepts both `4` and `"4"` on read; always written as a number.
    #[serde(deserialize_with = "rating_from_number_or_text")]
    pub skill_rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institute_name: String,
    pub course_name: String,
    /// Free text such as `Mar 2021`.
    pub completed_year: String,
}

impl Company {
    /// Returns whether `created_at` was ever assigned.
    pub fn has_created_at(&self) -> bool {
        !self.created_at.is_empty()
    }

    /// Total number of nested entries, used for metadata-only logging.
    pub fn nested_entry_count(&self) -> usize {
        self.employees
            .iter()
            .map(|employee| 1 + employee.skills.len() + employee.education.len())
            .sum()
    }
}

/// Serializes an ordered company list into the persisted blob format.
pub fn encode_companies(companies: &[Company]) -> serde_json::Result<String> {
    serde_json::to_string(companies)
}

/// Parses a persisted blob into an ordered company list.
pub fn decode_companies(blob: &str) -> serde_json::Result<Vec<Company>> {
    serde_json::from_str(blob)
}

fn designation_or_empty<'de, D>(deserializer: D) -> Result<Option<Designation>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(label) => Designation::from_label(label)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown designation `{label}`"))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingRepr {
    Number(u8),
    Text(String),
}

fn rating_from_number_or_text<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RatingRepr::deserialize(deserializer)? {
        RatingRepr::Number(value) => value.to_string(),
        RatingRepr::Text(text) => text,
    };
    rating_in_range(&text)
        .map_err(|err| de::Error::custom(format!("invalid skill rating `{text}`: {err}")))
}
