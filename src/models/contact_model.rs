//! models/contact_model.rs
//! Contact entity, its status enum and the request/response bodies of the API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::New,
        ContactStatus::Contacted,
        ContactStatus::Qualified,
        ContactStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Contacted => "contacted",
            ContactStatus::Qualified => "qualified",
            ContactStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ContactStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A persisted contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub service: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

impl<'r> FromRow<'r, SqliteRow> for Contact {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: Option<String> = row.try_get("updated_at")?;

        Ok(Contact {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            service: row.try_get("service")?,
            message: row.try_get("message")?,
            status: status
                .parse()
                .map_err(|e: UnknownStatus| sqlx::Error::Decode(Box::new(e)))?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: updated_at.as_deref().map(decode_timestamp).transpose()?,
        })
    }
}

/// Raw body of `POST /api/contact`. Every field is optional here so that
/// missing fields are reported together by the validation layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub service: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitContactResponse {
    pub success: bool,
    pub message: String,
    pub contact_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListContactsResponse {
    pub success: bool,
    pub count: usize,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCount {
    pub service: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactStats {
    pub total_contacts: u64,
    pub new_contacts: u64,
    pub contacted: u64,
    pub qualified: u64,
    pub closed: u64,
    pub service_breakdown: Vec<ServiceCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: ContactStats,
}
