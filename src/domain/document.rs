//! Document record referencing the user who last touched it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

pub type DocumentId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub content_path: Option<String>,
    pub doc_type: String,
    pub file_type: String,
    pub description: Option<String>,
    /// `None` once the auditing user has been deleted.
    pub audit_user_id: Option<UserId>,
    pub audit_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub content_path: Option<String>,
    pub doc_type: String,
    pub file_type: String,
    pub description: Option<String>,
    pub audit_user_id: Option<UserId>,
    pub audit_timestamp: DateTime<Utc>,
}
