//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Password;
use crate::config::{
    is_valid_format, DateFormats, DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT, ROLE_ADMIN,
    ROLE_DESTINATION_AGENT, ROLE_MANUFACTURER, ROLE_ORIGIN_AGENT, STATUS_APPROVED,
    STATUS_PENDING, STATUS_REJECTED, VALID_ROLES,
};
use crate::errors::AppError;

/// Numeric user identifier assigned by the store.
pub type UserId = i64;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manufacturer,
    OriginAgent,
    DestinationAgent,
}

impl Role {
    /// Agents are tied to a country and approved on creation.
    pub fn is_agent(&self) -> bool {
        matches!(self, Role::OriginAgent | Role::DestinationAgent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Manufacturer => ROLE_MANUFACTURER,
            Role::OriginAgent => ROLE_ORIGIN_AGENT,
            Role::DestinationAgent => ROLE_DESTINATION_AGENT,
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Accepts `ORIGIN_AGENT`, `origin_agent` and `origin-agent`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_MANUFACTURER => Ok(Role::Manufacturer),
            ROLE_ORIGIN_AGENT => Ok(Role::OriginAgent),
            ROLE_DESTINATION_AGENT => Ok(Role::DestinationAgent),
            _ => Err(AppError::validation(format!(
                "Unknown role '{}', expected one of {}",
                s,
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Approval state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
}

impl UserStatus {
    /// Only pending users can be decided, and only once.
    pub fn can_transition_to(&self, target: UserStatus) -> bool {
        matches!(
            (self, target),
            (UserStatus::Pending, UserStatus::Approved) | (UserStatus::Pending, UserStatus::Rejected)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => STATUS_PENDING,
            UserStatus::Approved => STATUS_APPROVED,
            UserStatus::Rejected => STATUS_REJECTED,
        }
    }
}

impl FromStr for UserStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(UserStatus::Pending),
            STATUS_APPROVED => Ok(UserStatus::Approved),
            STATUS_REJECTED => Ok(UserStatus::Rejected),
            _ => Err(AppError::validation(format!("Unknown status '{}'", s))),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Password,
    pub role: Role,
    pub country: Option<String>,
    pub registered_date: DateTime<Utc>,
    pub status: UserStatus,
    pub audit_timestamp: DateTime<Utc>,
}

/// A user row that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub email: String,
    pub password: Password,
    pub role: Role,
    pub country: Option<String>,
    pub registered_date: DateTime<Utc>,
    pub status: UserStatus,
    pub audit_timestamp: DateTime<Utc>,
}

/// Caller-supplied user fields, validated at the service boundary.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[validate(
        custom(function = "not_blank", message = "First Name is mandatory"),
        length(max = 25, message = "First Name is too long")
    )]
    pub first_name: String,

    #[validate(
        custom(function = "not_blank", message = "Last Name is mandatory"),
        length(max = 25, message = "Last Name is too long")
    )]
    pub last_name: String,

    #[validate(length(max = 100, message = "Company is too long"))]
    pub company: Option<String>,

    #[validate(
        custom(function = "not_blank", message = "Email is mandatory"),
        email(message = "Email should be valid"),
        length(max = 100, message = "Email is too long")
    )]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Password is mandatory"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<Role>,

    #[validate(length(max = 50, message = "Country is too long"))]
    pub country: Option<String>,
}

impl UserForm {
    /// Trim surrounding whitespace from every text field except the password.
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.company = trim_optional(self.company);
        self.country = trim_optional(self.country);
        self
    }

    /// Resolve role and status into a draft ready for `save_user`.
    pub fn into_draft(self, id: Option<UserId>, role: Role, status: UserStatus) -> UserDraft {
        UserDraft {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            email: self.email,
            password: self.password,
            role,
            country: self.country,
            status,
        }
    }
}

/// Fully resolved user record still carrying the plaintext password.
///
/// `id == None` inserts, `Some(id)` overwrites that user.
#[derive(Clone)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub country: Option<String>,
    pub status: UserStatus,
}

impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("country", &self.country)
            .field("status", &self.status)
            .finish()
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Public projection used for registration, agent creation and listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub email: String,
    pub role: Role,
    pub country: Option<String>,
    pub registered_date: String,
}

impl UserSummary {
    pub fn new(user: &User, formats: &DateFormats) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            company: user.company.clone(),
            email: user.email.clone(),
            role: user.role,
            country: user.country.clone(),
            registered_date: render(&user.registered_date, &formats.date, DEFAULT_DATE_FORMAT),
        }
    }
}

/// Full detail projection (everything except the password).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(flatten)]
    pub summary: UserSummary,
    pub status: UserStatus,
    pub audit_timestamp: String,
}

impl UserResponse {
    pub fn new(user: &User, formats: &DateFormats) -> Self {
        Self {
            summary: UserSummary::new(user, formats),
            status: user.status,
            audit_timestamp: render(
                &user.audit_timestamp,
                &formats.timestamp,
                DEFAULT_TIMESTAMP_FORMAT,
            ),
        }
    }
}

/// Format with `pattern`, or with `fallback` if chrono cannot parse it.
fn render(at: &DateTime<Utc>, pattern: &str, fallback: &str) -> String {
    let pattern = if is_valid_format(pattern) { pattern } else { fallback };
    at.format(pattern).to_string()
}
