//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator who approves or rejects manufacturers
pub const ROLE_ADMIN: &str = "ADMIN";

/// Self-registered manufacturer awaiting approval
pub const ROLE_MANUFACTURER: &str = "MANUFACTURER";

/// Agent handling shipments in the origin country
pub const ROLE_ORIGIN_AGENT: &str = "ORIGIN_AGENT";

/// Agent handling shipments in the destination country
pub const ROLE_DESTINATION_AGENT: &str = "DESTINATION_AGENT";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_MANUFACTURER,
    ROLE_ORIGIN_AGENT,
    ROLE_DESTINATION_AGENT,
];

// =============================================================================
// User Status
// =============================================================================

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_REJECTED: &str = "REJECTED";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://ambillion.db?mode=rwc";

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Default memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

/// Default number of passes
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Output Formatting
// =============================================================================

/// Format for calendar dates (registration date)
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Format for timestamps (audit timestamp)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

// =============================================================================
// Column Widths (kept in step with `UserForm` validation)
// =============================================================================

pub const MAX_NAME_LENGTH: u32 = 25;
pub const MAX_COMPANY_LENGTH: u32 = 100;
pub const MAX_EMAIL_LENGTH: u32 = 100;
pub const MAX_COUNTRY_LENGTH: u32 = 50;
pub const MAX_PASSWORD_HASH_LENGTH: u32 = 250;
pub const MAX_ENUM_LENGTH: u32 = 20;

pub const MAX_DOCUMENT_NAME_LENGTH: u32 = 50;
pub const MAX_CONTENT_PATH_LENGTH: u32 = 150;
pub const MAX_DOC_TYPE_LENGTH: u32 = 50;
pub const MAX_FILE_TYPE_LENGTH: u32 = 25;
pub const MAX_DESCRIPTION_LENGTH: u32 = 200;
