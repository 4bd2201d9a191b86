use chrono::{DateTime, Duration, Utc};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Unsend API key used as the bearer credential.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used in configuration (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Email identifier (`emailId`) assigned by Unsend on send.
///
/// Invariant when constructed via [`EmailId::new`]: non-empty after trimming.
/// Values decoded from responses skip that check so a lenient decode of a
/// partially-shaped body can surface an empty id rather than fail.
pub struct EmailId(String);

impl EmailId {
    /// JSON key used by Unsend (`emailId`).
    pub const FIELD: &'static str = "emailId";

    /// Create a validated [`EmailId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wrap a server-provided value without validation.
    pub(crate) fn from_wire(value: String) -> Self {
        Self(value)
    }

    /// Borrow the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact book identifier scoping all contact operations.
///
/// Invariant: non-empty after trimming.
pub struct ContactBookId(String);

impl ContactBookId {
    /// JSON key used by Unsend (`contactBookId`).
    pub const FIELD: &'static str = "contactBookId";

    /// Create a validated [`ContactBookId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact identifier (`contactId`) assigned by Unsend on creation.
///
/// Invariant when constructed via [`ContactId::new`]: non-empty after
/// trimming.
pub struct ContactId(String);

impl ContactId {
    /// JSON key used by Unsend (`contactId`).
    pub const FIELD: &'static str = "contactId";

    /// Create a validated [`ContactId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Safety margin applied when the caller does not schedule a send explicitly.
///
/// Unsend requires scheduled sends to be strictly in the future, so "send
/// now" is expressed as "send five seconds from now".
pub const DEFAULT_SEND_DELAY_SECONDS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Scheduled-send timestamp (`scheduledAt`).
///
/// Rendered on the wire as `yyyy-MM-ddTHH:mm:ssZ` (UTC, second precision).
pub struct ScheduledAt(DateTime<Utc>);

impl ScheduledAt {
    /// JSON key used by Unsend (`scheduledAt`).
    pub const FIELD: &'static str = "scheduledAt";

    /// `chrono` format string for the wire representation.
    pub const WIRE_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%SZ";

    /// Schedule at an explicit instant.
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// The default schedule: current time plus
    /// [`DEFAULT_SEND_DELAY_SECONDS`].
    pub fn from_now_plus_default() -> Self {
        Self(Utc::now() + Duration::seconds(DEFAULT_SEND_DELAY_SECONDS))
    }

    /// The wrapped instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Render the wire representation.
    pub fn to_wire(&self) -> String {
        self.0.format(Self::WIRE_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for ScheduledAt {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}
