use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nature of the workload being deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Static,
    Backend,
    Fullstack,
    Bot,
    Sms,
}

impl ProjectType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Static,
            Self::Backend,
            Self::Fullstack,
            Self::Bot,
            Self::Sms,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Bot => "bot",
            Self::Sms => "sms",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Static => "Static website",
            Self::Backend => "Backend API",
            Self::Fullstack => "Full-stack app",
            Self::Bot => "Bot / scheduler",
            Self::Sms => "SMS / notification system",
        }
    }
}

/// Availability the project needs from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Uptime {
    ToleratesDowntime,
    AlwaysOn,
}

impl Uptime {
    pub const fn ordered() -> [Self; 2] {
        [Self::ToleratesDowntime, Self::AlwaysOn]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToleratesDowntime => "tolerates_downtime",
            Self::AlwaysOn => "always_on",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ToleratesDowntime => "Can tolerate downtime",
            Self::AlwaysOn => "Must be always-on",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hosting {
    FreeBackend,
    StaticHost,
    Vps,
    ManagedCloud,
    Builder,
}

impl Hosting {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::FreeBackend,
            Self::StaticHost,
            Self::Vps,
            Self::ManagedCloud,
            Self::Builder,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeBackend => "free_backend",
            Self::StaticHost => "static_host",
            Self::Vps => "vps",
            Self::ManagedCloud => "managed_cloud",
            Self::Builder => "builder",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeBackend => "Free backend service",
            Self::StaticHost => "Static hosting",
            Self::Vps => "Cheap VPS",
            Self::ManagedCloud => "Managed cloud (AWS / GCP / Azure)",
            Self::Builder => "Website builder (Wix-like)",
        }
    }
}

/// Expected lifetime of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    Days,
    Weeks,
    Months,
}

impl Duration {
    pub const fn ordered() -> [Self; 3] {
        [Self::Days, Self::Weeks, Self::Months]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Days => "Hackathon / demo (days)",
            Self::Weeks => "Short project (weeks)",
            Self::Months => "Long project (months+)",
        }
    }
}

pub const INDIA_LABEL: &str = "India-based users";
pub const USES_SMS_LABEL: &str = "Using SMS / OTP";

/// Validated answers describing a project. Every field is drawn from its fixed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfile {
    pub project_type: ProjectType,
    pub uptime: Uptime,
    pub hosting: Hosting,
    pub duration: Duration,
    pub india: bool,
    #[serde(rename = "usesSMS")]
    pub uses_sms: bool,
}

/// Raw answers as collected at an input boundary (HTTP body, CLI flags).
///
/// Nothing here is trusted. Every string boundary turns a submission into a [`ProjectProfile`]
/// through [`ProfileSubmission::validate`], so out-of-domain values are rejected before
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    #[serde(default, alias = "project_type")]
    pub project_type: Option<String>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub hosting: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub india: Option<bool>,
    #[serde(default, rename = "usesSMS", alias = "uses_sms")]
    pub uses_sms: Option<bool>,
}

impl ProfileSubmission {
    /// Reads a submission from a decoded JSON object, rejecting the first field whose JSON
    /// type is wrong. Absent and `null` fields stay `None` for [`Self::validate`] to report.
    pub fn from_json_object(fields: &Map<String, Value>) -> Result<Self, ProfileError> {
        Ok(Self {
            project_type: text_field(fields, FIELD_PROJECT_TYPE, "project_type")?,
            uptime: text_field(fields, FIELD_UPTIME, FIELD_UPTIME)?,
            hosting: text_field(fields, FIELD_HOSTING, FIELD_HOSTING)?,
            duration: text_field(fields, FIELD_DURATION, FIELD_DURATION)?,
            india: flag_field(fields, FIELD_INDIA, FIELD_INDIA)?,
            uses_sms: flag_field(fields, FIELD_USES_SMS, "uses_sms")?,
        })
    }

    pub fn validate(self) -> Result<ProjectProfile, ProfileError> {
        let project_type = parse_field(
            FIELD_PROJECT_TYPE,
            self.project_type,
            &ProjectType::ordered(),
            |value| value.as_str(),
        )?;
        let uptime = parse_field(FIELD_UPTIME, self.uptime, &Uptime::ordered(), |value| {
            value.as_str()
        })?;
        let hosting = parse_field(FIELD_HOSTING, self.hosting, &Hosting::ordered(), |value| {
            value.as_str()
        })?;
        let duration = parse_field(
            FIELD_DURATION,
            self.duration,
            &Duration::ordered(),
            |value| value.as_str(),
        )?;
        let india = self.india.ok_or(ProfileError::MissingField {
            field: FIELD_INDIA,
        })?;
        let uses_sms = self.uses_sms.ok_or(ProfileError::MissingField {
            field: FIELD_USES_SMS,
        })?;

        Ok(ProjectProfile {
            project_type,
            uptime,
            hosting,
            duration,
            india,
            uses_sms,
        })
    }
}

impl From<ProjectProfile> for ProfileSubmission {
    fn from(profile: ProjectProfile) -> Self {
        Self {
            project_type: Some(profile.project_type.as_str().to_string()),
            uptime: Some(profile.uptime.as_str().to_string()),
            hosting: Some(profile.hosting.as_str().to_string()),
            duration: Some(profile.duration.as_str().to_string()),
            india: Some(profile.india),
            uses_sms: Some(profile.uses_sms),
        }
    }
}

impl TryFrom<ProfileSubmission> for ProjectProfile {
    type Error = ProfileError;

    fn try_from(submission: ProfileSubmission) -> Result<Self, Self::Error> {
        submission.validate()
    }
}

pub const FIELD_PROJECT_TYPE: &str = "projectType";
pub const FIELD_UPTIME: &str = "uptime";
pub const FIELD_HOSTING: &str = "hosting";
pub const FIELD_DURATION: &str = "duration";
pub const FIELD_INDIA: &str = "india";
pub const FIELD_USES_SMS: &str = "usesSMS";

/// Rejection raised when a submission is incomplete or carries an out-of-domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("invalid type for `{field}`: expected {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("invalid value `{value}` for `{field}` (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl ProfileError {
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::MissingField { field }
            | ProfileError::InvalidType { field, .. }
            | ProfileError::InvalidValue { field, .. } => *field,
        }
    }
}

fn lookup<'a>(fields: &'a Map<String, Value>, name: &str, alias: &str) -> Option<&'a Value> {
    fields
        .get(name)
        .or_else(|| fields.get(alias))
        .filter(|value| !value.is_null())
}

fn text_field(
    fields: &Map<String, Value>,
    field: &'static str,
    alias: &str,
) -> Result<Option<String>, ProfileError> {
    match lookup(fields, field, alias) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(ProfileError::InvalidType {
            field,
            expected: "a string",
            found: other.to_string(),
        }),
    }
}

fn flag_field(
    fields: &Map<String, Value>,
    field: &'static str,
    alias: &str,
) -> Result<Option<bool>, ProfileError> {
    match lookup(fields, field, alias) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(ProfileError::InvalidType {
            field,
            expected: "a boolean",
            found: other.to_string(),
        }),
    }
}

fn parse_field<T: Copy>(
    field: &'static str,
    raw: Option<String>,
    domain: &[T],
    token: impl Fn(T) -> &'static str,
) -> Result<T, ProfileError> {
    let raw = raw.ok_or(ProfileError::MissingField { field })?;
    let trimmed = raw.trim();

    domain
        .iter()
        .copied()
        .find(|candidate| token(*candidate) == trimmed)
        .ok_or_else(|| ProfileError::InvalidValue {
            field,
            value: raw.clone(),
            expected: domain
                .iter()
                .map(|candidate| token(*candidate))
                .collect::<Vec<_>>()
                .join(", "),
        })
}
