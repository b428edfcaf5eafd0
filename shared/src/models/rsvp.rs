//! RSVP Models
//!
//! Two shapes live here:
//!
//! - [`RsvpForm`] — the in-progress capture, owned by one form session and
//!   discarded after a successful submit.
//! - [`RsvpRecord`] — the persisted document, one per submission, immutable
//!   once written. Modeled as a sum type so a declined response physically
//!   cannot carry attendance-dependent fields.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a companion key that is present (possibly `null`) into the
/// outer `Some`. Plain serde would collapse an explicit `null` into the
/// outer `None` and the key would vanish on re-serialization.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Bus service options offered to attending guests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusService {
    #[default]
    None,
    Roundtrip,
    OnewayThere,
    OnewayBack,
}

impl BusService {
    /// Raw wire value, as stored and as exported to CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            BusService::None => "none",
            BusService::Roundtrip => "roundtrip",
            BusService::OnewayThere => "oneway-there",
            BusService::OnewayBack => "oneway-back",
        }
    }
}

/// Companion sub-record (single named plus-one)
///
/// Exists only while the parent form has `has_companion = true`; the id is
/// generated when the companion is toggled on and has no meaning beyond the
/// form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub dietary_restrictions: String,
}

impl Companion {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            last_name: String::new(),
            dietary_restrictions: String::new(),
        }
    }
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}

/// In-progress RSVP capture
///
/// Invariant: `companion.is_some() == has_companion`. The only place that
/// touches both fields is [`RsvpForm::toggle_companion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RsvpForm {
    pub name: String,
    pub last_name: String,
    pub will_attend: bool,
    pub dietary_restrictions: String,
    pub has_companion: bool,
    pub companion: Option<Companion>,
    pub number_of_children: u8,
    pub bus_service: BusService,
    pub song_suggestion: String,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            last_name: String::new(),
            will_attend: true,
            dietary_restrictions: String::new(),
            has_companion: false,
            companion: None,
            number_of_children: 0,
            bus_service: BusService::None,
            song_suggestion: String::new(),
        }
    }
}

/// Persisted RSVP document
///
/// Serializes untagged: a declined response carries exactly the base keys,
/// an attending response carries the full set. `Attending` is tried first
/// on deserialization; a declined document lacks `hasCompanion`,
/// `numberOfChildren` and `busService` and falls through to `Declined`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RsvpRecord {
    Attending(AttendingRecord),
    Declined(DeclinedRecord),
}

/// Document for `willAttend = false`: base keys only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclinedRecord {
    pub name: String,
    pub last_name: String,
    pub will_attend: bool,
    /// Server-assigned, Unix milliseconds
    pub submitted_at: i64,
    /// Client string, informational only
    pub user_agent: String,
}

/// Document for `willAttend = true`
///
/// Empty free-text fields are stored as explicit `null`, never omitted, so
/// the admin view can rely on key presence. The companion keys are double
/// options: outer `None` = key absent (no companion), inner `None` = key
/// present but `null` (companion declared, field left empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendingRecord {
    pub name: String,
    pub last_name: String,
    pub will_attend: bool,
    pub submitted_at: i64,
    pub user_agent: String,
    pub dietary_restrictions: Option<String>,
    pub has_companion: bool,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub companion_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub companion_last_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub companion_dietary_restrictions: Option<Option<String>>,
    pub number_of_children: u8,
    pub bus_service: BusService,
    pub song_suggestion: Option<String>,
}

impl RsvpRecord {
    pub fn name(&self) -> &str {
        match self {
            RsvpRecord::Attending(r) => &r.name,
            RsvpRecord::Declined(r) => &r.name,
        }
    }

    pub fn last_name(&self) -> &str {
        match self {
            RsvpRecord::Attending(r) => &r.last_name,
            RsvpRecord::Declined(r) => &r.last_name,
        }
    }

    pub fn will_attend(&self) -> bool {
        matches!(self, RsvpRecord::Attending(_))
    }

    pub fn submitted_at(&self) -> i64 {
        match self {
            RsvpRecord::Attending(r) => r.submitted_at,
            RsvpRecord::Declined(r) => r.submitted_at,
        }
    }

    pub fn user_agent(&self) -> &str {
        match self {
            RsvpRecord::Attending(r) => &r.user_agent,
            RsvpRecord::Declined(r) => &r.user_agent,
        }
    }

    fn attending(&self) -> Option<&AttendingRecord> {
        match self {
            RsvpRecord::Attending(r) => Some(r),
            RsvpRecord::Declined(_) => None,
        }
    }

    pub fn has_companion(&self) -> bool {
        self.attending().map(|r| r.has_companion).unwrap_or(false)
    }

    pub fn dietary_restrictions(&self) -> Option<&str> {
        self.attending()
            .and_then(|r| r.dietary_restrictions.as_deref())
    }

    pub fn number_of_children(&self) -> Option<u8> {
        self.attending().map(|r| r.number_of_children)
    }

    pub fn bus_service(&self) -> Option<BusService> {
        self.attending().map(|r| r.bus_service)
    }

    pub fn song_suggestion(&self) -> Option<&str> {
        self.attending().and_then(|r| r.song_suggestion.as_deref())
    }

    pub fn companion_name(&self) -> Option<&str> {
        self.attending()
            .and_then(|r| r.companion_name.as_ref())
            .and_then(|v| v.as_deref())
    }

    pub fn companion_last_name(&self) -> Option<&str> {
        self.attending()
            .and_then(|r| r.companion_last_name.as_ref())
            .and_then(|v| v.as_deref())
    }

    pub fn companion_dietary_restrictions(&self) -> Option<&str> {
        self.attending()
            .and_then(|r| r.companion_dietary_restrictions.as_ref())
            .and_then(|v| v.as_deref())
    }
}

/// Persisted record with its store-assigned document id (admin reads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRsvp {
    pub id: String,
    #[serde(flatten)]
    pub record: RsvpRecord,
}
