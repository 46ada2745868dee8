//! Canonical object types, grouped by vertical.
//!
//! An [`ObjectType`] is the first half of every mapping key; the provider name is the second.
//! Its textual form is `<vertical>.<object>` (e.g. `crm.stage`), which is also what it
//! serializes to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A product category of providers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    Crm,
    Ticketing,
}

impl Vertical {
    /// Every vertical, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Objects of the CRM vertical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CrmObject {
    Company,
    Contact,
    Deal,
    Event,
    Lead,
    Note,
    Stage,
    Task,
    User,
}

/// Objects of the Ticketing vertical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketingObject {
    Ticket,
    Comment,
    User,
    Attachment,
    Contact,
    Account,
    Tag,
    Team,
}

/// A canonical object type, scoped by its vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Crm(CrmObject),
    Ticketing(TicketingObject),
}

/// Failure to parse an [`ObjectType`] or one of its parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectTypeError {
    #[error("Unknown vertical: {0}")]
    UnknownVertical(String),
    #[error("Unknown {vertical} object: {object}")]
    UnknownObject { vertical: Vertical, object: String },
    #[error("Malformed object type '{0}', expected '<vertical>.<object>'")]
    Malformed(String),
}

impl ObjectType {
    /// Builds an object type from its two textual halves (e.g. `"crm"`, `"stage"`).
    ///
    /// # Errors
    /// Returns [`ObjectTypeError`] when either half is unknown.
    pub fn parse(vertical: &str, object: &str) -> Result<Self, ObjectTypeError> {
        let vertical = Vertical::from_str(vertical)
            .map_err(|_| ObjectTypeError::UnknownVertical(vertical.to_owned()))?;
        let unknown = || ObjectTypeError::UnknownObject { vertical, object: object.to_owned() };

        match vertical {
            Vertical::Crm => CrmObject::from_str(object).map(Self::Crm).map_err(|_| unknown()),
            Vertical::Ticketing => {
                TicketingObject::from_str(object).map(Self::Ticketing).map_err(|_| unknown())
            },
        }
    }

    #[must_use]
    pub const fn vertical(self) -> Vertical {
        match self {
            Self::Crm(_) => Vertical::Crm,
            Self::Ticketing(_) => Vertical::Ticketing,
        }
    }

    /// The object half of the type, without the vertical prefix.
    #[must_use]
    pub fn object_name(self) -> &'static str {
        match self {
            Self::Crm(object) => object.into(),
            Self::Ticketing(object) => object.into(),
        }
    }

    /// Every known object type, CRM first.
    pub fn all() -> impl Iterator<Item = Self> {
        CrmObject::iter().map(Self::Crm).chain(TicketingObject::iter().map(Self::Ticketing))
    }
}

impl From<CrmObject> for ObjectType {
    fn from(object: CrmObject) -> Self {
        Self::Crm(object)
    }
}

impl From<TicketingObject> for ObjectType {
    fn from(object: TicketingObject) -> Self {
        Self::Ticketing(object)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.vertical(), self.object_name())
    }
}

impl FromStr for ObjectType {
    type Err = ObjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (vertical, object) =
            s.split_once('.').ok_or_else(|| ObjectTypeError::Malformed(s.to_owned()))?;
        Self::parse(vertical, object)
    }
}

impl Serialize for ObjectType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
