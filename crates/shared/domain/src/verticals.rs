use crate::constants::{CRM, TICKETING};
use crate::objects::Vertical;
use bitflags::bitflags;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

bitflags! {
    /// Represents a set of enabled verticals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct VerticalSet: u32 {
        const CRM = 1 << 0;
        const TICKETING = 1 << 1;

        const ALL = Self::CRM.bits() | Self::TICKETING.bits();
    }
}

impl VerticalSet {
    #[must_use]
    pub const fn has(self, vertical: Vertical) -> bool {
        self.contains(Self::from_vertical(vertical))
    }

    const fn from_vertical(vertical: Vertical) -> Self {
        match vertical {
            Vertical::Crm => Self::CRM,
            Vertical::Ticketing => Self::TICKETING,
        }
    }
}

impl Default for VerticalSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for VerticalSet {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            CRM => Self::CRM,
            TICKETING => Self::TICKETING,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<Vertical> for VerticalSet {
    fn from(vertical: Vertical) -> Self {
        Self::from_vertical(vertical)
    }
}

impl Serialize for VerticalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names: Vec<&str> = [(Self::CRM, CRM), (Self::TICKETING, TICKETING)]
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .collect();

        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for VerticalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(Self::empty(), |set, name| {
            let flag = Self::from(name.as_str());
            if flag.is_empty() {
                return Err(serde::de::Error::custom(format!("Unknown vertical: {name}")));
            }
            Ok(set | flag)
        })
    }
}
