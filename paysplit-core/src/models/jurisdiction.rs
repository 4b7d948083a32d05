use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// UK tax region whose band schedules apply to an income.
///
/// Wales and Northern Ireland use the same schedules as England; only
/// Scotland sets its own wage bands and dividend thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[default]
    #[serde(rename = "eng")]
    England,
    #[serde(rename = "wal")]
    Wales,
    #[serde(rename = "ni")]
    NorthernIreland,
    #[serde(rename = "sco")]
    Scotland,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 4] = [
        Self::England,
        Self::Wales,
        Self::NorthernIreland,
        Self::Scotland,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::England => "eng",
            Self::Wales => "wal",
            Self::NorthernIreland => "ni",
            Self::Scotland => "sco",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::England => "England",
            Self::Wales => "Wales",
            Self::NorthernIreland => "Northern Ireland",
            Self::Scotland => "Scotland",
        }
    }

    /// Parses a jurisdiction code (`eng`, `sco`, `wal`, `ni`).
    ///
    /// Surrounding whitespace and letter case are ignored.
    pub fn parse(code: &str) -> Result<Self, SplitError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "eng" => Ok(Self::England),
            "wal" => Ok(Self::Wales),
            "ni" => Ok(Self::NorthernIreland),
            "sco" => Ok(Self::Scotland),
            _ => Err(SplitError::UnknownJurisdiction(code.to_string())),
        }
    }
}

impl FromStr for Jurisdiction {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
