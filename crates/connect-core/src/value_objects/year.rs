//! Year of study - enumerated academic year

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic year of a student, rendered as "1st".."4th" on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
}

impl Year {
    /// All years, in ascending order
    pub const ALL: [Year; 4] = [Year::First, Year::Second, Year::Third, Year::Fourth];

    /// Wire representation ("1st".."4th")
    pub fn as_str(&self) -> &'static str {
        match self {
            Year::First => "1st",
            Year::Second => "2nd",
            Year::Third => "3rd",
            Year::Fourth => "4th",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a Year from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid year of study")]
pub struct YearParseError;

impl std::str::FromStr for Year {
    type Err = YearParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1st" => Ok(Year::First),
            "2nd" => Ok(Year::Second),
            "3rd" => Ok(Year::Third),
            "4th" => Ok(Year::Fourth),
            _ => Err(YearParseError),
        }
    }
}
