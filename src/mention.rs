//! Converts a final grade (NF) into a mention.
//!
//! | NF          | Mention | Passed |
//! |-------------|---------|--------|
//! | == 0        | SR      | no     |
//! | (0, 30)     | II      | no     |
//! | [30, 50)    | MI      | no     |
//! | [50, 70)    | MM      | yes    |
//! | [70, 90)    | MS      | yes    |
//! | >= 90       | SS      | yes    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GradeError;

/// Categorical grade label, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mention {
    /// SR: no grade at all.
    None,
    /// II
    Insufficient,
    /// MI
    IntermediateFail,
    /// MM
    IntermediatePass,
    /// MS
    GoodPass,
    /// SS
    Excellent,
}

impl Mention {
    pub const ALL: [Mention; 6] = [
        Mention::None,
        Mention::Insufficient,
        Mention::IntermediateFail,
        Mention::IntermediatePass,
        Mention::GoodPass,
        Mention::Excellent,
    ];

    /// Two-letter code used on transcripts.
    pub fn code(self) -> &'static str {
        match self {
            Mention::None => "SR",
            Mention::Insufficient => "II",
            Mention::IntermediateFail => "MI",
            Mention::IntermediatePass => "MM",
            Mention::GoodPass => "MS",
            Mention::Excellent => "SS",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mention::None => "No grade",
            Mention::Insufficient => "Insufficient",
            Mention::IntermediateFail => "Intermediate, failing",
            Mention::IntermediatePass => "Intermediate, passing",
            Mention::GoodPass => "Good",
            Mention::Excellent => "Excellent",
        }
    }

    /// MM and above pass.
    pub fn passed(self) -> bool {
        self >= Mention::IntermediatePass
    }
}

/// Maps a final grade onto its mention.
///
/// # Errors
///
/// Returns [`GradeError::Unclassifiable`] for negative or NaN grades, which
/// the formula cannot produce from in-range inputs.
pub fn classify(final_grade: f64) -> Result<Mention, GradeError> {
    let mention = match final_grade {
        g if g == 0.0 => Mention::None,
        g if g > 0.0 && g < 30.0 => Mention::Insufficient,
        g if (30.0..50.0).contains(&g) => Mention::IntermediateFail,
        g if (50.0..70.0).contains(&g) => Mention::IntermediatePass,
        g if (70.0..90.0).contains(&g) => Mention::GoodPass,
        g if g >= 90.0 => Mention::Excellent,
        g => return Err(GradeError::Unclassifiable(g)),
    };
    Ok(mention)
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Mention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mention::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mention code: {s}"))
    }
}

impl Serialize for Mention {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Mention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
