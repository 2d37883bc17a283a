//! Shared types used across drindex. The only one today is `Frequency`,
//! the period granularity shared by the index baselines and the time labeler.
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

/// Calendar granularity for baseline grouping and time-axis stepping.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Frequency {
    Day,
    Month,
    Year,
}

impl Frequency {
    /// Resolve an optional caller-supplied token, defaulting to `Month`.
    pub fn resolve(token: Option<&str>) -> Result<Self, Error> {
        match token {
            None => Ok(Frequency::Month),
            Some(t) => t.parse(),
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Month
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Error> {
        match token.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "days" => Ok(Frequency::Day),
            "m" | "month" | "months" => Ok(Frequency::Month),
            "y" | "year" | "years" => Ok(Frequency::Year),
            _ => {
                warn!(
                    "Unsupported frequency token: {}. Only daily, monthly and yearly are supported",
                    token
                );
                Err(Error::UnsupportedFrequency {
                    token: token.to_string(),
                })
            }
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Day => "day",
            Frequency::Month => "month",
            Frequency::Year => "year",
        };
        write!(f, "{}", s)
    }
}
