use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Error;

/// Aggregation granularity of spot-price data, addressed in URLs by its
/// ISO 8601 duration token.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(try_from = "PeriodToken", into = "PeriodToken")]
pub enum TimePeriod {
    Hourly,
    Yearly,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 2] = [TimePeriod::Hourly, TimePeriod::Yearly];

    pub fn token(self) -> &'static str {
        match self {
            TimePeriod::Hourly => "PT1H",
            TimePeriod::Yearly => "P1Y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Hourly => "Hourly",
            TimePeriod::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TimePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::EmptyPeriodToken);
        }
        TimePeriod::ALL
            .into_iter()
            .find(|period| period.token() == s)
            .ok_or_else(|| Error::UnknownPeriodToken(s.to_owned()))
    }
}

#[derive(Clone, Deserialize, Serialize, Debug)]
#[serde(transparent)]
pub struct PeriodToken {
    token: String,
}

impl From<TimePeriod> for PeriodToken {
    fn from(value: TimePeriod) -> Self {
        Self {
            token: value.token().to_owned(),
        }
    }
}

impl TryFrom<PeriodToken> for TimePeriod {
    type Error = Error;

    fn try_from(value: PeriodToken) -> Result<Self, Self::Error> {
        value.token.parse()
    }
}
