use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::WordForms;

/// Currency whose unit word closes a spelled-out amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Kazakhstani tenge. The noun is indeclinable, so all three forms match.
    #[default]
    Kzt,
}

impl Currency {
    /// Lowercase ISO 4217 code, as accepted by [`Currency::from_str`].
    pub fn code(self) -> &'static str {
        match self {
            Currency::Kzt => "kzt",
        }
    }

    /// Agreement forms of the main currency unit.
    pub const fn unit(self) -> WordForms {
        match self {
            Currency::Kzt => WordForms::new("тенге", "тенге", "тенге"),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// Returned when a currency code is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported currency '{code}', expected one of: kzt")]
pub struct ParseCurrencyError {
    pub code: String,
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kzt" => Ok(Currency::Kzt),
            _ => Err(ParseCurrencyError {
                code: s.to_string(),
            }),
        }
    }
}
