use crate::Result;

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// Exact decimal amount of money. All arithmetic is checked and never goes through floating point.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            Err(MoneyError::Parse("Empty amount", string.to_string()))?
        }

        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| MoneyError::Parse("Not a decimal number", string.to_string()))?;

        return Ok(Money(amount));
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| MoneyError::Overflow("add", *self, *other))?;

        self.0 = sum;

        return Ok(());
    }

    pub fn negate(&self) -> Self {
        return Self(-self.0);
    }

    /// Sums every amount exactly, starting from zero
    pub fn sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Result<Self> {
        let mut total = Money::ZERO;

        for amount in amounts {
            total.add(amount)?;
        }

        return Ok(total);
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        return Self(amount);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
