//! Currency amounts in integer minor units.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a money amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Input is not a decimal number.
    #[error("Invalid amount: {input:?}")]
    Malformed { input: String },

    /// Input has more than two fractional digits.
    #[error("Invalid amount: {input:?} (at most 2 decimal places)")]
    TooPrecise { input: String },

    /// Input does not fit in the amount range.
    #[error("Amount out of range: {input:?}")]
    OutOfRange { input: String },
}

/// Money amount represented in cents to avoid floating point drift.
///
/// Prices arrive from the catalog as decimal strings (`"80.50"`) and are only
/// formatted back to two decimal places at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 8050 = Rs. 80.50)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole number of rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self {
            cents: rupees * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Parses a decimal string such as `"250"`, `"250.5"` or `"80.50"`.
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let trimmed = input.trim();
        let malformed = || MoneyError::Malformed {
            input: input.to_string(),
        };

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if fraction.len() > 2 {
            return Err(MoneyError::TooPrecise {
                input: input.to_string(),
            });
        }

        let out_of_range = || MoneyError::OutOfRange {
            input: input.to_string(),
        };
        let whole: i64 = whole.parse().map_err(|_| out_of_range())?;
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| malformed())? * 10,
            _ => fraction.parse().map_err(|_| malformed())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            cents: if negative { -cents } else { cents },
        })
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the rupee portion (whole number).
    pub fn rupees(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after rupees).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }

    /// Formats the amount as a plain decimal with two places, e.g. `741.50`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        format!("{sign}{}.{:02}", self.rupees().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rs. {}", self.to_decimal_string())
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents - rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(74150);
        assert_eq!(money.cents(), 74150);
        assert_eq!(money.rupees(), 741);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(74150).to_string(), "Rs. 741.50");
        assert_eq!(Money::from_cents(100).to_string(), "Rs. 1.00");
        assert_eq!(Money::from_cents(5).to_string(), "Rs. 0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "Rs. -12.34");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
    }

    #[test]
    fn test_parse_decimal_strings() {
        assert_eq!(Money::parse("250").unwrap().cents(), 25000);
        assert_eq!(Money::parse("250.00").unwrap().cents(), 25000);
        assert_eq!(Money::parse("80.5").unwrap().cents(), 8050);
        assert_eq!(Money::parse(" 80.50 ").unwrap().cents(), 8050);
        assert_eq!(Money::parse("0.07").unwrap().cents(), 7);
        assert_eq!(Money::parse("12.").unwrap().cents(), 1200);
        assert_eq!(Money::parse("-3.25").unwrap().cents(), -325);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(Money::parse(""), Err(MoneyError::Malformed { .. })));
        assert!(matches!(Money::parse(".50"), Err(MoneyError::Malformed { .. })));
        assert!(matches!(Money::parse("abc"), Err(MoneyError::Malformed { .. })));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyError::Malformed { .. })));
        assert!(matches!(Money::parse("1e3"), Err(MoneyError::Malformed { .. })));
        assert!(matches!(
            Money::parse("1.005"),
            Err(MoneyError::TooPrecise { .. })
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_repeated_addition_does_not_drift() {
        // 0.10 added a thousand times is exactly 100.00
        let dime = Money::parse("0.10").unwrap();
        let total: Money = std::iter::repeat_n(dime, 1000).sum();
        assert_eq!(total, Money::from_rupees(100));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::parse("250.00").unwrap();
        let b = Money::parse("80.50").unwrap();

        assert_eq!(a.multiply(2) + b.multiply(3), Money::from_cents(74150));
        assert_eq!((a - b).cents(), 16950);
    }

    #[test]
    fn test_money_sign_checks() {
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_money_add_assign() {
        let mut money = Money::from_cents(100);
        money += Money::from_cents(50);
        assert_eq!(money.cents(), 150);
    }
}
