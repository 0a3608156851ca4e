//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (kobo for naira) so cart totals
//! never drift the way floating-point sums do.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "NGN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₦").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NGN => "\u{20a6}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Minor units per major unit (100 kobo per naira).
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "NGN" => Some(Currency::NGN),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., kobo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a naira amount from kobo.
    pub const fn kobo(amount_minor: i64) -> Self {
        Self::new(amount_minor, Currency::NGN)
    }

    /// Create a Money value from whole major units (saturating).
    ///
    /// ```
    /// use mmart_commerce::money::{Money, Currency};
    /// let price = Money::from_major(1200, Currency::NGN);
    /// assert_eq!(price.amount_minor, 120_000);
    /// ```
    pub fn from_major(major: i64, currency: Currency) -> Self {
        Self::new(major.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value. For display only.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Add another Money value.
    pub fn checked_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Subtract another Money value.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a scalar (e.g., a line quantity).
    pub fn checked_mul(&self, factor: i64) -> Result<Money, CommerceError> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Sum an iterator of Money values.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// Format as a display string (e.g., "₦10,000.00").
    pub fn display(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_minor.unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        format!(
            "{}{}{}.{:0places$}",
            self.sign(),
            self.currency.symbol(),
            group_thousands(abs / per_major),
            abs % per_major
        )
    }

    /// Format without decimals, rounding half away from zero (e.g., "₦10,000").
    pub fn display_no_decimal(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_minor.unsigned_abs();
        let rounded = (abs + per_major / 2) / per_major;
        format!(
            "{}{}{}",
            self.sign(),
            self.currency.symbol(),
            group_thousands(rounded)
        )
    }

    fn sign(&self) -> &'static str {
        if self.amount_minor < 0 {
            "-"
        } else {
            ""
        }
    }

    /// Parse a display string such as "₦10,000.00", "10000" or "1,200.5".
    ///
    /// The currency symbol and grouping commas are optional. Parsing is
    /// exact: more fractional digits than the currency allows is an error.
    pub fn parse(input: &str, currency: Currency) -> Result<Money, CommerceError> {
        let invalid = || CommerceError::InvalidAmount(input.to_string());

        let cleaned: String = input
            .trim()
            .replace(currency.symbol(), "")
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();
        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        let (major, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let places = currency.decimal_places() as usize;
        if major.is_empty()
            || fraction.len() > places
            || !major.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let major: i64 = major.parse().map_err(|_| invalid())?;
        let fraction_minor: i64 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{fraction:0<places$}");
            padded.parse().map_err(|_| invalid())?
        };

        let amount = major
            .checked_mul(currency.minor_per_major())
            .and_then(|m| m.checked_add(fraction_minor))
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(if negative { -amount } else { amount }, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
