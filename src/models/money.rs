//! Money type for representing DOP amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues when summing many line items. Displays in the es-DO
//! convention: `RD$` symbol, comma thousands grouping, two decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A monetary amount stored as centavos (hundredths of a peso)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use carrito::models::Money;
    /// let amount = Money::from_cents(1050); // RD$10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole pesos
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole pesos portion (truncated toward zero)
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "RD$10.50", "$10.50", "RD$-10.50",
    /// "1,050.75", "10". Malformed input, including amounts that would
    /// overflow the centavo range, is rejected, never a panic.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // The sign may appear before or after the currency symbol
        let (sign_before, s) = strip_sign(s);
        let s = s.strip_prefix("RD$").unwrap_or(s);
        let s = s.strip_prefix('$').unwrap_or(s);
        let (sign_after, s) = strip_sign(s);
        if sign_before && sign_after {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        let negative = sign_before || sign_after;

        // Remove grouping commas if present
        let s = s.replace(',', "");
        let s = s.as_str();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let pesos: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate centavos to 2 digits; `get` keeps a multi-byte
            // character in the decimal part from panicking on the slice
            let cents_str = parts[1];
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            pesos
                .checked_mul(100)
                .and_then(|p| p.checked_add(cents))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        } else {
            // Integer format - assume whole pesos
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

fn strip_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, s),
    }
}

/// Insert comma grouping into a non-negative integer string ("1050" -> "1,050")
fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(
                f,
                "-RD${}.{:02}",
                group_thousands(self.pesos().abs()),
                self.cents_part()
            )
        } else {
            write!(
                f,
                "RD${}.{:02}",
                group_thousands(self.pesos()),
                self.cents_part()
            )
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    /// Line-item total: unit price times quantity, saturating at the
    /// centavo range bounds rather than wrapping
    fn mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.pesos(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_pesos() {
        let m = Money::from_pesos(50);
        assert_eq!(m.cents(), 5000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "RD$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "RD$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-RD$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "RD$0.05");
    }

    #[test]
    fn test_display_thousands_grouping() {
        assert_eq!(format!("{}", Money::from_pesos(1000)), "RD$1,000.00");
        assert_eq!(format!("{}", Money::from_cents(105075)), "RD$1,050.75");
        assert_eq!(format!("{}", Money::from_pesos(1234567)), "RD$1,234,567.00");
        assert_eq!(format!("{}", Money::from_pesos(999)), "RD$999.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_mul_quantity() {
        let price = Money::from_pesos(50);
        assert_eq!((price * 2).cents(), 10000);
        assert_eq!((price * 0).cents(), 0);
    }

    #[test]
    fn test_mul_quantity_saturates_instead_of_wrapping() {
        let huge = Money::from_cents(i64::MAX);
        assert_eq!((huge * 2).cents(), i64::MAX);

        let negative = Money::from_cents(i64::MIN);
        assert_eq!((negative * 2).cents(), i64::MIN);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("RD$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("1,050.75").unwrap().cents(), 105075);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.34.56").is_err());
        assert!(Money::parse("RD$").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_decimals_without_panicking() {
        // A multi-byte character straddling the two-digit cutoff must be a
        // parse error, not a slice panic
        assert!(Money::parse("10.5€").is_err());
        assert!(Money::parse("10.€").is_err());
        assert!(Money::parse("10.½0").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_amounts() {
        // Pesos that no longer fit in i64 centavos
        assert!(Money::parse("92233720368547759").is_err());
        assert!(Money::parse("92233720368547759.00").is_err());
        assert!(Money::parse("-92233720368547759").is_err());
        // Near the bound but representable
        assert_eq!(
            Money::parse("92233720368547758").unwrap().cents(),
            9223372036854775800
        );
    }

    #[test]
    fn test_parse_sign_after_currency_symbol() {
        assert_eq!(Money::parse("RD$-5.50").unwrap().cents(), -550);
        assert_eq!(Money::parse("$-5.50").unwrap().cents(), -550);
        assert_eq!(Money::parse("-RD$5.50").unwrap().cents(), -550);
        assert!(Money::parse("-RD$-5.50").is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        let c = Money::from_cents(1000);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, c);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
