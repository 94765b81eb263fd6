//! Account number value type
//!
//! Account numbers are positive integers of at most 16 decimal digits. They are
//! always rendered in their canonical form: zero-padded to exactly 16 digits.
//! That canonical form is what appears in error messages and in the output CSV.

use super::error::BankingError;
use std::fmt;

/// Maximum number of decimal digits an account number may have
pub const ACCOUNT_NUMBER_DIGITS: usize = 16;

/// Largest account number reachable through [`AccountNumber::try_parse`]
pub const MAX_ACCOUNT_NUMBER: i64 = 9_999_999_999_999_999;

/// Validated account identifier
///
/// Equality, hashing and ordering are all by the underlying integer value, so
/// `"12345"` and `"0000000000012345"` parse to the same account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(i64);

impl AccountNumber {
    /// Create an account number from a raw integer
    ///
    /// Only negative values are rejected here. Zero is accepted by this
    /// constructor but can never come out of [`AccountNumber::try_parse`].
    ///
    /// # Errors
    ///
    /// Returns [`BankingError::OutOfRange`] when `value < 0`.
    pub fn new(value: i64) -> Result<Self, BankingError> {
        if value < 0 {
            return Err(BankingError::out_of_range("account number", value));
        }
        Ok(AccountNumber(value))
    }

    /// Try to parse an account number from text
    ///
    /// Accepts a non-empty run of ASCII digits, at most 16 characters long,
    /// with optional leading zeros. The parsed value must be greater than zero.
    /// Signs, whitespace and anything non-numeric are rejected.
    ///
    /// # Returns
    ///
    /// `Some(AccountNumber)` on success, `None` otherwise. Never panics.
    pub fn try_parse(text: &str) -> Option<Self> {
        if text.is_empty() || text.len() > ACCOUNT_NUMBER_DIGITS {
            return None;
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let value: i64 = text.parse().ok()?;
        if value <= 0 {
            return None;
        }
        Some(AccountNumber(value))
    }

    /// The underlying integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = ACCOUNT_NUMBER_DIGITS)
    }
}
