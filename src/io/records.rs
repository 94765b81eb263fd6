//! Raw CSV record types
//!
//! These mirror the columns of the input files exactly and keep every field as
//! text. Converting the balance/amount text to a decimal happens here so that
//! malformed literals surface as [`BankingError::ValueConversion`], separate
//! from the record validation rules in the parsers.

use crate::types::BankingError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Account balance row: `account_number,balance`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountBalanceRecord {
    /// Account number. Must be 16 digits or less
    pub account_number: String,

    /// Balance of the account. Must be >= 0
    pub balance: String,
}

/// Transaction row: `from_account,to_account,amount`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Originating account number. Must be 16 digits or less
    pub from_account: String,

    /// Destination account number. Must be 16 digits or less
    pub to_account: String,

    /// Transaction amount. Must be >= 0
    pub amount: String,
}

impl AccountBalanceRecord {
    pub fn parse_balance(&self, line: u64) -> Result<Decimal, BankingError> {
        parse_decimal(&self.balance, "AccountBalanceRecord.Balance", line)
    }
}

impl TransactionRecord {
    pub fn parse_amount(&self, line: u64) -> Result<Decimal, BankingError> {
        parse_decimal(&self.amount, "TransactionRecord.Amount", line)
    }
}

fn parse_decimal(raw: &str, field: &'static str, line: u64) -> Result<Decimal, BankingError> {
    let text = raw.trim();
    // rust_decimal accepts `_` digit separators; a plain decimal literal has none
    if text.contains('_') {
        return Err(BankingError::value_conversion(line, field, raw));
    }
    Decimal::from_str(text).map_err(|_| BankingError::value_conversion(line, field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn balance_record(balance: &str) -> AccountBalanceRecord {
        AccountBalanceRecord {
            account_number: "1".to_string(),
            balance: balance.to_string(),
        }
    }

    #[rstest]
    #[case("5000.00", Decimal::new(500000, 2))]
    #[case("0", Decimal::ZERO)]
    #[case("1.01", Decimal::new(101, 2))]
    #[case("-2.00", Decimal::new(-200, 2))]
    #[case("  3  ", Decimal::new(3, 0))]
    fn test_parse_balance(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(balance_record(raw).parse_balance(1).unwrap(), expected);
    }

    #[test]
    fn test_parse_balance_preserves_scale() {
        let balance = balance_record("10000.50").parse_balance(1).unwrap();
        assert_eq!(balance.to_string(), "10000.50");
    }

    #[rstest]
    #[case::letters("aaa")]
    #[case::empty("")]
    #[case::two_points("1.2.3")]
    #[case::digit_separator("1_000")]
    #[case::separated_fraction("1.0_0")]
    fn test_parse_balance_conversion_error(#[case] raw: &str) {
        let error = balance_record(raw).parse_balance(4).unwrap_err();
        assert_eq!(
            error,
            BankingError::ValueConversion {
                line: 4,
                field: "AccountBalanceRecord.Balance",
                value: raw.to_string(),
            }
        );
    }

    #[test]
    fn test_parse_amount_conversion_error_names_field() {
        let record = TransactionRecord {
            from_account: "1".to_string(),
            to_account: "2".to_string(),
            amount: "ten".to_string(),
        };
        let error = record.parse_amount(7).unwrap_err();
        assert_eq!(
            error.to_string(),
            "On line 7: Cannot convert TransactionRecord.Amount to decimal: 'ten'"
        );
    }
}
