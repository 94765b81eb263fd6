//! Transaction type for the banking service
//!
//! A transaction moves a non-negative amount from one account to another.
//! Whether the two accounts exist, or are distinct, is checked by the parsing
//! layer rather than here.

use super::account_number::AccountNumber;
use super::error::BankingError;
use rust_decimal::Decimal;
use std::fmt;

/// Transfer instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Account the amount will be debited from
    from_account: AccountNumber,

    /// Account the amount will be credited to
    to_account: AccountNumber,

    /// Transaction amount. Must always be >= 0
    amount: Decimal,
}

impl Transaction {
    /// Create a transaction
    ///
    /// # Errors
    ///
    /// Returns [`BankingError::OutOfRange`] when `amount` is negative.
    pub fn new(
        from_account: AccountNumber,
        to_account: AccountNumber,
        amount: Decimal,
    ) -> Result<Self, BankingError> {
        if amount < Decimal::ZERO {
            return Err(BankingError::out_of_range("transaction amount", amount));
        }
        Ok(Transaction {
            from_account,
            to_account,
            amount,
        })
    }

    pub fn from_account(&self) -> AccountNumber {
        self.from_account
    }

    pub fn to_account(&self) -> AccountNumber {
        self.to_account
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction: FromAccount={}, ToAccount={}, Amount={}",
            self.from_account, self.to_account, self.amount
        )
    }
}
