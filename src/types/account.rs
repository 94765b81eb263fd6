//! Account-related types for the banking service
//!
//! This module defines the Account entity and the keyed accounts table the
//! processor mutates in place.

use super::account_number::AccountNumber;
use super::error::BankingError;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// Table of all accounts for one run, keyed by account number
pub type Accounts = HashMap<AccountNumber, Account>;

/// Account and its running balance
///
/// The balance is private so it can only change through
/// [`Account::apply_to_balance`], which keeps it non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,

    /// Must always be >= 0
    balance: Decimal,
}

impl Account {
    /// Create an account with an initial balance
    ///
    /// # Errors
    ///
    /// Returns [`BankingError::OutOfRange`] when `balance` is negative.
    pub fn new(number: AccountNumber, balance: Decimal) -> Result<Self, BankingError> {
        if balance < Decimal::ZERO {
            return Err(BankingError::out_of_range("account balance", balance));
        }
        Ok(Account { number, balance })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Check whether `amount` can be applied without the balance going negative
    ///
    /// Any non-negative amount can be applied. A negative amount can only be
    /// applied when the current balance covers it.
    pub fn can_apply_to_balance(&self, amount: Decimal) -> bool {
        amount >= Decimal::ZERO || self.balance >= -amount
    }

    /// Add `amount` (credit when positive, debit when negative) to the balance
    ///
    /// Uses checked arithmetic. The balance is left untouched on any error.
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - [`BankingError::InsufficientBalance`] if the debit exceeds the balance
    /// - [`BankingError::ArithmeticOverflow`] if the sum is not representable
    pub fn apply_to_balance(&mut self, amount: Decimal) -> Result<Decimal, BankingError> {
        if !self.can_apply_to_balance(amount) {
            return Err(BankingError::insufficient_balance(
                self.number,
                -amount,
                self.balance,
            ));
        }

        let mut new_balance = self.balance.checked_add(amount).ok_or_else(|| {
            BankingError::arithmetic_overflow(self.number, amount, self.balance)
        })?;
        // A zero operand comes back unscaled; keep the wider scale of the two
        let scale = self.balance.scale().max(amount.scale());
        if new_balance.scale() < scale {
            new_balance.rescale(scale);
        }
        // Never store a negative zero; it would print as "-0.00"
        if new_balance.is_zero() {
            new_balance.set_sign_positive(true);
        }

        self.balance = new_balance;
        Ok(self.balance)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account: Number={}, Balance={}", self.number, self.balance)
    }
}
