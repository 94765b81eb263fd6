//! Transaction processor
//!
//! This module provides the TransactionProcessor, which applies transfers to a
//! borrowed accounts table in strict order.
//!
//! The processor enforces:
//! - Both referenced accounts must exist before anything is mutated
//! - No account balance may go negative, even temporarily: each debit is
//!   checked against the balance left by every earlier transaction
//! - Fail-fast: the first failing transaction stops the batch, and earlier
//!   transactions stay applied (there is no rollback)
//!
//! Callers that need all-or-nothing semantics should clone the table first and
//! only keep the clone once processing succeeds.

use crate::types::{Account, AccountNumber, Accounts, BankingError, Transaction};
use tracing::trace;

/// Applies transactions to an accounts table
///
/// Holds an exclusive borrow of the table for the duration of the pass, so no
/// other code can observe or change balances while transactions are applied.
pub struct TransactionProcessor<'a> {
    accounts: &'a mut Accounts,
    applied: usize,
}

impl<'a> TransactionProcessor<'a> {
    /// Create a processor over the given accounts table
    pub fn new(accounts: &'a mut Accounts) -> Self {
        TransactionProcessor {
            accounts,
            applied: 0,
        }
    }

    /// Number of transactions fully applied so far
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Apply a single transaction
    ///
    /// Debits the from-account, then credits the to-account. A zero amount is
    /// not special-cased.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account is missing from the table (nothing is mutated)
    /// - The from-account balance does not cover the amount (nothing is mutated)
    /// - The credit would overflow (the debit has already been applied)
    pub fn process(&mut self, transaction: &Transaction) -> Result<(), BankingError> {
        let from = transaction.from_account();
        let to = transaction.to_account();
        let amount = transaction.amount();

        // Resolve both sides before touching either balance
        for number in [from, to] {
            if !self.accounts.contains_key(&number) {
                return Err(BankingError::account_not_found(number));
            }
        }

        self.account_mut(from)?.apply_to_balance(-amount)?;
        self.account_mut(to)?.apply_to_balance(amount)?;

        self.applied += 1;
        trace!(%from, %to, %amount, "Applied transaction");

        Ok(())
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, BankingError> {
        self.accounts
            .get_mut(&number)
            .ok_or_else(|| BankingError::account_not_found(number))
    }
}

/// Apply every transaction, in order, to the accounts table
///
/// # Returns
///
/// The number of transactions applied, which is always `transactions.len()`
/// on success.
///
/// # Errors
///
/// Stops at the first failing transaction and returns its error. Transactions
/// before it remain applied.
pub fn apply_transactions_to_accounts(
    accounts: &mut Accounts,
    transactions: &[Transaction],
) -> Result<usize, BankingError> {
    let mut processor = TransactionProcessor::new(accounts);
    for transaction in transactions {
        processor.process(transaction)?;
    }
    Ok(processor.applied())
}
