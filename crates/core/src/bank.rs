//! # Bank Module
//!
//! A named, ordered collection of accounts. Lookups are by owner and
//! return the first match; owners are not required to be unique.

use crate::account::Account;
use crate::error::{CoreError, CoreResult};
use crate::transaction::TransactionType;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Bank {
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Append an account. Duplicate owners are accepted; lookups see the first.
    pub fn add_account(&mut self, account: Account) {
        tracing::debug!(
            bank = %self.name,
            owner = account.owner(),
            kind = %account.kind(),
            balance = %account.balance(),
            "Account added"
        );
        self.accounts.push(account);
    }

    fn position(&self, owner: &str) -> CoreResult<usize> {
        self.accounts
            .iter()
            .position(|a| a.owner() == owner)
            .ok_or_else(|| CoreError::account_not_found(owner))
    }

    pub fn get_account(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.owner() == owner)
    }

    pub fn get_account_mut(&mut self, owner: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.owner() == owner)
    }

    pub fn balance_of(&self, owner: &str) -> CoreResult<Decimal> {
        self.get_account(owner)
            .map(Account::balance)
            .ok_or_else(|| CoreError::account_not_found(owner))
    }

    /// Deposit into the first account owned by `owner`
    pub fn deposit(&mut self, owner: &str, amount: Decimal) -> CoreResult<()> {
        let idx = self.position(owner)?;
        self.accounts[idx].deposit(amount)?;
        tracing::debug!(kind = %TransactionType::Deposit, owner, %amount, "Applied");
        Ok(())
    }

    /// Withdraw from the first account owned by `owner`
    pub fn withdraw(&mut self, owner: &str, amount: Decimal) -> CoreResult<()> {
        let idx = self.position(owner)?;
        self.accounts[idx].withdraw(amount)?;
        tracing::debug!(kind = %TransactionType::Withdraw, owner, %amount, "Applied");
        Ok(())
    }

    /// Move `amount` from one owner's account to another's.
    ///
    /// Both owners are resolved (source first) and both legs validated
    /// before either balance changes, so a failed transfer mutates nothing.
    pub fn transfer(&mut self, from_owner: &str, to_owner: &str, amount: Decimal) -> CoreResult<()> {
        let result = self.try_transfer(from_owner, to_owner, amount);
        match &result {
            Ok(()) => tracing::debug!(
                kind = %TransactionType::Transfer,
                from = from_owner,
                to = to_owner,
                %amount,
                "Applied"
            ),
            Err(e) => tracing::warn!(
                kind = %TransactionType::Transfer,
                from = from_owner,
                to = to_owner,
                %amount,
                error = %e,
                "Transfer rejected"
            ),
        }
        result
    }

    fn try_transfer(&mut self, from_owner: &str, to_owner: &str, amount: Decimal) -> CoreResult<()> {
        let from = self.position(from_owner)?;
        let to = self.position(to_owner)?;

        self.accounts[from].check_withdraw(amount)?;
        self.accounts[to].check_deposit(amount)?;

        self.accounts[from].withdraw(amount)?;
        self.accounts[to].deposit(amount)
    }

    /// Sum of all balances
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(Account::balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::InvestmentType;
    use rust_decimal_macros::dec;

    fn test_bank() -> Bank {
        let mut bank = Bank::new("Test Bank");
        bank.add_account(Account::checking("John Doe", dec!(1000)).unwrap());
        bank.add_account(
            Account::investment("Jane Doe", dec!(2000), InvestmentType::Individual).unwrap(),
        );
        bank.add_account(
            Account::investment("OPENLANE Investments", dec!(5000), InvestmentType::Corporate)
                .unwrap(),
        );
        bank
    }

    #[test]
    fn test_get_account() {
        let bank = test_bank();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.name(), "Test Bank");

        let account = bank.get_account("Jane Doe").unwrap();
        assert_eq!(account.balance(), dec!(2000));
        assert!(bank.get_account("Nobody").is_none());
    }

    #[test]
    fn test_get_account_returns_first_match() {
        let mut bank = Bank::new("Dupes");
        bank.add_account(Account::checking("Sam", dec!(10)).unwrap());
        bank.add_account(Account::checking("Sam", dec!(20)).unwrap());

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.balance_of("Sam").unwrap(), dec!(10));

        bank.deposit("Sam", dec!(5)).unwrap();
        assert_eq!(bank.accounts()[0].balance(), dec!(15));
        assert_eq!(bank.accounts()[1].balance(), dec!(20));
    }

    #[test]
    fn test_deposit_and_withdraw_by_owner() {
        let mut bank = test_bank();
        bank.deposit("John Doe", dec!(500)).unwrap();
        bank.withdraw("Jane Doe", dec!(300)).unwrap();

        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(1500));
        assert_eq!(bank.balance_of("Jane Doe").unwrap(), dec!(1700));

        let err = bank.deposit("Nobody", dec!(1)).unwrap_err();
        assert_eq!(err, CoreError::account_not_found("Nobody"));
    }

    #[test]
    fn test_transfer() {
        let mut bank = test_bank();
        let total_before = bank.total_balance();

        bank.transfer("John Doe", "OPENLANE Investments", dec!(200)).unwrap();

        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(800));
        assert_eq!(bank.balance_of("OPENLANE Investments").unwrap(), dec!(5200));
        assert_eq!(bank.total_balance(), total_before);
    }

    #[test]
    fn test_transfer_insufficient_funds_mutates_nothing() {
        let mut bank = test_bank();
        let err = bank
            .transfer("John Doe", "OPENLANE Investments", dec!(1800))
            .unwrap_err();

        assert!(err.is_insufficient_funds());
        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(1000));
        assert_eq!(bank.balance_of("OPENLANE Investments").unwrap(), dec!(5000));
    }

    #[test]
    fn test_transfer_respects_withdrawal_limit() {
        let mut bank = test_bank();
        let err = bank.transfer("Jane Doe", "John Doe", dec!(501)).unwrap_err();

        assert!(err.is_limit_exceeded());
        assert_eq!(bank.balance_of("Jane Doe").unwrap(), dec!(2000));
        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(1000));
    }

    #[test]
    fn test_transfer_unknown_owner() {
        let mut bank = test_bank();

        let err = bank.transfer("Nobody", "John Doe", dec!(10)).unwrap_err();
        assert_eq!(err, CoreError::account_not_found("Nobody"));

        let err = bank.transfer("John Doe", "Nobody", dec!(10)).unwrap_err();
        assert_eq!(err, CoreError::account_not_found("Nobody"));

        // Source is resolved first
        let err = bank.transfer("Ghost", "Phantom", dec!(10)).unwrap_err();
        assert_eq!(err, CoreError::account_not_found("Ghost"));

        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(1000));
    }

    #[test]
    fn test_transfer_unknown_owner_reported_before_bad_amount() {
        let mut bank = test_bank();
        let err = bank.transfer("John Doe", "Nobody", dec!(-5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_transfer_overflowing_destination_mutates_nothing() {
        let mut bank = test_bank();
        bank.add_account(Account::checking("Vault", Decimal::MAX).unwrap());

        let err = bank.transfer("John Doe", "Vault", dec!(1)).unwrap_err();
        assert_eq!(err.code(), "BALANCE_OVERFLOW");
        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(1000));
    }

    #[test]
    fn test_transfer_to_self() {
        let mut bank = test_bank();
        bank.transfer("John Doe", "John Doe", dec!(400)).unwrap();
        assert_eq!(bank.balance_of("John Doe").unwrap(), dec!(1000));

        let err = bank.transfer("John Doe", "John Doe", dec!(4000)).unwrap_err();
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_transfer_below_precision_creates_no_money() {
        let mut bank = Bank::new("Precision");
        bank.add_account(Account::checking("A", dec!(100)).unwrap());
        bank.add_account(Account::checking("B", dec!(0)).unwrap());

        let err = bank.transfer("A", "B", Decimal::new(1, 28)).unwrap_err();
        assert_eq!(err.code(), "PRECISION_LOSS");
        assert_eq!(bank.balance_of("A").unwrap(), dec!(100));
        assert_eq!(bank.balance_of("B").unwrap(), dec!(0));
        assert_eq!(bank.total_balance(), dec!(100));
    }
}
