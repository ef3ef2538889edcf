//! # Shared Bank
//!
//! Thread-safe handle over a single [`Bank`]. One lock per bank: every
//! operation, transfers included, runs under the lock, so there is no
//! per-account lock ordering to get wrong.

use crate::account::Account;
use crate::bank::Bank;
use crate::error::CoreResult;
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Default)]
pub struct SharedBank {
    inner: Arc<RwLock<Bank>>,
}

impl SharedBank {
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bank)),
        }
    }

    // Bank operations validate before mutating, so state behind a
    // poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Bank> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bank> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_account(&self, account: Account) {
        self.write().add_account(account);
    }

    pub fn deposit(&self, owner: &str, amount: Decimal) -> CoreResult<()> {
        self.write().deposit(owner, amount)
    }

    pub fn withdraw(&self, owner: &str, amount: Decimal) -> CoreResult<()> {
        self.write().withdraw(owner, amount)
    }

    pub fn transfer(&self, from_owner: &str, to_owner: &str, amount: Decimal) -> CoreResult<()> {
        self.write().transfer(from_owner, to_owner, amount)
    }

    pub fn balance_of(&self, owner: &str) -> CoreResult<Decimal> {
        self.read().balance_of(owner)
    }

    pub fn total_balance(&self) -> Decimal {
        self.read().total_balance()
    }

    /// Point-in-time copy of the bank
    pub fn snapshot(&self) -> Bank {
        self.read().clone()
    }
}

impl From<Bank> for SharedBank {
    fn from(bank: Bank) -> Self {
        Self::new(bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::thread;

    #[test]
    fn test_shared_handle_sees_updates() {
        let mut bank = Bank::new("Shared");
        bank.add_account(Account::checking("A", dec!(100)).unwrap());
        let shared = SharedBank::from(bank);
        let other = shared.clone();

        other.deposit("A", dec!(50)).unwrap();
        assert_eq!(shared.balance_of("A").unwrap(), dec!(150));

        let snapshot = shared.snapshot();
        shared.withdraw("A", dec!(150)).unwrap();
        assert_eq!(snapshot.balance_of("A").unwrap(), dec!(150));
        assert_eq!(shared.balance_of("A").unwrap(), dec!(0));
    }

    #[test]
    fn test_concurrent_transfers_conserve_total() {
        let shared = SharedBank::new(Bank::new("Concurrent"));
        shared.add_account(Account::checking("A", dec!(1000)).unwrap());
        shared.add_account(Account::checking("B", dec!(1000)).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let bank = shared.clone();
                thread::spawn(move || {
                    let (from, to) = if i % 2 == 0 { ("A", "B") } else { ("B", "A") };
                    for _ in 0..100 {
                        // Rejections are fine; partial transfers are not
                        let _ = bank.transfer(from, to, dec!(7));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.total_balance(), dec!(2000));
        assert!(shared.balance_of("A").unwrap() >= dec!(0));
        assert!(shared.balance_of("B").unwrap() >= dec!(0));
    }

    #[test]
    fn test_concurrent_withdrawals_never_overdraw() {
        let shared = SharedBank::new(Bank::new("Race"));
        shared.add_account(Account::checking("A", dec!(100)).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let bank = shared.clone();
                thread::spawn(move || {
                    (0..50)
                        .filter(|_| bank.withdraw("A", dec!(1)).is_ok())
                        .count()
                })
            })
            .collect();

        let succeeded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(succeeded, 100);
        assert_eq!(shared.balance_of("A").unwrap(), dec!(0));
    }
}
