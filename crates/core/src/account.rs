//! # Account Module
//!
//! Account and its kinds. A checking account only enforces the generic
//! rules (positive amount, sufficient funds); an individual investment
//! account also caps every single withdrawal.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest single withdrawal allowed from an individual investment account.
pub const INDIVIDUAL_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Coarse account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Investment => "Investment",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Investment account subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentType {
    /// Owned by a person; withdrawals are capped
    Individual,
    /// Owned by a company; no cap
    Corporate,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Individual => "Individual",
            InvestmentType::Corporate => "Corporate",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account kind, carrying whatever the withdrawal policy needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Investment(InvestmentType),
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Checking => AccountType::Checking,
            AccountKind::Investment(_) => AccountType::Investment,
        }
    }

    /// Per-withdrawal cap, if this kind has one
    pub fn withdrawal_limit(&self) -> Option<Decimal> {
        match self {
            AccountKind::Investment(InvestmentType::Individual) => {
                Some(INDIVIDUAL_WITHDRAWAL_LIMIT)
            }
            AccountKind::Checking | AccountKind::Investment(InvestmentType::Corporate) => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Checking => write!(f, "Checking"),
            AccountKind::Investment(t) => write!(f, "{} Investment", t),
        }
    }
}

/// A bank account.
///
/// The balance is private so that it only changes through [`Account::deposit`]
/// and [`Account::withdraw`], which keep it non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    owner: String,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    /// Open an account with an opening balance.
    ///
    /// Fails with [`CoreError::NegativeOpeningBalance`] below zero.
    pub fn new(owner: impl Into<String>, balance: Decimal, kind: AccountKind) -> CoreResult<Self> {
        if balance < Decimal::ZERO {
            return Err(CoreError::NegativeOpeningBalance(balance));
        }
        Ok(Self {
            owner: owner.into(),
            balance,
            kind,
        })
    }

    pub fn checking(owner: impl Into<String>, balance: Decimal) -> CoreResult<Self> {
        Self::new(owner, balance, AccountKind::Checking)
    }

    pub fn investment(
        owner: impl Into<String>,
        balance: Decimal,
        investment_type: InvestmentType,
    ) -> CoreResult<Self> {
        Self::new(owner, balance, AccountKind::Investment(investment_type))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    /// Investment subtype, `None` for checking accounts
    pub fn investment_type(&self) -> Option<InvestmentType> {
        match self.kind {
            AccountKind::Investment(t) => Some(t),
            AccountKind::Checking => None,
        }
    }

    /// Validate a deposit without applying it.
    pub fn check_deposit(&self, amount: Decimal) -> CoreResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(CoreError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        self.exact(new_balance.checked_sub(self.balance), amount)?;
        Ok(new_balance)
    }

    /// Validate a withdrawal without applying it.
    ///
    /// Order: positive amount, then the kind's cap, then available funds.
    pub fn check_withdraw(&self, amount: Decimal) -> CoreResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        if let Some(limit) = self.kind.withdrawal_limit() {
            if amount > limit {
                return Err(CoreError::WithdrawalLimitExceeded {
                    limit,
                    requested: amount,
                });
            }
        }
        if amount > self.balance {
            return Err(CoreError::insufficient_funds(amount, self.balance));
        }
        let new_balance = self.balance - amount;
        self.exact(self.balance.checked_sub(new_balance), amount)?;
        Ok(new_balance)
    }

    // Decimal rounds past 28 significant digits; the applied change must
    // equal the requested amount.
    fn exact(&self, applied: Option<Decimal>, amount: Decimal) -> CoreResult<()> {
        if applied != Some(amount) {
            return Err(CoreError::PrecisionLoss {
                balance: self.balance,
                amount,
            });
        }
        Ok(())
    }

    /// Add `amount` to the balance.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.balance = self.check_deposit(amount)?;
        Ok(())
    }

    /// Take `amount` out of the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        self.balance = self.check_withdraw(amount)?;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} account (owner: {}, balance: {})",
            self.kind, self.owner, self.balance
        )
    }
}
