//! Scenario types for the bank_scenario! macro and JSON scenario files
//!
//! A scenario is a bank name plus an ordered list of steps, run against a
//! fresh bank by [`crate::runner`].

use crate::error::ScenarioError;
use bankapp_core::{AccountKind, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete banking scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub bank: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(bank: &str, steps: Vec<Step>) -> Self {
        Self {
            bank: bank.to_string(),
            steps,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rename the bank the scenario runs against
    pub fn with_bank_name(mut self, bank: &str) -> Self {
        self.bank = bank.to_string();
        self
    }

    /// Steps that move money, in order
    pub fn transactions(&self) -> impl Iterator<Item = (TransactionType, &Step)> {
        self.steps
            .iter()
            .filter_map(|s| s.transaction_type().map(|t| (t, s)))
    }
}

/// Builder for constructing scenarios
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    bank: String,
    steps: Vec<Step>,
}

impl ScenarioBuilder {
    pub fn new(bank: &str) -> Self {
        Self {
            bank: bank.to_string(),
            steps: Vec::new(),
        }
    }

    pub fn open(mut self, owner: &str, kind: AccountKind, balance: Decimal) -> Self {
        self.steps.push(Step::Open {
            owner: owner.to_string(),
            kind,
            balance,
        });
        self
    }

    pub fn deposit(mut self, owner: &str, amount: Decimal) -> Self {
        self.steps.push(Step::Deposit {
            owner: owner.to_string(),
            amount,
        });
        self
    }

    pub fn withdraw(mut self, owner: &str, amount: Decimal) -> Self {
        self.steps.push(Step::Withdraw {
            owner: owner.to_string(),
            amount,
        });
        self
    }

    pub fn transfer(mut self, from: &str, to: &str, amount: Decimal) -> Self {
        self.steps.push(Step::Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        });
        self
    }

    pub fn expect_balance(mut self, owner: &str, balance: Decimal) -> Self {
        self.steps.push(Step::ExpectBalance {
            owner: owner.to_string(),
            balance,
        });
        self
    }

    pub fn build(self) -> Scenario {
        Scenario {
            bank: self.bank,
            steps: self.steps,
        }
    }
}

/// One scenario step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Open {
        owner: String,
        kind: AccountKind,
        balance: Decimal,
    },
    Deposit {
        owner: String,
        amount: Decimal,
    },
    Withdraw {
        owner: String,
        amount: Decimal,
    },
    Transfer {
        from: String,
        to: String,
        amount: Decimal,
    },
    ExpectBalance {
        owner: String,
        balance: Decimal,
    },
}

impl Step {
    pub fn transaction_type(&self) -> Option<TransactionType> {
        match self {
            Step::Deposit { .. } => Some(TransactionType::Deposit),
            Step::Withdraw { .. } => Some(TransactionType::Withdraw),
            Step::Transfer { .. } => Some(TransactionType::Transfer),
            Step::Open { .. } | Step::ExpectBalance { .. } => None,
        }
    }

    /// Owners this step reads or writes
    pub fn owners(&self) -> Vec<&str> {
        match self {
            Step::Open { owner, .. }
            | Step::Deposit { owner, .. }
            | Step::Withdraw { owner, .. }
            | Step::ExpectBalance { owner, .. } => vec![owner.as_str()],
            Step::Transfer { from, to, .. } if from == to => vec![from.as_str()],
            Step::Transfer { from, to, .. } => vec![from.as_str(), to.as_str()],
        }
    }

    pub fn description(&self) -> String {
        match self {
            Step::Open {
                owner,
                kind,
                balance,
            } => format!("Open {} account for {} with {}", kind, owner, balance),
            Step::Deposit { owner, amount } => format!("Deposit {} to {}", amount, owner),
            Step::Withdraw { owner, amount } => format!("Withdraw {} from {}", amount, owner),
            Step::Transfer { from, to, amount } => {
                format!("Transfer {} from {} to {}", amount, from, to)
            }
            Step::ExpectBalance { owner, balance } => {
                format!("Expect {} balance {}", owner, balance)
            }
        }
    }
}
