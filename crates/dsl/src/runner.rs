//! Scenario runner
//!
//! Runs each step against a fresh [`Bank`]. A rejected operation is
//! recorded in the report and the run continues with the next step.

use crate::error::StepError;
use crate::scenario::{Scenario, Step};
use bankapp_core::{Account, Bank, TransactionType};
use rust_decimal::Decimal;

/// Balance of one owner after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceLine {
    pub owner: String,
    pub balance: Decimal,
}

/// What happened to one step
#[derive(Debug, Clone)]
pub struct StepReport {
    /// 1-based position in the scenario
    pub index: usize,
    pub description: String,
    pub transaction: Option<TransactionType>,
    /// Whether the step is an `expect_balance` check
    pub expectation: bool,
    pub error: Option<StepError>,
    /// Balances of the owners the step touched, after it ran
    pub balances: Vec<BalanceLine>,
}

impl StepReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// A failed `expect_balance` step, whatever the error
    pub fn is_failed_expectation(&self) -> bool {
        self.expectation && self.error.is_some()
    }
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub bank: Bank,
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    /// Operations the bank refused
    pub fn rejected(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.expectation && !s.is_ok())
    }

    /// Failed `expect_balance` steps, including ones naming an unknown owner
    pub fn mismatches(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| s.is_failed_expectation())
    }

    pub fn expectations_met(&self) -> bool {
        self.mismatches().next().is_none()
    }
}

/// Run a scenario against a new bank named after it
pub fn run(scenario: &Scenario) -> ScenarioReport {
    let mut bank = Bank::new(scenario.bank.as_str());
    tracing::info!(bank = %scenario.bank, steps = scenario.steps.len(), "Running scenario");

    let steps: Vec<StepReport> = scenario
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| run_step(&mut bank, i + 1, step))
        .collect();

    let report = ScenarioReport { bank, steps };
    tracing::info!(
        bank = %scenario.bank,
        rejected = report.rejected().count(),
        failed_expectations = report.mismatches().count(),
        "Scenario finished"
    );
    report
}

fn run_step(bank: &mut Bank, index: usize, step: &Step) -> StepReport {
    let error = apply(bank, step).err();
    if let Some(e) = &error {
        tracing::warn!(step = index, code = e.code(), error = %e, "Step did not succeed");
    }

    let balances = step
        .owners()
        .into_iter()
        .filter_map(|owner| {
            bank.balance_of(owner).ok().map(|balance| BalanceLine {
                owner: owner.to_string(),
                balance,
            })
        })
        .collect();

    StepReport {
        index,
        description: step.description(),
        transaction: step.transaction_type(),
        expectation: matches!(step, Step::ExpectBalance { .. }),
        error,
        balances,
    }
}

fn apply(bank: &mut Bank, step: &Step) -> Result<(), StepError> {
    match step {
        Step::Open {
            owner,
            kind,
            balance,
        } => {
            bank.add_account(Account::new(owner.as_str(), *balance, *kind)?);
        }
        Step::Deposit { owner, amount } => bank.deposit(owner, *amount)?,
        Step::Withdraw { owner, amount } => bank.withdraw(owner, *amount)?,
        Step::Transfer { from, to, amount } => bank.transfer(from, to, *amount)?,
        Step::ExpectBalance { owner, balance } => {
            let actual = bank.balance_of(owner)?;
            if actual != *balance {
                return Err(StepError::BalanceMismatch {
                    owner: owner.clone(),
                    expected: *balance,
                    actual,
                });
            }
        }
    }
    Ok(())
}
