//! Report rendering - plain text for the console, JSON for tooling

use anyhow::{bail, Result};
use bankapp_core::Account;
use bankapp_dsl::{BalanceLine, ScenarioReport, StepReport};
use serde_json::{json, Value};

fn balances_text(balances: &[BalanceLine]) -> String {
    balances
        .iter()
        .map(|b| format!("{}: ${}", b.owner, b.balance))
        .collect::<Vec<_>>()
        .join(", ")
}

fn status(step: &StepReport) -> &'static str {
    match (&step.error, step.expectation) {
        (None, _) => "ok",
        (Some(_), true) => "failed",
        (Some(_), false) => "rejected",
    }
}

fn step_line(step: &StepReport) -> String {
    match &step.error {
        None if step.balances.is_empty() => format!("[{}] {}: ok", step.index, step.description),
        None => format!(
            "[{}] {}: ok ({})",
            step.index,
            step.description,
            balances_text(&step.balances)
        ),
        Some(e) => format!(
            "[{}] {}: {} [{}] {}",
            step.index,
            step.description,
            status(step),
            e.code(),
            e
        ),
    }
}

fn account_line(account: &Account) -> String {
    format!(
        "  {} ({}): ${}",
        account.owner(),
        account.kind(),
        account.balance()
    )
}

pub fn render_text(report: &ScenarioReport) -> String {
    let mut lines = vec![format!("=== {} ===", report.bank.name())];
    lines.extend(report.steps.iter().map(step_line));

    lines.push(String::new());
    lines.push("Final balances:".to_string());
    lines.extend(report.bank.accounts().iter().map(account_line));
    lines.push(format!(
        "{} step(s), {} rejected, {} expectation(s) failed",
        report.steps.len(),
        report.rejected().count(),
        report.mismatches().count()
    ));
    lines.join("\n")
}

/// Error out when any `expect_balance` step failed; drives the exit status
pub fn check_expectations(report: &ScenarioReport) -> Result<()> {
    let failed: Vec<String> = report
        .mismatches()
        .map(|s| format!("step {}", s.index))
        .collect();
    if !failed.is_empty() {
        bail!(
            "{} balance expectation(s) failed ({})",
            failed.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

fn step_json(step: &StepReport) -> Value {
    let balances: Vec<Value> = step
        .balances
        .iter()
        .map(|b| json!({ "owner": b.owner, "balance": b.balance.to_string() }))
        .collect();

    let mut value = json!({
        "step": step.index,
        "description": step.description,
        "transaction": step.transaction.map(|t| t.as_str()),
        "status": status(step),
        "balances": balances,
    });
    if let Some(e) = &step.error {
        value["code"] = json!(e.code());
        value["message"] = json!(e.to_string());
    }
    value
}

pub fn render_json(report: &ScenarioReport) -> Value {
    json!({
        "bank": report.bank.name(),
        "steps": report.steps.iter().map(step_json).collect::<Vec<_>>(),
        "accounts": report.bank.accounts(),
        "expectations_met": report.expectations_met(),
    })
}
