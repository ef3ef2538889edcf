//! Scenario errors

use bankapp_core::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Why a single step did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Balance mismatch for {owner}: expected {expected}, actual {actual}")]
    BalanceMismatch {
        owner: String,
        expected: Decimal,
        actual: Decimal,
    },
}

impl StepError {
    pub fn code(&self) -> &'static str {
        match self {
            StepError::Core(e) => e.code(),
            StepError::BalanceMismatch { .. } => "BALANCE_MISMATCH",
        }
    }
}

/// Loading a scenario failed
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_code() {
        let err = StepError::from(CoreError::account_not_found("x"));
        assert_eq!(err.code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(err.to_string(), "Account not found: x");
        assert!(matches!(err, StepError::Core(CoreError::AccountNotFound(_))));

        let err = StepError::BalanceMismatch {
            owner: "John Doe".to_string(),
            expected: Decimal::new(1300, 0),
            actual: Decimal::new(1500, 0),
        };
        assert_eq!(err.code(), "BALANCE_MISMATCH");
        assert!(err.to_string().contains("expected 1300, actual 1500"));
    }
}
