//! # Error Module
//!
//! Domain errors for Bankapp using thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every failed account or bank operation returns one of these and leaves
/// balances untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Amount errors ===
    #[error("Invalid amount: {0} (amount must be positive)")]
    InvalidAmount(Decimal),

    #[error("Negative opening balance: {0}")]
    NegativeOpeningBalance(Decimal),

    #[error("Balance overflow: cannot add {amount} to {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },

    #[error("Precision loss: {amount} is too small to change a balance of {balance}")]
    PrecisionLoss { balance: Decimal, amount: Decimal },

    // === Withdrawal errors ===
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Individual investment accounts have a withdrawal limit of {limit}: requested {requested}")]
    WithdrawalLimitExceeded { limit: Decimal, requested: Decimal },

    // === Bank errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create account not found error
    pub fn account_not_found(owner: &str) -> Self {
        Self::AccountNotFound(owner.to_string())
    }

    /// Stable machine-readable code, used in JSON reports
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidAmount(_) => "INVALID_AMOUNT",
            CoreError::NegativeOpeningBalance(_) => "NEGATIVE_OPENING_BALANCE",
            CoreError::BalanceOverflow { .. } => "BALANCE_OVERFLOW",
            CoreError::PrecisionLoss { .. } => "PRECISION_LOSS",
            CoreError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            CoreError::WithdrawalLimitExceeded { .. } => "WITHDRAWAL_LIMIT_EXCEEDED",
            CoreError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
        }
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, CoreError::WithdrawalLimitExceeded { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::AccountNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::insufficient_funds(dec!(1800), dec!(1300));
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 1800, available 1300"
        );

        let err = CoreError::account_not_found("John Doe");
        assert_eq!(err.to_string(), "Account not found: John Doe");

        let err = CoreError::WithdrawalLimitExceeded {
            limit: dec!(500),
            requested: dec!(600),
        };
        assert!(err.to_string().contains("withdrawal limit of 500"));
        assert!(err.to_string().contains("requested 600"));
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::insufficient_funds(dec!(10), dec!(5)).is_insufficient_funds());
        assert!(CoreError::account_not_found("x").is_not_found());

        let err = CoreError::WithdrawalLimitExceeded {
            limit: dec!(500),
            requested: dec!(501),
        };
        assert!(err.is_limit_exceeded());
        assert!(!err.is_insufficient_funds());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CoreError::InvalidAmount(dec!(0)).code(), "INVALID_AMOUNT");
        assert_eq!(
            CoreError::account_not_found("x").code(),
            "ACCOUNT_NOT_FOUND"
        );
        assert_eq!(
            CoreError::BalanceOverflow {
                balance: Decimal::MAX,
                amount: dec!(1),
            }
            .code(),
            "BALANCE_OVERFLOW"
        );
        assert_eq!(
            CoreError::PrecisionLoss {
                balance: dec!(100),
                amount: Decimal::new(1, 28),
            }
            .code(),
            "PRECISION_LOSS"
        );
    }
}
