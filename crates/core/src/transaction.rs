//! # Transaction Module
//!
//! Kinds of balance-changing operations. Used to label log events and
//! scenario steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of balance-changing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money in, from outside the bank
    Deposit,
    /// Money out, to outside the bank
    Withdraw,
    /// Withdraw from one account and deposit into another
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdraw => "withdraw",
            TransactionType::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_str() {
        assert_eq!(TransactionType::Deposit.as_str(), "deposit");
        assert_eq!(TransactionType::Transfer.to_string(), "transfer");
        assert_eq!(
            serde_json::to_string(&TransactionType::Withdraw).unwrap(),
            r#""withdraw""#
        );
    }
}
