//! # Bankapp Core
//!
//! Core domain types: accounts, the bank that owns them, and the errors
//! their operations return.

pub mod account;
pub mod bank;
pub mod error;
pub mod shared;
pub mod transaction;

pub use account::{Account, AccountKind, AccountType, InvestmentType, INDIVIDUAL_WITHDRAWAL_LIMIT};
pub use bank::Bank;
pub use error::{CoreError, CoreResult};
pub use shared::SharedBank;
pub use transaction::TransactionType;
