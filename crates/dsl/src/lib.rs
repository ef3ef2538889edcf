//! # Bankapp DSL
//!
//! Scenario scripts for the banking model.
//!
//! - [`bank_scenario!`] - define a scenario inline
//! - [`Scenario::from_json_file`] - load one from JSON
//! - [`run`] - execute it against a fresh bank
//! - [`demonstration`] - the reference walkthrough
//!
//! ## Example
//!
//! ```rust,ignore
//! use bankapp_dsl::bank_scenario;
//!
//! let scenario = bank_scenario! {
//!     bank "Test Bank" {
//!         open checking "John Doe" with 1000;
//!         deposit 500 to "John Doe";
//!         expect "John Doe" balance 1500;
//!     }
//! };
//! ```

pub mod demo;
pub mod error;
pub mod runner;
pub mod scenario;

pub use demo::demonstration;
pub use error::{ScenarioError, StepError};
pub use runner::{run, BalanceLine, ScenarioReport, StepReport};
pub use scenario::{Scenario, ScenarioBuilder, Step};

// Re-export core types for DSL users
pub use bankapp_core::{AccountKind, InvestmentType};
pub use rust_decimal::Decimal;

#[doc(hidden)]
pub use rust_decimal_macros;

/// Scenario definition macro.
///
/// # Syntax
///
/// ```text
/// bank_scenario! {
///     bank "<name>" {
///         <step>;
///         <step>;
///     }
/// }
/// ```
///
/// ## Steps
///
/// - `open checking|individual|corporate "<owner>" with <amount>;`
/// - `deposit <amount> to "<owner>";`
/// - `withdraw <amount> from "<owner>";`
/// - `transfer <amount> from "<owner>" to "<owner>";`
/// - `expect "<owner>" balance <amount>;`
///
/// Amounts are decimal literals.
///
/// # Example
///
/// ```rust
/// use bankapp_dsl::bank_scenario;
///
/// let scenario = bank_scenario! {
///     bank "Test Bank" {
///         open checking "John Doe" with 1000;
///         withdraw 250.50 from "John Doe";
///     }
/// };
///
/// assert_eq!(scenario.steps.len(), 2);
/// ```
#[macro_export]
macro_rules! bank_scenario {
    // Entry point
    (
        bank $name:literal {
            $($step:tt)*
        }
    ) => {{
        let mut builder = $crate::ScenarioBuilder::new($name);
        $crate::bank_scenario!(@steps builder, $($step)*);
        builder.build()
    }};

    // open <kind> "<owner>" with <amount>;
    (@steps $builder:ident, open checking $owner:literal with $amount:literal; $($rest:tt)*) => {{
        $builder = $builder.open(
            $owner,
            $crate::AccountKind::Checking,
            $crate::rust_decimal_macros::dec!($amount),
        );
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};
    (@steps $builder:ident, open individual $owner:literal with $amount:literal; $($rest:tt)*) => {{
        $builder = $builder.open(
            $owner,
            $crate::AccountKind::Investment($crate::InvestmentType::Individual),
            $crate::rust_decimal_macros::dec!($amount),
        );
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};
    (@steps $builder:ident, open corporate $owner:literal with $amount:literal; $($rest:tt)*) => {{
        $builder = $builder.open(
            $owner,
            $crate::AccountKind::Investment($crate::InvestmentType::Corporate),
            $crate::rust_decimal_macros::dec!($amount),
        );
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};

    // deposit <amount> to "<owner>";
    (@steps $builder:ident, deposit $amount:literal to $owner:literal; $($rest:tt)*) => {{
        $builder = $builder.deposit($owner, $crate::rust_decimal_macros::dec!($amount));
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};

    // withdraw <amount> from "<owner>";
    (@steps $builder:ident, withdraw $amount:literal from $owner:literal; $($rest:tt)*) => {{
        $builder = $builder.withdraw($owner, $crate::rust_decimal_macros::dec!($amount));
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};

    // transfer <amount> from "<owner>" to "<owner>";
    (@steps $builder:ident, transfer $amount:literal from $from:literal to $to:literal; $($rest:tt)*) => {{
        $builder = $builder.transfer($from, $to, $crate::rust_decimal_macros::dec!($amount));
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};

    // expect "<owner>" balance <amount>;
    (@steps $builder:ident, expect $owner:literal balance $amount:literal; $($rest:tt)*) => {{
        $builder = $builder.expect_balance($owner, $crate::rust_decimal_macros::dec!($amount));
        $crate::bank_scenario!(@steps $builder, $($rest)*);
    }};

    // End of steps
    (@steps $builder:ident,) => {};
}
