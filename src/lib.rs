//! # Settlement
//!
//! Computes who owes what in a group that shares expenses. Each ledger row
//! names an item, its cost, the payer and the people who owe a share; the
//! result is one signed net balance per person.
//!
//! ## Design Principles
//!
//! - **Unrounded arithmetic**: Shares are `rust_decimal` quotients with full
//!   precision; only the printed report rounds, to 4 decimal places
//! - **All-or-nothing**: One invalid transaction aborts the whole run
//! - **Literal names**: People are matched by exact string equality
//! - **Deterministic output**: Balances sorted by name
//!
//! ## Example
//!
//! ```
//! use settlement::SettlementEngine;
//! use std::io::Cursor;
//!
//! let csv = "日付,項目,金額,貸した人,借りた人,本人含まない\n\
//!            2023-04-01,dinner,3000,A,\"B, C\",\n";
//! let engine = SettlementEngine::from_reader(Cursor::new(csv)).unwrap();
//! let balances = engine.balances().unwrap();
//! assert_eq!(balances[0].name, "A");
//! assert_eq!(balances[0].net_balance.to_string(), "-2000.0000");
//! ```

pub mod balance;
pub mod engine;
pub mod error;
pub mod expand;
pub mod loader;
pub mod money;
pub mod report;
pub mod share;
pub mod transaction;

pub use balance::PersonBalance;
pub use engine::SettlementEngine;
pub use error::{LoadError, Result, SettleError};
pub use expand::ExpandedRow;
pub use money::Money;
pub use share::{PricedTransaction, Share};
pub use transaction::{LedgerRecord, Transaction};
