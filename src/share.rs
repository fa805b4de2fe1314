//! Per-transaction cost split.

use crate::error::{Result, SettleError};
use crate::money::Money;
use crate::transaction::Transaction;
use log::debug;

/// How a single transaction's cost is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    /// Debtors plus the payer when the payer shares the cost. Always >= 1.
    pub share_count: usize,

    /// `amount / share_count`, unrounded.
    pub amount_per_person: Money,
}

/// A transaction together with its computed share.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedTransaction {
    pub transaction: Transaction,
    pub share: Share,
}

/// Computes the share count and per-person amount for `tx`.
///
/// Rejects an empty debtor list, an empty debtor name and a non-positive amount.
pub fn compute_share(tx: &Transaction) -> Result<Share> {
    if tx.debtor_names.is_empty() {
        return Err(invalid(tx, "no debtors listed".to_string()));
    }
    if tx.debtor_names.iter().any(String::is_empty) {
        return Err(invalid(
            tx,
            format!("empty name in debtor list {:?}", tx.raw_debtors),
        ));
    }
    if !tx.amount.is_positive() {
        return Err(invalid(
            tx,
            format!("amount must be positive, got {}", tx.amount.to_exact_string()),
        ));
    }

    let share_count = tx.debtor_names.len() + usize::from(tx.payer_included);
    let amount_per_person = tx.amount.split(share_count);

    debug!(
        "Transaction {}: {} split {} ways, {} each",
        tx.id,
        tx.amount.to_exact_string(),
        share_count,
        amount_per_person
    );

    Ok(Share {
        share_count,
        amount_per_person,
    })
}

/// Prices every transaction, stopping at the first invalid one.
pub fn price_all(transactions: Vec<Transaction>) -> Result<Vec<PricedTransaction>> {
    transactions
        .into_iter()
        .map(|transaction| {
            let share = compute_share(&transaction)?;
            Ok(PricedTransaction { transaction, share })
        })
        .collect()
}

fn invalid(tx: &Transaction, reason: String) -> SettleError {
    SettleError::InvalidTransaction { id: tx.id, reason }
}
