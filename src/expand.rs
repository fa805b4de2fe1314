//! Expands priced transactions into one row per debtor.

use crate::money::Money;
use crate::share::PricedTransaction;
use crate::transaction::Transaction;

/// One debtor's part of one transaction.
///
/// Borrows the transaction so the audit dump can show its other fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedRow<'a> {
    pub transaction: &'a Transaction,
    pub debtor_name: &'a str,
    pub amount_per_person: Money,
    pub share_count: usize,
}

impl ExpandedRow<'_> {
    pub fn transaction_id(&self) -> usize {
        self.transaction.id
    }
}

/// Emits rows in transaction order, then debtor-list order, with the
/// payer's own row last when the payer shares the cost.
pub fn expand(priced: &[PricedTransaction]) -> Vec<ExpandedRow<'_>> {
    priced.iter().flat_map(expand_one).collect()
}

fn expand_one(priced: &PricedTransaction) -> impl Iterator<Item = ExpandedRow<'_>> {
    let tx = &priced.transaction;
    let payer_row = tx.payer_included.then_some(tx.payer.as_str());

    tx.debtor_names
        .iter()
        .map(String::as_str)
        .chain(payer_row)
        .map(move |debtor_name| ExpandedRow {
            transaction: tx,
            debtor_name,
            amount_per_person: priced.share.amount_per_person,
            share_count: priced.share.share_count,
        })
}
