//! Per-person balance model and aggregation.
//!
//! Maintains the invariant: `net_balance == total_debt - total_credit`.

use crate::error::{Result, SettleError};
use crate::expand::ExpandedRow;
use crate::money::Money;
use crate::share::PricedTransaction;
use std::collections::BTreeMap;

/// Represents one person's position across the whole ledger.
///
/// # Sign convention
///
/// A negative `net_balance` means others owe this person money; a positive
/// one means this person owes money to others.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonBalance {
    /// Name exactly as written in the ledger.
    pub name: String,

    /// Sum of this person's shares as a debtor, including their own share
    /// of transactions they paid for.
    pub total_debt: Money,

    /// Sum of the amounts this person paid.
    pub total_credit: Money,

    /// `total_debt - total_credit`.
    pub net_balance: Money,
}

impl PersonBalance {
    /// Creates a balance for a person with no debts or credits.
    pub fn new(name: impl Into<String>) -> Self {
        PersonBalance {
            name: name.into(),
            total_debt: Money::ZERO,
            total_credit: Money::ZERO,
            net_balance: Money::ZERO,
        }
    }

    /// Records a share this person owes.
    ///
    /// Returns `false` and leaves the balance unchanged if the total would overflow.
    pub fn owe(&mut self, amount: Money) -> bool {
        match self.total_debt.checked_add(amount) {
            Some(total) => {
                self.total_debt = total;
                self.net_balance = self.total_debt - self.total_credit;
                true
            }
            None => false,
        }
    }

    /// Records an amount this person paid on behalf of the group.
    ///
    /// Returns `false` and leaves the balance unchanged if the total would overflow.
    pub fn lend(&mut self, amount: Money) -> bool {
        match self.total_credit.checked_add(amount) {
            Some(total) => {
                self.total_credit = total;
                self.net_balance = self.total_debt - self.total_credit;
                true
            }
            None => false,
        }
    }
}

/// Sums debts from expanded rows and credits from transactions into one
/// balance per distinct name, sorted by name.
///
/// A payer is credited once per transaction with the full amount, which is
/// `amount_per_person * share_count`. A total that overflows is reported
/// against the transaction that pushed it over.
pub fn aggregate(
    priced: &[PricedTransaction],
    rows: &[ExpandedRow<'_>],
) -> Result<Vec<PersonBalance>> {
    let mut balances: BTreeMap<&str, PersonBalance> = BTreeMap::new();

    for row in rows {
        let owed = balances
            .entry(row.debtor_name)
            .or_insert_with(|| PersonBalance::new(row.debtor_name))
            .owe(row.amount_per_person);
        if !owed {
            return Err(overflow(row.transaction_id(), row.debtor_name, "debt"));
        }
    }

    for p in priced {
        let payer = p.transaction.payer.as_str();
        let lent = balances
            .entry(payer)
            .or_insert_with(|| PersonBalance::new(payer))
            .lend(p.transaction.amount);
        if !lent {
            return Err(overflow(p.transaction.id, payer, "credit"));
        }
    }

    Ok(balances.into_values().collect())
}

fn overflow(id: usize, name: &str, side: &str) -> SettleError {
    SettleError::InvalidTransaction {
        id,
        reason: format!("amount overflow in total {} of {:?}", side, name),
    }
}
