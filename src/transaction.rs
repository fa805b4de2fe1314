//! Ledger record and transaction models.

use crate::money::Money;
use log::warn;
use serde::Deserialize;

/// Literal header names of the ledger CSV.
pub mod columns {
    pub const ITEM: &str = "項目";
    pub const AMOUNT: &str = "金額";
    pub const DEBTORS: &str = "借りた人";
    pub const PAYER: &str = "貸した人";
    pub const PAYER_EXCLUDED: &str = "本人含まない";
    pub const DATE: &str = "日付";

    /// Headers that must be present in every ledger.
    pub const REQUIRED: [&str; 5] = [ITEM, AMOUNT, DEBTORS, PAYER, DATE];
}

/// Flag value that keeps the payer out of the split.
pub const PAYER_EXCLUDED_FLAG: &str = "Yes";

/// Raw ledger row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct LedgerRecord {
    #[serde(rename = "項目")]
    pub item: String,

    #[serde(rename = "金額")]
    pub amount: Money,

    /// Comma-separated debtor names, exactly as written.
    #[serde(rename = "借りた人")]
    pub debtors: String,

    #[serde(rename = "貸した人")]
    pub payer: String,

    /// Absent column and empty cell both read as `None`.
    #[serde(rename = "本人含まない", default)]
    pub payer_excluded: Option<String>,

    #[serde(rename = "日付")]
    pub date: String,
}

/// One ledger row with its sequential identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// 0-based position in the input.
    pub id: usize,
    pub item_name: String,
    pub amount: Money,
    pub payer: String,
    pub debtor_names: Vec<String>,
    pub payer_included: bool,
    pub date: String,

    /// The debtor field before splitting, kept for the audit dump.
    pub raw_debtors: String,

    /// The payer-excluded flag before interpretation, kept for the audit dump.
    pub raw_flag: Option<String>,
}

impl Transaction {
    /// Builds a transaction from a raw record without validating it.
    pub fn from_record(id: usize, record: LedgerRecord) -> Self {
        let debtor_names = parse_debtor_names(&record.debtors);
        for name in debtor_names.iter().chain(std::iter::once(&record.payer)) {
            if name.trim_end() != name.as_str() {
                warn!(
                    "Transaction {}: name {:?} has trailing whitespace and is kept as a distinct person",
                    id, name
                );
            }
        }

        Transaction {
            id,
            item_name: record.item,
            amount: record.amount,
            payer_included: payer_included(record.payer_excluded.as_deref()),
            payer: record.payer,
            debtor_names,
            date: record.date,
            raw_debtors: record.debtors,
            raw_flag: record.payer_excluded,
        }
    }
}

/// Splits a debtor field on commas, dropping the whitespace right after each comma.
///
/// An empty field yields no names. Empty tokens are kept so that the share
/// calculator can reject them.
pub fn parse_debtor_names(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field
        .split(',')
        .enumerate()
        .map(|(idx, token)| {
            if idx == 0 {
                token.to_string()
            } else {
                token.trim_start().to_string()
            }
        })
        .collect()
}

/// Only the literal flag `Yes` excludes the payer from the split.
pub fn payer_included(flag: Option<&str>) -> bool {
    flag != Some(PAYER_EXCLUDED_FLAG)
}
