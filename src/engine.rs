//! Settlement pipeline.
//!
//! Loads a ledger, prices every transaction up front and then derives the
//! expanded rows and per-person balances from that immutable snapshot. Any
//! invalid transaction aborts before a single balance is computed.

use crate::balance::{aggregate, PersonBalance};
use crate::error::{Result, SettleError};
use crate::expand::{expand, ExpandedRow};
use crate::loader::{load_ledger, read_ledger};
use crate::report::{write_intermediate, write_report};
use crate::share::{price_all, PricedTransaction};
use crate::transaction::Transaction;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// A fully priced ledger.
///
/// # Output Ordering
///
/// Balances are sorted by name and expanded rows follow input order, so the
/// same ledger always produces byte-identical output.
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    priced: Vec<PricedTransaction>,
}

impl SettlementEngine {
    /// Prices already-loaded transactions.
    pub fn new(transactions: Vec<Transaction>) -> Result<Self> {
        Ok(SettlementEngine {
            priced: price_all(transactions)?,
        })
    }

    /// Loads and prices the ledger at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(load_ledger(path)?)
    }

    /// Loads and prices a ledger from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::new(read_ledger(reader)?)
    }

    /// One row per (transaction, debtor) pair.
    pub fn expanded_rows(&self) -> Vec<ExpandedRow<'_>> {
        expand(&self.priced)
    }

    /// Net balance per distinct name, sorted by name.
    ///
    /// Fails if a person's running total overflows.
    pub fn balances(&self) -> Result<Vec<PersonBalance>> {
        aggregate(&self.priced, &self.expanded_rows())
    }

    /// Writes the audit CSV to `path`, replacing any existing file.
    ///
    /// A file left incomplete by a failed write is removed.
    pub fn write_intermediate<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SettleError::Report {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        let rows = self.expanded_rows();
        if let Err(source) = write_intermediate(&rows, BufWriter::new(file)) {
            return Err(discard_partial(path, source));
        }

        info!("Wrote {} expanded rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Writes the balance report.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<()> {
        write_report(&self.balances()?, writer)?;
        Ok(())
    }
}

/// Removes a partially written audit file and builds the error for it.
fn discard_partial(path: &Path, source: csv::Error) -> SettleError {
    if let Err(e) = fs::remove_file(path) {
        warn!("Could not remove incomplete {}: {}", path.display(), e);
    }
    SettleError::Report {
        path: path.to_path_buf(),
        source,
    }
}
