//! Reads a ledger CSV into transactions.

use crate::error::LoadError;
use crate::transaction::{columns, LedgerRecord, Transaction};
use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens `path` and reads every row as a [`Transaction`].
pub fn load_ledger<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let transactions = read_ledger(BufReader::new(file))?;
    info!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

/// Reads ledger rows from any reader, numbering them from 0 in input order.
///
/// Fields are not trimmed: names are matched literally downstream.
pub fn read_ledger<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader.headers()?;
    if let Some(missing) = columns::REQUIRED
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(LoadError::MissingColumn(*missing));
    }

    csv_reader
        .deserialize::<LedgerRecord>()
        .enumerate()
        .map(|(id, result)| -> Result<Transaction, LoadError> {
            Ok(Transaction::from_record(id, result?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::io::Cursor;
    use std::str::FromStr;

    const HEADER: &str = "日付,項目,金額,貸した人,借りた人,本人含まない";

    fn read(csv: &str) -> Result<Vec<Transaction>, LoadError> {
        read_ledger(Cursor::new(csv))
    }

    #[test]
    fn test_assigns_sequential_ids() {
        let csv = format!(
            "{HEADER}\n2023-04-01,dinner,3000,A,\"B, C\",\n2023-04-02,taxi,100,B,A,Yes\n"
        );
        let txs = read(&csv).unwrap();

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].id, 0);
        assert_eq!(txs[1].id, 1);
        assert_eq!(txs[0].debtor_names, vec!["B", "C"]);
        assert!(txs[0].payer_included);
        assert!(!txs[1].payer_included);
        assert_eq!(txs[1].amount, Money::from_str("100").unwrap());
    }

    #[test]
    fn test_flag_column_is_optional() {
        let csv = "日付,項目,金額,貸した人,借りた人\n2023-04-01,dinner,3000,A,B\n";
        let txs = read(csv).unwrap();

        assert!(txs[0].payer_included);
        assert_eq!(txs[0].raw_flag, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = format!("{HEADER},memo\n2023-04-01,dinner,3000,A,B,,ok\n");
        assert_eq!(read(&csv).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "日付,項目,貸した人,借りた人\n2023-04-01,dinner,A,B\n";
        let err = read(csv).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("金額")));
    }

    #[test]
    fn test_unparsable_amount_is_load_error() {
        let csv = format!("{HEADER}\n2023-04-01,dinner,lots,A,B,\n");
        assert!(matches!(read(&csv).unwrap_err(), LoadError::Csv(_)));
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let csv = format!("{HEADER}\n2023-04-01,dinner,3000, A,B ,\n");
        let txs = read(&csv).unwrap();
        assert_eq!(txs[0].payer, " A");
        assert_eq!(txs[0].debtor_names, vec!["B "]);
    }

    #[test]
    fn test_empty_ledger() {
        assert!(read(&format!("{HEADER}\n")).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_ledger("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
