//! Balance report and audit CSV output.

use crate::balance::PersonBalance;
use crate::expand::ExpandedRow;
use crate::money::Money;
use serde::Serialize;
use std::io::{self, Write};

/// Heading printed above the balances.
pub const REPORT_HEADING: &str = "収支";

/// Fixed guidance printed after the balances.
pub const GUIDANCE: [&str; 2] = [
    "負の値→貸している。その分、誰かから返してもらう。",
    "正の値→借りている。その分、誰かに返す。",
];

/// Writes `name<TAB>net_balance` per person, then the guidance lines.
///
/// Balances are printed with 4 decimal places.
pub fn write_report<W: Write>(balances: &[PersonBalance], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", REPORT_HEADING)?;
    for balance in balances {
        writeln!(writer, "{}\t{}", balance.name, balance.net_balance)?;
    }
    writeln!(writer)?;
    for line in GUIDANCE {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// One line of the audit dump.
#[derive(Debug, Serialize)]
struct AuditRow<'a> {
    #[serde(rename = "貸し借りID")]
    transaction_id: usize,
    #[serde(rename = "日付")]
    date: &'a str,
    #[serde(rename = "項目")]
    item: &'a str,
    #[serde(rename = "貸した人")]
    payer: &'a str,
    #[serde(rename = "借りた人（個人）")]
    debtor: &'a str,
    #[serde(rename = "1人あたりの金額")]
    amount_per_person: Money,
    #[serde(rename = "金額")]
    amount: Money,
    #[serde(rename = "借りた人の人数")]
    share_count: usize,
    #[serde(rename = "借りた人")]
    debtor_names: &'a str,
    #[serde(rename = "本人含まない")]
    payer_excluded: Option<&'a str>,
}

impl<'a> From<&ExpandedRow<'a>> for AuditRow<'a> {
    fn from(row: &ExpandedRow<'a>) -> Self {
        let tx = row.transaction;
        AuditRow {
            transaction_id: tx.id,
            date: &tx.date,
            item: &tx.item_name,
            payer: &tx.payer,
            debtor: row.debtor_name,
            amount_per_person: row.amount_per_person,
            amount: tx.amount,
            share_count: row.share_count,
            debtor_names: &tx.raw_debtors,
            payer_excluded: tx.raw_flag.as_deref(),
        }
    }
}

/// Writes the expanded rows as CSV with unrounded amounts.
pub fn write_intermediate<W: Write>(rows: &[ExpandedRow<'_>], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(AuditRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::{PricedTransaction, Share};
    use crate::transaction::Transaction;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_report_format() {
        let mut a = PersonBalance::new("A");
        assert!(a.lend(money("3000")));
        assert!(a.owe(money("1000")));
        let mut b = PersonBalance::new("B");
        assert!(b.owe(money("1000")));

        let mut output = Vec::new();
        write_report(&[a, b], &mut output).unwrap();

        let expected = "収支\nA\t-2000.0000\nB\t1000.0000\n\n\
                        負の値→貸している。その分、誰かから返してもらう。\n\
                        正の値→借りている。その分、誰かに返す。\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_intermediate_columns() {
        let priced = PricedTransaction {
            transaction: Transaction {
                id: 0,
                item_name: "taxi".to_string(),
                amount: money("100"),
                payer: "A".to_string(),
                debtor_names: vec!["B".to_string(), "C".to_string()],
                payer_included: true,
                date: "2023-04-01".to_string(),
                raw_debtors: "B, C".to_string(),
                raw_flag: None,
            },
            share: Share {
                share_count: 3,
                amount_per_person: money("100").split(3),
            },
        };
        let rows = crate::expand::expand(std::slice::from_ref(&priced));

        let mut output = Vec::new();
        write_intermediate(&rows, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "貸し借りID,日付,項目,貸した人,借りた人（個人）,1人あたりの金額,金額,借りた人の人数,借りた人,本人含まない"
        );
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0,2023-04-01,taxi,A,B,33.33333"));
        assert!(lines[3].starts_with("0,2023-04-01,taxi,A,A,"));
        assert!(lines[3].ends_with(",100,3,\"B, C\","));
    }
}
