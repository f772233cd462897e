//! Plain-text rendering of a summary report.

use api_types::summary::SummaryReport;

pub fn table(report: &SummaryReport) -> String {
    let width = report
        .balances
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Person".len());

    let mut out = format!("Balances for {}\n", report.owner);
    out.push_str(&format!("{:<width$}  {:>12}\n", "Person", "Balance"));
    for line in &report.balances {
        out.push_str(&format!("{:<width$}  {:>12}\n", line.name, line.balance));
    }

    out.push('\n');
    if report.settlements.is_empty() {
        out.push_str("Everyone is settled up.\n");
    } else {
        out.push_str("Suggested payments\n");
        for s in &report.settlements {
            out.push_str(&format!("{} pays {} {}\n", s.from_name, s.to_name, s.amount));
        }
    }
    out
}
