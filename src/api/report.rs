//! Stage reports: per-stage totals and percentages as a fixed-width table.

use std::fmt;
use std::time::Duration;

use crate::util::time::duration_ms;

/// One body row of a stage report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Display name of the stage.
    pub name: &'static str,
    /// Accumulated wall-clock time, fractional milliseconds.
    pub time_ms: f64,
    /// Share of the report total, 0.0 to 100.0.
    pub percent: f64,
}

/// Snapshot of per-stage totals with percentages.
///
/// Stages with exactly zero accumulated time are omitted; the idle
/// sentinel never appears. `Display` renders the table: a header row
/// (`stages` / `time(ms)` / `%`), one body row per non-zero stage with
/// the name left-aligned in a 30-column field and one-decimal
/// right-aligned numbers, and a trailing `TOTAL` row at 100.0%.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    rows: Vec<ReportRow>,
    total_ms: f64,
}

impl StageReport {
    pub(crate) fn from_totals(names: &'static [&'static str], totals: &[Duration]) -> Self {
        debug_assert_eq!(names.len(), totals.len());
        let total_ms: f64 = totals.iter().map(|d| duration_ms(*d)).sum();
        let rows = names
            .iter()
            .zip(totals)
            .filter(|(_, d)| !d.is_zero())
            .map(|(name, d)| {
                let time_ms = duration_ms(*d);
                // Guard the zero-total case so percentages stay defined.
                let percent = if total_ms > 0.0 {
                    time_ms / total_ms * 100.0
                } else {
                    0.0
                };
                ReportRow {
                    name,
                    time_ms,
                    percent,
                }
            })
            .collect();
        Self { rows, total_ms }
    }

    /// Body rows: stages with non-zero accumulated time, in declaration
    /// order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Summed time across all reported stages, milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    /// True when no stage accumulated any time.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Emit the rendered table through the `log` crate, one line per
    /// record, at info level.
    #[cfg(feature = "log")]
    pub fn emit_to_log(&self) {
        for line in self.to_string().lines() {
            log::info!(target: "stagetime", "{line}");
        }
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The time column is sized to the widest value, the TOTAL row.
        let ts = format!("{:.1}", self.total_ms).len() + 1;
        let total_percent = if self.total_ms > 0.0 { 100.0 } else { 0.0 };

        writeln!(f)?;
        writeln!(f, "{:10}{:<30}{:>ts$}{:>10}", "", "stages", "time(ms)", "%")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:10}{:<30}{:>ts$.1}{:>10.1}",
                "", row.name, row.time_ms, row.percent
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:10}{:<30}{:>ts$.1}{:>10.1}",
            "", "TOTAL", self.total_ms, total_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["parse", "predict", "reconstruct"];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_zero_rows_are_omitted() {
        let report = StageReport::from_totals(NAMES, &[ms(10), Duration::ZERO, ms(30)]);
        assert_eq!(report.rows().len(), 2);
        assert_eq!(report.rows()[0].name, "parse");
        assert_eq!(report.rows()[1].name, "reconstruct");
        assert_eq!(report.total_ms(), 40.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let report = StageReport::from_totals(NAMES, &[ms(10), ms(20), ms(5)]);
        assert!((report.rows()[0].percent - 100.0 * 10.0 / 35.0).abs() < 1e-9);
        assert!((report.rows()[1].percent - 100.0 * 20.0 / 35.0).abs() < 1e-9);
        let sum: f64 = report.rows().iter().map(|r| r.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_table_layout() {
        let text = StageReport::from_totals(NAMES, &[ms(10), ms(20), ms(5)]).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // Leading blank line, header, three body rows, blank, TOTAL.
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("          stages"));
        assert!(lines[1].contains("time(ms)"));
        assert!(lines[1].ends_with("%"));

        // Name field is 30 columns after a 10-column indent.
        assert!(lines[2].starts_with("          parse"));
        assert_eq!(&lines[2][10..40], format!("{:<30}", "parse"));
        assert!(lines[2].contains("10.0"));
        assert!(lines[3].contains("57.1"));

        let total = lines[6];
        assert!(total.starts_with("          TOTAL"));
        assert!(total.contains("35.0"));
        assert!(total.ends_with("100.0"));
    }

    #[test]
    fn test_display_is_idempotent() {
        let report = StageReport::from_totals(NAMES, &[ms(1), ms(2), ms(3)]);
        assert_eq!(report.to_string(), report.to_string());
    }

    #[test]
    fn test_zero_total_has_no_body_and_zero_percent() {
        let report = StageReport::from_totals(NAMES, &[Duration::ZERO; 3]);
        assert!(report.is_empty());
        let text = report.to_string();
        assert!(text.contains("TOTAL"));
        assert!(text.trim_end().ends_with("0.0"));
        assert!(!text.contains("parse"));
    }
}
