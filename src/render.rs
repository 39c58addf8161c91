//! Text and JSON rendering of reports and growth curves.
//!
//! The ASCII chart uses the fixed axis `[1, 10] x [0, 1000]` regardless of
//! class, so curves of different classes are directly comparable.

use serde::Serialize;

use crate::complexity::growth::{CURVE_MAX_N, CURVE_MIN_N, OPERATION_CEILING};
use crate::complexity::{ComplexityClass, ComplexityReport, GrowthCurvePoint};
use crate::error::Result;

/// Number of horizontal grid bands in the chart.
const CHART_ROWS: u32 = 10;
/// Character cells per sample column.
const COLUMN_WIDTH: usize = 4;

/// Render a report as a short multi-line summary.
#[must_use]
pub fn report_to_text(report: &ComplexityReport) -> String {
    let mut out = format!("Complexity: {}\n", report.complexity_class);
    out.push_str(&"=".repeat(40));
    out.push('\n');
    out.push_str(&format!("{}\n", report.description));
    out.push_str(&format!(
        "Best: {}  Average: {}  Worst: {}\n",
        report.best_case, report.average_case, report.worst_case
    ));

    if !report.details.is_empty() {
        out.push_str("\nDetails:\n");
        for detail in &report.details {
            out.push_str(&format!("    - {}\n", detail));
        }
    }

    out
}

/// Plot growth-curve samples on the fixed chart axis.
///
/// Each sample lands in the band nearest to its value and is drawn as `*`;
/// empty cells show the `.` grid.
#[must_use]
pub fn curve_to_ascii(class: ComplexityClass, points: &[GrowthCurvePoint]) -> String {
    let band = OPERATION_CEILING / f64::from(CHART_ROWS);
    let columns = (CURVE_MAX_N - CURVE_MIN_N + 1) as usize;

    let mut out = format!("Growth curve: {}\n", class);
    for row in (0..=CHART_ROWS).rev() {
        let mut cells = vec!['.'; columns];
        for point in points {
            let in_range = (CURVE_MIN_N..=CURVE_MAX_N).contains(&point.n);
            if in_range && (point.operations / band).round() as u32 == row {
                cells[(point.n - CURVE_MIN_N) as usize] = '*';
            }
        }

        out.push_str(&format!("{:>5} |", f64::from(row) * band));
        for cell in cells {
            out.push_str(&format!("{:>width$}", cell, width = COLUMN_WIDTH));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:>5} +{}\n", "", "-".repeat(columns * COLUMN_WIDTH)));
    out.push_str(&format!("{:>5}  ", "n"));
    for n in CURVE_MIN_N..=CURVE_MAX_N {
        out.push_str(&format!("{:>width$}", n, width = COLUMN_WIDTH));
    }
    out.push('\n');

    out.push_str("\nSamples:\n");
    for point in points {
        out.push_str(&format!("    n={:<3} operations={}\n", point.n, point.operations));
    }

    out
}

/// Serialize `value` as pretty or compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
