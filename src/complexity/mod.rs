//! Complexity classification.
//!
//! Merges the scanner's signals into one [`ComplexityReport`] under a fixed
//! precedence:
//!
//! 1. Default `O(1)`.
//! 2. Recursion, when present, decides the class and loop nesting is not
//!    consulted at all.
//! 3. Otherwise loop nesting: depth 1 is `O(n)`, 2 is `O(n²)`, 3+ is `O(n³)`.
//! 4. A sort call always overrides to `O(n log n)`, whatever came before.
//! 5. A membership test on a list gives `O(n)` only while the class is still
//!    the untouched default.
//! 6. Detected containers are listed as a final detail line.
//!
//! Best case is always `O(1)`; average and worst case always equal the
//! final class. Both are simplifications of the heuristic, not derivations.
//!
//! # Example
//!
//! ```
//! use brrr_bigo::complexity::{classify, ComplexityClass};
//!
//! let report = classify("def f(n):\n    if n<=1: return n\n    return f(n-1)+f(n-2)");
//! assert_eq!(report.complexity_class, ComplexityClass::Exponential);
//! assert_eq!(report.worst_case, report.complexity_class);
//! ```

pub mod class;
pub mod growth;

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::recursion::{classify_recursion, RecursionKind};
use crate::config::AnalyzerConfig;
use crate::error::{BigOError, Result};
use crate::scanner::{ScanResult, Scanner};

pub use class::ComplexityClass;
pub use growth::{growth_curve, GrowthCurve, GrowthCurvePoint};

/// Description used when nothing raises the class above constant.
pub const CONSTANT_DESCRIPTION: &str = "constant time — basic operations";
/// Description of the sentinel report.
pub const FAILURE_DESCRIPTION: &str = "unable to analyze";
/// Single detail line of the sentinel report.
pub const FAILURE_DETAIL: &str = "code analysis failed";

/// Result of classifying one source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub complexity_class: ComplexityClass,
    pub description: String,
    pub details: Vec<String>,
    pub best_case: ComplexityClass,
    pub average_case: ComplexityClass,
    pub worst_case: ComplexityClass,
}

impl ComplexityReport {
    /// Build a report; case fields are derived from `class`.
    #[must_use]
    pub fn new(
        class: ComplexityClass,
        description: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            complexity_class: class,
            description: description.into(),
            details,
            best_case: ComplexityClass::Constant,
            average_case: class,
            worst_case: class,
        }
    }

    /// Report returned when analysis fails internally.
    #[must_use]
    pub fn unable_to_analyze() -> Self {
        Self::new(
            ComplexityClass::Unknown,
            FAILURE_DESCRIPTION,
            vec![FAILURE_DETAIL.to_string()],
        )
    }

    /// Growth-curve samples for this report's class.
    #[must_use]
    pub fn growth_curve(&self) -> Vec<GrowthCurvePoint> {
        growth_curve(self.complexity_class)
    }
}

/// Classify a finished [`ScanResult`].
///
/// Errors only on malformed scan results (see [`classify_recursion`]).
pub fn classify_scan(scan: &ScanResult) -> Result<ComplexityReport> {
    let mut class = ComplexityClass::Constant;
    let mut description = CONSTANT_DESCRIPTION.to_string();
    let mut details = Vec::new();

    let recursion = classify_recursion(&scan.functions)?;
    if recursion.present {
        let name = recursion.function.as_deref().unwrap_or("<anonymous>");
        let (recursive_class, text, detail) = match recursion.kind {
            RecursionKind::Exponential => (
                ComplexityClass::Exponential,
                "exponential time — branching recursion",
                format!("Recursive function '{name}' calls itself twice per invocation"),
            ),
            RecursionKind::Factorial => (
                ComplexityClass::Factorial,
                "factorial time — recursion multiplied by input",
                format!("Recursive function '{name}' multiplies by its input on every call"),
            ),
            RecursionKind::Linear => (
                ComplexityClass::Linear,
                "linear time — single recursive call",
                format!("Recursive function '{name}' calls itself once per invocation"),
            ),
            RecursionKind::None => {
                return Err(BigOError::analysis(format!(
                    "recursion reported for '{name}' without a recursion kind"
                )))
            }
        };
        class = recursive_class;
        description = text.to_string();
        details.push(detail);
    } else {
        let depth = scan.max_loop_nesting_depth;
        let loop_class = match depth {
            0 => None,
            1 => Some((ComplexityClass::Linear, "linear time — single loop")),
            2 => Some((ComplexityClass::Quadratic, "quadratic time — nested loops")),
            _ => Some((ComplexityClass::Cubic, "cubic time — triple nested loops")),
        };
        if let Some((loop_class, text)) = loop_class {
            class = loop_class;
            description = text.to_string();
            details.push(format!("Maximum loop nesting depth: {depth}"));
        }
    }

    if scan.uses_sort {
        class = ComplexityClass::Linearithmic;
        description = "linearithmic time — efficient sorting".to_string();
        details.push("Sort operation detected".to_string());
    }

    if scan.uses_membership_test_on_list && class == ComplexityClass::Constant {
        class = ComplexityClass::Linear;
        description = "linear time — linear search in list".to_string();
        details.push("Membership test on a list".to_string());
    }

    if !scan.container_kinds.is_empty() {
        let names: Vec<&str> = scan.container_kinds.iter().map(|k| k.name()).collect();
        details.push(format!("Data structures used: {}", names.join(", ")));
    }

    debug!(%class, details = details.len(), "classified");
    Ok(ComplexityReport::new(class, description, details))
}

/// Scanner plus classifier, configured once and reused across calls.
///
/// Holds no state between calls; `classify` is safe to call from many
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct ComplexityAnalyzer {
    scanner: Scanner,
}

impl ComplexityAnalyzer {
    /// Build an analyzer from configuration, validating the lexical profile.
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            scanner: Scanner::new(config.profile.clone())?,
        })
    }

    #[must_use]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scan and classify `source`, surfacing internal faults as errors.
    pub fn try_classify(&self, source: &str) -> Result<ComplexityReport> {
        classify_scan(&self.scanner.scan(source))
    }

    /// Scan and classify `source`. Never fails: internal faults, including
    /// panics, produce [`ComplexityReport::unable_to_analyze`].
    #[must_use]
    pub fn classify(&self, source: &str) -> ComplexityReport {
        guarded(|| self.try_classify(source))
    }

    /// Classify an existing scan result with the same fallback as
    /// [`ComplexityAnalyzer::classify`].
    #[must_use]
    pub fn classify_scan(&self, scan: &ScanResult) -> ComplexityReport {
        guarded(|| classify_scan(scan))
    }
}

fn guarded<F>(run: F) -> ComplexityReport
where
    F: FnOnce() -> Result<ComplexityReport>,
{
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            warn!(error = %e, "complexity analysis failed");
            ComplexityReport::unable_to_analyze()
        }
        Err(_) => {
            warn!("complexity analysis panicked");
            ComplexityReport::unable_to_analyze()
        }
    }
}

/// Classify `source` with the default profile. Never fails.
#[must_use]
pub fn classify(source: &str) -> ComplexityReport {
    ComplexityAnalyzer::default().classify(source)
}
