//! brrr-bigo - Heuristic asymptotic complexity estimation for source code.
//!
//! Given the text of a program (Python-style by default), this library
//! estimates its time complexity class from lexical signals and produces a
//! bounded growth curve for charting. It never parses a full grammar and
//! never executes code: the result is a heuristic label, not a proof.
//!
//! # Architecture
//!
//! - **Scanner** ([`scanner`]): tokenizer, line classification, function
//!   extraction, sort/membership markers
//! - **Analysis** ([`analysis`]): loop nesting depth, recursion shape,
//!   container idioms
//! - **Complexity** ([`complexity`]): precedence-based classification into a
//!   [`ComplexityReport`] and growth-curve generation
//! - **Config** ([`config`]): keyword profile loaded from `.bigo.json`
//! - **Render** ([`render`]): text summaries, ASCII charts, JSON
//!
//! # Quick Start
//!
//! ```
//! use brrr_bigo::{analyze_complexity, growth_curve, ComplexityClass};
//!
//! let report = analyze_complexity("for i in range(5):\n    for j in range(5):\n        print(i*j)");
//! assert_eq!(report.complexity_class, ComplexityClass::Quadratic);
//!
//! let curve = growth_curve(report.complexity_class);
//! assert_eq!(curve.len(), 10);
//! assert_eq!(curve[9].operations, 100.0);
//! ```
//!
//! # Custom Keyword Profiles
//!
//! ```
//! use brrr_bigo::{AnalyzerConfig, ComplexityAnalyzer, ComplexityClass};
//!
//! let config = AnalyzerConfig::from_json(r#"{"profile": {"loop_keywords": ["for", "while", "until"]}}"#)?;
//! let analyzer = ComplexityAnalyzer::new(&config)?;
//! let report = analyzer.classify("until done:\n    step()");
//! assert_eq!(report.complexity_class, ComplexityClass::Linear);
//! # Ok::<(), brrr_bigo::BigOError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analysis;
pub mod complexity;
pub mod config;
pub mod error;
pub mod render;
pub mod scanner;

// =============================================================================
// Public Type Re-exports
// =============================================================================

pub use error::{BigOError, Result};

pub use analysis::{ContainerKind, RecursionKind, RecursionSignal};
pub use complexity::{
    ComplexityAnalyzer, ComplexityClass, ComplexityReport, GrowthCurve, GrowthCurvePoint,
};
pub use config::AnalyzerConfig;
pub use scanner::{FunctionSignature, LexicalProfile, ScanResult, Scanner};

// =============================================================================
// Convenience Functions
// =============================================================================

/// Estimate the time complexity of `code` with the default profile.
///
/// Never fails: internal faults yield a report with class
/// [`ComplexityClass::Unknown`].
///
/// # Examples
///
/// ```
/// use brrr_bigo::{analyze_complexity, ComplexityClass};
///
/// let report = analyze_complexity("x=[1,2,3]\nx.sort()");
/// assert_eq!(report.complexity_class, ComplexityClass::Linearithmic);
/// ```
#[must_use]
pub fn analyze_complexity(code: &str) -> ComplexityReport {
    complexity::classify(code)
}

/// Extract lexical signals from `code` with the default profile.
#[must_use]
pub fn scan_source(code: &str) -> ScanResult {
    scanner::scan(code)
}

/// Ten growth-curve samples (`n = 1..=10`) for `class`, clamped to 1000.
///
/// # Examples
///
/// ```
/// use brrr_bigo::{growth_curve, ComplexityClass};
///
/// let curve = growth_curve(ComplexityClass::Exponential);
/// assert_eq!(curve[9].operations, 64.0);
/// ```
#[must_use]
pub fn growth_curve(class: ComplexityClass) -> Vec<GrowthCurvePoint> {
    complexity::growth_curve(class)
}
