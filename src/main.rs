//! bigo CLI - Heuristic time-complexity estimation for source files.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use brrr_bigo::complexity::growth_curve;
use brrr_bigo::render::{curve_to_ascii, report_to_text, to_json};
use brrr_bigo::{
    AnalyzerConfig, ComplexityAnalyzer, ComplexityClass, ComplexityReport, GrowthCurvePoint,
    RecursionSignal, ScanResult,
};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Heuristic time-complexity estimation.
#[derive(Parser)]
#[command(
    name = "bigo",
    version,
    about = "Heuristic time-complexity estimation for source files",
    long_about = r#"
Heuristic time-complexity estimation for source files.

Examples:
    bigo analyze solution.py              # Report for one file
    bigo analyze a.py b.py --curve        # Several files, with growth curves
    cat solution.py | bigo analyze        # Read from stdin
    bigo --format text curve "O(n^2)"     # ASCII growth chart
    bigo scan solution.py                 # Raw lexical signals

Configuration:
    A .bigo.json file in the analyzed file's directory (or any parent)
    overrides the keyword profile. Use --config or --no-config to change that.
"#
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output minified/compact JSON (default: pretty-printed)
    #[arg(long, global = true)]
    compact: bool,

    /// Configuration file (skips .bigo.json discovery)
    #[arg(long, global = true, conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore .bigo.json files and use the built-in profile
    #[arg(long, global = true)]
    no_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Json,
    /// JSON Lines - one object per line
    Jsonl,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the complexity class of source files
    Analyze {
        /// Files to analyze ("-" or nothing reads stdin)
        paths: Vec<PathBuf>,

        /// Include the growth curve for each report
        #[arg(long)]
        curve: bool,
    },

    /// Show the lexical signals extracted from a file
    Scan {
        /// File to scan ("-" or nothing reads stdin)
        path: Option<PathBuf>,
    },

    /// Print the growth curve of a complexity class
    Curve {
        /// Class notation, e.g. "O(n^2)", "n log n", "exponential"
        class: String,
    },
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Source text with a display label.
struct Input {
    label: String,
    source: String,
}

#[derive(Serialize)]
struct AnalysisOutput {
    path: String,
    report: ComplexityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    curve: Option<Vec<GrowthCurvePoint>>,
}

#[derive(Serialize)]
struct ScanOutput {
    path: String,
    scan: ScanResult,
    recursion: RecursionSignal,
}

#[derive(Serialize)]
struct CurveOutput {
    class: ComplexityClass,
    points: Vec<GrowthCurvePoint>,
}

// =============================================================================
// HELPERS
// =============================================================================

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(p) if !is_stdin(p) => {
            let source = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read {}", p.display()))?;
            Ok(Input {
                label: p.display().to_string(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(Input {
                label: "<stdin>".to_string(),
                source,
            })
        }
    }
}

/// Explicit `--config`, then `.bigo.json` discovery from `path` (the current
/// directory for stdin), then built-in defaults.
fn resolve_config(cli: &Cli, path: Option<&Path>) -> Result<AnalyzerConfig> {
    if cli.no_config {
        return Ok(AnalyzerConfig::default());
    }
    if let Some(path) = &cli.config {
        return AnalyzerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let start = match path {
        Some(p) if !is_stdin(p) => p.to_path_buf(),
        _ => std::env::current_dir().context("Failed to determine current directory")?,
    };
    match AnalyzerConfig::find_and_load(&start)? {
        Some((config, path)) => {
            info!("Using config {}", path.display());
            Ok(config)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

fn emit<T: Serialize>(items: &[T], format: OutputFormat, compact: bool) -> Result<String> {
    match format {
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for item in items {
                out.push_str(&to_json(item, true)?);
                out.push('\n');
            }
            Ok(out)
        }
        _ if items.len() == 1 => Ok(to_json(&items[0], compact)? + "\n"),
        _ => Ok(to_json(items, compact)? + "\n"),
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

fn run_analyze(cli: &Cli, paths: &[PathBuf], curve: bool) -> Result<String> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        anyhow::bail!("stdin (\"-\") can only be analyzed once per run");
    }
    let stdin_only = [PathBuf::from("-")];
    let paths = if paths.is_empty() { &stdin_only[..] } else { paths };
    debug!(inputs = paths.len(), "analyzing");

    // Each input picks up the .bigo.json nearest to it.
    let outputs: Vec<AnalysisOutput> = paths
        .par_iter()
        .map(|path| {
            let config = resolve_config(cli, Some(path.as_path()))?;
            let analyzer =
                ComplexityAnalyzer::new(&config).context("Invalid analyzer configuration")?;
            let input = read_input(Some(path.as_path()))?;
            let report = analyzer.classify(&input.source);
            Ok(AnalysisOutput {
                path: input.label,
                curve: curve.then(|| report.growth_curve()),
                report,
            })
        })
        .collect::<Result<_>>()?;

    if cli.format != OutputFormat::Text {
        return emit(&outputs, cli.format, cli.compact);
    }

    let mut out = String::new();
    for output in &outputs {
        if outputs.len() > 1 {
            out.push_str(&format!("==> {} <==\n", output.path));
        }
        out.push_str(&report_to_text(&output.report));
        if let Some(points) = &output.curve {
            out.push('\n');
            out.push_str(&curve_to_ascii(output.report.complexity_class, points));
        }
        out.push('\n');
    }
    Ok(out)
}

fn run_scan(cli: &Cli, path: Option<&Path>) -> Result<String> {
    let config = resolve_config(cli, path)?;
    let analyzer = ComplexityAnalyzer::new(&config).context("Invalid analyzer configuration")?;
    let input = read_input(path)?;

    let scan = analyzer.scanner().scan(&input.source);
    let recursion = brrr_bigo::analysis::classify_recursion(&scan.functions)
        .context("Recursion analysis failed")?;

    if cli.format != OutputFormat::Text {
        let output = ScanOutput {
            path: input.label,
            scan,
            recursion,
        };
        return emit(&[output], cli.format, cli.compact);
    }

    let containers: Vec<&str> = scan.container_kinds.iter().map(|k| k.name()).collect();
    let mut out = format!("Scan: {}\n", input.label);
    out.push_str(&"=".repeat(40));
    out.push('\n');
    out.push_str(&format!("Max loop nesting: {}\n", scan.max_loop_nesting_depth));
    out.push_str(&format!("Uses sort: {}\n", scan.uses_sort));
    out.push_str(&format!(
        "Membership test on list: {}\n",
        scan.uses_membership_test_on_list
    ));
    out.push_str(&format!("Containers: {}\n", containers.join(", ")));
    out.push_str(&format!("Recursion: {}\n", recursion.kind));
    out.push_str(&format!("Functions: {}\n", scan.functions.len()));
    for function in &scan.functions {
        out.push_str(&format!(
            "    {}({}) at line {}\n",
            function.name,
            function.params.join(", "),
            function.line
        ));
    }
    Ok(out)
}

fn run_curve(cli: &Cli, class: &str) -> Result<String> {
    let class: ComplexityClass = class.parse()?;
    let points = growth_curve(class);

    if cli.format == OutputFormat::Text {
        return Ok(curve_to_ascii(class, &points));
    }
    emit(&[CurveOutput { class, points }], cli.format, cli.compact)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = match &cli.command {
        Commands::Analyze { paths, curve } => run_analyze(&cli, paths, *curve)?,
        Commands::Scan { path } => run_scan(&cli, path.as_deref())?,
        Commands::Curve { class } => run_curve(&cli, class)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
