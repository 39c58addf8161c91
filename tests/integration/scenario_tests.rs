//! End-to-end classification scenarios.

use std::path::PathBuf;

use brrr_bigo::{
    analyze_complexity, scan_source, ComplexityAnalyzer, ComplexityClass, ContainerKind,
    FunctionSignature, RecursionKind, ScanResult,
};

/// Get the path to test fixtures.
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(name)).expect("fixture should exist")
}

// =============================================================================
// Documented Scenarios
// =============================================================================

#[test]
fn test_nested_loops_are_quadratic() {
    let report =
        analyze_complexity("for i in range(5):\n    for j in range(5):\n        print(i*j)");
    assert_eq!(report.complexity_class, ComplexityClass::Quadratic);
}

#[test]
fn test_branching_recursion_is_exponential() {
    let report = analyze_complexity("def f(n):\n    if n<=1: return n\n    return f(n-1)+f(n-2)");
    assert_eq!(report.complexity_class, ComplexityClass::Exponential);
}

#[test]
fn test_sort_is_linearithmic() {
    let report = analyze_complexity("x=[1,2,3]\nx.sort()");
    assert_eq!(report.complexity_class, ComplexityClass::Linearithmic);
}

#[test]
fn test_print_is_constant() {
    let report = analyze_complexity("print('hi')");
    assert_eq!(report.complexity_class, ComplexityClass::Constant);
    assert!(report.details.is_empty());
}

#[test]
fn test_single_loop_is_linear() {
    let report = analyze_complexity("total = 0\nwhile total < 10:\n    total += 1");
    assert_eq!(report.complexity_class, ComplexityClass::Linear);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_no_signal_means_constant() {
    for source in [
        "",
        "x = 1",
        "print(x + y)\nz = x * 2",
        "# for i in range(10):\n'''\nwhile True:\n'''",
        "import math\nprint(math.sqrt(2))",
    ] {
        let scan = scan_source(source);
        assert_eq!(scan.max_loop_nesting_depth, 0, "{source:?}");
        assert!(!scan.uses_sort);
        assert!(!scan.uses_membership_test_on_list);
        assert_eq!(
            analyze_complexity(source).complexity_class,
            ComplexityClass::Constant,
            "{source:?}"
        );
    }
}

#[test]
fn test_sort_wins_over_every_signal() {
    let sources = [
        "for a in x:\n    for b in x:\n        for c in x:\n            pass\nsorted(x)",
        "def f(n):\n    return f(n-1) + f(n-2)\nx.sort()",
        "def g(n):\n    return n * g(n-1)\ny = sorted(z)",
        "xs = [3, 1]\nif 1 in xs:\n    xs.sort()",
    ];
    for source in sources {
        assert_eq!(
            analyze_complexity(source).complexity_class,
            ComplexityClass::Linearithmic,
            "{source:?}"
        );
    }
}

#[test]
fn test_exponential_independent_of_name() {
    for name in ["f", "walk", "solve_tree", "fibonacci"] {
        let source = format!(
            "def {name}(n):\n    if n < 2:\n        return 1\n    return {name}(n-1) + {name}(n-2)"
        );
        let analyzer = ComplexityAnalyzer::default();
        let scan = analyzer.scanner().scan(&source);
        let signal = brrr_bigo::analysis::classify_recursion(&scan.functions).unwrap();
        assert_eq!(signal.kind, RecursionKind::Exponential);
        assert_eq!(
            analyzer.classify(&source).complexity_class,
            ComplexityClass::Exponential
        );
    }
}

#[test]
fn test_case_fields_follow_class() {
    for name in [
        "nested_loops.py",
        "fibonacci.py",
        "factorial.py",
        "sorting.py",
        "search.py",
        "hello.py",
    ] {
        let report = analyze_complexity(&fixture(name));
        assert_eq!(report.worst_case, report.complexity_class, "{name}");
        assert_eq!(report.average_case, report.complexity_class, "{name}");
        assert_eq!(report.best_case, ComplexityClass::Constant, "{name}");
    }
}

#[test]
fn test_repeated_calls_identical() {
    let source = fixture("sorting.py");
    let first = analyze_complexity(&source);
    let second = analyze_complexity(&source);
    assert_eq!(first, second);
    assert_eq!(scan_source(&source), scan_source(&source));
}

#[test]
fn test_concurrent_calls_agree() {
    let source = fixture("fibonacci.py");
    let expected = analyze_complexity(&source);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let source = source.clone();
            std::thread::spawn(move || analyze_complexity(&source))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
fn test_fixture_classes() {
    let expected = [
        ("nested_loops.py", ComplexityClass::Quadratic),
        ("fibonacci.py", ComplexityClass::Exponential),
        ("factorial.py", ComplexityClass::Factorial),
        ("sorting.py", ComplexityClass::Linearithmic),
        ("search.py", ComplexityClass::Linear),
        ("hello.py", ComplexityClass::Constant),
    ];
    for (name, class) in expected {
        assert_eq!(analyze_complexity(&fixture(name)).complexity_class, class, "{name}");
    }
}

#[test]
fn test_sorting_fixture_details() {
    let report = analyze_complexity(&fixture("sorting.py"));
    assert_eq!(
        report.details,
        vec![
            "Maximum loop nesting depth: 2".to_string(),
            "Sort operation detected".to_string(),
            "Data structures used: list, dictionary".to_string(),
        ]
    );
}

#[test]
fn test_search_fixture_description() {
    let report = analyze_complexity(&fixture("search.py"));
    assert_eq!(report.description, "linear time — linear search in list");
    let scan = scan_source(&fixture("search.py"));
    assert!(scan.uses_membership_test_on_list);
    assert!(scan.container_kinds.contains(&ContainerKind::List));
}

#[test]
fn test_malformed_scan_never_raises() {
    let scan = ScanResult {
        functions: vec![FunctionSignature {
            name: String::new(),
            params: vec!["n".to_string()],
            line: 1,
            body: String::new(),
        }],
        ..ScanResult::default()
    };
    let report = ComplexityAnalyzer::default().classify_scan(&scan);
    assert_eq!(report.complexity_class, ComplexityClass::Unknown);
    assert_eq!(report.description, "unable to analyze");
    assert_eq!(report.details, vec!["code analysis failed".to_string()]);
}

// =============================================================================
// Unfinished Input
// =============================================================================

#[test]
fn test_runs_of_unclosed_brackets() {
    for opener in ["(", "{", "["] {
        let report = analyze_complexity(&opener.repeat(100_000));
        assert_ne!(report.complexity_class, ComplexityClass::Unknown);
    }

    let scan = scan_source(&"x = (1, ".repeat(20_000));
    assert!(scan.container_kinds.contains(&ContainerKind::Tuple));
}

#[test]
fn test_half_typed_recursive_function() {
    let source = format!("def f(n):\n    return {}n-1", "f(".repeat(20_000));
    let report = analyze_complexity(&source);
    assert_eq!(report.complexity_class, ComplexityClass::Linear);
}
