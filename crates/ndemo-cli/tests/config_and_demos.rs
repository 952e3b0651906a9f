//! Integration tests for config loading, util helpers and demo output.

use clap::{value_parser, Arg, Command};
use ndemo_array::literal;
use ndemo_cli::config::{load_config, DemoConfig};
use ndemo_cli::demos::run_demo;
use ndemo_cli::demos::speedup::{memory_difference, Measurement};
use ndemo_cli::util::{format_shape, parse_literal, parse_shape};
use std::time::Duration;

fn render(name: &str, config: &DemoConfig) -> String {
    let mut out = Vec::new();
    run_demo(name, &mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

// ---------------------------------------------------------------------------
// util
// ---------------------------------------------------------------------------

#[test]
fn parse_shape_accepts_common_spellings() {
    assert_eq!(parse_shape("4,4").unwrap(), vec![4, 4]);
    assert_eq!(parse_shape("2x6").unwrap(), vec![2, 6]);
    assert_eq!(parse_shape("(3, 4)").unwrap(), vec![3, 4]);
    assert_eq!(parse_shape("12").unwrap(), vec![12]);
}

#[test]
fn parse_shape_rejects_garbage() {
    assert!(parse_shape("").is_err());
    assert!(parse_shape("a,b").is_err());
    assert!(parse_shape("-1,2").is_err());
}

#[test]
fn parse_literal_from_json() {
    assert_eq!(parse_literal("[[1, 2], [3, 4]]").unwrap(), literal![[1, 2], [3, 4]]);
    assert!(parse_literal("[[1, 2], [3, 4]").is_err());
}

#[test]
fn format_shape_like_python() {
    assert_eq!(format_shape(&[3, 4]), "(3, 4)");
    assert_eq!(format_shape(&[5]), "(5,)");
    assert_eq!(format_shape(&[]), "()");
}

// ---------------------------------------------------------------------------
// DemoConfig
// ---------------------------------------------------------------------------

#[test]
fn config_default_values() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.reshape, vec![4, 4]);
    assert_eq!(cfg.indexing_threshold, 6);
    assert_eq!(cfg.split_sections, 2);
    assert_eq!(cfg.speedup_size, 100_000_000);
    assert!(!cfg.parallel);
}

#[test]
fn config_round_trips_json() {
    let cfg = DemoConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("basics_data"));
    assert!(!json.contains("\"version\""));
    let cfg2: DemoConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"split_sections": 4, "precision": "wide"}"#).unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.split_sections, 4);
    assert_eq!(cfg.precision, 2);
    assert_eq!(cfg.reshape, vec![4, 4]);
}

#[test]
fn config_with_literal_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"scores": [[90.5, 88], [70, 99]]}"#).unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.scores, literal![[90.5, 88], [70, 99]]);
}

#[test]
fn unparseable_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_config(&path).is_err());
    assert!(load_config(dir.path().join("missing.json")).is_err());
}

#[test]
fn command_line_overrides_defaults() {
    let matches = Command::new("test")
        .arg(Arg::new("split_sections").long("sections").value_parser(value_parser!(usize)))
        .arg(Arg::new("reshape").long("reshape"))
        .get_matches_from(["test", "--sections", "3", "--reshape", "2x6"]);

    let cfg = DemoConfig::from_arguments(&matches).unwrap();
    assert_eq!(cfg.split_sections, 3);
    assert_eq!(cfg.reshape, vec![2, 6]);
    assert_eq!(cfg.indexing_threshold, 6);
}

// ---------------------------------------------------------------------------
// Demo output
// ---------------------------------------------------------------------------

#[test]
fn basics_reports_attributes_and_recovers() {
    let text = render("basics", &DemoConfig::default());
    assert!(text.contains("Shape: (3, 4)"));
    assert!(text.contains("Size: 12"));
    assert!(text.contains("Number of Dimensions: 2"));
    assert!(text.contains("Datatype: int64"));
    assert!(text.contains("Dimensions are not correct"));
    assert!(text.contains("Flattened: [ 1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12]"));
}

#[test]
fn basics_float_data() {
    let cfg = DemoConfig {
        basics_data: literal![1, 2.5],
        reshape: vec![2, 1],
        ..DemoConfig::default()
    };
    let text = render("basics", &cfg);
    assert!(text.contains("Datatype: float64"));
    assert!(text.contains("Reshaped (2, 1):"));
    assert!(text.contains("Flattened: [1.00, 2.50]"));
}

#[test]
fn indexing_output() {
    let text = render("indexing", &DemoConfig::default());
    assert!(text.contains("Element at [1, 2]: 7"));
    assert!(text.contains("First row: [1, 2, 3, 4]"));
    assert!(text.contains("Last column: [ 4,  8, 12]"));
    assert!(text.contains("Elements > 6: [ 7,  8,  9, 10, 11, 12]"));
    assert!(text.contains("Fancy indexing - rows [0,2], cols [1,3]: [ 2, 12]"));
}

#[test]
fn arithmetic_output() {
    let text = render("arithmetic", &DemoConfig::default());
    assert!(text.contains("a + b: [11, 22, 33, 44]"));
    assert!(text.contains("a / b: [0.10, 0.10, 0.10, 0.10]"));
    assert!(text.contains("a ** 2: [ 1,  4,  9, 16]"));
    assert!(text.contains("Sum of all elements: 45"));
    assert!(text.contains("Mean: 5.00"));
    assert!(text.contains("Standard deviation: 2.58"));
    assert!(text.contains("Sum along axis 0 (columns): [12, 15, 18]"));
    assert!(text.contains("Mean along axis 0: [4.00, 5.00, 6.00]"));
}

#[test]
fn scores_output() {
    let text = render("scores", &DemoConfig::default());
    assert!(text.contains("Top student: Student 5 with average 94.00"));
    assert!(text.contains("Students with all scores > 85: [3, 5]"));
    assert!(text.contains("[[ 60,  78,  35,  85,  71],"));
}

#[test]
fn scores_rejects_boolean_table() {
    let cfg = DemoConfig {
        scores: literal![[true, false], [false, true]],
        ..DemoConfig::default()
    };
    let mut out = Vec::new();
    assert!(run_demo("scores", &mut out, &cfg).is_err());
}

#[test]
fn combine_output() {
    let text = render("combine", &DemoConfig::default());
    assert!(text.contains("Horizontal concatenation:\n[[1, 2, 5, 6],\n [3, 4, 7, 8]]"));
    assert!(text.contains("Part 2:\n[[ 2,  3],\n [ 6,  7],\n [10, 11]]"));
    assert!(text.contains("View (affected): [999,   2,   3,   4,   5]"));
    assert!(text.contains("Copy (not affected): [1, 2, 3, 4, 5]"));
}

#[test]
fn combine_unequal_split_is_an_error() {
    let cfg = DemoConfig {
        split_sections: 3,
        ..DemoConfig::default()
    };
    let mut out = Vec::new();
    let err = run_demo("combine", &mut out, &cfg).unwrap_err();
    assert!(err.to_string().contains("equal division"));
}

#[test]
fn speedup_small_size() {
    let cfg = DemoConfig {
        speedup_size: 500,
        parallel: true,
        ..DemoConfig::default()
    };
    let text = render("speedup", &cfg);
    assert!(text.contains("Time for LIST"));
    assert!(text.contains("Time for PARALLEL"));
    assert!(text.contains("Difference in Memory"));
}

#[test]
fn speedup_rejects_overflowing_size() {
    let cfg = DemoConfig {
        speedup_size: usize::MAX,
        ..DemoConfig::default()
    };
    let mut out = Vec::new();
    assert!(run_demo("speedup", &mut out, &cfg).is_err());
}

#[test]
fn memory_difference_percentage() {
    let list = Measurement {
        elapsed: Duration::from_millis(2),
        bytes: 200,
    };
    let array = Measurement {
        elapsed: Duration::from_millis(1),
        bytes: 150,
    };
    assert!((memory_difference(&list, &array) - 25.0).abs() < 1e-9);
}

#[test]
fn ragged_data_error_is_reported_once() {
    let mut cfg = DemoConfig::default();
    cfg.basics_data = literal![[1, 2], [3]];
    let mut out = Vec::new();
    let err = run_demo("basics", &mut out, &cfg).unwrap_err();
    let text = format!("{:#}", err);
    assert!(text.starts_with("Invalid basics data: shape error: "));
    assert_eq!(text.matches("sibling lengths differ").count(), 1);
}

#[test]
fn unknown_demo_is_an_error() {
    let mut out = Vec::new();
    assert!(run_demo("plot", &mut out, &DemoConfig::default()).is_err());
}
