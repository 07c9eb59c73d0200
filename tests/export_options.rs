// tests/export_options.rs
//
// Export format/extension mapping and out-path resolution.
//
use std::path::PathBuf;

use shopfront::config::options::{ExportFormat, ExportOptions};
use shopfront::csv;

#[test]
fn format_maps_to_extension_and_delimiter() {
    assert_eq!(ExportFormat::Csv.ext(), "csv");
    assert_eq!(ExportFormat::Tsv.ext(), "tsv");
    assert_eq!(ExportFormat::Csv.delim(), ',');
    assert_eq!(ExportFormat::Tsv.delim(), '\t');
}

#[test]
fn default_out_path_follows_the_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.out_path().to_string_lossy().ends_with("products.csv"));

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("products.tsv"));
}

#[test]
fn explicit_out_path_wins_over_the_default() {
    let mut opts = ExportOptions::default();
    opts.out = Some(PathBuf::from("somewhere/else.data"));
    opts.format = ExportFormat::Tsv;

    assert_eq!(opts.out_path(), PathBuf::from("somewhere/else.data"));
}

#[test]
fn export_string_honors_header_toggle() {
    let headers = Some(vec!["title".to_string(), "price".to_string()]);
    let rows = vec![vec!["800 Robux".to_string(), "$9.99".to_string()]];

    let with = csv::to_export_string(&headers, &rows, true, ',');
    assert_eq!(with, "title,price\n800 Robux,$9.99\n");

    let without = csv::to_export_string(&headers, &rows, false, ',');
    assert_eq!(without, "800 Robux,$9.99\n");
}

#[test]
fn export_string_quotes_fields_containing_the_separator() {
    let rows = vec![vec!["Battle Pass, Deluxe".to_string(), "$14.99".to_string()]];
    let txt = csv::to_export_string(&None, &rows, false, ',');
    assert_eq!(txt, "\"Battle Pass, Deluxe\",$14.99\n");

    // Same row as TSV needs no quoting
    let tsv = csv::to_export_string(&None, &rows, false, '\t');
    assert_eq!(tsv, "Battle Pass, Deluxe\t$14.99\n");
}
