use super::*;
use crate::printer::ColorChoice;
use std::{
    fs::{create_dir, write},
    io::Cursor,
    path::Path,
};

fn quiet_cfg(format: OutputFormat) -> PrinterConfig {
    PrinterConfig {
        format,
        color: ColorChoice::Never,
        show_timing: false,
    }
}

/// Runs one interactive session and returns (result, stdout, stderr).
fn session_with(cli: &Cli, input: &str, format: OutputFormat) -> (Result<()>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = execute(
        cli,
        Cursor::new(input.as_bytes().to_vec()),
        &mut out,
        &mut err,
        quiet_cfg(format),
    );

    (
        result,
        String::from_utf8(out).expect("utf8"),
        String::from_utf8(err).expect("utf8"),
    )
}

/// Human session split into (result, prompts, listing).
fn session(cli: &Cli, input: &str) -> (Result<()>, String, String) {
    let (result, out, _) = session_with(cli, input, OutputFormat::Human);
    let split = out.find("Files sorted by").unwrap_or(out.len());
    let (prompts, listing) = out.split_at(split);
    (result, prompts.to_owned(), listing.to_owned())
}

fn sample_tree(root: &Path) {
    write(root.join("a.txt"), vec![b'a'; 500]).expect("write a");
    write(root.join("b.txt"), vec![b'b'; 2048]).expect("write b");
    create_dir(root.join("nested")).expect("create nested");
    write(root.join("nested").join("c.txt"), vec![b'c'; 10]).expect("write c");
}

#[test]
fn size_listing_end_to_end() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    sample_tree(tmp.path());

    let input = format!("{}\n2\n1\n", tmp.path().display());
    let (result, prompts, out) = session(&Cli::default(), &input);

    result.expect("run ok");
    assert!(prompts.starts_with("Path to scan: "), "{prompts}");
    assert!(prompts.ends_with("Choice: "), "{prompts}");

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5, "{out}");
    assert_eq!(lines[0], "Files sorted by size:");
    assert_eq!(lines[1], "Top 2 files:");

    let b = tmp.path().join("b.txt");
    assert!(
        lines[2].starts_with(&format!("path: {}, name: b.txt, size: 2.00 KB,", b.display())),
        "{}",
        lines[2]
    );
    assert!(lines[3].contains("name: a.txt, size: 500 bytes,"), "{}", lines[3]);
    assert_eq!(lines[4], "... and 1 more files");
}

#[test]
fn zero_count_prints_only_header() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    sample_tree(tmp.path());

    let input = format!("{}\n0\n1\n", tmp.path().display());
    let (result, _, out) = session(&Cli::default(), &input);

    result.expect("run ok");
    assert!(
        out.starts_with("Files sorted by size:\nTop 0 files:\n"),
        "{out}"
    );
    assert!(!out.contains("path:"), "{out}");
}

#[test]
fn recency_listing_with_window_that_excludes_everything() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    sample_tree(tmp.path());

    let input = format!("{}\n10\n2\n1990-01-01\n1990-12-31\n", tmp.path().display());
    let (result, _, out) = session(&Cli::default(), &input);

    result.expect("run ok");
    assert_eq!(out, "Files sorted by modification time:\nTop 10 files:\n");
}

#[test]
fn invalid_selection_prints_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    sample_tree(tmp.path());

    let input = format!("{}\n5\n3\n", tmp.path().display());
    let (result, _, out) = session(&Cli::default(), &input);

    let err = result.expect_err("invalid selection");
    assert_eq!(exit_status(&err), 1);
    assert!(err.to_string().contains("invalid sort selection: 3"), "{err}");
    assert!(out.is_empty(), "{out}");
}

#[test]
fn missing_root_reports_traversal_error() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("gone");

    let cli = Cli {
        path: Some(missing.clone()),
        count: Some(5),
        sort: Some(1),
        ..Cli::default()
    };
    let (result, prompts, out) = session(&cli, "");

    let err = result.expect_err("missing root");
    assert_eq!(exit_status(&err), 2);
    assert!(
        format!("{err:#}").starts_with(&format!("failed to read {}: ", missing.display())),
        "{err:#}"
    );
    assert!(prompts.is_empty());
    assert!(out.is_empty(), "{out}");
}

#[test]
fn truncated_input_maps_to_status_two() {
    let (result, _, _) = session(&Cli::default(), "/tmp\n");
    let err = result.expect_err("eof");
    assert_eq!(exit_status(&err), 2);
}

#[test]
fn json_output_keeps_prompts_off_stdout() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    sample_tree(tmp.path());

    let input = format!("{}\n2\n1\n", tmp.path().display());
    let (result, out, err) = session_with(&Cli::default(), &input, OutputFormat::Json);

    result.expect("run ok");
    assert!(err.contains("Path to scan: "), "{err}");
    assert!(err.contains("Choice: "), "{err}");

    let rows: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect();
    assert_eq!(rows.len(), 2, "{out}");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["name"], "b.txt");
    assert_eq!(rows[0]["size_human"], "2.00 KB");
    assert_eq!(rows[1]["size"], 500);
}
