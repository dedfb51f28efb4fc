use sizelimit::models::{MeasurementRecord, ReportMode, Snapshot};
use sizelimit::reporting::{
    format_results, has_size_changes, parse_results, read_snapshot, render_comment,
    render_markdown, should_notify, write_snapshot, REPORT_HEADING,
};
use tempfile::TempDir;

fn timed_output(size: &str, loading: &str, running: &str) -> String {
    serde_json::json!([{
        "name": "dist/index.js",
        "passed": true,
        "size": size,
        "loading": loading,
        "running": running,
    }])
    .to_string()
}

#[test]
fn test_parse_size_only_output() {
    let snapshot = parse_results(r#"[{"name":"dist/index.js","size":"110894"}]"#).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"dist/index.js": {"name": "dist/index.js", "size": 110894}})
    );
}

#[test]
fn test_timed_comparison_end_to_end() {
    let base = parse_results(&timed_output("110894", "2.1658984375", "0.10210999999999999")).unwrap();
    let current = parse_results(&timed_output("100894", "2.5658984375", "0.20210999999999999")).unwrap();

    let table = format_results(Some(&base), &current, 0.0);
    assert_eq!(table.mode, ReportMode::Time);
    assert_eq!(
        table.to_rows(),
        vec![
            vec![
                "Path",
                "Size",
                "Loading time (3g)",
                "Running time (snapdragon)",
                "Total time",
            ],
            vec![
                "dist/index.js",
                "98.53 KB (-9.02% 🔽)",
                "2.6 s (+18.47% 🔺)",
                "203 ms (+97.94% 🔺)",
                "2.8 s",
            ],
        ]
    );
}

#[test]
fn test_identical_timed_runs_are_still_significant() {
    let output = timed_output("110894", "2.1658984375", "0.10210999999999999");
    let base = parse_results(&output).unwrap();
    let current = parse_results(&output).unwrap();
    assert!(has_size_changes(Some(&base), &current, 0.0));
}

#[test]
fn test_untimed_current_forces_size_report_despite_timed_base() {
    let base = parse_results(&timed_output("1000", "1", "1")).unwrap();
    let current = parse_results(r#"[{"name":"dist/index.js","size":"1000"}]"#).unwrap();

    let table = format_results(Some(&base), &current, 0.0);
    assert_eq!(table.mode, ReportMode::Size);
    assert_eq!(table.rows, vec![vec!["dist/index.js", "1000 B (0%)"]]);
    assert!(!has_size_changes(Some(&base), &current, 0.0));
}

#[test]
fn test_highlight_threshold_does_not_affect_significance() {
    let base: Snapshot = vec![MeasurementRecord::sized("dist/index.js", 110894)].into_iter().collect();
    let current: Snapshot = vec![MeasurementRecord::sized("dist/index.js", 110642)].into_iter().collect();

    let table = format_results(Some(&base), &current, 2.0);
    assert_eq!(table.rows[0][1], "108.05 KB (-0.23%)");
    assert!(has_size_changes(Some(&base), &current, 0.0));
    assert!(!has_size_changes(Some(&base), &current, 0.5));
}

#[test]
fn test_comment_body_for_first_run() {
    let current = parse_results(r#"[{"name":"dist/index.js","size":"100894"}]"#).unwrap();
    assert!(should_notify(None, &current, Some(0.0), false));

    let table = format_results(None, &current, 0.0);
    let body = render_comment(REPORT_HEADING, &table);
    assert_eq!(
        body,
        format!("{}\r\n{}", REPORT_HEADING, render_markdown(&table))
    );
    assert!(body.contains("| dist/index.js | 98.53 KB (added 🆕) |"));
}

#[tokio::test]
async fn test_persisted_baseline_round_trip_keeps_row_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("size-limit-results.json");

    let base = parse_results(
        r#"[{"name":"z.js","size":"2048"},{"name":"a.js","size":"1024"}]"#,
    )
    .unwrap();
    write_snapshot(&path, &base).await.unwrap();
    let loaded = read_snapshot(&path).await.unwrap().unwrap();

    let current = parse_results(
        r#"[{"name":"new.js","size":"10"},{"name":"a.js","size":"1024"}]"#,
    )
    .unwrap();
    let table = format_results(Some(&loaded), &current, 0.0);
    let names: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, vec!["z.js", "a.js", "new.js"]);
    assert_eq!(table.rows[0][1], "0 B (removed 🚮)");
    assert_eq!(table.rows[2][1], "10 B (added 🆕)");
}
