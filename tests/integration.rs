use std::process::Command;

fn run_bin(args: &[&str]) -> String {
    let bin = env!("CARGO_BIN_EXE_bytestats");

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.to_string()
}

#[test]
fn report_on_sample_set() {
    let stdout = run_bin(&["report"]);
    assert_eq!(stdout, "Minimum: 2\nMaximum: 250\nMean: 93\nMedian: 87\n");
}

#[test]
fn report_on_given_values() {
    let stdout = run_bin(&["--values", "5,3,9,1", "report"]);
    assert_eq!(stdout, "Minimum: 1\nMaximum: 9\nMean: 4\nMedian: 4\n");
}

#[test]
fn report_on_odd_length_values() {
    let stdout = run_bin(&["--values", "4,8,2", "report"]);
    assert_eq!(stdout, "Minimum: 2\nMaximum: 8\nMean: 4\nMedian: 4\n");
}

#[test]
fn json_report_on_sample_set() {
    let stdout = run_bin(&["report", "--json"]);

    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("failed to parse stdout as JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "minimum": 2,
            "maximum": 250,
            "mean": 93,
            "median": 87,
        })
    );
}

#[test]
fn sort_prints_descending_order() {
    let stdout = run_bin(&["--values", "5,3,9,1", "sort"]);
    assert_eq!(stdout, "9 5 3 1 \n");
}

#[test]
fn show_preserves_given_order() {
    let stdout = run_bin(&["--values", "5,3,9,1", "show"]);
    assert_eq!(stdout, "5 3 9 1 \n");
}

#[test]
fn out_of_range_value_is_rejected() {
    let bin = env!("CARGO_BIN_EXE_bytestats");

    let output = Command::new(bin)
        .args(["--values", "300", "report"])
        .output()
        .expect("failed to execute command");

    assert!(!output.status.success());
}
