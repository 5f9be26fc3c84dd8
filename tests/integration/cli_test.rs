use std::process::{Command, Output};

fn run_pbs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pbs"))
        .args(args)
        .output()
        .expect("Failed to execute pbs")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_reference_example() {
    let output = run_pbs(&[
        "search",
        "--values",
        "1,3,5,7,9,11,13,15,17,19",
        "--target",
        "13",
    ]);
    assert!(
        output.status.success(),
        "Command failed with status: {:?}",
        output.status
    );

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Found at index: 6"), "stdout: {}", stdout);
}

#[test]
fn test_search_not_found() {
    let output = run_pbs(&[
        "search",
        "--values",
        "2,4,6,8",
        "--target",
        "5",
        "--strategy",
        "segmented",
        "-j",
        "3",
    ]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Not found."));
}

#[test]
fn test_every_strategy_accepted() {
    for strategy in ["sequential", "segmented", "adaptive", "narrowing", "linear"] {
        let output = run_pbs(&[
            "search",
            "--size",
            "1000",
            "--seed",
            "7",
            "--target",
            "40",
            "--strategy",
            strategy,
        ]);
        assert!(output.status.success(), "strategy {} failed", strategy);
        assert!(stdout_of(&output).contains(&format!("Strategy: {}", strategy)));
    }
}

#[test]
fn test_unsorted_input_rejected() {
    let output = run_pbs(&["search", "--values", "3,1,2", "--target", "1"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not sorted"), "stderr: {}", stderr);
    assert!(stderr.contains("index 1"), "stderr: {}", stderr);
}

#[test]
fn test_missing_data_source() {
    let output = run_pbs(&["search", "--target", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--values or --size"));
}

#[test]
fn test_multi_targets() {
    let output = run_pbs(&[
        "multi",
        "--values",
        "0,2,4,6,8,10,12,14,16,18",
        "--targets",
        "0,10,18,25,10",
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("0 -> 0"));
    assert!(stdout.contains("10 -> 5"));
    assert!(stdout.contains("18 -> 9"));
    assert!(stdout.contains("25 -> not found"));
}

#[test]
fn test_multi_verbose_statistics() {
    let output = run_pbs(&[
        "multi",
        "--values",
        "1,2,3",
        "--targets",
        "1,1,2",
        "--verbose",
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Dispatch Statistics:"));
    assert!(stdout.contains("Duplicate targets: 1"));
}

#[test]
fn test_bench_small() {
    let output = run_pbs(&[
        "bench", "--size", "5000", "--queries", "20", "--seed", "3", "-j", "2",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Sequential baseline"));
    assert!(stdout.contains("narrowing:"));
    assert!(stdout.contains("multi:"));
}

#[test]
fn test_shearsort_matrix() {
    let output = run_pbs(&["shearsort", "--matrix", "9,2,7;4,5,6;3,8,1"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Sorted matrix (3 iterations):"));
    assert!(stdout.contains("   6    5    4"));
}

#[test]
fn test_shearsort_ragged_matrix_rejected() {
    let output = run_pbs(&["shearsort", "--matrix", "1,2;3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rectangular"));
}

#[test]
fn test_search_strategy_alias() {
    let output = run_pbs(&[
        "search",
        "--values",
        "1,3,5,7,9",
        "--target",
        "7",
        "--strategy",
        "kary",
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Strategy: narrowing"), "stdout: {}", stdout);
    assert!(stdout.contains("Found at index: 3"), "stdout: {}", stdout);
}

#[test]
fn test_unknown_strategy_rejected() {
    let output = run_pbs(&["search", "--values", "1", "--target", "1", "--strategy", "bogus"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown strategy"));
}

#[test]
fn test_linear_unsorted_values() {
    let output = run_pbs(&[
        "linear", "--values", "42,7,19,3,88,61", "--target", "88", "-j", "3",
    ]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Found at index: 4"));
}

#[test]
fn test_reduce_min_max() {
    let output = run_pbs(&["reduce", "--values", "3,5,1,7,9,2,8,4", "--op", "min-max"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Min: 1"), "stdout: {}", stdout);
    assert!(stdout.contains("Max: 9"), "stdout: {}", stdout);
}

#[test]
fn test_reduce_prefix_sum() {
    let output = run_pbs(&[
        "reduce",
        "--values",
        "1,2,1,7,3,0,4,3",
        "--op",
        "prefix-sum",
        "-j",
        "2",
    ]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Prefix sums: 0 1 3 4 11 14 14 18"));
}

#[test]
fn test_shearsort_parallel_matches_sequential() {
    let sequential = run_pbs(&["shearsort", "--rows", "6", "--cols", "5", "--seed", "11"]);
    let parallel = run_pbs(&[
        "shearsort", "--rows", "6", "--cols", "5", "--seed", "11", "-j", "3",
    ]);
    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(stdout_of(&sequential), stdout_of(&parallel));
}
