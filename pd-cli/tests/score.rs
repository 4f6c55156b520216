use std::io::Write;
use std::process::{Command, Stdio};

fn pd_bin() -> String {
    env!("CARGO_BIN_EXE_pd").to_string()
}

fn run_pd(args: &[&str]) -> std::process::Output {
    Command::new(pd_bin())
        .args(args)
        .output()
        .expect("failed to run pd")
}

#[test]
fn five_sixes_scores_five_of_a_kind() {
    let out = run_pd(&["6", "6", "6", "6", "6"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Dice game results: 6 6 6 6 6"), "{stdout}");
    assert!(stdout.contains("Five of a kind!"), "{stdout}");
}

#[test]
fn arguments_are_sorted_in_the_output() {
    let out = run_pd(&["3", "1", "5", "4", "2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Dice game results: 1 2 3 4 5"), "{stdout}");
    assert!(stdout.contains("No special combination."), "{stdout}");
}

#[test]
fn non_numeric_argument_fails() {
    let out = run_pd(&["1", "2", "x", "4", "5"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Error: `x` is not a number"), "{stderr}");
    // No partial results on stdout.
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(!stdout.contains("Dice game results"), "{stdout}");
}

#[test]
fn wrong_count_fails_with_cardinality_message() {
    let out = run_pd(&["1", "2", "3"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(
        stderr.contains("expected exactly 5 dice values, got 3"),
        "{stderr}"
    );
}

#[test]
fn out_of_range_value_fails() {
    let out = run_pd(&["1", "2", "3", "4", "8"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(
        stderr.contains("dice value 8 is not a face in 1..=6"),
        "{stderr}"
    );
}

#[test]
fn prompt_loop_recovers_from_errors_and_counts_rolls() {
    let mut child = Command::new(pd_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pd");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(b"1 1 3 3 4\nnot dice\n2 2 5 5 5\nq\n")
            .expect("write stdin");
    }

    let out = child.wait_with_output().expect("wait for pd");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(
        stdout.contains("Roll 1: Two pairs! Dice game results: 1 1 3 3 4"),
        "{stdout}"
    );
    // The bad line reports an error but does not consume a roll number.
    assert!(stdout.contains("Error: `not` is not a number"), "{stdout}");
    assert!(
        stdout.contains("Roll 2: Full house! Dice game results: 2 2 5 5 5"),
        "{stdout}"
    );
}

#[test]
fn version_prints_crate_version() {
    let out = run_pd(&["-V"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("pd "), "{stdout}");
}
