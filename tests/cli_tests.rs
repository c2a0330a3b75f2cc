use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn pennant(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pennant"))
        .args(args)
        .output()
        .expect("Failed to run pennant")
}

fn json_results(args: &[&str]) -> Vec<Value> {
    let output = pennant(args);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    value.as_array().expect("expected a list of results").clone()
}

fn renderings(result: &Value) -> Vec<String> {
    result["chains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["rendering"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_branch_and_bound_json() {
    let results = json_results(&[
        "search",
        "--pile",
        "r=2,b=2",
        "--strategy",
        "branch-and-bound",
        "--json",
    ]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["strategy"], "branch-and-bound");
    let mut chains = renderings(&results[0]);
    chains.sort();
    assert_eq!(chains, vec!["-b-r-b-r-", "-r-b-r-b-"]);
    for chain in results[0]["chains"].as_array().unwrap() {
        assert_eq!(chain["minimal_distance"], 1);
        assert_eq!(chain["frequency"], 2);
    }
}

#[test]
fn test_runs_all_strategies_by_default() {
    let results = json_results(&["search", "--demo", "-S", "3", "--stagnation-limit", "20", "--json"]);
    let kinds: Vec<&str> = results
        .iter()
        .map(|r| r["strategy"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["branch-and-bound", "adaptive-walk", "simulated-annealing"]
    );
}

#[test]
fn test_seeded_runs_repeat() {
    let args = [
        "search",
        "--pile",
        "a=3,b=3,c=2,d=2",
        "--strategy",
        "adaptive-walk,simulated-annealing",
        "--seed",
        "11",
        "--json",
    ];
    let first: Vec<Vec<String>> = json_results(&args).iter().map(renderings).collect();
    let second: Vec<Vec<String>> = json_results(&args).iter().map(renderings).collect();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_strategy_fails() {
    let output = pennant(&["search", "--demo", "--strategy", "genetic"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown strategy"));
}

#[test]
fn test_negative_count_fails() {
    let output = pennant(&["search", "--pile", "r=-1,b=2"]);
    assert!(!output.status.success());
}

#[test]
fn test_table_output() {
    let output = pennant(&["search", "--pile", "r=2,b=1", "--strategy", "branch-and-bound"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## CHAIN INFOS ##"));
    assert!(stdout.contains("-r-b-r-"));
    assert!(stdout.contains("branch-and-bound"));
}

#[test]
fn test_interactive_demo_session() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pennant"))
        .args(["interactive", "--stagnation-limit", "10", "-S", "5"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pennant");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"y\ny\nx\nn\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PENNANT CHAIN OPTIMIZER"));
    assert!(stdout.contains("Start the machine! (X)"));
    assert!(stdout.matches("## CHAIN INFOS ##").count() >= 3);
    assert!(stdout.contains("The program is terminated."));
}
