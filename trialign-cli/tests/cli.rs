use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn fasta(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn missing_input_prints_usage() {
    let output = Command::cargo_bin("trialign").unwrap().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn aligns_proteins_with_blosum62() {
    let input = fasta(">a first\nHEAGA\nWGHEE\n>b\nPAWHEAE\n>c\nHEAE\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .arg(input.path())
        .arg("--score")
        .output()
        .unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[..4], ["HEAG", "HEAE", "HEAE", "score: 17.333"]);
    assert!(lines.iter().any(|l| l.starts_with("Completed in ")));
}

#[test]
fn uniform_scheme_and_worker_flags() {
    let input = fasta(">a\nGATTACA\n>b\nGCATGCT\n>c\nGATACA\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .args(["--match", "2", "--mismatch", "-1", "--gap", "-2"])
        .args(["-t", "2", "--batch-size", "3"])
        .arg(input.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    let lines = stdout_lines(&output);
    assert_eq!(lines[..3], ["G-ATTAC", "GCA-TGC", "G-A-TAC"]);
}

#[test]
fn custom_matrix_file() {
    let matrix = fasta("   A  C  *\nA  3 -1 -5\nC -1  4 -5\n* -5 -5  1\n");
    let input = fasta(">a\nACCA\n>b\nACA\n>c\nCCA\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .arg("--matrix")
        .arg(matrix.path())
        .arg(input.path())
        .arg("--score")
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    let lines = stdout_lines(&output);
    assert_eq!(lines[..4], ["CCA", "ACA", "CCA", "score: 7.667"]);
}

#[test]
fn verbose_logs_grid_size() {
    let input = fasta(">a\nACG\n>b\nACG\n>c\nACG\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .arg("-v")
        .arg(input.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aligning 3x3x3 (64 cells)"), "stderr: {stderr}");
}

#[test]
fn too_few_records_fails() {
    let input = fasta(">a\nACGT\n>b\nACGT\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .arg(input.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not parse sequence file"), "stderr: {stderr}");
}

#[test]
fn unknown_residue_fails() {
    let input = fasta(">a\nACGT\n>b\nAC1T\n>c\nACGT\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .arg(input.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no score for symbol pair"), "stderr: {stderr}");
}

#[test]
fn grid_limit_is_enforced() {
    let input = fasta(">a\nACGT\n>b\nACGT\n>c\nACGT\n");
    let output = Command::cargo_bin("trialign")
        .unwrap()
        .args(["--max-cells", "10"])
        .arg(input.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}
