//! Integration tests for the dia CLI.

use clap::Parser;
use diaops::cli::{Cli, run_cli};
use std::path::{Path, PathBuf};

/// Fresh temp directory for one test case.
fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("diaops-test").join(name);

    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    dir
}

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).expect("failed to write test input");
}

fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path.display()))
}

#[test]
fn to_rttm_converts_csv() {
    let dir = test_dir("to-rttm");
    let input = dir.join("rec1.csv");
    write_file(&input, "A,0,2\nB,2,5\n");

    let cli = Cli::parse_from(["dia", "to-rttm", input.to_str().unwrap()]);
    run_cli(cli).expect("conversion failed");

    assert_eq!(
        read_file(&dir.join("rec1.rttm")),
        "SPEAKER rec1 1 0 2 <NA> <NA> A <NA> <NA>\n\
         SPEAKER rec1 1 2 3 <NA> <NA> B <NA> <NA>\n"
    );
}

#[test]
fn to_rttm_honors_recording_id_and_min_gap() {
    let dir = test_dir("to-rttm-merge");
    let input = dir.join("meeting.csv");
    write_file(&input, "A,0,2\nA,2.5,4\nB,4,6\n");

    let cli = Cli::parse_from([
        "dia",
        "to-rttm",
        input.to_str().unwrap(),
        "--recording-id",
        "rec9",
        "--min-gap",
        "1",
    ]);
    run_cli(cli).expect("conversion failed");

    assert_eq!(
        read_file(&dir.join("meeting.rttm")),
        "SPEAKER rec9 1 0 4 <NA> <NA> A <NA> <NA>\n\
         SPEAKER rec9 1 4 2 <NA> <NA> B <NA> <NA>\n"
    );
}

#[test]
fn to_csv_converts_rttm_with_locks() {
    let dir = test_dir("to-csv-locks");
    let input = dir.join("rec1.rttm");
    write_file(
        &input,
        "SPEAKER rec1 1 0 2 <NA> <NA> A <NA> 0 1 0\n\
         SPEAKER rec1 1 2 3 <NA> <NA> B <NA> 1 0 0\n",
    );

    let cli = Cli::parse_from(["dia", "to-csv", input.to_str().unwrap(), "--locks"]);
    run_cli(cli).expect("conversion failed");

    assert_eq!(
        read_file(&dir.join("rec1.csv")),
        "A,0,2,false,true,false\nB,2,5,true,false,false\n"
    );
}

#[test]
fn merge_removes_small_gaps() {
    let dir = test_dir("merge");
    let input = dir.join("meeting.csv");
    write_file(&input, "A,0,2\nA,2.5,4\nB,4,6\n");

    let cli = Cli::parse_from(["dia", "merge", input.to_str().unwrap()]);
    run_cli(cli).expect("merge failed");

    assert_eq!(
        read_file(&dir.join("meeting.merged.csv")),
        "A,0,4\nB,4,6\n"
    );
}

#[test]
fn round_trips_through_both_formats() {
    let dir = test_dir("round-trip");
    let input = dir.join("rec1.csv");
    let original = "A,0.1,12.3\nB,12.30,45.075\n";
    write_file(&input, original);

    let rttm = dir.join("rec1.rttm");
    let back = dir.join("back.csv");

    run_cli(Cli::parse_from(["dia", "to-rttm", input.to_str().unwrap()]))
        .expect("to-rttm failed");
    run_cli(Cli::parse_from([
        "dia",
        "to-csv",
        rttm.to_str().unwrap(),
        "-o",
        back.to_str().unwrap(),
    ]))
    .expect("to-csv failed");

    assert_eq!(read_file(&back), original);
}

#[test]
fn malformed_row_aborts_without_output() {
    let dir = test_dir("malformed");
    let input = dir.join("bad.csv");
    write_file(&input, "A,0,2\nB,oops,5\n");

    let cli = Cli::parse_from(["dia", "to-rttm", input.to_str().unwrap()]);
    let err = run_cli(cli).expect_err("conversion should fail");

    assert!(format!("{err:#}").contains("row 2"));
    assert!(!dir.join("bad.rttm").exists(), "no partial output expected");
}

#[test]
fn rejects_wrong_input_extension() {
    let dir = test_dir("wrong-ext");
    let input = dir.join("rec1.csv");
    write_file(&input, "A,0,2\n");

    let cli = Cli::parse_from(["dia", "to-csv", input.to_str().unwrap()]);
    assert!(run_cli(cli).is_err());
}
