use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{CLASSIC_ALL_CORRECT, play_classic, read_lines, results_path, rtq, setup_home};

#[test]
fn test_init_creates_store_with_header() {
    let home = setup_home("init_store");
    let results = results_path(&home, "quiz_results_3.csv");

    rtq(&home)
        .args(["--results", &results, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Result store created"));

    assert_eq!(
        read_lines(&results),
        vec!["Name,Score,Percentage,Questions_Attempted,Date"]
    );
    // test mode never writes the config file
    assert!(!PathBuf::from(&home).join("rtrivia.conf").exists());

    rtq(&home)
        .args(["--results", &results, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("left untouched"));
}

#[test]
fn test_init_writes_config_and_check_is_clean() {
    let home = setup_home("init_config");

    rtq(&home).args(["init"]).assert().success();
    assert!(PathBuf::from(&home).join("rtrivia.conf").exists());
    assert!(PathBuf::from(&home).join("quiz_results_3.csv").exists());

    rtq(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("is complete"));
}

#[test]
fn test_config_migrate_adds_missing_fields() {
    let home = setup_home("config_migrate");
    let conf = PathBuf::from(&home).join("rtrivia.conf");
    fs::write(&conf, "edition: classic\n").unwrap();

    rtq(&home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("edition: classic"));
    assert!(content.contains("min_age: 12"));
}

#[test]
fn test_history_lists_attempts() {
    let home = setup_home("history");
    let results = results_path(&home, "quiz_results.csv");

    play_classic(&home, &results, "Jo", 15, CLASSIC_ALL_CORRECT)
        .assert()
        .success();
    play_classic(&home, &results, "Ana", 13, "x\nx\nx\nx\nx\n")
        .assert()
        .success();

    rtq(&home)
        .args(["--results", &results, "--edition", "classic", "history"])
        .assert()
        .success()
        .stdout(contains("Jo"))
        .stdout(contains("Ana"))
        .stdout(contains("100.0%"));

    rtq(&home)
        .args([
            "--results",
            &results,
            "--edition",
            "classic",
            "history",
            "--name",
            "ana",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"Name\": \"Ana\""))
        .stdout(contains("\"Percentage\": 0.0"));
}

#[test]
fn test_report_reads_older_files() {
    let home = setup_home("report_old");
    let results = results_path(&home, "legacy.csv");
    fs::write(&results, "Name,Score,Percentage\nJo,4,80.0\nKim,5,100.0\n").unwrap();

    rtq(&home)
        .args([
            "--results",
            &results,
            "--edition",
            "mixed",
            "report",
            "--name",
            "Kim",
            "--percentage",
            "100",
        ])
        .assert()
        .success()
        .stdout(contains("Average Score (90.0%)"))
        .stdout(contains("◀ you"));
}

#[test]
fn test_report_pdf() {
    let home = setup_home("report_pdf");
    let results = results_path(&home, "quiz_results.csv");
    play_classic(&home, &results, "Jo", 15, CLASSIC_ALL_CORRECT)
        .assert()
        .success();

    let pdf = PathBuf::from(&home).join("chart.pdf");
    rtq(&home)
        .args([
            "--results",
            &results,
            "--edition",
            "classic",
            "report",
            "--pdf",
            &pdf.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Chart written"));

    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF-"));
}

#[test]
fn test_bank_prints_questions() {
    let home = setup_home("bank");

    rtq(&home)
        .args(["--edition", "choice", "bank", "--answers"])
        .assert()
        .success()
        .stdout(contains("6 questions"))
        .stdout(contains("What is the capital of Brazil?"))
        .stdout(contains("Canberra"));
}

#[test]
fn test_log_and_backup() {
    let home = setup_home("log_backup");
    let results = results_path(&home, "quiz_results.csv");
    play_classic(&home, &results, "Jo", 15, CLASSIC_ALL_CORRECT)
        .assert()
        .success();

    let backup = PathBuf::from(&home).join("bak").join("results.csv");
    rtq(&home)
        .args([
            "--results",
            &results,
            "backup",
            "--file",
            &backup.to_string_lossy(),
            "--compress",
        ])
        .assert()
        .success();
    assert!(backup.with_extension("zip").exists());

    rtq(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("play"))
        .stdout(contains("backup"));
}
