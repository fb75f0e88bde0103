#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary with an isolated config directory per test.
pub fn rtq(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtrivia");
    cmd.env("RTRIVIA_HOME", home);
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtrivia_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Result store path inside `home`, removed if it already exists.
pub fn results_path(home: &str, file: &str) -> String {
    let path = PathBuf::from(home).join(file);
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn read_lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read results")
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// stdin answering every classic question correctly.
pub const CLASSIC_ALL_CORRECT: &str = "wellington\nParis\nBERLIN\nrome\nTokyo\n";

/// Play one classic attempt for `name` / `age`.
pub fn play_classic(home: &str, results: &str, name: &str, age: i64, answers: &str) -> Command {
    let mut cmd = rtq(home);
    cmd.args([
        "--results",
        results,
        "--edition",
        "classic",
        "play",
        "--no-chart",
    ])
    .write_stdin(format!("{}\n{}\n{}", name, age, answers));
    cmd
}
