use std::{fs, process::Command};

fn castle_defender() -> Command {
    Command::new(env!("CARGO_BIN_EXE_castle-defender"))
}

fn summary_from(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "castle-defender failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON summary")
}

#[test]
fn json_summary_is_reproducible_for_a_seed() {
    let run = || {
        castle_defender()
            .args(["--difficulty", "moderate", "--seed", "42", "--json"])
            .output()
            .expect("failed to launch castle-defender")
    };

    let first = summary_from(&run());
    let second = summary_from(&run());

    assert_eq!(first, second);
    assert_eq!(first["difficulty"], "moderate");
    assert!(first["score"].as_u64().expect("numeric score") <= 200);
    assert!(first["turns_played"].as_u64().expect("numeric turns") <= 6);
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("castle.toml");
    fs::write(
        &path,
        "[session]\ndifficulty = \"hard\"\nseed = 3\n\n[autoplay]\nmax_guards_per_turn = 0\n",
    )
    .expect("write config");

    let output = castle_defender()
        .arg("--config")
        .arg(&path)
        .arg("--json")
        .output()
        .expect("failed to launch castle-defender");
    let summary = summary_from(&output);

    // Without guards every enemy breaches, so Hard's three lives fall to its
    // two-enemy opening waves.
    assert_eq!(summary["difficulty"], "hard");
    assert_eq!(summary["successful_turns"], 0);
    assert_eq!(summary["lives_remaining"], 0);
}

#[test]
fn text_mode_prints_banner_and_board() {
    let output = castle_defender()
        .args(["--difficulty", "easy", "--seed", "1"])
        .output()
        .expect("failed to launch castle-defender");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Defend the keep!"));
    assert!(stdout.contains("Turn 1:"));
    assert!(stdout.contains('@'));
    assert!(stdout.contains(" gate: "), "each enemy outcome is listed");
    assert!(stdout.contains("Final score:"));
}

#[test]
fn missing_config_file_is_an_error() {
    let output = castle_defender()
        .args(["--config", "/nonexistent/castle.toml"])
        .output()
        .expect("failed to launch castle-defender");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config"));
}
