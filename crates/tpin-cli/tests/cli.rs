use assert_cmd::Command;
use predicates::prelude::*;

/// The binary with a throwaway config/data location and no tmux client.
fn tmux_pin(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tmux-pin").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TMUX");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = tempfile::tempdir().unwrap();
    tmux_pin(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("switch"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn unknown_subcommand_prints_usage() {
    let home = tempfile::tempdir().unwrap();
    tmux_pin(home.path())
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn switch_requires_numeric_slot() {
    let home = tempfile::tempdir().unwrap();
    tmux_pin(home.path()).arg("switch").assert().failure();
    tmux_pin(home.path()).args(["switch", "first"]).assert().failure();
}

#[test]
fn outside_tmux_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();
    for args in [&[][..], &["list"][..], &["it"][..], &["switch", "1"][..]] {
        tmux_pin(home.path())
            .args(args)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("$TMUX not found"));
    }
}

#[test]
fn outside_tmux_leaves_no_log_file() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[storage]\ndata_dir = '{}'\n", data.display()),
    )
    .unwrap();

    tmux_pin(home.path())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("$TMUX not found"));

    assert!(!data.exists());
}

#[test]
fn tmux_check_runs_before_config_load() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "[storage\n").unwrap();

    tmux_pin(home.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("$TMUX not found"))
        .stderr(predicate::str::contains("failed to parse config").not());
}
