use assert_cmd::Command;
use predicates::prelude::*;

/// A `gpaste` command that can never reach a real daemon or a user config.
fn gpaste() -> Command {
    let mut cmd = Command::cargo_bin("gpaste").unwrap();
    cmd.env("DBUS_SESSION_BUS_ADDRESS", "unix:path=/nonexistent/gpaste-test-bus")
        .env("GPASTE_CLI_CONFIG", "/nonexistent/gpaste-cli/config.toml")
        .env_remove("GPASTE_LOG");
    cmd
}

#[test]
fn help_exits_zero() {
    for flag in ["help", "-h", "--help"] {
        gpaste()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Usage:\n"))
            .stdout(predicate::str::contains("add <text>: set text to clipboard"))
            .stderr("");
    }
}

#[test]
fn version_prints_build_string() {
    for flag in ["v", "version", "-v", "--version"] {
        gpaste()
            .arg(flag)
            .assert()
            .success()
            .stdout(format!("gpaste-cli {}\n", env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn help_ignores_piped_stdin() {
    gpaste()
        .arg("help")
        .write_stdin("some text")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage:\n"));
}

#[test]
fn unknown_command_shows_help_and_fails() {
    gpaste()
        .arg("bogus-command")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:\n"))
        .stderr("");
}

#[test]
fn commands_are_case_sensitive() {
    gpaste()
        .arg("HISTORY")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Usage:\n"));
}

#[test]
fn double_dash_is_not_swallowed() {
    gpaste()
        .arg("--")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:\n"))
        .stderr("");

    gpaste()
        .arg("--")
        .write_stdin("hi")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:\n"))
        .stderr("");

    gpaste()
        .args(["--", "help"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:\n"));
}

#[cfg(unix)]
#[test]
fn non_utf8_operand_reaches_dispatch() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    gpaste()
        .arg("add")
        .arg(OsStr::from_bytes(b"\xff"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Couldn't connect to GPaste daemon"));
}

#[test]
fn wrong_operand_count_shows_help() {
    gpaste()
        .args(["get", "1", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Usage:\n"))
        .stderr("");
}

#[test]
fn unreachable_daemon_is_fatal() {
    gpaste()
        .arg("history")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "error: Couldn't connect to GPaste daemon",
        ));
}

#[test]
fn reexec_without_daemon_still_fails() {
    gpaste()
        .arg("daemon-reexec")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Couldn't connect to GPaste daemon"));
}

#[test]
fn piped_input_needs_daemon() {
    gpaste()
        .write_stdin("hello\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't connect to GPaste daemon"));
}

#[test]
fn invalid_config_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[daemon\n").unwrap();

    gpaste()
        .env("GPASTE_CLI_CONFIG", &path)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config TOML"))
        .stderr(predicate::str::contains("Couldn't connect to GPaste daemon").not());
}

#[test]
fn invalid_config_does_not_block_help() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "not toml at all [[[").unwrap();

    gpaste()
        .env("GPASTE_CLI_CONFIG", &path)
        .arg("--help")
        .assert()
        .success();
}
