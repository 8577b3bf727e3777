//! Run the built binary against the built-in and on-disk catalogs.

use assert_cmd::Command;
use predicates::prelude::*;

fn docdeck() -> Command {
    Command::cargo_bin("docdeck-cli").expect("docdeck-cli binary")
}

#[test]
fn check_builtin_exits_zero() {
    docdeck()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 3 views"))
        .stdout(predicate::str::contains("warning").not());
}

#[test]
fn check_broken_catalog_exits_non_zero() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
        title = "Broken"

        [[views]]
        id = "a"
        label = "A"

        [[views.tabs]]
        id = "t"
        label = "T"
        blocks = [{ type = "content", key = "gone" }]
        "#,
    )?;

    docdeck()
        .arg("check")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("error: 'a/t' references content 'gone'"))
        .stderr(predicate::str::contains("catalog has 1 error(s)"));
    Ok(())
}

#[test]
fn render_toggle_pair_matches_fingerprint() {
    let fingerprint = |args: &[&str]| {
        let output = docdeck().args(args).assert().success().get_output().clone();
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .find_map(|l| l.strip_prefix("fingerprint: "))
            .map(str::to_string)
            .expect("fingerprint line")
    };

    let collapsed = fingerprint(&["render", "--tab", "database"]);
    let expanded = fingerprint(&["render", "--tab", "database", "--expand", "users"]);
    let again = fingerprint(&["render", "--view", "spec", "--tab", "database"]);
    assert_ne!(collapsed, expanded);
    assert_eq!(collapsed, again);
}

#[test]
fn render_expanded_users_shows_columns() {
    docdeck()
        .args(["render", "--tab", "database", "--expand", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[-] USERS"))
        .stdout(predicate::str::contains("| password_hash |  |"));
}

#[test]
fn unknown_view_fails_with_message() {
    docdeck()
        .args(["render", "--view", "roadmap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid selection: unknown view 'roadmap'",
        ));
}
