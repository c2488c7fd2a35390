//! End-to-end tests for the `update-versions` binary.

use assert_cmd::Command;
use maint_fs::SourceFile;
use maint_test_utils::TestTree;
use predicates::prelude::*;

fn update_cmd(tree: &TestTree) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("update-versions"));
    cmd.env("abs_top_srcdir", tree.root()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    let tree = TestTree::new();
    update_cmd(&tree)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_short_help_exits_zero() {
    let tree = TestTree::new();
    update_cmd(&tree).arg("-h").assert().success();
}

#[test]
fn test_unknown_option_exits_one() {
    let tree = TestTree::new();
    update_cmd(&tree)
        .arg("--frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag_is_rejected() {
    let tree = TestTree::new();
    update_cmd(&tree)
        .arg("--version")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_positional_argument_exits_one() {
    let tree = TestTree::new();
    update_cmd(&tree).arg("configure.ac").assert().code(1);
}

#[test]
fn test_updates_all_files() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");

    update_cmd(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("The version is 0.4.9.1-dev"))
        .stdout(predicate::str::contains("Updating").count(3));

    tree.assert_file_contains(SourceFile::Win32Orconfig, "#define VERSION \"0.4.9.1-dev\"\n");
    tree.assert_file_contains(SourceFile::NsisInstaller, "!define VERSION \"0.4.9.1-dev\"\n");
    tree.assert_file_contains(SourceFile::ConfigureAc, "# for 0.4.9.1-dev\n");
    tree.assert_no_temp_files();
}

#[test]
fn test_second_run_reports_no_change() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");
    update_cmd(&tree).assert().success();
    let orconfig = tree.read_bytes(SourceFile::Win32Orconfig);

    update_cmd(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("No change in").count(3))
        .stdout(predicate::str::contains("Updating").not());

    assert_eq!(tree.read_bytes(SourceFile::Win32Orconfig), orconfig);
}

#[test]
fn test_quiet_suppresses_notices() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");

    update_cmd(&tree)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    tree.assert_file_contains(SourceFile::Win32Orconfig, "0.4.9.1-dev");
}

#[test]
fn test_missing_version_line_warns_but_succeeds() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");
    tree.write(SourceFile::Win32Orconfig, "#define HAVE_STDINT_H\n");

    update_cmd(&tree)
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "didn't find any version line to replace in",
        ))
        .stderr(predicate::str::contains("orconfig.h"));
}

#[test]
fn test_missing_version_exits_one_and_touches_nothing() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");
    tree.write(SourceFile::ConfigureAc, "AC_PREREQ([2.63])\n");
    let nsis = tree.read_bytes(SourceFile::NsisInstaller);

    update_cmd(&tree)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No version found in"));

    assert_eq!(tree.read_bytes(SourceFile::NsisInstaller), nsis);
}

#[test]
fn test_empty_srcdir_environment_uses_current_directory() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");

    Command::new(assert_cmd::cargo::cargo_bin!("update-versions"))
        .env("abs_top_srcdir", "")
        .env_remove("RUST_LOG")
        .current_dir(tree.root())
        .arg("-q")
        .assert()
        .success();

    tree.assert_file_contains(SourceFile::Win32Orconfig, "#define VERSION \"0.4.9.1-dev\"\n");
    tree.assert_no_temp_files();
}

#[test]
fn test_missing_target_exits_one() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");
    std::fs::remove_file(tree.path(SourceFile::Win32Orconfig)).unwrap();

    update_cmd(&tree)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("orconfig.h"));

    // Targets before the failing one stay updated
    tree.assert_file_exists(SourceFile::NsisInstaller);
    tree.assert_file_contains(SourceFile::NsisInstaller, "0.4.9.1-dev");
}

#[test]
fn test_srcdir_defaults_to_current_directory() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");

    Command::new(assert_cmd::cargo::cargo_bin!("update-versions"))
        .env_remove("abs_top_srcdir")
        .env_remove("RUST_LOG")
        .current_dir(tree.root())
        .arg("-q")
        .assert()
        .success();

    tree.assert_file_contains(SourceFile::Win32Orconfig, "0.4.9.1-dev");
}

#[test]
fn test_srcdir_flag_overrides_environment() {
    let tree = TestTree::new();
    tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");
    let elsewhere = TestTree::new();

    update_cmd(&elsewhere)
        .arg("--srcdir")
        .arg(tree.root())
        .arg("-q")
        .assert()
        .success();

    tree.assert_file_contains(SourceFile::Win32Orconfig, "0.4.9.1-dev");
}
