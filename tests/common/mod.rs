#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn oof_cmd() -> Command {
    let mut cmd = Command::cargo_bin("oof").unwrap();
    cmd.env_remove("OOF_TRACKER_ROOT");
    cmd.env_remove("OOF_YEAR");
    cmd.env_remove("OOF_PREFERS_DARK");
    cmd.env_remove("COLORFGBG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside `dir`
pub fn oof_in(dir: &Path) -> Command {
    let mut cmd = oof_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Fresh tracker for `year` in a temp directory
pub fn tracker(year: i32) -> TempDir {
    let temp = TempDir::new().unwrap();
    oof_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--year")
        .arg(year.to_string())
        .assert()
        .success();
    temp
}
