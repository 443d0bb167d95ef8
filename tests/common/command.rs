use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn comparison_dirs() -> (TempDir, TempDir) {
    redirect_temp_dir();

    let left = TempDir::new().expect("Failed to create left temp dir");
    let right = TempDir::new().expect("Failed to create right temp dir");
    (left, right)
}

pub fn run_dircmp_command(left: &Path, right: &Path, extra_args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dircmp").expect("Failed to find dircmp binary");
    cmd.arg(left).arg(right);
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd
}
