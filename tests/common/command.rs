use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn inputs_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_linecmp_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linecmp").expect("Failed to find linecmp binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("LINECMP_MAX_CELLS");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_linecmp_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}
