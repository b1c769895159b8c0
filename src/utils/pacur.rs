use {
    super::process::run_checked,
    anyhow::Result,
    std::{path::Path, process::Command},
};

fn pacur(dir: &Path) -> Command {
    let mut cmd = Command::new("sudo");
    cmd.arg("pacur").current_dir(dir);
    cmd
}

pub fn build_command(dir: &Path, target: &str) -> Command {
    let mut cmd = pacur(dir);
    cmd.args(["project", "build", target]);
    cmd
}

pub fn repo_command(dir: &Path) -> Command {
    let mut cmd = pacur(dir);
    cmd.args(["project", "repo"]);
    cmd
}

pub fn build(dir: &Path, target: &str) -> Result<()> {
    run_checked(&mut build_command(dir, target))
}

pub fn repo(dir: &Path) -> Result<()> {
    run_checked(&mut repo_command(dir))
}
