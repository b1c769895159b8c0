use {
    super::process::run_checked,
    anyhow::Result,
    std::{path::Path, process::Command},
};

pub const RELEASE_COMMIT_MESSAGE: &str = "Create new release";

/// Unstage everything, then stage only `path`.
pub fn stage_only_commands(path: &Path) -> Vec<Command> {
    let mut reset = Command::new("git");
    reset.args(["reset", "HEAD", "."]);

    let mut add = Command::new("git");
    add.arg("add").arg(path);

    vec![reset, add]
}

pub fn signed_commit_command(message: &str) -> Command {
    let mut cmd = Command::new("git");
    cmd.args(["commit", "-S", "-m", message]);
    cmd
}

pub fn push_command() -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("push");
    cmd
}

/// Commits `path` alone as a signed release commit and pushes it upstream.
pub fn commit_and_push(path: &Path) -> Result<()> {
    let mut commands = stage_only_commands(path);
    commands.push(signed_commit_command(RELEASE_COMMIT_MESSAGE));
    commands.push(push_command());

    for mut cmd in commands {
        run_checked(&mut cmd)?;
    }
    Ok(())
}
