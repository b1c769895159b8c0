use {
    super::process::run_checked,
    anyhow::Result,
    std::{path::Path, process::Command},
};

const MIRROR_FLAGS: &[&str] = &[
    "--human-readable",
    "--archive",
    "--progress",
    "--delete",
    "--acls",
];

/// Mirrors `source` onto `destination`, removing remote files missing locally.
pub fn mirror_command(dir: &Path, source: &str, destination: &str) -> Command {
    let mut cmd = Command::new("rsync");
    cmd.args(MIRROR_FLAGS)
        .arg(source)
        .arg(destination)
        .current_dir(dir);
    cmd
}

pub fn mirror(dir: &Path, source: &str, destination: &str) -> Result<()> {
    run_checked(&mut mirror_command(dir, source, destination))
}
