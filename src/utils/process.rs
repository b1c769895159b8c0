use {
    anyhow::{anyhow, Result},
    log::info,
    std::process::Command,
};

/// Renders `cmd` as it would be typed in a shell, for logs and errors.
pub fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `cmd` with inherited stdio and fails unless it exits successfully.
pub fn run_checked(cmd: &mut Command) -> Result<()> {
    let line = command_line(cmd);
    match cmd.get_current_dir() {
        Some(dir) => info!("running `{line}` in {}", dir.display()),
        None => info!("running `{line}`"),
    }

    let status = cmd
        .status()
        .map_err(|e| anyhow!("failed to run `{line}`, error: {e}"))?;
    if !status.success() {
        return Err(anyhow!("`{line}` failed with {status}"));
    }
    Ok(())
}
