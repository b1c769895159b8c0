use {
    anyhow::{anyhow, Context, Result},
    regex::{NoExpand, Regex},
    std::{fs, path::Path, sync::LazyLock},
};

static VERSION_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(= ".*?")"#).expect("valid version assignment pattern"));

/// Replaces the first `= "..."` assignment in `content` with `version`.
pub fn replace_version_constant(content: &str, version: &str) -> Result<String> {
    if !VERSION_ASSIGNMENT.is_match(content) {
        return Err(anyhow!("no version assignment found"));
    }
    let replacement = format!("= \"{version}\"");
    Ok(VERSION_ASSIGNMENT.replacen(content, 1, NoExpand(&replacement)).into_owned())
}

pub fn write_version_constant(path: &Path, version: &str) -> Result<()> {
    let content =
        fs::read_to_string(path).context(format!("failed to read {}", path.display()))?;
    let updated = replace_version_constant(&content, version)
        .context(format!("failed to update version in {}", path.display()))?;
    fs::write(path, updated).context(format!("failed to write {}", path.display()))
}
