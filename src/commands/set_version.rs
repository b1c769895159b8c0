use {
    crate::{
        types::BuildConfig,
        utils::{commit_and_push, write_version_constant},
        version::{get_int_ver, get_ver},
    },
    anyhow::{Context, Result},
    chrono::Utc,
    num_bigint::BigUint,
    clap::Args,
    log::info,
};

#[derive(Args, Debug)]
pub struct CommandArgs {
    #[arg(help = "Version label, e.g. 1.0 or 1.2beta")]
    pub label: String,
}

/// Computed versions for a single release.
#[derive(Debug, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub version: String,
    pub int_version: BigUint,
}

pub fn derive_versions(label: &str) -> Result<ReleaseVersion> {
    let version = get_ver(label, &Utc::now())?;
    let int_version = get_int_ver(label)?;
    Ok(ReleaseVersion {
        version,
        int_version,
    })
}

pub fn run(config: &BuildConfig, args: CommandArgs) -> Result<()> {
    let release = derive_versions(&args.label)
        .context(format!("failed to derive version from {:?}", args.label))?;
    info!(
        "new version {} (integer version {})",
        release.version, release.int_version
    );

    write_version_constant(&config.constants_path, &release.version)?;
    info!("updated {}", config.constants_path.display());

    commit_and_push(&config.constants_path).context("failed to commit release")?;

    Ok(())
}
