use {
    crate::{
        types::{BuildConfig, Track},
        utils::{pacur, rsync},
    },
    anyhow::{Context, Result},
    log::info,
};

/// Rebuilds the package repository, then mirrors it to every host of `track`.
pub fn run(config: &BuildConfig, track: Track) -> Result<()> {
    let dir = config.pacur_path(track);
    pacur::repo(dir)?;

    let urls = config.mirror_urls_for(track);
    info!("uploading to {} mirror(s)", urls.len());
    for url in urls {
        rsync::mirror(dir, &config.mirror_dir, url)
            .context(format!("failed to upload to {url}"))?;
    }
    Ok(())
}
