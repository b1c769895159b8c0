use {
    crate::{
        types::{BuildConfig, Track},
        utils::pacur,
    },
    anyhow::Result,
    log::info,
};

pub fn run(config: &BuildConfig, track: Track) -> Result<()> {
    let dir = config.pacur_path(track);
    info!(
        "building {} target(s) for the {track:?} repository",
        config.build_targets.len()
    );
    for target in &config.build_targets {
        pacur::build(dir, target)?;
    }
    Ok(())
}
