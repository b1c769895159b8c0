use {
    anyhow::Result,
    builder::types::{config::DEFAULT_CONFIG_PATH, BuildConfig, Track},
    clap::{Args, Parser, Subcommand},
    log::{debug, error},
    std::path::PathBuf,
};

#[derive(Parser)]
#[command(name = "builder", about = "Release tasks", version)]
struct Builder {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Stamp a new version, then commit and push it")]
    SetVersion(builder::set_version::CommandArgs),
    #[command(about = "Build packages for the stable repository")]
    Build,
    #[command(about = "Build packages for the test repository")]
    BuildTest,
    #[command(about = "Publish the stable repository to its mirrors")]
    Upload,
    #[command(about = "Publish the test repository to its mirrors")]
    UploadTest,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

fn main() {
    if let Err(err) = try_main() {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Builder::parse();

    if cli.global.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = BuildConfig::load(&cli.global.config)?;
    debug!("loaded {config:?}");

    match cli.command {
        Commands::SetVersion(args) => builder::set_version::run(&config, args)?,
        Commands::Build => builder::build::run(&config, Track::Stable)?,
        Commands::BuildTest => builder::build::run(&config, Track::Test)?,
        Commands::Upload => builder::upload::run(&config, Track::Stable)?,
        Commands::UploadTest => builder::upload::run(&config, Track::Test)?,
    }

    Ok(())
}
