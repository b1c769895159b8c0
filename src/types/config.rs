use {
    anyhow::{Context, Result},
    serde::Deserialize,
    std::{fs, path::{Path, PathBuf}},
};

pub const DEFAULT_CONFIG_PATH: &str = "build_keys.json";
pub const CONSTANTS_PATH: &str = "constants/constants.go";
pub const STABLE_PACUR_PATH: &str = "../pritunl-pacur";
pub const TEST_PACUR_PATH: &str = "../pritunl-pacur-test";
pub const MIRROR_DIR: &str = "mirror/";
pub const BUILD_TARGETS: &[&str] = &["pritunl-link"];

/// Stable or test package repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    Stable,
    Test,
}

#[derive(Debug, Deserialize)]
struct BuildKeys {
    mirror_url: Vec<String>,
    test_mirror_url: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub mirror_urls: Vec<String>,
    pub test_mirror_urls: Vec<String>,
    pub constants_path: PathBuf,
    pub stable_pacur_path: PathBuf,
    pub test_pacur_path: PathBuf,
    pub mirror_dir: String,
    pub build_targets: Vec<String>,
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("failed to read {}", path.display()))?;
        Self::from_json(content.trim())
            .context(format!("failed to parse {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let keys: BuildKeys = serde_json::from_str(content)?;
        Ok(Self {
            mirror_urls: keys.mirror_url,
            test_mirror_urls: keys.test_mirror_url,
            constants_path: PathBuf::from(CONSTANTS_PATH),
            stable_pacur_path: PathBuf::from(STABLE_PACUR_PATH),
            test_pacur_path: PathBuf::from(TEST_PACUR_PATH),
            mirror_dir: MIRROR_DIR.to_string(),
            build_targets: BUILD_TARGETS.iter().map(|t| t.to_string()).collect(),
        })
    }

    pub fn pacur_path(&self, track: Track) -> &Path {
        match track {
            Track::Stable => &self.stable_pacur_path,
            Track::Test => &self.test_pacur_path,
        }
    }

    pub fn mirror_urls_for(&self, track: Track) -> &[String] {
        match track {
            Track::Stable => &self.mirror_urls,
            Track::Test => &self.test_mirror_urls,
        }
    }
}
