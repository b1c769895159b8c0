//! Stand-in `sudo` and `rsync` executables for exercising the release steps.
//!
//! The stubs are placed first on `PATH` and append their argv and working
//! directory to a shared log. Tests using them must be `#[serial]`.

use std::{
    ffi::OsString,
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

/// Any rsync destination containing this marker exits 1.
pub const FAILING_MIRROR: &str = "failing-mirror";

pub struct StubTools {
    dir: tempfile::TempDir,
    log: PathBuf,
    old_path: Option<OsString>,
}

impl StubTools {
    pub fn install() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        fs::write(&log, "").unwrap();

        let record = format!(r#"echo "$(pwd -P): $(basename "$0") $*" >> "{}""#, log.display());
        write_script(dir.path(), "sudo", &record);
        write_script(
            dir.path(),
            "rsync",
            &format!("{record}\ncase \"$*\" in *{FAILING_MIRROR}*) exit 1 ;; esac"),
        );

        let old_path = std::env::var_os("PATH");
        let mut paths = vec![dir.path().to_path_buf()];
        if let Some(old) = &old_path {
            paths.extend(std::env::split_paths(old));
        }
        std::env::set_var("PATH", std::env::join_paths(paths).unwrap());

        Self { dir, log, old_path }
    }

    /// Recorded calls as `<cwd>: <program> <args>`.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Scratch directory that outlives the stubs, canonicalized.
    pub fn work_dir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).unwrap();
        fs::canonicalize(path).unwrap()
    }
}

impl Drop for StubTools {
    fn drop(&mut self) {
        match self.old_path.take() {
            Some(path) => std::env::set_var("PATH", path),
            None => std::env::remove_var("PATH"),
        }
    }
}

fn write_script(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}
