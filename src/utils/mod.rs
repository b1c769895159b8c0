pub mod fs;
pub mod git;
pub mod pacur;
pub mod process;
pub mod rsync;

pub use fs::write_version_constant;
pub use git::commit_and_push;
pub use process::{command_line, run_checked};
