pub mod build;
pub mod set_version;
pub mod upload;
