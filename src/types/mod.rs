pub mod config;

pub use config::{BuildConfig, Track};
