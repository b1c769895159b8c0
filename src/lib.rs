//! Release automation for pritunl-link.
//!
//! Stamps a calendar version into the source tree, builds packages with
//! pacur and publishes the package repository to mirror hosts.
//!
//! # Examples
//!
//! ## Deriving versions
//!
//! ```
//! use builder::version::{get_int_ver, get_ver};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2015, 11, 25, 12, 0, 0).unwrap();
//! assert_eq!(get_ver("1.2beta", &now).unwrap(), "1.2.1.50beta");
//! assert_eq!(get_int_ver("1.2.3alpha").unwrap().to_string(), "100021003");
//! ```

pub mod commands;
pub mod types;
pub mod utils;
pub mod version;

#[cfg(all(test, unix))]
mod test_utils;

pub use commands::build;
pub use commands::set_version;
pub use commands::upload;
