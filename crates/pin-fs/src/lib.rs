//! Filesystem helpers for pin
//!
//! Path handling, whole-file I/O and the project configuration store.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::PinPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
