//! Profile file loading
//!
//! A profile is a TOML document shaped like [`twin_domain::Profile`]. When no
//! path is configured the built-in profile is used.

mod loader;

pub use loader::{ProfileError, ProfileLoader};
