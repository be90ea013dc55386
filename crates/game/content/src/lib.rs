//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Character class templates (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content seeds new characters and tunes the engine; it never appears in a
//! save record.
//!
//! All loaders use cavern-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ClassLoader, ConfigLoader, LoadResult};
