//! Animation serialization.

/// GIF output via the `gif` crate.
pub mod gif;
