//! Wheel physics and per-frame painting.
//!
//! The rotation state is threaded through [`state::plan_poses`] serially; painting a pose is
//! pure, so poses can be rasterized in any order.

pub mod paint;
pub mod schedule;
pub mod state;
