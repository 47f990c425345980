//! Fixed discrete palette used by every frame.
//!
//! Index 0 is the background (white), index 1 the line color (black), and each wheel item owns
//! the next two entries (primary, secondary).

pub mod items;
pub mod table;
