//! Indexed-color canvas and the primitives that paint into it.

pub mod canvas;
pub mod font8x8;
pub mod text;
pub mod triangle;
