/// End-to-end rendering: validation, trajectory, rasterization, encoding.
pub mod pipeline;
