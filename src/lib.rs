//! Spinwheel renders an animated "spinning wheel" GIF from a list of labels.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: 1 to 20 labels and a [`WheelConfig`]
//! 2. **Palette**: white, black, then a primary/complement color pair per item
//! 3. **Trajectory**: the wheel angle is advanced serially across the frame schedule
//!    (a pause, `frame_count` spin frames, a long pause on the result)
//! 4. **Rasterize**: each pose is painted onto its own indexed [`Canvas`] with a scanline
//!    triangle filler (optionally in parallel)
//! 5. **Encode**: frames and delays are serialized as a GIF
//!
//! Rendering is pure and deterministic: the same labels and config always produce the same
//! bytes.
#![forbid(unsafe_code)]

mod anim;
mod encode;
mod foundation;
mod palette;
mod raster;
mod render;
mod service;
mod wheel;

pub use anim::{Animation, Frame};
pub use encode::gif::{GifOptions, Repeat, encode_gif, write_gif};
pub use foundation::config::{MAX_CANVAS_PIXELS, MAX_ITEMS, WheelConfig, validate_items};
pub use foundation::core::{Point, Rgb8, WheelGeometry};
pub use foundation::error::{WheelError, WheelResult};
pub use foundation::math::interpolate;
pub use palette::items::{BASE_PALETTE, WheelItem, assign_items, complement};
pub use palette::table::{BACKGROUND_INDEX, LINE_INDEX, MAX_PALETTE_LEN, Palette};
pub use raster::canvas::Canvas;
pub use raster::text::{BitmapFont, TextRenderer, draw_text_centered};
pub use raster::triangle::{fill_triangle, fill_triangle_index};
pub use render::pipeline::{
    RenderOpts, RenderThreading, render_animation, render_animation_with, render_frame,
    render_gif, render_gif_to,
};
pub use service::handler::{
    GifRequest, GifResponse, ITEMS_PARAM, handle_request, handle_request_with, parse_items,
};
pub use wheel::paint::WheelScene;
pub use wheel::schedule::{
    LEAD_DELAY, ScheduledFrame, SPIN_DELAY, TRAIL_DELAY, frame_schedule,
};
pub use wheel::state::{FramePose, WheelState, plan_poses};
