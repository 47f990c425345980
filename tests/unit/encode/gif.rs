use std::sync::Arc;

use super::*;
use crate::{
    anim::Frame,
    foundation::core::{Point, Rgb8},
    palette::table::Palette,
    raster::canvas::Canvas,
};

fn small_anim() -> Animation {
    let palette = Arc::new(
        Palette::new(vec![Rgb8::WHITE, Rgb8::BLACK, Rgb8::new(239, 41, 23)]).unwrap(),
    );
    let mut anim = Animation::new(4, 3, Arc::clone(&palette));
    for (i, delay) in [100u16, 10, 500].into_iter().enumerate() {
        let mut canvas = Canvas::new(4, 3, Arc::clone(&palette));
        canvas.set(Point::new(i as i32, 1), 2);
        canvas.set(Point::new(3, 2), 1);
        anim.push(Frame { canvas, delay }).unwrap();
    }
    anim
}

fn decode(bytes: &[u8]) -> (Vec<u8>, Vec<(u16, Vec<u8>)>) {
    let mut opts = ::gif::DecodeOptions::new();
    opts.set_color_output(::gif::ColorOutput::Indexed);
    let mut dec = opts.read_info(bytes).unwrap();
    let global = dec.global_palette().unwrap().to_vec();
    let mut frames = Vec::new();
    while let Some(f) = dec.read_next_frame().unwrap() {
        frames.push((f.delay, f.buffer.to_vec()));
    }
    (global, frames)
}

#[test]
fn encoded_stream_decodes_to_same_frames() {
    let anim = small_anim();
    let bytes = encode_gif(&anim, &GifOptions::default()).unwrap();
    assert_eq!(&bytes[..6], b"GIF89a");

    let (global, frames) = decode(&bytes);
    assert_eq!(&global[..9], &[255, 255, 255, 0, 0, 0, 239, 41, 23]);
    assert_eq!(frames.len(), 3);
    for ((delay, pixels), expected) in frames.iter().zip(anim.frames()) {
        assert_eq!(*delay, expected.delay);
        assert_eq!(pixels.as_slice(), expected.canvas.pixels());
    }
}

#[test]
fn repeat_extension_is_optional() {
    let anim = small_anim();
    let looped = encode_gif(&anim, &GifOptions::default()).unwrap();
    let once = encode_gif(&anim, &GifOptions { repeat: None }).unwrap();

    let has_netscape = |b: &[u8]| b.windows(11).any(|w| w == b"NETSCAPE2.0");
    assert!(has_netscape(&looped));
    assert!(!has_netscape(&once));
}

#[test]
fn empty_animation_is_an_encoding_error() {
    let palette = Arc::new(Palette::new(vec![Rgb8::WHITE]).unwrap());
    let anim = Animation::new(4, 4, palette);
    let err = encode_gif(&anim, &GifOptions::default()).unwrap_err();
    assert!(matches!(err, WheelError::Encoding(_)));
}

#[test]
fn oversized_canvas_is_an_encoding_error() {
    let palette = Arc::new(Palette::new(vec![Rgb8::WHITE]).unwrap());
    let mut anim = Animation::new(70_000, 1, Arc::clone(&palette));
    anim.push(Frame {
        canvas: Canvas::new(70_000, 1, palette),
        delay: 10,
    })
    .unwrap();
    let err = encode_gif(&anim, &GifOptions::default()).unwrap_err();
    assert!(matches!(err, WheelError::Encoding(_)));
}

#[test]
fn write_gif_matches_encode() {
    let anim = small_anim();
    let mut sink = Vec::new();
    write_gif(&anim, &GifOptions::default(), &mut sink).unwrap();
    assert_eq!(sink, encode_gif(&anim, &GifOptions::default()).unwrap());
}

#[test]
fn failed_encode_writes_nothing() {
    let palette = Arc::new(Palette::new(vec![Rgb8::WHITE]).unwrap());
    let anim = Animation::new(4, 4, palette);
    let mut sink = Vec::new();
    assert!(write_gif(&anim, &GifOptions::default(), &mut sink).is_err());
    assert!(sink.is_empty());
}
