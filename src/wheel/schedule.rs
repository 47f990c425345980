/// Delay of the pause frame shown before the spin starts.
pub const LEAD_DELAY: u16 = 100;
/// Delay of every spin frame.
pub const SPIN_DELAY: u16 = 10;
/// Delay of the resting frame the animation ends on.
pub const TRAIL_DELAY: u16 = 500;

/// Physics tick of the leading pause frame.
pub const LEAD_TICK: u32 = 0;
/// Physics tick of the trailing pause frame; past the spin-up window, so it decelerates.
pub const TRAIL_TICK: u32 = 100;

/// One entry of the frame schedule: the tick fed to the physics step and the display delay
/// (GIF centiseconds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledFrame {
    pub tick: u32,
    pub delay: u16,
}

/// Leading pause, `frame_count` spin frames, trailing pause: `frame_count + 2` entries.
pub fn frame_schedule(frame_count: u32) -> Vec<ScheduledFrame> {
    let mut out = Vec::with_capacity(frame_count as usize + 2);
    out.push(ScheduledFrame {
        tick: LEAD_TICK,
        delay: LEAD_DELAY,
    });
    out.extend((0..frame_count).map(|tick| ScheduledFrame {
        tick,
        delay: SPIN_DELAY,
    }));
    out.push(ScheduledFrame {
        tick: TRAIL_TICK,
        delay: TRAIL_DELAY,
    });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/schedule.rs"]
mod tests;
