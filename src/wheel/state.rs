use crate::{foundation::math::segment_step, wheel::schedule::ScheduledFrame};

/// Ticks below this accelerate the wheel; later ticks decelerate it.
pub const SPIN_UP_TICKS: u32 = 30;
/// Per-tick change of the acceleration term.
pub const ACCEL_STEP: f64 = 0.025;

/// Rotation state carried from one frame to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelState {
    /// Angle of the first item's leading edge, in radians.
    pub angle: f64,
    /// Extra rotation added after each frame on top of the full per-item turn.
    pub accelerate: f64,
}

impl WheelState {
    /// Applies one frame of physics.
    ///
    /// The per-item step is added once per item, exactly as the painter walks the items, so the
    /// angle accumulates the same rounding the painted segments see.
    pub fn advance(&mut self, item_count: usize, tick: u32) {
        let step = segment_step(item_count);
        for _ in 0..item_count {
            self.angle += step;
        }

        if tick < SPIN_UP_TICKS {
            self.accelerate += ACCEL_STEP;
        } else {
            self.accelerate -= ACCEL_STEP;
        }

        self.angle += self.accelerate;
    }
}

/// Wheel state at the start of one scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePose {
    pub frame: ScheduledFrame,
    pub state: WheelState,
}

/// Walks the schedule from the resting state and records the pose each frame is painted from.
///
/// Every scheduled frame, the pauses included, advances the state.
pub fn plan_poses(item_count: usize, schedule: &[ScheduledFrame]) -> Vec<FramePose> {
    let mut state = WheelState::default();
    let mut out = Vec::with_capacity(schedule.len());
    for &frame in schedule {
        out.push(FramePose { frame, state });
        state.advance(item_count, frame.tick);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/state.rs"]
mod tests;
