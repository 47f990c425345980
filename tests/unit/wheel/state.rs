use std::f64::consts::TAU;

use super::*;
use crate::wheel::schedule::frame_schedule;

#[test]
fn advance_adds_full_turn_plus_acceleration() {
    let mut s = WheelState::default();
    s.advance(4, 0);
    assert!((s.accelerate - ACCEL_STEP).abs() < 1e-12);
    assert!((s.angle - (TAU + ACCEL_STEP)).abs() < 1e-9);
}

#[test]
fn acceleration_flips_at_spin_up_boundary() {
    let mut s = WheelState::default();
    s.advance(2, SPIN_UP_TICKS - 1);
    assert!(s.accelerate > 0.0);

    let mut s = WheelState::default();
    s.advance(2, SPIN_UP_TICKS);
    assert!((s.accelerate + ACCEL_STEP).abs() < 1e-12);
}

#[test]
fn poses_record_state_before_each_frame() {
    let schedule = frame_schedule(2);
    let poses = plan_poses(3, &schedule);

    assert_eq!(poses.len(), 4);
    assert_eq!(poses[0].state, WheelState::default());
    assert_eq!(poses[0].frame, schedule[0]);

    let mut expected = WheelState::default();
    for (pose, frame) in poses.iter().zip(&schedule) {
        assert_eq!(pose.state, expected);
        expected.advance(3, frame.tick);
    }
}

#[test]
fn default_run_spins_up_then_down() {
    let poses = plan_poses(5, &frame_schedule(60));

    // lead (tick 0) + ticks 0..30 accelerate, ticks 30..60 and the trail decelerate
    let last = poses.last().unwrap().state;
    let expected_before_trail = ACCEL_STEP * (31.0 - 30.0);
    assert!((last.accelerate - expected_before_trail).abs() < 1e-9);

    let peak = poses
        .iter()
        .map(|p| p.state.accelerate)
        .fold(f64::MIN, f64::max);
    assert!((peak - ACCEL_STEP * 31.0).abs() < 1e-9);
}

#[test]
fn poses_are_deterministic() {
    let a = plan_poses(7, &frame_schedule(20));
    let b = plan_poses(7, &frame_schedule(20));
    assert_eq!(a, b);
}
