use super::*;

#[test]
fn schedule_wraps_spin_frames_with_pauses() {
    let s = frame_schedule(3);
    assert_eq!(
        s,
        vec![
            ScheduledFrame { tick: 0, delay: 100 },
            ScheduledFrame { tick: 0, delay: 10 },
            ScheduledFrame { tick: 1, delay: 10 },
            ScheduledFrame { tick: 2, delay: 10 },
            ScheduledFrame { tick: 100, delay: 500 },
        ]
    );
}

#[test]
fn empty_spin_still_has_both_pauses() {
    let delays: Vec<u16> = frame_schedule(0).iter().map(|f| f.delay).collect();
    assert_eq!(delays, vec![100, 500]);
}

#[test]
fn default_schedule_length() {
    let s = frame_schedule(60);
    assert_eq!(s.len(), 62);
    assert!(s[1..61].iter().all(|f| f.delay == SPIN_DELAY));
    assert_eq!(s[60].tick, 59);
}
