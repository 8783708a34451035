use std::num::NonZeroU32;

use super::error::RevealError;

/// Fraction of `duration_ms` covered by `elapsed_ms`, clamped to `0.0..=1.0`.
pub fn progress(elapsed_ms: f64, duration_ms: NonZeroU32) -> f64 {
    let progress = elapsed_ms / f64::from(duration_ms.get());
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Value shown at `progress`. Truncates, and only a full `1.0` lands on `target`.
pub fn value_at(progress: f64, target: u32) -> u32 {
    if progress >= 1.0 {
        return target;
    }
    let value = (progress.max(0.0) * f64::from(target)).floor() as u32;
    value.min(target)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running { started_at: f64 },
    Finished,
    Cancelled,
}

/// What one frame produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: u32,
    /// No more frames are needed.
    pub done: bool,
}

/// Counts a displayed number from 0 up to `target` over `duration`.
///
/// Time is always passed in, in milliseconds on a monotonic clock, and the
/// displayed value is derived from elapsed time only. A run happens at most
/// once: after finishing or being cancelled, `start` is a no-op.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u32,
    duration: NonZeroU32,
    displayed: u32,
    phase: Phase,
}

impl CountUp {
    pub fn new(target: u32, duration: NonZeroU32) -> Self {
        Self {
            target,
            duration,
            displayed: 0,
            phase: Phase::Idle,
        }
    }

    pub fn with_duration_ms(target: u32, duration_ms: u32) -> Result<Self, RevealError> {
        let duration = NonZeroU32::new(duration_ms).ok_or(RevealError::ZeroDuration)?;
        Ok(Self::new(target, duration))
    }

    /// Begins the run at `now`. Returns `false` if it was already started,
    /// finished or cancelled.
    pub fn start(&mut self, now: f64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running { started_at: now };
        true
    }

    pub fn advance(&mut self, now: f64) -> Frame {
        match self.phase {
            Phase::Idle => Frame {
                value: self.displayed,
                done: false,
            },
            Phase::Running { started_at } => {
                let progress = progress(now - started_at, self.duration);
                // Clock hiccups must not make the number go backwards.
                self.displayed = self.displayed.max(value_at(progress, self.target));
                let done = progress >= 1.0;
                if done {
                    self.phase = Phase::Finished;
                }
                Frame {
                    value: self.displayed,
                    done,
                }
            }
            Phase::Finished | Phase::Cancelled => Frame {
                value: self.displayed,
                done: true,
            },
        }
    }

    /// Stops a run in place. The displayed value freezes.
    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Running { .. }) {
            self.phase = Phase::Cancelled;
        }
    }

    /// Jumps straight to the end of the run.
    pub fn finish(&mut self) {
        if self.phase != Phase::Cancelled {
            self.displayed = self.target;
            self.phase = Phase::Finished;
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration.get()
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn count_up(target: u32, duration_ms: u32) -> CountUp {
        CountUp::with_duration_ms(target, duration_ms).unwrap()
    }

    /// Drives `animator` at a fixed frame rate starting at `t0` and returns
    /// every `(timestamp, value)` pair until it reports done.
    fn run_frames(animator: &mut CountUp, t0: f64, frame_ms: f64) -> Vec<(f64, u32)> {
        assert!(animator.start(t0));
        let mut frames = Vec::new();
        let mut now = t0;
        loop {
            let frame = animator.advance(now);
            frames.push((now, frame.value));
            if frame.done {
                return frames;
            }
            now += frame_ms;
            assert!(frames.len() < 10_000, "animation never finished");
        }
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert_eq!(
            CountUp::with_duration_ms(10, 0).unwrap_err(),
            RevealError::ZeroDuration
        );
    }

    #[test]
    fn progress_is_clamped() {
        let duration = NonZeroU32::new(1200).unwrap();
        assert_eq!(progress(-50.0, duration), 0.0);
        assert_eq!(progress(600.0, duration), 0.5);
        assert_eq!(progress(5000.0, duration), 1.0);
        assert_eq!(progress(f64::NAN, duration), 0.0);
    }

    #[test]
    fn value_truncates_and_never_overshoots() {
        assert_eq!(value_at(0.0, 48), 0);
        assert_eq!(value_at(0.999_999, 48), 47);
        assert_eq!(value_at(1.0, 48), 48);
        assert_eq!(value_at(0.5, 3), 1);
        assert_eq!(value_at(0.5, 0), 0);
    }

    #[test]
    fn samples_match_proportional_progress() {
        let mut animator = count_up(48, 1200);
        let t0 = 10_000.0;
        assert!(animator.start(t0));

        assert_eq!(animator.advance(t0 + 300.0).value, 12);
        assert_eq!(animator.advance(t0 + 600.0).value, 24);

        let last = animator.advance(t0 + 1200.0);
        assert_eq!(last, Frame { value: 48, done: true });
        assert!(animator.is_finished());

        assert_eq!(animator.advance(t0 + 5000.0).value, 48);
    }

    #[test]
    fn idle_until_started() {
        let mut animator = count_up(100, 1200);
        for now in [0.0, 500.0, 10_000.0] {
            assert_eq!(animator.advance(now), Frame { value: 0, done: false });
        }
        assert!(animator.is_idle());
        assert!(!animator.is_running());
        assert_eq!(animator.displayed(), 0);
    }

    #[test]
    fn values_are_monotonic_and_bounded() {
        for target in [0, 1, 4, 48, 100, 9_999] {
            let mut animator = count_up(target, 1200);
            let frames = run_frames(&mut animator, 2_000.0, FRAME_MS);
            for pair in frames.windows(2) {
                assert!(pair[0].1 <= pair[1].1, "target {target} went backwards: {pair:?}");
            }
            assert!(frames.iter().all(|&(_, value)| value <= target));
            assert_eq!(frames.last().unwrap().1, target);
        }
    }

    #[test]
    fn finishes_within_one_frame_of_duration() {
        let t0 = 500.0;
        let mut animator = count_up(48, 1200);
        let frames = run_frames(&mut animator, t0, FRAME_MS);
        let (finished_at, value) = *frames.last().unwrap();
        assert_eq!(value, 48);
        assert!(finished_at - t0 >= 1200.0);
        assert!(finished_at - t0 < 1200.0 + FRAME_MS);
    }

    #[test]
    fn frame_rate_does_not_change_the_curve() {
        let mut fast = count_up(100, 1000);
        let mut slow = count_up(100, 1000);
        fast.start(0.0);
        slow.start(0.0);
        for now in (0..=750).step_by(5) {
            let _ = fast.advance(f64::from(now));
        }
        let fast_value = fast.advance(750.0).value;
        let slow_value = slow.advance(750.0).value;
        assert_eq!(fast_value, 75);
        assert_eq!(slow_value, 75);
    }

    #[test]
    fn clock_going_backwards_does_not_decrease_value() {
        let mut animator = count_up(100, 1000);
        animator.start(1000.0);
        assert_eq!(animator.advance(1500.0).value, 50);
        assert_eq!(animator.advance(1200.0).value, 50);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut animator = count_up(10, 100);
        assert!(animator.start(0.0));
        assert!(!animator.start(50.0));
        assert_eq!(animator.advance(100.0).value, 10);
    }

    #[test]
    fn finished_run_never_restarts() {
        let mut animator = count_up(48, 1200);
        run_frames(&mut animator, 0.0, FRAME_MS);
        assert!(!animator.start(50_000.0));
        assert_eq!(animator.advance(50_001.0), Frame { value: 48, done: true });
    }

    #[test]
    fn cancel_mid_run_freezes_value() {
        let mut animator = count_up(100, 1000);
        animator.start(0.0);
        assert_eq!(animator.advance(400.0).value, 40);

        animator.cancel();
        assert!(!animator.is_running());
        for now in [500.0, 1000.0, 2000.0] {
            assert_eq!(animator.advance(now), Frame { value: 40, done: true });
        }
        assert!(!animator.start(3000.0));
        assert_eq!(animator.displayed(), 40);
    }

    #[test]
    fn cancel_before_start_keeps_zero() {
        let mut animator = count_up(100, 1000);
        animator.cancel();
        assert!(!animator.start(0.0));
        assert_eq!(animator.advance(2000.0).value, 0);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut animator = count_up(4, 1200);
        animator.start(0.0);
        animator.finish();
        assert!(animator.is_finished());
        assert_eq!(animator.displayed(), 4);
    }

    #[test]
    fn zero_target_still_runs_for_duration() {
        let mut animator = count_up(0, 1200);
        animator.start(0.0);
        assert_eq!(animator.advance(600.0), Frame { value: 0, done: false });
        assert_eq!(animator.advance(1200.0), Frame { value: 0, done: true });
    }
}
