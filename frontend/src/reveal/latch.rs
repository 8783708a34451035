use super::error::RevealError;

/// Minimum fraction of a region's area that has to overlap the viewport
/// before the region counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Result<Self, RevealError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(RevealError::ThresholdOutOfRange(fraction))
        }
    }

    /// Forces `fraction` into range. NaN becomes 0.
    pub fn clamped(fraction: f64) -> Self {
        if fraction.is_nan() {
            Self(0.0)
        } else {
            Self(fraction.clamp(0.0, 1.0))
        }
    }

    pub fn fraction(self) -> f64 {
        self.0
    }
}

/// One intersection report for a watched region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub intersecting: bool,
}

impl IntersectionSample {
    pub fn new(ratio: f64, intersecting: bool) -> Self {
        Self { ratio, intersecting }
    }

    /// Sample where any positive overlap counts as intersecting.
    #[cfg(test)]
    pub fn from_ratio(ratio: f64) -> Self {
        Self::new(ratio, ratio > 0.0)
    }
}

/// One-shot "has this region been seen" flag.
///
/// The latch flips to visible on the first sample that meets the threshold
/// and never flips back, so entrance animations play once per mount.
/// After `teardown` it ignores everything.
#[derive(Debug, Clone)]
pub struct VisibilityLatch {
    threshold: Threshold,
    visible: bool,
    torn_down: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            visible: false,
            torn_down: false,
        }
    }

    /// Feeds a sample into the latch. Returns `true` only for the sample
    /// that flips it, which is the single point where dependents get notified.
    #[must_use]
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.torn_down || self.visible {
            return false;
        }
        if sample.intersecting && sample.ratio >= self.threshold.fraction() {
            self.visible = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latch(threshold: f64) -> VisibilityLatch {
        VisibilityLatch::new(Threshold::new(threshold).unwrap())
    }

    #[test]
    fn threshold_rejects_out_of_range_values() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(-0.1),
            Err(RevealError::ThresholdOutOfRange(-0.1))
        );
        assert_eq!(
            Threshold::new(1.2),
            Err(RevealError::ThresholdOutOfRange(1.2))
        );
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn clamped_threshold_stays_in_range() {
        assert_eq!(Threshold::clamped(4.0).fraction(), 1.0);
        assert_eq!(Threshold::clamped(-2.0).fraction(), 0.0);
        assert_eq!(Threshold::clamped(f64::NAN).fraction(), 0.0);
        assert_eq!(Threshold::clamped(0.3).fraction(), 0.3);
    }

    #[test]
    fn region_crossing_threshold_on_second_sample() {
        let mut latch = latch(0.1);

        assert!(!latch.observe(IntersectionSample::from_ratio(0.05)));
        assert!(!latch.is_visible());

        assert!(latch.observe(IntersectionSample::from_ratio(0.15)));
        assert!(latch.is_visible());

        assert!(!latch.observe(IntersectionSample::from_ratio(0.0)));
        assert!(latch.is_visible());
    }

    #[test]
    fn stays_visible_for_any_later_sequence() {
        let mut latch = latch(0.5);
        let samples = [0.0, 0.2, 0.7, 0.0, 0.1, 1.0, 0.0, 0.4];
        let mut seen = false;
        for ratio in samples {
            let _ = latch.observe(IntersectionSample::from_ratio(ratio));
            if seen {
                assert!(latch.is_visible(), "latch reverted after ratio {ratio}");
            }
            seen |= latch.is_visible();
        }
        assert!(seen);
    }

    #[test]
    fn rapid_samples_notify_once() {
        let mut latch = latch(0.1);
        let notifications = [0.3, 0.4, 0.9, 0.95, 1.0]
            .into_iter()
            .filter(|&ratio| latch.observe(IntersectionSample::from_ratio(ratio)))
            .count();
        assert_eq!(notifications, 1);
    }

    #[test]
    fn zero_threshold_needs_actual_intersection() {
        let mut latch = latch(0.0);
        assert!(!latch.observe(IntersectionSample::new(0.0, false)));
        assert!(latch.observe(IntersectionSample::from_ratio(0.001)));
    }

    #[test]
    fn zero_threshold_accepts_edge_contact() {
        let mut latch = latch(0.0);
        assert!(latch.observe(IntersectionSample::new(0.0, true)));
    }

    #[test]
    fn becomes_visible_iff_some_sample_meets_threshold() {
        let cases: &[(f64, &[f64], bool)] = &[
            (0.1, &[0.0, 0.05, 0.09], false),
            (0.1, &[0.0, 0.1], true),
            (0.5, &[0.49, 0.3], false),
            (0.5, &[0.2, 0.5, 0.1], true),
            (1.0, &[0.99], false),
            (1.0, &[1.0], true),
        ];
        for (threshold, samples, expected) in cases {
            let mut latch = latch(*threshold);
            for ratio in samples.iter() {
                let _ = latch.observe(IntersectionSample::from_ratio(*ratio));
            }
            assert_eq!(latch.is_visible(), *expected, "threshold {threshold} samples {samples:?}");
        }
    }

    #[test]
    fn never_visible_without_samples() {
        let latch = latch(0.1);
        assert!(!latch.is_visible());
    }

    #[test]
    fn torn_down_latch_ignores_samples() {
        let mut latch = latch(0.1);
        latch.teardown();
        assert!(!latch.observe(IntersectionSample::from_ratio(1.0)));
        assert!(!latch.is_visible());
        assert!(latch.is_torn_down());
    }

    #[test]
    fn teardown_keeps_earlier_reveal() {
        let mut latch = latch(0.1);
        assert!(latch.observe(IntersectionSample::from_ratio(0.6)));
        latch.teardown();
        assert!(latch.is_visible());
        assert!(!latch.observe(IntersectionSample::from_ratio(0.6)));
    }
}
