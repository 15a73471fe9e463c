use serde::{Deserialize, Serialize};

use super::style::{apply_ranges, PropertyRange, VisualStyle};
use super::trigger::{Anchor, TriggerBounds, Viewport};
use super::TargetId;

// Smoothed scrubs stop chasing once this close to the scroll progress.
const SETTLE_EPSILON: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScrubMode {
    /// Progress follows the scroll offset 1:1.
    Exact,
    /// Progress catches up with the scroll offset over roughly `lag_ms`.
    Smoothed { lag_ms: f64 },
}

/// Scroll offsets between which a track goes from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubRegion {
    pub start: f64,
    pub end: f64,
}

impl ScrubRegion {
    pub fn resolve(start: Anchor, end: Anchor, bounds: TriggerBounds, viewport: Viewport) -> Self {
        Self {
            start: start.scroll_offset(bounds, viewport),
            end: end.scroll_offset(bounds, viewport),
        }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            // degenerate region acts as a step at `start`
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrubSpec {
    pub start: Anchor,
    pub end: Anchor,
    pub ranges: Vec<PropertyRange>,
    pub mode: ScrubMode,
}

impl ScrubSpec {
    pub fn new(start: Anchor, end: Anchor, ranges: Vec<PropertyRange>) -> Self {
        Self {
            start,
            end,
            ranges,
            mode: ScrubMode::Exact,
        }
    }

    pub fn smoothed(mut self, lag_ms: f64) -> Self {
        self.mode = ScrubMode::Smoothed { lag_ms };
        self
    }
}

#[derive(Clone, Debug)]
pub struct ScrubTrack {
    target: TargetId,
    spec: ScrubSpec,
    bounds: TriggerBounds,
    scroll_progress: f64,
    shown: Option<f64>,
}

impl ScrubTrack {
    pub fn new(target: TargetId, spec: ScrubSpec, bounds: TriggerBounds) -> Self {
        Self {
            target,
            spec,
            bounds,
            scroll_progress: 0.0,
            shown: None,
        }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn set_bounds(&mut self, bounds: TriggerBounds) {
        self.bounds = bounds;
    }

    pub fn region(&self, viewport: Viewport) -> ScrubRegion {
        ScrubRegion::resolve(self.spec.start, self.spec.end, self.bounds, viewport)
    }

    /// Progress currently written to the target.
    pub fn progress(&self) -> f64 {
        self.shown.unwrap_or(0.0)
    }

    /// Recompute the scroll progress. Returns true when the shown progress
    /// changed and the target needs restyling.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport: Viewport) -> bool {
        self.scroll_progress = self.region(viewport).progress(scroll_y);
        match (self.spec.mode, self.shown) {
            (ScrubMode::Exact, shown) if shown == Some(self.scroll_progress) => false,
            (ScrubMode::Exact, _) | (ScrubMode::Smoothed { .. }, None) => {
                self.shown = Some(self.scroll_progress);
                true
            }
            // the frame loop walks it toward the new value
            (ScrubMode::Smoothed { .. }, Some(_)) => false,
        }
    }

    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let ScrubMode::Smoothed { lag_ms } = self.spec.mode else {
            return false;
        };
        let Some(shown) = self.shown else {
            return false;
        };
        let gap = self.scroll_progress - shown;
        if gap == 0.0 {
            return false;
        }
        if gap.abs() < SETTLE_EPSILON || lag_ms <= 0.0 {
            self.shown = Some(self.scroll_progress);
            return true;
        }
        // e^-3 leaves about 5% of the gap after `lag_ms`
        let catch_up = 1.0 - (-3.0 * dt_ms / lag_ms).exp();
        self.shown = Some(shown + gap * catch_up);
        true
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.spec.mode, ScrubMode::Smoothed { .. })
            && self.shown.is_some_and(|shown| shown != self.scroll_progress)
    }

    pub fn apply(&self, style: &mut VisualStyle) {
        apply_ranges(style, &self.spec.ranges, self.progress());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::Property;
    use proptest::prelude::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn parallax() -> ScrubSpec {
        ScrubSpec::new(
            Anchor::TOP_TOP,
            Anchor::BOTTOM_TOP,
            vec![PropertyRange::new(Property::TranslateY, 0.0, 150.0)],
        )
    }

    fn styled(track: &ScrubTrack) -> VisualStyle {
        let mut style = VisualStyle::default();
        track.apply(&mut style);
        style
    }

    #[test]
    fn endpoints_and_midpoint_interpolate_linearly() {
        let mut track = ScrubTrack::new(TargetId::from_index(0), parallax(), TriggerBounds::new(0.0, 1000.0));
        track.on_scroll(0.0, VIEWPORT);
        assert_eq!(styled(&track).translate_y, 0.0);
        track.on_scroll(500.0, VIEWPORT);
        assert_eq!(styled(&track).translate_y, 75.0);
        track.on_scroll(1000.0, VIEWPORT);
        assert_eq!(styled(&track).translate_y, 150.0);
    }

    #[test]
    fn blur_and_opacity_move_together() {
        let spec = ScrubSpec::new(
            Anchor::TOP_TOP,
            Anchor::new(0.5, 0.0),
            vec![
                PropertyRange::new(Property::Blur, 0.0, 10.0),
                PropertyRange::new(Property::Opacity, 1.0, 0.3),
            ],
        );
        let mut track = ScrubTrack::new(TargetId::from_index(0), spec, TriggerBounds::new(0.0, 1000.0));
        track.on_scroll(250.0, VIEWPORT);
        let style = styled(&track);
        assert_eq!(style.blur, 5.0);
        assert!((style.opacity - 0.65).abs() < 1e-9);
    }

    #[test]
    fn unchanged_scroll_does_not_restyle() {
        let mut track = ScrubTrack::new(TargetId::from_index(0), parallax(), TriggerBounds::new(0.0, 1000.0));
        assert!(track.on_scroll(100.0, VIEWPORT));
        assert!(!track.on_scroll(100.0, VIEWPORT));
        // both clamp to 1.0
        assert!(track.on_scroll(2000.0, VIEWPORT));
        assert!(!track.on_scroll(3000.0, VIEWPORT));
    }

    #[test]
    fn empty_region_is_a_step() {
        let region = ScrubRegion { start: 300.0, end: 300.0 };
        assert_eq!(region.progress(299.0), 0.0);
        assert_eq!(region.progress(300.0), 1.0);
    }

    #[test]
    fn smoothed_track_converges_on_the_scroll_progress() {
        let spec = parallax().smoothed(1000.0);
        let mut track = ScrubTrack::new(TargetId::from_index(0), spec, TriggerBounds::new(0.0, 1000.0));
        assert!(track.on_scroll(0.0, VIEWPORT));
        assert!(!track.on_scroll(1000.0, VIEWPORT));
        assert!(track.is_settling());

        track.advance(1000.0);
        assert!(track.progress() > 0.94 && track.progress() < 1.0);

        for _ in 0..200 {
            track.advance(16.0);
        }
        assert!(!track.is_settling());
        assert_eq!(track.progress(), 1.0);
    }

    proptest! {
        #[test]
        fn progress_is_clamped(start in -5000.0f64..5000.0, span in 1.0f64..5000.0, scroll in -20000.0f64..20000.0) {
            let region = ScrubRegion { start, end: start + span };
            let p = region.progress(scroll);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn exact_track_matches_the_linear_formula(scroll in 0.0f64..1000.0) {
            let mut track = ScrubTrack::new(TargetId::from_index(0), parallax(), TriggerBounds::new(0.0, 1000.0));
            track.on_scroll(scroll, VIEWPORT);
            let expected = 150.0 * scroll / 1000.0;
            prop_assert!((styled(&track).translate_y - expected).abs() < 1e-9);
        }
    }
}
