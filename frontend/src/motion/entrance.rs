use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::style::{apply_ranges, PropertyRange, VisualStyle};
use super::TargetId;

/// Time-driven tween that plays once, right after mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntranceSpec {
    pub ranges: Vec<PropertyRange>,
    /// Fixed wait before starting; stands in for "layout has settled".
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    /// Extra delay per element when one spec matches several elements.
    pub stagger_ms: f64,
}

impl EntranceSpec {
    pub fn new(ranges: Vec<PropertyRange>, duration_ms: f64) -> Self {
        Self {
            ranges,
            delay_ms: 0.0,
            duration_ms,
            easing: Easing::Power4Out,
            stagger_ms: 0.0,
        }
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn staggered(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Entrance {
    target: TargetId,
    ranges: Vec<PropertyRange>,
    delay_ms: f64,
    duration_ms: f64,
    easing: Easing,
    elapsed_ms: f64,
}

impl Entrance {
    /// `index` is the element's position among the spec's matches.
    pub fn new(target: TargetId, spec: &EntranceSpec, index: usize) -> Self {
        Self {
            target,
            ranges: spec.ranges.clone(),
            delay_ms: spec.delay_ms + index as f64 * spec.stagger_ms,
            duration_ms: spec.duration_ms,
            easing: spec.easing,
            elapsed_ms: 0.0,
        }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn progress(&self) -> f64 {
        let active = self.elapsed_ms - self.delay_ms;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.apply(active / self.duration_ms)
    }

    pub fn is_running(&self) -> bool {
        self.elapsed_ms < self.delay_ms + self.duration_ms
    }

    /// Returns true when the target needs restyling.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        let before = self.progress();
        self.elapsed_ms += dt_ms;
        self.progress() != before
    }

    pub fn apply(&self, style: &mut VisualStyle) {
        apply_ranges(style, &self.ranges, self.progress());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{ClipEllipse, Property};

    fn hero_image() -> EntranceSpec {
        let mut ranges = PropertyRange::clip_morph(
            ClipEllipse::circle(0.0, 50.0, 50.0),
            ClipEllipse::ellipse(75.0, 90.0, 60.0, 50.0),
        )
        .to_vec();
        ranges.push(PropertyRange::new(Property::Scale, 1.2, 1.0));
        EntranceSpec::new(ranges, 1500.0).delayed(200.0)
    }

    #[test]
    fn waits_for_the_delay_then_finishes_at_the_target_values() {
        let mut entrance = Entrance::new(TargetId::from_index(0), &hero_image(), 0);
        assert!(!entrance.advance(150.0));
        assert_eq!(entrance.progress(), 0.0);

        assert!(entrance.advance(100.0));
        assert!(entrance.progress() > 0.0);

        entrance.advance(5000.0);
        assert!(!entrance.is_running());
        let mut style = VisualStyle::default();
        entrance.apply(&mut style);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.clip, Some(ClipEllipse::ellipse(75.0, 90.0, 60.0, 50.0)));
    }

    #[test]
    fn stagger_delays_later_matches() {
        let spec = EntranceSpec::new(
            vec![PropertyRange::new(Property::TranslateY, 100.0, 0.0)],
            1200.0,
        )
        .delayed(300.0)
        .staggered(150.0);
        let mut first = Entrance::new(TargetId::from_index(0), &spec, 0);
        let mut third = Entrance::new(TargetId::from_index(2), &spec, 2);
        first.advance(400.0);
        third.advance(400.0);
        assert!(first.progress() > 0.0);
        assert_eq!(third.progress(), 0.0);
    }
}
