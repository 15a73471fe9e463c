use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::style::{Property, PropertyRange};
use super::trigger::{Anchor, TriggerBounds, Viewport};
use super::TargetId;

/// How a group of elements goes from hidden to visible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealProfile {
    /// `from` is the hidden value, `to` the resting one.
    pub ranges: Vec<PropertyRange>,
    pub duration_ms: f64,
    pub easing: Easing,
    /// Delay between consecutive members of a group.
    pub stagger_ms: f64,
    pub start: Anchor,
    /// Hide again when scrolled back above the start point.
    pub reversible: bool,
}

impl RevealProfile {
    /// Fade in while rising `distance` pixels into place.
    pub fn rise(distance: f64) -> Self {
        Self {
            ranges: vec![
                PropertyRange::new(Property::TranslateY, distance, 0.0),
                PropertyRange::new(Property::Opacity, 0.0, 1.0),
            ],
            duration_ms: 800.0,
            easing: Easing::Power3Out,
            stagger_ms: 0.0,
            start: Anchor::new(0.0, 0.8),
            reversible: true,
        }
    }

    /// Fade in while sliding horizontally from `offset` pixels.
    pub fn slide(offset: f64) -> Self {
        Self {
            ranges: vec![
                PropertyRange::new(Property::TranslateX, offset, 0.0),
                PropertyRange::new(Property::Opacity, 0.0, 1.0),
            ],
            ..Self::rise(0.0)
        }
    }

    pub fn starting_at(mut self, start: Anchor) -> Self {
        self.start = start;
        self
    }

    pub fn staggered(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn lasting(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// What a threshold crossing asks the group to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Play,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing,
    Shown,
    Hiding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
    Paused,
}

/// Members that share one trigger and one timeline. Reversing runs the
/// whole timeline backwards, so the last member to appear hides first.
#[derive(Clone, Debug)]
pub struct RevealGroup {
    profile: RevealProfile,
    bounds: TriggerBounds,
    members: Vec<TargetId>,
    active: bool,
    position_ms: f64,
    direction: Direction,
}

impl RevealGroup {
    pub fn new(profile: RevealProfile, bounds: TriggerBounds, members: Vec<TargetId>) -> Self {
        Self {
            profile,
            bounds,
            members,
            active: false,
            position_ms: 0.0,
            direction: Direction::Paused,
        }
    }

    pub fn members(&self) -> &[TargetId] {
        &self.members
    }

    pub fn profile(&self) -> &RevealProfile {
        &self.profile
    }

    pub fn set_bounds(&mut self, bounds: TriggerBounds) {
        self.bounds = bounds;
    }

    pub fn threshold(&self, viewport: Viewport) -> f64 {
        self.profile.start.scroll_offset(self.bounds, viewport)
    }

    fn total_ms(&self) -> f64 {
        let tail = self.members.len().saturating_sub(1) as f64 * self.profile.stagger_ms;
        self.profile.duration_ms + tail
    }

    /// Compare the scroll offset against the threshold. Returns a toggle only
    /// when the side of the threshold changed since the last call.
    pub fn evaluate(&mut self, scroll_y: f64, viewport: Viewport) -> Option<Toggle> {
        let now_active = scroll_y >= self.threshold(viewport);
        if now_active == self.active {
            return None;
        }
        self.active = now_active;
        if now_active {
            self.direction = Direction::Forward;
            Some(Toggle::Play)
        } else if self.profile.reversible {
            self.direction = Direction::Backward;
            Some(Toggle::Reverse)
        } else {
            None
        }
    }

    /// Move the timeline by `dt_ms`. Returns true when the position changed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let before = self.position_ms;
        match self.direction {
            Direction::Forward => {
                self.position_ms = (self.position_ms + dt_ms).min(self.total_ms());
                if self.position_ms >= self.total_ms() {
                    self.direction = Direction::Paused;
                }
            }
            Direction::Backward => {
                self.position_ms = (self.position_ms - dt_ms).max(0.0);
                if self.position_ms <= 0.0 {
                    self.direction = Direction::Paused;
                }
            }
            Direction::Paused => {}
        }
        self.position_ms != before
    }

    pub fn is_running(&self) -> bool {
        self.direction != Direction::Paused
    }

    pub fn state(&self) -> RevealState {
        match self.direction {
            Direction::Forward => RevealState::Revealing,
            Direction::Backward => RevealState::Hiding,
            Direction::Paused if self.position_ms <= 0.0 => RevealState::Hidden,
            Direction::Paused => RevealState::Shown,
        }
    }

    /// Eased progress of the member at `index` within the group.
    pub fn member_progress(&self, index: usize) -> f64 {
        let offset = index as f64 * self.profile.stagger_ms;
        let local = self.position_ms - offset;
        let linear = if self.profile.duration_ms <= 0.0 {
            if local >= 0.0 && self.position_ms > 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (local / self.profile.duration_ms).clamp(0.0, 1.0)
        };
        self.profile.easing.apply(linear)
    }
}
