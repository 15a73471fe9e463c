use serde::{Deserialize, Serialize};

/// Where a trigger element sits in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerBounds {
    pub top: f64,
    pub height: f64,
}

impl TriggerBounds {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point on the trigger element paired with a point on the viewport,
/// both as fractions from the top. `Anchor::new(0.0, 0.8)` reads
/// "trigger top meets 80% down the viewport".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const TOP_TOP: Anchor = Anchor::new(0.0, 0.0);
    pub const TOP_BOTTOM: Anchor = Anchor::new(0.0, 1.0);
    pub const BOTTOM_TOP: Anchor = Anchor::new(1.0, 0.0);

    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the two points line up.
    pub fn scroll_offset(&self, bounds: TriggerBounds, viewport: Viewport) -> f64 {
        bounds.top + self.element * bounds.height - self.viewport * viewport.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_against_bounds_and_viewport() {
        let bounds = TriggerBounds::new(2000.0, 600.0);
        let viewport = Viewport::new(1280.0, 800.0);
        assert_eq!(Anchor::TOP_TOP.scroll_offset(bounds, viewport), 2000.0);
        assert_eq!(Anchor::BOTTOM_TOP.scroll_offset(bounds, viewport), 2600.0);
        assert_eq!(Anchor::TOP_BOTTOM.scroll_offset(bounds, viewport), 1200.0);
        assert_eq!(Anchor::new(0.0, 0.8).scroll_offset(bounds, viewport), 1360.0);
        assert_eq!(Anchor::new(0.5, 0.0).scroll_offset(bounds, viewport), 2300.0);
    }
}
