use serde::{Deserialize, Serialize};

use super::trigger::TriggerBounds;

/// Inline style properties the engine is allowed to touch. None of them
/// affect layout, so writing them every frame never forces a reflow.
pub const ANIMATED_PROPERTIES: [&str; 4] = ["transform", "opacity", "filter", "clip-path"];

/// A single animatable scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    TranslateX,
    TranslateY,
    Scale,
    ScaleY,
    Opacity,
    Blur,
    ClipRadiusX,
    ClipRadiusY,
    ClipCenterX,
    ClipCenterY,
}

/// `ellipse(rx ry at cx cy)` with every component in percent.
/// A circle is an ellipse with equal radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipEllipse {
    pub rx: f64,
    pub ry: f64,
    pub cx: f64,
    pub cy: f64,
}

impl ClipEllipse {
    pub const fn circle(r: f64, cx: f64, cy: f64) -> Self {
        Self { rx: r, ry: r, cx, cy }
    }

    pub const fn ellipse(rx: f64, ry: f64, cx: f64, cy: f64) -> Self {
        Self { rx, ry, cx, cy }
    }
}

impl Default for ClipEllipse {
    fn default() -> Self {
        Self::ellipse(100.0, 100.0, 50.0, 50.0)
    }
}

/// The composed presentation state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualStyle {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub scale_y: f64,
    pub opacity: f64,
    pub blur: f64,
    pub clip: Option<ClipEllipse>,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            blur: 0.0,
            clip: None,
        }
    }
}

impl VisualStyle {
    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::TranslateX => self.translate_x = value,
            Property::TranslateY => self.translate_y = value,
            Property::Scale => self.scale = value,
            Property::ScaleY => self.scale_y = value,
            Property::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Property::Blur => self.blur = value.max(0.0),
            Property::ClipRadiusX => self.clip.get_or_insert_with(Default::default).rx = value,
            Property::ClipRadiusY => self.clip.get_or_insert_with(Default::default).ry = value,
            Property::ClipCenterX => self.clip.get_or_insert_with(Default::default).cx = value,
            Property::ClipCenterY => self.clip.get_or_insert_with(Default::default).cy = value,
        }
    }

    /// Undoes this style's vertical transform on a box measured while the
    /// style was applied, giving the box layout placed it in. Transforms
    /// pivot on the element's centre. A fully collapsed vertical scale
    /// can't be inverted, so only the translation is taken out then.
    pub fn layout_bounds(&self, measured: TriggerBounds) -> TriggerBounds {
        let factor = (self.scale * self.scale_y).abs();
        if factor < 1e-6 {
            return TriggerBounds::new(measured.top - self.translate_y, measured.height);
        }
        let height = measured.height / factor;
        let centre = measured.top + measured.height / 2.0 - self.translate_y;
        TriggerBounds::new(centre - height / 2.0, height)
    }

    /// CSS declarations for this state, restricted to [`ANIMATED_PROPERTIES`].
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            (
                "transform",
                format!(
                    "translate3d({}px, {}px, 0px) scale({}, {})",
                    num(self.translate_x),
                    num(self.translate_y),
                    num(self.scale),
                    num(self.scale * self.scale_y),
                ),
            ),
            ("opacity", num(self.opacity)),
            (
                "filter",
                if self.blur > 0.0 {
                    format!("blur({}px)", num(self.blur))
                } else {
                    "none".to_string()
                },
            ),
        ];
        if let Some(clip) = self.clip {
            out.push((
                "clip-path",
                format!(
                    "ellipse({}% {}% at {}% {}%)",
                    num(clip.rx),
                    num(clip.ry),
                    num(clip.cx),
                    num(clip.cy)
                ),
            ));
        }
        out
    }
}

fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // avoid "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// One property animated between two values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyRange {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

impl PropertyRange {
    pub const fn new(property: Property, from: f64, to: f64) -> Self {
        Self { property, from, to }
    }

    pub fn sample(&self, t: f64) -> f64 {
        self.from + t * (self.to - self.from)
    }

    /// The four ranges that morph one clip ellipse into another.
    pub fn clip_morph(from: ClipEllipse, to: ClipEllipse) -> [PropertyRange; 4] {
        [
            Self::new(Property::ClipRadiusX, from.rx, to.rx),
            Self::new(Property::ClipRadiusY, from.ry, to.ry),
            Self::new(Property::ClipCenterX, from.cx, to.cx),
            Self::new(Property::ClipCenterY, from.cy, to.cy),
        ]
    }
}

pub fn apply_ranges(style: &mut VisualStyle, ranges: &[PropertyRange], t: f64) {
    for range in ranges {
        style.set(range.property, range.sample(t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_style_renders_neutral_values() {
        let decls = VisualStyle::default().declarations();
        assert_eq!(
            decls,
            vec![
                ("transform", "translate3d(0px, 0px, 0px) scale(1, 1)".to_string()),
                ("opacity", "1".to_string()),
                ("filter", "none".to_string()),
            ]
        );
    }

    #[test]
    fn declarations_never_touch_layout_properties() {
        let mut style = VisualStyle::default();
        style.set(Property::TranslateY, 60.0);
        style.set(Property::Blur, 10.0);
        style.set(Property::ClipRadiusX, 75.0);
        for (name, _) in style.declarations() {
            assert!(ANIMATED_PROPERTIES.contains(&name), "unexpected property {name}");
        }
    }

    #[test]
    fn clip_morph_renders_an_ellipse() {
        let mut style = VisualStyle::default();
        let ranges = PropertyRange::clip_morph(
            ClipEllipse::circle(0.0, 50.0, 50.0),
            ClipEllipse::ellipse(75.0, 90.0, 60.0, 50.0),
        );
        apply_ranges(&mut style, &ranges, 1.0);
        let clip = style
            .declarations()
            .into_iter()
            .find(|(name, _)| *name == "clip-path")
            .map(|(_, value)| value);
        assert_eq!(clip.as_deref(), Some("ellipse(75% 90% at 60% 50%)"));
    }

    #[test]
    fn layout_bounds_take_out_translation_and_scale() {
        let mut style = VisualStyle::default();
        style.set(Property::TranslateY, 60.0);
        assert_eq!(
            style.layout_bounds(TriggerBounds::new(1060.0, 400.0)),
            TriggerBounds::new(1000.0, 400.0)
        );

        // scaled to half height about the centre, then pushed down 20px
        style.set(Property::TranslateY, 20.0);
        style.set(Property::ScaleY, 0.5);
        assert_eq!(
            style.layout_bounds(TriggerBounds::new(1120.0, 200.0)),
            TriggerBounds::new(1000.0, 400.0)
        );

        assert_eq!(
            VisualStyle::default().layout_bounds(TriggerBounds::new(300.0, 50.0)),
            TriggerBounds::new(300.0, 50.0)
        );
    }

    #[test]
    fn opacity_and_blur_are_kept_in_range() {
        let mut style = VisualStyle::default();
        style.set(Property::Opacity, 1.4);
        style.set(Property::Blur, -2.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.blur, 0.0);
    }

    #[test]
    fn scale_y_multiplies_the_vertical_scale() {
        let mut style = VisualStyle::default();
        style.set(Property::Scale, 2.0);
        style.set(Property::ScaleY, 0.25);
        assert_eq!(style.declarations()[0].1, "translate3d(0px, 0px, 0px) scale(2, 0.5)");
    }
}
