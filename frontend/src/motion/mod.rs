//! Scroll-driven and mount-driven animation.
//!
//! Pages describe what moves with a [`MotionPlan`]. [`use_motion`] turns the
//! plan into a [`scope::MotionScope`] when the page mounts and drops it when the
//! page goes away. All timing and interpolation lives in [`scene::MotionScene`],
//! which never touches the DOM.

pub mod easing;
pub mod entrance;
pub mod plan;
pub mod reveal;
pub mod scene;
pub mod scope;
pub mod scrub;
pub mod style;
pub mod trigger;

use thiserror::Error;

pub use entrance::EntranceSpec;
pub use plan::MotionPlan;
pub use reveal::RevealProfile;
pub use scope::use_motion;
pub use scrub::ScrubSpec;
pub use style::{ClipEllipse, Property, PropertyRange};
pub use trigger::Anchor;

/// Index of an animated element inside a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(usize);

impl TargetId {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no window available")]
    NoWindow,
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
    #[error("could not register `{0}` listener")]
    Listener(&'static str),
}
