use serde::{Deserialize, Serialize};

use super::entrance::EntranceSpec;
use super::reveal::RevealProfile;
use super::scrub::ScrubSpec;

/// One declarative binding. Selectors are resolved inside the page root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MotionSpec {
    /// Each match is its own trigger.
    RevealEach { selector: String, profile: RevealProfile },
    /// All matches reveal together, staggered, when `trigger` crosses.
    RevealGroup {
        trigger: String,
        selector: String,
        profile: RevealProfile,
    },
    Scrub {
        target: String,
        trigger: String,
        spec: ScrubSpec,
    },
    Entrance { selector: String, spec: EntranceSpec },
}

/// What animates on a page, as plain data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionPlan {
    pub specs: Vec<MotionSpec>,
}

impl MotionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal_each(mut self, selector: impl Into<String>, profile: RevealProfile) -> Self {
        self.specs.push(MotionSpec::RevealEach {
            selector: selector.into(),
            profile,
        });
        self
    }

    pub fn reveal_group(
        mut self,
        trigger: impl Into<String>,
        selector: impl Into<String>,
        profile: RevealProfile,
    ) -> Self {
        self.specs.push(MotionSpec::RevealGroup {
            trigger: trigger.into(),
            selector: selector.into(),
            profile,
        });
        self
    }

    pub fn scrub(mut self, target: impl Into<String>, trigger: impl Into<String>, spec: ScrubSpec) -> Self {
        self.specs.push(MotionSpec::Scrub {
            target: target.into(),
            trigger: trigger.into(),
            spec,
        });
        self
    }

    pub fn entrance(mut self, selector: impl Into<String>, spec: EntranceSpec) -> Self {
        self.specs.push(MotionSpec::Entrance {
            selector: selector.into(),
            spec,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{Property, PropertyRange};
    use crate::motion::trigger::Anchor;

    #[test]
    fn builder_keeps_declaration_order() {
        let plan = MotionPlan::new()
            .entrance(
                ".word",
                EntranceSpec::new(vec![PropertyRange::new(Property::Opacity, 0.0, 1.0)], 1200.0),
            )
            .reveal_each(".reveal-section", RevealProfile::rise(60.0));
        assert!(matches!(plan.specs[0], MotionSpec::Entrance { .. }));
        assert!(matches!(
            &plan.specs[1],
            MotionSpec::RevealEach { selector, .. } if selector == ".reveal-section"
        ));
    }

    #[test]
    fn plans_can_be_authored_as_json() {
        let json = r#"{
            "specs": [{
                "Scrub": {
                    "target": ".hero-image",
                    "trigger": ".hero",
                    "spec": {
                        "start": { "element": 0.0, "viewport": 0.0 },
                        "end": { "element": 1.0, "viewport": 0.0 },
                        "ranges": [{ "property": "TranslateY", "from": 0.0, "to": 150.0 }],
                        "mode": "Exact"
                    }
                }
            }]
        }"#;
        let plan: MotionPlan = serde_json::from_str(json).expect("valid plan");
        let expected = MotionPlan::new().scrub(
            ".hero-image",
            ".hero",
            ScrubSpec::new(
                Anchor::TOP_TOP,
                Anchor::BOTTOM_TOP,
                vec![PropertyRange::new(Property::TranslateY, 0.0, 150.0)],
            ),
        );
        assert_eq!(plan, expected);
    }
}
