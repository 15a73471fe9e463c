use serde::{Deserialize, Serialize};

/// Timing curves used by reveals and entrances. Scrubs are always linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Quartic ease-out.
    Power3Out,
    /// Quintic ease-out, used for the hero entrance.
    Power4Out,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power4Out => 1.0 - (1.0 - t).powi(5),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Power3Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::Power3Out, Easing::Power4Out];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_curves_front_load_the_motion() {
        assert!(Easing::Power3Out.apply(0.25) > 0.25);
        assert!(Easing::Power4Out.apply(0.25) > Easing::Power3Out.apply(0.25));
    }

    proptest! {
        #[test]
        fn curves_are_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in ALL {
                prop_assert!(easing.apply(lo) <= easing.apply(hi));
            }
        }

        #[test]
        fn input_outside_unit_range_is_clamped(t in -10.0f64..10.0) {
            for easing in ALL {
                let v = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
