//! Rover height value and the button-driven adjustments applied to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::TelemetryError;

/// Height in meters. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Height(f64);

impl Height {
    /// Increment applied by a single button press.
    pub const DEFAULT_STEP: f64 = 0.5;

    /// Ground level.
    pub const ZERO: Height = Height(0.0);

    /// Creates a height, clamping negative (and NaN) values to zero.
    pub fn clamped(meters: f64) -> Self {
        if meters.is_nan() || meters < 0.0 {
            Self::ZERO
        } else {
            Self(meters)
        }
    }

    /// Height in meters.
    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Applies an adjustment of `step` meters, never going below zero.
    pub fn adjusted(self, adjustment: HeightAdjustment, step: f64) -> Self {
        match adjustment {
            HeightAdjustment::Increase => Self::clamped(self.0 + step),
            HeightAdjustment::Decrease => Self::clamped(self.0 - step),
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction requested by a `button_press` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightAdjustment {
    Increase,
    Decrease,
}

impl FromStr for HeightAdjustment {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase_height" => Ok(HeightAdjustment::Increase),
            "decrease_height" => Ok(HeightAdjustment::Decrease),
            other => Err(TelemetryError::UnknownAdjustment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn two_increases_add_one_meter() {
        let height = Height::ZERO
            .adjusted(HeightAdjustment::Increase, Height::DEFAULT_STEP)
            .adjusted(HeightAdjustment::Increase, Height::DEFAULT_STEP);
        assert_eq!(height.meters(), 1.0);
    }

    #[test]
    fn decrease_at_ground_stays_at_zero() {
        let height = Height::ZERO.adjusted(HeightAdjustment::Decrease, Height::DEFAULT_STEP);
        assert_eq!(height, Height::ZERO);
    }

    #[test]
    fn decrease_below_step_clamps_to_zero() {
        let height = Height::clamped(0.2).adjusted(HeightAdjustment::Decrease, 0.5);
        assert_eq!(height.meters(), 0.0);
    }

    #[test]
    fn clamped_rejects_nan() {
        assert_eq!(Height::clamped(f64::NAN), Height::ZERO);
    }

    #[test]
    fn parses_button_literals() {
        assert_eq!(
            "increase_height".parse::<HeightAdjustment>().unwrap(),
            HeightAdjustment::Increase
        );
        assert_eq!(
            "decrease_height".parse::<HeightAdjustment>().unwrap(),
            HeightAdjustment::Decrease
        );
        assert!("jump".parse::<HeightAdjustment>().is_err());
    }

    proptest! {
        #[test]
        fn adjustments_never_go_below_zero(
            start in 0.0f64..100.0,
            presses in prop::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut height = Height::clamped(start);
            for increase in presses {
                let adjustment = if increase {
                    HeightAdjustment::Increase
                } else {
                    HeightAdjustment::Decrease
                };
                height = height.adjusted(adjustment, Height::DEFAULT_STEP);
                prop_assert!(height.meters() >= 0.0);
            }
        }
    }
}
