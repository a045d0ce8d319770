use thiserror::Error;

use crate::wheel_config::OutcomeClass;

/// Reasons a wheel configuration is refused at load time.
///
/// None of these can surface during a spin: a configuration that builds
/// successfully always yields a target segment for every outcome it can draw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelConfigError {
    #[error("a wheel needs at least 2 segments, got {0}")]
    TooFewSegments(usize),

    #[error("win probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("win probability {probability} can draw {missing:?} but no segment has that class")]
    MissingOutcomeClass {
        missing: OutcomeClass,
        probability: f64,
    },

    #[error("pointer angle must be finite, got {0}")]
    InvalidPointerAngle(f64),

    #[error("spin range {min}..={max} is invalid (minimum is {floor} full turns)")]
    InvalidSpinRange { min: u32, max: u32, floor: u32 },

    #[error("spin duration must be positive, got {0}ms")]
    InvalidDuration(f64),

    #[error("jitter fraction must lie in [0, 1), got {0}")]
    InvalidJitter(f64),

    #[error("business hours {start}h-{end}h are invalid")]
    InvalidBusinessHours { start: u32, end: u32 },
}
