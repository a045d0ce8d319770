use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::WheelConfigError;

/// Which side of the draw a segment belongs to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeClass {
    Win,
    Loss,
}

/// One wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub color: String,
    pub outcome_class: OutcomeClass,
}

impl Segment {
    pub fn new(label: impl Into<String>, color: impl Into<String>, outcome_class: OutcomeClass) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            outcome_class,
        }
    }

    pub fn win(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(label, color, OutcomeClass::Win)
    }

    pub fn loss(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(label, color, OutcomeClass::Loss)
    }

    pub fn is_win(&self) -> bool {
        self.outcome_class == OutcomeClass::Win
    }
}

/// Tunable constants that the variants used to disagree on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelSettings {
    pub pointer_angle: f64,
    pub min_spins: u32,
    pub max_spins: u32, // inclusive
    pub jitter_fraction: f64,
    pub spin_duration_ms: f64,
    pub normalize_between_spins: bool,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            pointer_angle: DEFAULT_POINTER_ANGLE,
            min_spins: DEFAULT_MIN_SPINS,
            max_spins: DEFAULT_MAX_SPINS,
            jitter_fraction: DEFAULT_JITTER_FRACTION,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            normalize_between_spins: true,
        }
    }
}

/// Immutable wheel layout and odds.
///
/// Segments are laid out clockwise from angle 0 in insertion order, each
/// spanning `360 / N` degrees. Construction guarantees that every outcome the
/// probability can produce has at least one matching segment.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WheelConfiguration {
    segments: Vec<Segment>,
    win_probability: f64,
    settings: WheelSettings,
}

impl WheelConfiguration {
    pub fn new(
        segments: Vec<Segment>,
        win_probability: f64,
        settings: WheelSettings,
    ) -> Result<Self, WheelConfigError> {
        if segments.len() < MIN_SEGMENTS {
            return Err(WheelConfigError::TooFewSegments(segments.len()));
        }
        if !(0.0..=1.0).contains(&win_probability) {
            // NaN fails `contains` as well
            return Err(WheelConfigError::InvalidProbability(win_probability));
        }

        let has = |class: OutcomeClass| segments.iter().any(|s| s.outcome_class == class);
        if win_probability > 0.0 && !has(OutcomeClass::Win) {
            return Err(WheelConfigError::MissingOutcomeClass {
                missing: OutcomeClass::Win,
                probability: win_probability,
            });
        }
        if win_probability < 1.0 && !has(OutcomeClass::Loss) {
            return Err(WheelConfigError::MissingOutcomeClass {
                missing: OutcomeClass::Loss,
                probability: win_probability,
            });
        }

        if !settings.pointer_angle.is_finite() {
            return Err(WheelConfigError::InvalidPointerAngle(settings.pointer_angle));
        }
        if settings.min_spins < MIN_ALLOWED_SPINS || settings.min_spins > settings.max_spins {
            return Err(WheelConfigError::InvalidSpinRange {
                min: settings.min_spins,
                max: settings.max_spins,
                floor: MIN_ALLOWED_SPINS,
            });
        }
        if !(settings.spin_duration_ms > 0.0) || !settings.spin_duration_ms.is_finite() {
            return Err(WheelConfigError::InvalidDuration(settings.spin_duration_ms));
        }
        if !(0.0..1.0).contains(&settings.jitter_fraction) {
            return Err(WheelConfigError::InvalidJitter(settings.jitter_fraction));
        }

        log::debug!(
            "Wheel configuration accepted: {} segments, win probability {}",
            segments.len(),
            win_probability
        );

        Ok(Self {
            segments,
            win_probability,
            settings,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn win_probability(&self) -> f64 {
        self.win_probability
    }

    pub fn pointer_angle(&self) -> f64 {
        self.settings.pointer_angle
    }

    pub fn settings(&self) -> &WheelSettings {
        &self.settings
    }

    /// Angular span of one segment in degrees.
    pub fn segment_angle(&self) -> f64 {
        FULL_TURN / self.segments.len() as f64
    }

    /// Midpoint of a segment in the unrotated wheel frame.
    pub fn segment_center(&self, index: usize) -> f64 {
        let angle = self.segment_angle();
        index as f64 * angle + angle / 2.0
    }

    /// Indices of the segments belonging to `class`, in angular order.
    pub fn indices_of(&self, class: OutcomeClass) -> Vec<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.outcome_class == class)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Reduces any angle to `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if reduced >= FULL_TURN {
        0.0
    } else {
        reduced
    }
}

/// Index of the segment sitting under the pointer once the wheel has turned
/// by `rotation` degrees.
pub fn segment_at_pointer(config: &WheelConfiguration, rotation: f64) -> usize {
    let wheel_angle = normalize_angle(config.pointer_angle() - rotation);
    let index = (wheel_angle / config.segment_angle()).floor() as usize;
    index.min(config.segment_count() - 1)
}
