//! Decision logic for the prize wheel kiosk: configuration, the outcome and
//! rotation engine, gating rules, presentation copy and the confetti model.

pub mod constants;
pub mod error;
pub mod gating;
pub mod particles;
pub mod presentation;
pub mod shared_wheel_game;
pub mod variants;
pub mod wheel_config;

pub use error::WheelConfigError;
pub use shared_wheel_game::{FrameUpdate, Outcome, SpinAttempt, SpinPhase, SpinReport, SpinState, WheelEngine};
pub use wheel_config::{OutcomeClass, Segment, WheelConfiguration, WheelSettings};
