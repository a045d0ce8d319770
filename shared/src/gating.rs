use std::collections::HashMap;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::PLAY_DATE_FORMAT;
use crate::error::WheelConfigError;

/// Why a spin request was turned away before the wheel moved.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    Closed { start_hour: u32, end_hour: u32 },
    AlreadyPlayedToday,
}

/// Anything the engine consults before starting a spin.
pub trait SpinGate {
    fn check(&self) -> Result<(), GateRejection>;

    /// Called once a spin has been accepted.
    fn record_spin(&mut self) {}

    fn can_spin_now(&self) -> bool {
        self.check().is_ok()
    }
}

/// Always open. Used by variants without opening hours or a daily limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenGate;

impl SpinGate for OpenGate {
    fn check(&self) -> Result<(), GateRejection> {
        Ok(())
    }
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time of the device.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Durable per-device record of the last day a spin was played.
pub trait PlayLedger {
    fn last_played(&self) -> Option<String>;
    fn record_play(&mut self, date: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    entries: HashMap<String, String>,
    key: String,
}

impl MemoryLedger {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            key: key.into(),
        }
    }
}

impl PlayLedger for MemoryLedger {
    fn last_played(&self) -> Option<String> {
        self.entries.get(&self.key).cloned()
    }

    fn record_play(&mut self, date: &str) {
        self.entries.insert(self.key.clone(), date.to_string());
    }
}

/// Opening window in local hours, start inclusive, end exclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    start_hour: u32,
    end_hour: u32,
}

impl BusinessHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, WheelConfigError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(WheelConfigError::InvalidBusinessHours {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self { start_hour, end_hour })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn is_open_at(&self, now: &NaiveDateTime) -> bool {
        let hour = now.hour();
        hour >= self.start_hour && hour < self.end_hour
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GatingPolicy {
    pub business_hours: Option<BusinessHours>,
    pub daily_limit: bool,
}

impl GatingPolicy {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn evaluate(&self, now: &NaiveDateTime, ledger: &dyn PlayLedger) -> Result<(), GateRejection> {
        if let Some(hours) = self.business_hours {
            if !hours.is_open_at(now) {
                return Err(GateRejection::Closed {
                    start_hour: hours.start_hour,
                    end_hour: hours.end_hour,
                });
            }
        }

        if self.daily_limit {
            let today = play_date(now);
            if ledger.last_played().as_deref() == Some(today.as_str()) {
                return Err(GateRejection::AlreadyPlayedToday);
            }
        }

        Ok(())
    }
}

pub fn play_date(now: &NaiveDateTime) -> String {
    now.format(PLAY_DATE_FORMAT).to_string()
}

/// A policy bound to its clock and ledger.
pub struct KioskGate<C: Clock, L: PlayLedger> {
    policy: GatingPolicy,
    clock: C,
    ledger: L,
}

impl<C: Clock, L: PlayLedger> KioskGate<C, L> {
    pub fn new(policy: GatingPolicy, clock: C, ledger: L) -> Self {
        Self { policy, clock, ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl<C: Clock, L: PlayLedger> SpinGate for KioskGate<C, L> {
    fn check(&self) -> Result<(), GateRejection> {
        self.policy.evaluate(&self.clock.now(), &self.ledger)
    }

    fn record_spin(&mut self) {
        if self.policy.daily_limit {
            let today = play_date(&self.clock.now());
            log::debug!("Recording play for {}", today);
            self.ledger.record_play(&today);
        }
    }
}
