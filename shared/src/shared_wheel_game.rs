use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_TURN;
use crate::gating::{GateRejection, SpinGate};
use crate::wheel_config::{normalize_angle, OutcomeClass, Segment, WheelConfiguration};

/// The binary result of the weighted draw, decided before the wheel moves.
pub type Outcome = OutcomeClass;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Everything decided when a spin is accepted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub outcome: Outcome,
    pub segment_index: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
}

/// Handed to the presentation layer when the wheel comes to rest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinReport {
    pub outcome: Outcome,
    pub segment_index: usize,
    pub segment: Segment,
    pub final_rotation: f64,
}

impl SpinReport {
    pub fn is_win(&self) -> bool {
        self.outcome == OutcomeClass::Win
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinAttempt {
    Started(SpinPlan),
    /// Request arrived mid-spin and was dropped.
    AlreadySpinning,
    Rejected(GateRejection),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameUpdate {
    Idle { rotation: f64 },
    Rotating { rotation: f64, progress: f64 },
    Finished(SpinReport),
}

/// Mutable state of the single wheel. Rotations are in degrees and are not
/// reduced modulo 360 while a spin is in flight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinState {
    pub phase: SpinPhase,
    pub current_rotation: f64,
    pub target_rotation: f64,
    pub spin_start_ms: f64,
    pub spin_duration_ms: f64,
    pub plan: Option<SpinPlan>,
}

impl SpinState {
    pub fn new(initial_rotation: f64) -> Self {
        Self {
            phase: SpinPhase::Idle,
            current_rotation: initial_rotation,
            target_rotation: initial_rotation,
            spin_start_ms: 0.0,
            spin_duration_ms: 0.0,
            plan: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Fraction of the active spin elapsed at `now_ms`, clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if !self.is_spinning() {
            return 1.0;
        }
        let elapsed = (now_ms - self.spin_start_ms).max(0.0);
        (elapsed / self.spin_duration_ms).min(1.0)
    }

    pub fn display_rotation(&self, now_ms: f64) -> f64 {
        match self.phase {
            SpinPhase::Idle => self.current_rotation,
            SpinPhase::Spinning => eased_rotation(
                self.current_rotation,
                self.target_rotation,
                self.progress(now_ms),
            ),
        }
    }
}

impl Default for SpinState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Quartic ease-out: zero slope at `t = 1`.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Rotation shown at `progress` between `start` and `target`. The end points
/// are returned exactly rather than through the interpolation.
pub fn eased_rotation(start: f64, target: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return start;
    }
    if progress >= 1.0 {
        return target;
    }
    start + (target - start) * ease_out_quart(progress)
}

pub fn decide_outcome<R: Rng + ?Sized>(config: &WheelConfiguration, rng: &mut R) -> Outcome {
    let roll: f64 = rng.gen();
    if roll < config.win_probability() {
        OutcomeClass::Win
    } else {
        OutcomeClass::Loss
    }
}

/// Picks uniformly among the segments of the decided class.
///
/// # Panics
///
/// If the configuration has no segment of `outcome`'s class, which
/// `WheelConfiguration::new` rules out for every outcome `decide_outcome` can return.
pub fn select_target_segment<R: Rng + ?Sized>(
    config: &WheelConfiguration,
    outcome: Outcome,
    rng: &mut R,
) -> usize {
    let candidates = config.indices_of(outcome);
    candidates[rng.gen_range(0..candidates.len())]
}

/// Rotation at which `segment_index` comes to rest under the pointer, at least
/// `min_spins` full turns ahead of `current_rotation`.
///
/// The alignment is taken against the wheel's present orientation, so the
/// result holds whether or not `current_rotation` was normalized after the
/// previous spin.
pub fn compute_target_rotation<R: Rng + ?Sized>(
    config: &WheelConfiguration,
    segment_index: usize,
    current_rotation: f64,
    rng: &mut R,
) -> f64 {
    let settings = config.settings();
    let segment_center = config.segment_center(segment_index);
    let alignment_offset =
        normalize_angle(config.pointer_angle() - segment_center - current_rotation);

    let max_jitter = settings.jitter_fraction * config.segment_angle() / 2.0;
    let jitter = if max_jitter > 0.0 {
        rng.gen_range(-max_jitter..=max_jitter)
    } else {
        0.0
    };

    // Folding the jitter back into [0, 360) keeps every turn counted in `spins` intact
    let landing = normalize_angle(alignment_offset + jitter);
    let spins = rng.gen_range(settings.min_spins..=settings.max_spins);

    current_rotation + f64::from(spins) * FULL_TURN + landing
}

/// Owns the configuration, the spin state and the random source.
pub struct WheelEngine<R: Rng> {
    config: WheelConfiguration,
    state: SpinState,
    rng: R,
}

impl<R: Rng> WheelEngine<R> {
    pub fn new(config: WheelConfiguration, rng: R) -> Self {
        Self {
            config,
            state: SpinState::default(),
            rng,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.state = SpinState::new(rotation);
        self
    }

    pub fn config(&self) -> &WheelConfiguration {
        &self.config
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    pub fn current_display_rotation(&self, now_ms: f64) -> f64 {
        self.state.display_rotation(now_ms)
    }

    /// Decides the outcome and installs the spin, or explains why it did not.
    ///
    /// A request while spinning is dropped without consulting the gate.
    pub fn request_spin(&mut self, gate: &mut dyn SpinGate, now_ms: f64) -> SpinAttempt {
        if self.state.is_spinning() {
            log::debug!("Spin request ignored: wheel already spinning");
            return SpinAttempt::AlreadySpinning;
        }

        if let Err(rejection) = gate.check() {
            log::info!("Spin request rejected: {:?}", rejection);
            return SpinAttempt::Rejected(rejection);
        }

        let outcome = decide_outcome(&self.config, &mut self.rng);
        let segment_index = select_target_segment(&self.config, outcome, &mut self.rng);
        let start_rotation = self.state.current_rotation;
        let target_rotation =
            compute_target_rotation(&self.config, segment_index, start_rotation, &mut self.rng);

        let plan = SpinPlan {
            outcome,
            segment_index,
            start_rotation,
            target_rotation,
        };

        self.state = SpinState {
            phase: SpinPhase::Spinning,
            current_rotation: start_rotation,
            target_rotation,
            spin_start_ms: now_ms,
            spin_duration_ms: self.config.settings().spin_duration_ms,
            plan: Some(plan),
        };
        gate.record_spin();

        log::info!(
            "Spin started: {:?} on segment {} ({:.1}° -> {:.1}°)",
            outcome,
            segment_index,
            start_rotation,
            target_rotation
        );

        SpinAttempt::Started(plan)
    }

    /// Advances the animation to `now_ms`. Returns `Finished` exactly once per
    /// spin, on the first frame at or past the spin duration.
    pub fn advance(&mut self, now_ms: f64) -> FrameUpdate {
        if !self.state.is_spinning() {
            return FrameUpdate::Idle {
                rotation: self.state.current_rotation,
            };
        }

        let progress = self.state.progress(now_ms);
        if progress < 1.0 {
            return FrameUpdate::Rotating {
                rotation: self.state.display_rotation(now_ms),
                progress,
            };
        }

        self.finish()
    }

    fn finish(&mut self) -> FrameUpdate {
        let final_rotation = self.state.target_rotation;
        let rest = if self.config.settings().normalize_between_spins {
            normalize_angle(final_rotation)
        } else {
            final_rotation
        };

        let plan = self.state.plan.take();
        self.state = SpinState::new(rest);

        match plan {
            Some(plan) => {
                let segment = self.config.segments()[plan.segment_index].clone();
                log::info!("Spin finished: {:?} ({})", plan.outcome, segment.label);
                FrameUpdate::Finished(SpinReport {
                    outcome: plan.outcome,
                    segment_index: plan.segment_index,
                    segment,
                    final_rotation,
                })
            }
            None => FrameUpdate::Idle { rotation: rest },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gating::{
        BusinessHours, FixedClock, GatingPolicy, KioskGate, MemoryLedger, OpenGate, PlayLedger,
    };
    use crate::wheel_config::{segment_at_pointer, WheelSettings};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn alternating(n: usize) -> Vec<Segment> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Segment::win("GAGNÉ !", "#00ff88")
                } else {
                    Segment::loss("PERDU", "#ff0066")
                }
            })
            .collect()
    }

    fn config(p: f64, settings: WheelSettings) -> WheelConfiguration {
        WheelConfiguration::new(alternating(4), p, settings).unwrap()
    }

    fn engine(p: f64, seed: u64) -> WheelEngine<StdRng> {
        WheelEngine::new(config(p, WheelSettings::default()), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_forced_win_picks_both_win_segments_evenly() {
        let config = config(1.0, WheelSettings::default());
        let mut rng = StdRng::seed_from_u64(7);
        let mut first = 0;
        let runs = 10_000;
        for _ in 0..runs {
            let outcome = decide_outcome(&config, &mut rng);
            assert_eq!(outcome, OutcomeClass::Win);
            let index = select_target_segment(&config, outcome, &mut rng);
            assert!(index == 0 || index == 2);
            if index == 0 {
                first += 1;
            }
        }
        let share = first as f64 / runs as f64;
        assert!((0.45..0.55).contains(&share), "share of segment 0 was {share}");
    }

    #[test]
    fn test_never_win_at_zero_probability() {
        let config = config(0.0, WheelSettings::default());
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..1000).all(|_| decide_outcome(&config, &mut rng) == OutcomeClass::Loss));
    }

    #[test]
    fn test_win_rate_converges() {
        let config = config(0.05, WheelSettings::default());
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 100_000;
        let wins = (0..trials)
            .filter(|_| decide_outcome(&config, &mut rng) == OutcomeClass::Win)
            .count();
        let rate = wins as f64 / trials as f64;
        assert!((rate - 0.05).abs() < 0.01, "observed win rate {rate}");
    }

    #[test]
    fn test_target_rotation_worked_example() {
        let settings = WheelSettings {
            pointer_angle: 0.0,
            min_spins: 8,
            max_spins: 8,
            jitter_fraction: 0.0,
            ..Default::default()
        };
        let config = config(0.5, settings);
        let mut rng = StdRng::seed_from_u64(3);
        let target = compute_target_rotation(&config, 1, 0.0, &mut rng);
        assert_eq!(target, 2880.0 + 225.0);
        assert_eq!(segment_at_pointer(&config, target), 1);
    }

    #[test]
    fn test_target_rotation_jitter_stays_inside_segment() {
        let settings = WheelSettings {
            pointer_angle: 0.0,
            min_spins: 8,
            max_spins: 8,
            ..Default::default()
        };
        let config = config(0.5, settings);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            let target = compute_target_rotation(&config, 1, 0.0, &mut rng);
            assert!((target - 3105.0).abs() <= 0.4 * 45.0);
        }
    }

    #[test]
    fn test_alignment_accounts_for_unnormalized_start() {
        let settings = WheelSettings { normalize_between_spins: false, ..Default::default() };
        let config = config(0.5, settings);
        let mut rng = StdRng::seed_from_u64(5);
        let mut current = 0.0;
        for _ in 0..50 {
            let index = rng.gen_range(0..4);
            let target = compute_target_rotation(&config, index, current, &mut rng);
            assert!(target - current >= 8.0 * FULL_TURN);
            assert_eq!(segment_at_pointer(&config, target), index);
            current = target;
        }
    }

    #[test]
    fn test_easing_boundaries() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(eased_rotation(12.5, 3117.3, 0.0), 12.5);
        assert_eq!(eased_rotation(12.5, 3117.3, 1.0), 3117.3);
        assert_eq!(eased_rotation(12.5, 3117.3, 1.7), 3117.3);
        // Halfway through time is well past halfway through the distance
        assert!(eased_rotation(0.0, 100.0, 0.5) > 90.0);
    }

    #[test]
    fn test_full_spin_cycle() {
        let mut engine = engine(0.5, 11);
        let mut gate = OpenGate;
        assert_eq!(engine.advance(0.0), FrameUpdate::Idle { rotation: 0.0 });

        let plan = match engine.request_spin(&mut gate, 1000.0) {
            SpinAttempt::Started(plan) => plan,
            other => panic!("expected a started spin, got {other:?}"),
        };
        assert!(engine.is_spinning());
        assert_eq!(engine.current_display_rotation(1000.0), 0.0);

        match engine.advance(3500.0) {
            FrameUpdate::Rotating { rotation, progress } => {
                assert_eq!(progress, 0.5);
                assert!(rotation > 0.0 && rotation < plan.target_rotation);
            }
            other => panic!("expected rotation, got {other:?}"),
        }

        let report = match engine.advance(6000.0) {
            FrameUpdate::Finished(report) => report,
            other => panic!("expected finish, got {other:?}"),
        };
        assert_eq!(report.outcome, plan.outcome);
        assert_eq!(report.segment_index, plan.segment_index);
        assert_eq!(report.segment.outcome_class, plan.outcome);
        assert_eq!(report.final_rotation, plan.target_rotation);

        assert!(!engine.is_spinning());
        let rest = engine.state().current_rotation;
        assert!((0.0..360.0).contains(&rest));
        assert_eq!(segment_at_pointer(engine.config(), rest), plan.segment_index);

        // Finished is reported once
        assert_eq!(engine.advance(7000.0), FrameUpdate::Idle { rotation: rest });
    }

    fn run_chained_spins(normalize: bool, seed: u64) {
        let settings = WheelSettings { normalize_between_spins: normalize, ..Default::default() };
        let config = WheelConfiguration::new(alternating(7), 0.5, settings).unwrap();
        let duration = config.settings().spin_duration_ms;
        let mut engine = WheelEngine::new(config, StdRng::seed_from_u64(seed));
        let mut gate = OpenGate;
        let mut now = 0.0;

        for _ in 0..500 {
            let before = engine.state().current_rotation;
            let plan = match engine.request_spin(&mut gate, now) {
                SpinAttempt::Started(plan) => plan,
                other => panic!("expected a started spin, got {other:?}"),
            };
            now += duration;
            let report = match engine.advance(now) {
                FrameUpdate::Finished(report) => report,
                other => panic!("expected finish, got {other:?}"),
            };
            now += 1.0;

            assert!(report.final_rotation - before >= 8.0 * FULL_TURN - 1e-6);
            assert_eq!(report.segment_index, plan.segment_index);
            assert_eq!(report.segment.outcome_class, report.outcome);
            assert_eq!(segment_at_pointer(engine.config(), report.final_rotation), report.segment_index);

            let rest = engine.state().current_rotation;
            if normalize {
                assert!((0.0..FULL_TURN).contains(&rest));
            } else {
                assert_eq!(rest, report.final_rotation);
            }
            assert_eq!(segment_at_pointer(engine.config(), rest), report.segment_index);
        }
    }

    #[test]
    fn test_chained_spins_with_normalized_rest() {
        run_chained_spins(true, 21);
    }

    #[test]
    fn test_chained_spins_keep_unbounded_rest() {
        run_chained_spins(false, 22);
    }

    #[test]
    fn test_second_request_while_spinning_is_dropped() {
        let mut engine = engine(0.5, 12);
        let mut gate = OpenGate;
        let first = engine.request_spin(&mut gate, 0.0);
        let snapshot = engine.state().clone();
        let second = engine.request_spin(&mut gate, 0.0);

        assert!(matches!(first, SpinAttempt::Started(_)));
        assert_eq!(second, SpinAttempt::AlreadySpinning);
        assert_eq!(engine.state(), &snapshot);
    }

    #[test]
    fn test_closed_gate_leaves_engine_idle() {
        let policy = GatingPolicy {
            business_hours: Some(BusinessHours::new(7, 20).unwrap()),
            daily_limit: true,
        };
        let late = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap().and_hms_opt(21, 0, 0).unwrap();
        let mut gate = KioskGate::new(policy, FixedClock(late), MemoryLedger::new("k"));
        let mut engine = engine(0.5, 13);

        let attempt = engine.request_spin(&mut gate, 0.0);
        assert_eq!(
            attempt,
            SpinAttempt::Rejected(GateRejection::Closed { start_hour: 7, end_hour: 20 })
        );
        assert_eq!(engine.state(), &SpinState::default());
        assert_eq!(gate.ledger().last_played(), None);
    }

    #[test]
    fn test_daily_gate_allows_one_spin() {
        let policy = GatingPolicy { business_hours: None, daily_limit: true };
        let noon = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let mut gate = KioskGate::new(policy, FixedClock(noon), MemoryLedger::new("k"));
        let mut engine = engine(0.5, 14);

        assert!(matches!(engine.request_spin(&mut gate, 0.0), SpinAttempt::Started(_)));
        assert!(matches!(engine.advance(10_000.0), FrameUpdate::Finished(_)));
        assert_eq!(
            engine.request_spin(&mut gate, 10_001.0),
            SpinAttempt::Rejected(GateRejection::AlreadyPlayedToday)
        );
    }

    fn layout() -> impl Strategy<Value = Vec<OutcomeClass>> {
        prop::collection::vec(prop::bool::ANY, 2..16).prop_filter_map("needs both classes", |flags| {
            let classes: Vec<OutcomeClass> = flags
                .into_iter()
                .map(|win| if win { OutcomeClass::Win } else { OutcomeClass::Loss })
                .collect();
            let wins = classes.iter().filter(|c| **c == OutcomeClass::Win).count();
            (wins > 0 && wins < classes.len()).then_some(classes)
        })
    }

    proptest! {
        #[test]
        fn prop_pointer_reads_decided_outcome(
            classes in layout(),
            p in 0.0f64..=1.0,
            pointer in -720.0f64..720.0,
            current in 0.0f64..100_000.0,
            jitter in 0.0f64..0.9,
            seed in any::<u64>(),
        ) {
            let segments = classes
                .iter()
                .map(|c| Segment::new("x", "#000", *c))
                .collect();
            let settings = WheelSettings {
                pointer_angle: pointer,
                jitter_fraction: jitter,
                min_spins: 5,
                max_spins: 12,
                ..Default::default()
            };
            let config = WheelConfiguration::new(segments, p, settings).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);

            let outcome = decide_outcome(&config, &mut rng);
            let index = select_target_segment(&config, outcome, &mut rng);
            let target = compute_target_rotation(&config, index, current, &mut rng);

            prop_assert!(target > current);
            prop_assert!(target - current >= 5.0 * FULL_TURN);
            let landed = segment_at_pointer(&config, target);
            prop_assert_eq!(landed, index);
            prop_assert_eq!(config.segments()[landed].outcome_class, outcome);
        }

        #[test]
        fn prop_easing_is_monotonic(
            start in -10_000.0f64..10_000.0,
            distance in 1.0f64..10_000.0,
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
        ) {
            let target = start + distance;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(eased_rotation(start, target, lo) <= eased_rotation(start, target, hi));
            prop_assert_eq!(eased_rotation(start, target, 0.0), start);
            prop_assert_eq!(eased_rotation(start, target, 1.0), target);
        }
    }
}
