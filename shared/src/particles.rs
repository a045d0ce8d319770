//! Confetti model for the win celebration.
//!
//! Two emitters fire from the left and right edges toward the centre for a
//! fixed time; particles then fall under gravity until their life runs out.
//! Coordinates are canvas pixels with `y` pointing down.

use rand::Rng;

use crate::constants::{CONFETTI_DURATION_MS, CONFETTI_PARTICLES_PER_FRAME};

const GRAVITY: f64 = 0.35;
const DRAG: f64 = 0.985;
const MIN_SPEED: f64 = 9.0;
const MAX_SPEED: f64 = 17.0;
const MIN_LIFE: u32 = 70;
const MAX_LIFE: u32 = 140;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub tilt: f64,
    pub color: &'static str,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
        self.vx *= DRAG;
        self.tilt += self.vx * 0.05;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// 1.0 when fresh, fading to 0.0 at the end of life.
    pub fn opacity(&self) -> f64 {
        f64::from(self.life) / f64::from(self.max_life.max(1))
    }
}

/// Launch point on the canvas edge and cone of directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    pub origin_x: f64, // fraction of width
    pub origin_y: f64, // fraction of height
    pub angle_deg: f64, // counter-clockwise from +x, y up
    pub spread_deg: f64,
}

impl Emitter {
    fn spawn<R: Rng + ?Sized>(
        &self,
        width: f64,
        height: f64,
        color: &'static str,
        rng: &mut R,
    ) -> Particle {
        let half = self.spread_deg / 2.0;
        let angle = (self.angle_deg + rng.gen_range(-half..=half)).to_radians();
        let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
        let life = rng.gen_range(MIN_LIFE..MAX_LIFE);
        Particle {
            x: self.origin_x * width,
            y: self.origin_y * height,
            vx: angle.cos() * speed,
            vy: -angle.sin() * speed,
            size: rng.gen_range(5.0..10.0),
            tilt: rng.gen_range(0.0..std::f64::consts::TAU),
            color,
            life,
            max_life: life,
        }
    }
}

pub struct ConfettiBurst {
    emitters: Vec<Emitter>,
    colors: Vec<&'static str>,
    particles: Vec<Particle>,
    started_ms: f64,
    duration_ms: f64,
}

impl ConfettiBurst {
    /// Side cannons at 60° and 120° with a 100° spread.
    pub fn celebration(colors: Vec<&'static str>, started_ms: f64) -> Self {
        Self {
            emitters: vec![
                Emitter { origin_x: 0.0, origin_y: 0.5, angle_deg: 60.0, spread_deg: 100.0 },
                Emitter { origin_x: 1.0, origin_y: 0.5, angle_deg: 120.0, spread_deg: 100.0 },
            ],
            colors,
            particles: Vec::new(),
            started_ms,
            duration_ms: CONFETTI_DURATION_MS,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_emitting(&self, now_ms: f64) -> bool {
        now_ms < self.started_ms + self.duration_ms
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        !self.is_emitting(now_ms) && self.particles.is_empty()
    }

    /// One animation frame: emit while the burst lasts, then move everything.
    pub fn step<R: Rng + ?Sized>(&mut self, now_ms: f64, width: f64, height: f64, rng: &mut R) {
        if self.is_emitting(now_ms) && !self.colors.is_empty() {
            for emitter in &self.emitters {
                for _ in 0..CONFETTI_PARTICLES_PER_FRAME {
                    let color = self.colors[rng.gen_range(0..self.colors.len())];
                    self.particles.push(emitter.spawn(width, height, color, rng));
                }
            }
        }

        self.particles.retain_mut(|p| {
            p.update();
            p.is_alive() && p.y < height + p.size
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_emits_from_both_edges() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut burst = ConfettiBurst::celebration(vec!["#ffd700", "#00ff88"], 0.0);
        burst.step(0.0, 800.0, 600.0, &mut rng);

        assert_eq!(burst.particles().len(), 2 * CONFETTI_PARTICLES_PER_FRAME);
        let (left, right): (Vec<&Particle>, Vec<&Particle>) =
            burst.particles().iter().partition(|p| p.x < 400.0);
        assert_eq!(left.len(), CONFETTI_PARTICLES_PER_FRAME);
        assert_eq!(right.len(), CONFETTI_PARTICLES_PER_FRAME);
        // Left cannon aims rightwards, right cannon leftwards
        assert!(left.iter().map(|p| p.vx).sum::<f64>() > 0.0);
        assert!(right.iter().map(|p| p.vx).sum::<f64>() < 0.0);
    }

    #[test]
    fn test_stops_emitting_and_drains() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut burst = ConfettiBurst::celebration(vec!["#fff"], 0.0);
        burst.step(10.0, 800.0, 600.0, &mut rng);
        assert!(!burst.is_finished(10.0));

        let after = CONFETTI_DURATION_MS + 1.0;
        for frame in 0..(MAX_LIFE + 1) {
            burst.step(after + f64::from(frame), 800.0, 600.0, &mut rng);
        }
        assert!(burst.particles().is_empty());
        assert!(burst.is_finished(after + 1000.0));
    }

    #[test]
    fn test_opacity_fades() {
        let mut rng = StdRng::seed_from_u64(11);
        let emitter = Emitter { origin_x: 0.0, origin_y: 0.5, angle_deg: 60.0, spread_deg: 0.0 };
        let mut p = emitter.spawn(100.0, 100.0, "#fff", &mut rng);
        assert_eq!(p.opacity(), 1.0);
        p.update();
        assert!(p.opacity() < 1.0);
    }
}
