pub const DEFAULT_POINTER_ANGLE: f64 = 270.0; // Top of a canvas whose angles grow clockwise from 3 o'clock
pub const DEFAULT_SPIN_DURATION_MS: f64 = 5000.0;
pub const DEFAULT_MIN_SPINS: u32 = 8;
pub const DEFAULT_MAX_SPINS: u32 = 11;
pub const DEFAULT_JITTER_FRACTION: f64 = 0.4;
pub const MIN_ALLOWED_SPINS: u32 = 5;
pub const MIN_SEGMENTS: usize = 2;

pub const FULL_TURN: f64 = 360.0;

pub const LAST_PLAYED_KEY_PREFIX: &str = "prize_wheel_last_played";
pub const PLAY_DATE_FORMAT: &str = "%Y-%m-%d";
pub const RESULT_EVENT: &str = "wheelResult";

pub const STATUS_READY: &str = "PRÊT À JOUER ?";
pub const STATUS_SPINNING: &str = "🎰 EN COURS...";
pub const STATUS_WON: &str = "🎊 BRAVO !";
pub const STATUS_LOST: &str = "😢 Dommage...";

pub const CLOSED_TITLE: &str = "⏰ Fermé";
pub const ALREADY_PLAYED_TITLE: &str = "🕐 Déjà joué";
pub const ALREADY_PLAYED_MESSAGE: &str = "Vous avez déjà tenté votre chance aujourd'hui. Revenez demain !";

pub const CONFETTI_DURATION_MS: f64 = 3000.0;
pub const CONFETTI_PARTICLES_PER_FRAME: usize = 10;
