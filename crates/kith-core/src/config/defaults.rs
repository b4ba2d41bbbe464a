// Single source of truth for all default values.

// --- Layers: cadence (days) ---
pub const INNER_CIRCLE_CADENCE_DAYS: f64 = 7.0;
pub const NURTURE_CADENCE_DAYS: f64 = 14.0;
pub const MAINTAIN_CADENCE_DAYS: f64 = 30.0;
pub const TRANSACTIONAL_CADENCE_DAYS: f64 = 90.0;

// --- Layers: health thresholds (multiples of cadence) ---
pub const INNER_CIRCLE_YELLOW: f64 = 1.43;
pub const NURTURE_YELLOW: f64 = 1.43;
pub const MAINTAIN_YELLOW: f64 = 1.5;
pub const TRANSACTIONAL_YELLOW: f64 = 1.33;
pub const INACTIVE_YELLOW: f64 = 1.5;
pub const UNIFORM_RED: f64 = 2.0;

// --- Layers: kin decay modifiers ---
pub const INNER_CIRCLE_KIN_MODIFIER: f64 = 0.15;
pub const NURTURE_KIN_MODIFIER: f64 = 0.2;
pub const MAINTAIN_KIN_MODIFIER: f64 = 0.3;
pub const TRANSACTIONAL_KIN_MODIFIER: f64 = 0.3;
pub const DORMANT_KIN_MODIFIER: f64 = 0.0;
pub const NEW_KIN_MODIFIER: f64 = 0.2;

// --- Establishment ---
pub const DEFAULT_ESTABLISHMENT_MULTIPLIER: f64 = 0.7;
pub const DEFAULT_ESTABLISHMENT_DAYS: u32 = 30;
pub const DEFAULT_FALLBACK_CADENCE_DAYS: f64 = 14.0;

// --- Drift ---
pub const DEFAULT_DRIFT_WINDOW_DAYS: u32 = 180;
pub const DEFAULT_DRIFT_MIN_INTERACTIONS: usize = 3;
pub const DEFAULT_DRIFT_WATCHING_BUFFER: f64 = 1.5;

// --- Alert dampening (hours) ---
pub const DEFAULT_WATCHING_COOLDOWN_HOURS: i64 = 168; // 1 week
pub const DEFAULT_DRIFTING_COOLDOWN_HOURS: i64 = 72;
pub const DEFAULT_FALLEN_COOLDOWN_HOURS: i64 = 24;

// --- Gender calibration ---
pub const MALE_STYLE_WEIGHT: f64 = 0.6;
pub const FEMALE_STYLE_WEIGHT: f64 = 0.5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "kith=info";
pub const DEFAULT_JSON_LOGS: bool = false;
