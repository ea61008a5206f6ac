//! Service constants and defaults.

/// Enemy type string that the mech protocols look for.
pub const MECH_ENEMY_TYPE: &str = "mech";

// --- Fire action ---

/// Smallest casualty count a simulated cannon reports.
pub const MIN_CASUALTIES: u32 = 1;

/// Largest casualty count a simulated cannon reports.
pub const MAX_CASUALTIES: u32 = 10;

/// Default RNG seed for the simulated battery. Same seed = same casualties.
pub const DEFAULT_RNG_SEED: u64 = 42;

// --- Default catalog ---

/// Built-in cannon catalog as `(id, fire_time_millis, generation)`.
/// All entries start available.
pub const DEFAULT_CATALOG: [(&str, u64, u32); 3] = [
    ("cannon1", 3_500, 1),
    ("cannon2", 1_500, 2),
    ("cannon3", 5_000, 3),
];

// --- Server ---

/// Default listening port when neither config nor `PORT` say otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0";
