/// Ceiling on stored shield energy.
pub const MAX_STRENGTH: i64 = 10_000;
/// Floor on stored shield energy. Damage never drives strength below this.
pub const MIN_STRENGTH: i64 = 0;
/// Ship reserve used when no initial energy is supplied.
pub const DEFAULT_SHIP_ENERGY: i64 = 50_000;

/// Default upper bound for a single drill volley.
pub const DEFAULT_MAX_HIT: i64 = 1_500;
/// Upper bound on volleys fired by one drill.
pub const MAX_VOLLEYS: u32 = 1_000;
