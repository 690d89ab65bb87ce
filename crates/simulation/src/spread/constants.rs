// ---------------------------------------------------------------------------
// Spread rule coefficients
// ---------------------------------------------------------------------------

/// Fraction of a cell's vulnerability added to its intensity each turn.
pub const VULNERABILITY_FACTOR: f32 = 0.1;

/// Highway cells multiply their baseline rate (acceleration vector).
pub const HIGHWAY_MULTIPLIER: f32 = 2.2;

/// Rate added per orthogonal neighbour above [`CONTAGION_THRESHOLD`].
pub const CONTAGION_PER_NEIGHBOR: f32 = 0.02;

/// Neighbour intensity strictly above this value is contagious.
pub const CONTAGION_THRESHOLD: f32 = 0.5;

/// Rate multiplier for a cell hosting an intervention (70% dampening).
pub const LOCAL_INTERVENTION_DAMPING: f32 = 0.3;

/// Rate multiplier when any orthogonal neighbour hosts an intervention.
pub const ADJACENT_INTERVENTION_DAMPING: f32 = 0.5;
