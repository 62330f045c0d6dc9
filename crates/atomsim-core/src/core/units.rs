//! Pinned physical constants and unit conversions.
//!
//! Positions and distances are in angstroms throughout; velocities are in
//! angstroms per fixed tick. The force-accumulation path converts between
//! these simulation units and SI via the constants below. The conversion
//! factors are tuning-sensitive and treated as pinned values, not derived
//! quantities.

/// Meters per angstrom.
pub const ANGSTROM_IN_METERS: f64 = 1e-10;

/// Kilograms per atomic mass unit (CODATA 2018).
pub const AMU_IN_KG: f64 = 1.660_539_066_60e-27;

/// Reference mass dividing the accumulated force when converting it to a
/// per-tick velocity increment. Fixed at 100 amu for every particle, whatever
/// its species.
pub const REFERENCE_MASS_KG: f64 = 100.0 * AMU_IN_KG;

/// Physical seconds represented by one fixed simulation tick.
pub const FIXED_STEP_SECONDS: f64 = 1e-15;

/// Boltzmann constant in J/K.
pub const BOLTZMANN_J_PER_K: f64 = 1.380_649e-23;

/// Two particles closer than this multiple of their pair sigma are classified
/// as bonded.
pub const BOND_DISTANCE_FACTOR: f64 = 1.225;
