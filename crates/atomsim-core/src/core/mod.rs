//! # Core Module
//!
//! Fundamental building blocks for the simulator: stateless data models,
//! physical constants, and the pure force-field mathematics everything else
//! is built on.
//!
//! ## Key Components
//!
//! - **Particle Representation** ([`models`]) - Particles, stable identifiers,
//!   and the registry that owns them
//! - **Force Field** ([`forcefield`]) - Species constants, the symmetric
//!   pairwise-sigma table, and the interaction kernel
//! - **Units** ([`units`]) - Pinned unit-conversion and physical constants

pub mod forcefield;
pub mod models;
pub mod units;
