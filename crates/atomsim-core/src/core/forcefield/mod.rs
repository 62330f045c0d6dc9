//! # Force Field Module
//!
//! Everything needed to evaluate the pairwise interaction between two
//! particles: per-species constants, the symmetric pairwise-sigma table, the
//! interaction kernel itself, and parameter loading.
//!
//! ## Key Components
//!
//! - [`species`] - Immutable per-species constants (epsilon, sigma, mass) and
//!   the table indexing them by id
//! - [`pairs`] - Precomputed effective sigma per unordered species pair
//! - [`potentials`] - The force kernel, including the bounded close-approach
//!   regime
//! - [`params`] - TOML parameter files and assembly into a [`params::Forcefield`]

pub mod pairs;
pub mod params;
pub mod potentials;
pub mod species;
