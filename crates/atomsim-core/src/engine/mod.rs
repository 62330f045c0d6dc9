//! # Engine Module
//!
//! The stateful simulation: one [`context::Simulation`] object owns the
//! particle registry, force-field tables, and box geometry, and advances the
//! whole system one fixed tick at a time.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Runtime parameters, TOML loading, and a
//!   validating builder
//! - **Context** ([`context`]) - The simulation object and its external
//!   interface
//! - **Boundary** ([`boundary`]) - Position clamping and inward velocity
//!   reflection against the box
//! - **Bonds** ([`bonds`]) - Species-derived bond-distance classification
//! - **Thermostat** ([`thermostat`]) - Velocity-rescale factor from the
//!   current velocity distribution
//! - **Progress** ([`progress`]) - Callback-based progress reporting for
//!   long-running workflows
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Stepping is strictly single-threaded and synchronous: neighbor data is
//! snapshotted at the start of each tick, so the update is independent of
//! particle iteration order.

pub mod bonds;
pub mod boundary;
pub mod config;
pub mod context;
pub mod error;
pub(crate) mod forces;
pub(crate) mod integrator;
pub(crate) mod neighbors;
pub mod progress;
pub mod thermostat;
