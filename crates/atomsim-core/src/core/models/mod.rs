//! # Core Models Module
//!
//! Data structures representing the simulated system: individual particles,
//! their stable identifiers, and the registry that owns them.
//!
//! ## Key Components
//!
//! - [`particle`] - A single point particle with position, velocity, and
//!   externally driven state flags
//! - [`registry`] - The process-wide particle collection with name lookup
//! - [`ids`] - Slotmap-backed identifier type for particles

pub mod ids;
pub mod particle;
pub mod registry;
