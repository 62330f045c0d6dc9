//! # AtomSim Core Library
//!
//! A small molecular-dynamics engine for interactive simulations of a handful
//! of atoms: pairwise Lennard-Jones forces with a bounded close-approach
//! regime, velocity-rescaling temperature control, and confinement to a finite
//! simulation box.
//!
//! ## Architectural Philosophy
//!
//! The library is organized in three layers with a strict separation of
//! concerns:
//!
//! - **[`core`]: The Foundation.** Stateless data models (particles, species
//!   constants), pure force-field mathematics (`potentials`), and parameter
//!   loading.
//!
//! - **[`engine`]: The Logic Core.** The stateful simulation: the
//!   [`engine::context::Simulation`] object owning the particle registry, the
//!   fixed-timestep integrator, boundary enforcement, and thermostat coupling.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry point, tying
//!   `core` and `engine` together to set up and run a complete simulation
//!   from a configuration.
//!
//! The engine is deliberately simple: neighbor selection is a linear scan per
//! particle, stepping is single-threaded and synchronous, and the integrator
//! is a force-accumulation scheme rather than a symplectic method. The target
//! is responsive, stable-looking dynamics for tens of particles, not
//! publication-grade molecular dynamics.

pub mod core;
pub mod engine;
pub mod workflows;
