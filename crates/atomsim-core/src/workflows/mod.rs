//! # Workflows Module
//!
//! This module provides the high-level entry point that orchestrates a
//! complete, self-contained simulation run.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of the crate. They encapsulate
//! the entire pipeline: building the forcefield tables from configuration,
//! placing and seeding the initial particles, driving the thermostat-coupled
//! step loop, and summarizing the outcome. Frontends that need interactive
//! control (drag, pause, selection) hold a [`crate::engine::context::Simulation`]
//! directly; the workflow exists for batch runs.
//!
//! ## Architecture
//!
//! - **Simulate Workflow** ([`simulate`]) - Grid placement, seeded initial
//!   velocities, N thermostat-coupled ticks, and a final temperature report.

pub mod simulate;
