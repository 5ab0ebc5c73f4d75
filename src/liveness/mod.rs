//! Periodic peer liveness sweeps.
//!
//! Every `liveness.interval` seconds the monitor snapshots the registry, probes
//! each record's ping endpoint concurrently without holding the registry lock,
//! then refreshes the survivors and evicts the silent ones under one write lock.
//! A record survives when any of its `probe_attempts` probes is answered.

pub mod impls;
pub mod structs;
pub mod traits;

/// Service entry point.
#[allow(clippy::module_inception)]
pub mod liveness;
