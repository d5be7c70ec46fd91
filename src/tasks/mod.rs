//! Background Tasks Module
//!
//! Periodic maintenance that runs alongside the server.
//!
//! # Tasks
//! - Expiry sweep: drops expired entries between reads

mod sweep;

pub use sweep::spawn_sweep_task;
