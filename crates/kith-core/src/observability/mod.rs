//! Observability for Kith.
//! `tracing` crate with `EnvFilter`, per-crate log levels, structured events.

pub mod events;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with_config};
