//! Telemetry and tracing setup

mod tracing_setup;

pub use tracing_setup::{TracingConfig, TracingError, try_init_tracing};
