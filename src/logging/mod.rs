pub mod telemetry;

pub use telemetry::{TelemetryConfig, init_telemetry, shutdown_telemetry};
