pub mod app_context;
pub mod infrastructure;
pub mod telemetry;
