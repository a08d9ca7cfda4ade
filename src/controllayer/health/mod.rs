pub mod health;

pub use health::{HealthResponse, TestDbResponse, banner, health_check, test_db};
