pub mod constants;
pub mod types;
pub use constants::{DEFAULT_PORT, REQUIRED_TABLES, URL};
pub use types::DbConfig;
