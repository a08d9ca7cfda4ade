pub mod extractors;
pub mod health;
pub mod resources;
