pub mod resources;

pub use resources::{Deleted, Operation, create, delete, get, list, list_children, update};
