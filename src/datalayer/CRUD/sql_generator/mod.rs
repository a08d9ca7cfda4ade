pub mod sql_generator;

pub use sql_generator::{FluentDelete, FluentInsert, FluentSelect, FluentUpdate};
