pub mod mapping;
pub mod models;

pub use models::{Author, Book};
