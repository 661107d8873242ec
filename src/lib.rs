pub mod books_client;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod screen;
pub mod tui;
