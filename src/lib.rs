pub mod common;
pub mod content;
pub mod frontend;
pub mod models;
