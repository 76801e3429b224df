pub mod browse;
pub mod cli;
pub mod clipboard;
pub mod crypto;
pub mod errors;
pub mod tui;
pub mod vault;
