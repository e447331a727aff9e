pub mod config;
pub mod handlers;
pub mod models;
pub mod utils;

pub const DEFAULT_QUANTITY: u64 = 1000;
pub const DEFAULT_CONFIG_PATH: &str = "labelquote.toml";
