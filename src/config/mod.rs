pub mod cli;
pub mod sample;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::DemoConfig;
