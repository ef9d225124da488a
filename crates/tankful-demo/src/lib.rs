//! Tankful-demo: drives a [`tankful::Vehicle`] through a short script
//!
//! The script fills the tank, drives, sets an explicit fuel level, and
//! prints the level the vehicle ends up with.

pub mod config;
mod script;

pub use config::{ConfigError, DemoConfig};
pub use script::run_script;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Writing the script's output failed, e.g. stdout was closed.
    #[error("cannot write demo output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot render config as TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
