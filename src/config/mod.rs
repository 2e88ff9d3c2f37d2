//! Configuration module for Link-Harvest
//!
//! Configuration is optional. Without a file every setting takes its default;
//! with one, the TOML is parsed and validated before the run starts.
//!
//! # Example
//!
//! ```no_run
//! use link_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Writing to: {}", config.output.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, LinksConfig, OutputConfig, DEFAULT_OUTPUT_PATH, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
