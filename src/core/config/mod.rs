use std::{fmt, path::PathBuf};

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

use super::aliases::DEFAULT_CAPACITY;
use crate::flags::Flags;

/// Startup settings, resolved once from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub alias_capacity: usize,
    pub rc_path: Option<PathBuf>,
    pub alias_file: Option<String>,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            alias_capacity: DEFAULT_CAPACITY,
            rc_path: None,
            alias_file: None,
            quiet: false,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Result<Self, ConfigError> {
        let alias_capacity = match flags.get_value("max-aliases") {
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidCapacity(value.clone())),
            },
            None => DEFAULT_CAPACITY,
        };

        let rc_path = if flags.is_set("norc") {
            None
        } else {
            match ConfigPaths::new() {
                Ok(paths) => Some(paths.rc_path),
                Err(e) => {
                    log::debug!("startup file disabled: {}", e);
                    None
                }
            }
        };

        Ok(Config {
            alias_capacity,
            rc_path,
            alias_file: flags.get_value("aliases").cloned(),
            quiet: flags.is_set("quiet"),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    InvalidCapacity(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<std::env::VarError> for ConfigError {
    fn from(_: std::env::VarError) -> Self {
        ConfigError::HomeDirNotFound
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::InvalidCapacity(value) => {
                write!(f, "Invalid alias capacity '{}': expected a positive number", value)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
