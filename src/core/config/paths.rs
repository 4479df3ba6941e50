use super::ConfigError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = env::var("HOME")?;
        Ok(Self::from_home(PathBuf::from(home)))
    }

    pub fn from_home(home: PathBuf) -> Self {
        ConfigPaths {
            rc_path: home.join(".myshellrc"),
        }
    }
}
