use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
#[derive(Debug, Clone, Default)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    pub fn expand(&self, path: &str) -> PathBuf {
        let Some(rest) = path.strip_prefix('~') else {
            return Path::new(path).to_path_buf();
        };
        // "~user/..." is left alone
        if !rest.is_empty() && !rest.starts_with('/') {
            return Path::new(path).to_path_buf();
        }
        let Some(home) = &self.home else {
            log::warn!("home directory unknown, leaving '{}' unexpanded", path);
            return Path::new(path).to_path_buf();
        };

        let mut expanded = home.clone();
        for part in rest.split('/').filter(|p| !p.is_empty()) {
            expanded.push(part);
        }
        expanded
    }
}
