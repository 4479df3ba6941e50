use std::{fs, io::Write, path::Path};

use super::ConfigError;
use crate::core::commands::{CommandError, CommandExecutor, Status};
use crate::core::state::ShellState;
use crate::input::tokenize;

/// Runs a startup file line by line, the same way typed input is run.
pub struct ConfigLoader<'a> {
    executor: &'a CommandExecutor,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(executor: &'a CommandExecutor) -> Self {
        Self { executor }
    }

    /// Sources `path` if it exists. Failing lines are handed to `on_error`
    /// with their 1-based line number and do not stop the file; a
    /// terminating command does. Bytes that are not UTF-8 are replaced.
    pub fn source_if_exists(
        &self,
        path: &Path,
        state: &mut ShellState,
        out: &mut dyn Write,
        on_error: &mut dyn FnMut(usize, &CommandError),
    ) -> Result<Status, ConfigError> {
        if !path.exists() {
            log::debug!("no startup file at {}", path.display());
            return Ok(Status::Continue);
        }

        let content = fs::read(path)?;
        for (index, line) in content.split(|&b| b == b'\n').enumerate() {
            let line = String::from_utf8_lossy(line);
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match self.executor.execute(&tokenize(line), state, out) {
                Ok(Status::Continue) => {}
                Ok(Status::Terminate) => {
                    log::debug!("{}:{} terminated the shell", path.display(), index + 1);
                    return Ok(Status::Terminate);
                }
                Err(e) => on_error(index + 1, &e),
            }
        }
        Ok(Status::Continue)
    }
}
