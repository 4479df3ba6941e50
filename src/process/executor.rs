use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Runs external programs in the foreground, one at a time.
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    quiet_mode: bool,
}

impl ProcessLauncher {
    pub fn new(quiet_mode: bool) -> Self {
        Self { quiet_mode }
    }

    /// Spawns `args[0]` with the remaining tokens as arguments and blocks
    /// until the child exits or is killed by a signal.
    ///
    /// A non-zero exit is not an error. A child killed by a signal is
    /// reported as `ProcessError::Signaled` unless the launcher is quiet.
    pub fn launch(&self, args: &[String]) -> Result<ExitStatus, ProcessError> {
        let Some((program, rest)) = args.split_first() else {
            return Err(ProcessError::CommandNotFound(String::new()));
        };

        log::debug!("launching {} {:?}", program, rest);
        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ProcessError::CommandNotFound(program.clone()),
                _ => ProcessError::Spawn(program.clone(), e),
            })?;

        let status = child
            .wait()
            .map_err(|e| ProcessError::Wait(program.clone(), e))?;

        match (status.code(), status.signal()) {
            (Some(code), _) => log::debug!("{} exited with status {}", program, code),
            (None, Some(sig)) => {
                log::debug!("{} killed by signal {}", program, sig);
                if !self.quiet_mode {
                    return Err(ProcessError::Signaled(program.clone(), sig));
                }
            }
            (None, None) => {}
        }

        Ok(status)
    }
}
