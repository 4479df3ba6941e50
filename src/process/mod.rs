use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessLauncher;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Spawn(String, std::io::Error),
    Wait(String, std::io::Error),
    /// The child was killed by the given signal.
    Signaled(String, i32),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Spawn(cmd, e) => write!(f, "{}: {}", cmd, e),
            ProcessError::Wait(cmd, e) => write!(f, "waiting for {}: {}", cmd, e),
            ProcessError::Signaled(cmd, sig) => write!(f, "{}: {}", cmd, signal::describe(*sig)),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::CommandNotFound(_) | ProcessError::Signaled(..) => None,
            ProcessError::Spawn(_, e) | ProcessError::Wait(_, e) => Some(e),
        }
    }
}
