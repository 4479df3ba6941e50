use super::{Command, CommandError, Context, Status};
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new(PathExpander::new())
    }
}

impl CdCommand {
    pub fn new(path_expander: PathExpander) -> Self {
        Self { path_expander }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let dir = args.get(1).ok_or(CommandError::Usage {
            command: "cd",
            usage: "cd <directory>",
        })?;

        let path = self.path_expander.expand(dir);
        env::set_current_dir(&path).map_err(|e| CommandError::ChangeDir(path.clone(), e))?;
        log::debug!("working directory is now {}", path.display());

        Ok(Status::Continue)
    }
}
