use super::alias::NO_ALIASES_HINT;
use super::{Command, CommandError, Context, Status};
use crate::core::aliases::{LoadOutcome, SaveOutcome};
use crate::path::PathExpander;

/// Writes the alias table to a file, two lines per alias.
#[derive(Clone)]
pub struct SaveNewNamesCommand {
    path_expander: PathExpander,
}

impl SaveNewNamesCommand {
    pub fn new(path_expander: PathExpander) -> Self {
        Self { path_expander }
    }
}

impl Command for SaveNewNamesCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let file = args.get(1).ok_or(CommandError::Usage {
            command: "savenewnames",
            usage: "savenewnames <file name>",
        })?;

        let path = self.path_expander.expand(file);
        match ctx.state.aliases().save(&path)? {
            SaveOutcome::Saved(count) => log::debug!("saved {} aliases to {}", count, path.display()),
            SaveOutcome::Empty => {
                writeln!(ctx.out, "There are no aliases to save. {}", NO_ALIASES_HINT)?;
            }
        }
        Ok(Status::Continue)
    }
}

/// Merges aliases from a file written by `savenewnames`.
#[derive(Clone)]
pub struct ReadNewNamesCommand {
    path_expander: PathExpander,
}

impl ReadNewNamesCommand {
    pub fn new(path_expander: PathExpander) -> Self {
        Self { path_expander }
    }
}

impl Command for ReadNewNamesCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let file = args.get(1).ok_or(CommandError::Usage {
            command: "readnewnames",
            usage: "readnewnames <file name>",
        })?;

        let path = self.path_expander.expand(file);
        match ctx.state.aliases_mut().load(&path)? {
            LoadOutcome::Loaded(count) => {
                log::debug!("{} new aliases from {}", count, path.display())
            }
            LoadOutcome::Missing => writeln!(ctx.out, "File \"{}\" does not exist.", file)?,
        }
        Ok(Status::Continue)
    }
}
