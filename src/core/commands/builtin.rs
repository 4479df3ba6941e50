use super::{Command, CommandError, Context, Status, BUILTIN_NAMES};

#[derive(Clone)]
pub struct HelpCommand {
    names: &'static [&'static str],
}

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self {
            names: &BUILTIN_NAMES,
        }
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        writeln!(ctx.out, "{}", ctx.state.shell_name())?;
        writeln!(ctx.out, "Type program names and arguments, and hit enter.")?;
        writeln!(ctx.out, "The following are built in:")?;
        for name in self.names {
            writeln!(ctx.out, "  {}", name)?;
        }
        writeln!(ctx.out, "Use the man command for information on other programs.")?;
        Ok(Status::Continue)
    }
}

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        Ok(Status::Terminate)
    }
}

/// Like `exit`, but says goodbye first.
#[derive(Clone)]
pub struct StopCommand;

impl Command for StopCommand {
    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        writeln!(ctx.out, "Stopping {} now...", ctx.state.shell_name())?;
        Ok(Status::Terminate)
    }
}
