use super::{Command, CommandError, Context, Status};

#[derive(Clone)]
pub struct SetShellNameCommand;

impl Command for SetShellNameCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        ctx.state.set_shell_name(args.get(1).map(String::as_str));
        Ok(Status::Continue)
    }
}

#[derive(Clone)]
pub struct SetTerminatorCommand;

impl Command for SetTerminatorCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        ctx.state.set_terminator(args.get(1).map(String::as_str));
        Ok(Status::Continue)
    }
}
