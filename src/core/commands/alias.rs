use super::{Command, CommandError, Context, Status};

pub(super) const NO_ALIASES_HINT: &str = "Assign a new one with 'newname <new name> <old name>'.";

/// `newname <alias>` removes an alias, `newname <alias> <target>` defines one.
#[derive(Clone)]
pub struct NewNameCommand;

impl Command for NewNameCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        match (args.get(1), args.get(2)) {
            (None, _) => {
                return Err(CommandError::Usage {
                    command: "newname",
                    usage: "newname <new name> [<old name>]",
                })
            }
            (Some(alias), None) => {
                if !ctx.state.aliases_mut().remove(alias) {
                    log::debug!("no alias named {}", alias);
                }
            }
            (Some(alias), Some(target)) => {
                if args.len() > 3 {
                    log::debug!("newname ignores {:?}", &args[3..]);
                }
                ctx.state.aliases_mut().add_or_replace(alias, target)?;
            }
        }
        Ok(Status::Continue)
    }
}

#[derive(Clone)]
pub struct ListNewNamesCommand;

impl Command for ListNewNamesCommand {
    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let aliases = ctx.state.aliases();
        if aliases.is_empty() {
            writeln!(ctx.out, "There are no new aliases. {}", NO_ALIASES_HINT)?;
            return Ok(Status::Continue);
        }

        for entry in aliases.list() {
            writeln!(ctx.out, "{}", entry)?;
        }
        Ok(Status::Continue)
    }
}
