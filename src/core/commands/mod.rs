use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

mod alias;
mod builtin;
mod cd;
mod persist;
mod prompt;

pub use alias::{ListNewNamesCommand, NewNameCommand};
pub use builtin::{ExitCommand, HelpCommand, StopCommand};
pub use cd::CdCommand;
pub use persist::{ReadNewNamesCommand, SaveNewNamesCommand};
pub use prompt::{SetShellNameCommand, SetTerminatorCommand};

use super::aliases::AliasError;
use super::state::ShellState;
use crate::path::PathExpander;
use crate::process::{ProcessError, ProcessLauncher};

/// Built-in names in registration order, as listed by `help`.
pub const BUILTIN_NAMES: [&str; 10] = [
    "cd",
    "help",
    "exit",
    "setshellname",
    "stop",
    "setterminator",
    "newname",
    "listnewnames",
    "savenewnames",
    "readnewnames",
];

/// What the read-eval loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Terminate,
}

#[derive(Debug)]
pub enum CommandError {
    Usage {
        command: &'static str,
        usage: &'static str,
    },
    ChangeDir(PathBuf, std::io::Error),
    Alias(AliasError),
    Process(ProcessError),
    Output(std::io::Error),
}

impl CommandError {
    pub fn hint(&self) -> Option<String> {
        match self {
            CommandError::Usage { usage, .. } => Some(format!("usage: {}", usage)),
            CommandError::Alias(AliasError::CapacityExceeded(_)) => {
                Some("remove one with 'newname <new name>' first".to_string())
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage { command, .. } => {
                write!(f, "expected argument to \"{}\"", command)
            }
            CommandError::ChangeDir(path, err) => write!(f, "cd: {}: {}", path.display(), err),
            CommandError::Alias(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
            CommandError::Output(err) => write!(f, "write error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Output(err)
    }
}

impl From<AliasError> for CommandError {
    fn from(err: AliasError) -> Self {
        CommandError::Alias(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// What a built-in may touch while it runs.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    /// `args[0]` is the command name as dispatched.
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
    SetShellName(SetShellNameCommand),
    Stop(StopCommand),
    SetTerminator(SetTerminatorCommand),
    NewName(NewNameCommand),
    ListNewNames(ListNewNamesCommand),
    SaveNewNames(SaveNewNamesCommand),
    ReadNewNames(ReadNewNamesCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Help(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::SetShellName(cmd) => cmd.execute(args, ctx),
            CommandType::Stop(cmd) => cmd.execute(args, ctx),
            CommandType::SetTerminator(cmd) => cmd.execute(args, ctx),
            CommandType::NewName(cmd) => cmd.execute(args, ctx),
            CommandType::ListNewNames(cmd) => cmd.execute(args, ctx),
            CommandType::SaveNewNames(cmd) => cmd.execute(args, ctx),
            CommandType::ReadNewNames(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Resolves a tokenized line to a built-in or an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_launcher: ProcessLauncher,
}

impl CommandExecutor {
    pub fn new(path_expander: PathExpander, process_launcher: ProcessLauncher) -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
            process_launcher,
        };

        executor
            .commands
            .insert("cd", CommandType::Cd(CdCommand::new(path_expander.clone())));
        executor
            .commands
            .insert("help", CommandType::Help(HelpCommand::new()));
        executor
            .commands
            .insert("exit", CommandType::Exit(ExitCommand::new()));
        executor.commands.insert(
            "setshellname",
            CommandType::SetShellName(SetShellNameCommand),
        );
        executor.commands.insert("stop", CommandType::Stop(StopCommand));
        executor.commands.insert(
            "setterminator",
            CommandType::SetTerminator(SetTerminatorCommand),
        );
        executor
            .commands
            .insert("newname", CommandType::NewName(NewNameCommand));
        executor.commands.insert(
            "listnewnames",
            CommandType::ListNewNames(ListNewNamesCommand),
        );
        executor.commands.insert(
            "savenewnames",
            CommandType::SaveNewNames(SaveNewNamesCommand::new(path_expander.clone())),
        );
        executor.commands.insert(
            "readnewnames",
            CommandType::ReadNewNames(ReadNewNamesCommand::new(path_expander)),
        );

        executor
    }

    /// Runs one tokenized command line.
    ///
    /// Only the first token goes through alias substitution; an empty line
    /// is a no-op.
    pub fn execute(
        &self,
        tokens: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Status, CommandError> {
        let Some(first) = tokens.first() else {
            return Ok(Status::Continue);
        };

        let mut args = tokens.to_vec();
        let resolved = state.aliases().resolve(first);
        if resolved != first.as_str() {
            log::debug!("alias {} -> {}", first, resolved);
            args[0] = resolved.to_string();
        }

        if let Some(cmd) = self.commands.get(args[0].as_str()) {
            log::trace!("builtin {}", args[0]);
            return cmd.execute(&args, &mut Context { state, out });
        }

        out.flush()?;
        self.process_launcher.launch(&args)?;
        Ok(Status::Continue)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::tokens;
    use super::*;

    fn setup() -> (CommandExecutor, ShellState) {
        let executor = CommandExecutor::new(PathExpander::new(), ProcessLauncher::new(true));
        (executor, ShellState::default())
    }

    fn execute(
        executor: &CommandExecutor,
        state: &mut ShellState,
        line: &str,
    ) -> Result<Status, CommandError> {
        let mut out = Vec::new();
        executor.execute(&tokens(line), state, &mut out)
    }

    #[test]
    fn test_every_builtin_is_registered() {
        let (executor, _) = setup();

        for name in BUILTIN_NAMES {
            assert!(executor.commands.contains_key(name), "{} missing", name);
        }
        assert_eq!(executor.commands.len(), BUILTIN_NAMES.len());
        assert!(!executor.commands.contains_key("ls"));
    }

    #[test]
    fn test_empty_line_continues() {
        let (executor, mut state) = setup();
        assert_eq!(execute(&executor, &mut state, "").unwrap(), Status::Continue);
    }

    #[test]
    fn test_exit_terminates() {
        let (executor, mut state) = setup();
        assert_eq!(
            execute(&executor, &mut state, "exit").unwrap(),
            Status::Terminate
        );
    }

    #[test]
    fn test_alias_resolves_to_builtin() {
        let (executor, mut state) = setup();
        execute(&executor, &mut state, "newname bye exit").unwrap();

        assert_eq!(
            execute(&executor, &mut state, "bye").unwrap(),
            Status::Terminate
        );
    }

    #[test]
    fn test_alias_only_applies_to_first_token() {
        let (executor, mut state) = setup();
        execute(&executor, &mut state, "newname ll ls").unwrap();

        // `ll` as an argument stays `ll`, so this removes the alias
        execute(&executor, &mut state, "newname ll").unwrap();
        assert!(state.aliases().is_empty());
    }

    #[test]
    fn test_newname_uses_only_two_arguments() {
        let (executor, mut state) = setup();
        execute(&executor, &mut state, "newname ll ls -l").unwrap();

        assert_eq!(state.aliases().len(), 1);
        assert_eq!(state.aliases().resolve("ll"), "ls");
    }

    #[test]
    fn test_alias_resolves_to_external_program() {
        let (executor, mut state) = setup();
        execute(&executor, &mut state, "newname nothing true").unwrap();

        assert_eq!(
            execute(&executor, &mut state, "nothing").unwrap(),
            Status::Continue
        );
    }

    #[test]
    fn test_external_failure_keeps_running() {
        let (executor, mut state) = setup();
        assert_eq!(
            execute(&executor, &mut state, "false").unwrap(),
            Status::Continue
        );
    }

    #[test]
    fn test_unknown_command() {
        let (executor, mut state) = setup();

        let result = execute(&executor, &mut state, "no_such_command_xyz");
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::CommandNotFound(_)))
        ));
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::Usage {
                command: "cd",
                usage: "cd <directory>",
            },
            CommandError::ChangeDir(
                PathBuf::from("/nope"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            ),
            CommandError::Alias(AliasError::CapacityExceeded(10)),
            CommandError::Process(ProcessError::CommandNotFound("x".to_string())),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
        assert_eq!(
            CommandError::Usage {
                command: "cd",
                usage: "cd <directory>"
            }
            .hint()
            .as_deref(),
            Some("usage: cd <directory>")
        );
    }
}
