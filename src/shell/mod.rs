use std::fmt;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use crate::{
    core::{
        aliases::AliasTable,
        commands::{CommandExecutor, Status},
        config::{Config, ConfigLoader},
        state::ShellState,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{tokenize, EditorSource, LineSource, ReadResult},
    path::PathExpander,
    process::ProcessLauncher,
};

/// Prefix of every diagnostic the shell prints.
pub const DIAGNOSTIC_PREFIX: &str = "myshell:";

/// The read-eval loop and everything it owns.
pub struct Shell<I = EditorSource, W = Stdout, E = Stderr> {
    input: I,
    out: W,
    err: E,
    state: ShellState,
    executor: CommandExecutor,
    highlighter: SyntaxHighlighter,
    config: Config,
}

impl Shell {
    /// An interactive shell on the terminal.
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let input = EditorSource::new()?;

        // SIGINT also reaches the shell while a child runs in the foreground
        ctrlc::set_handler(|| log::debug!("interrupt received"))?;

        let mut shell = Shell::with_io(config, input, io::stdout(), io::stderr());
        if io::stderr().is_terminal() {
            shell.highlighter = SyntaxHighlighter::new();
        }
        Ok(shell)
    }
}

impl<I: LineSource, W: Write, E: Write> Shell<I, W, E> {
    pub fn with_io(config: Config, input: I, out: W, err: E) -> Self {
        let executor = CommandExecutor::new(PathExpander::new(), ProcessLauncher::new(config.quiet));
        Shell {
            input,
            out,
            err,
            state: ShellState::new(AliasTable::new(config.alias_capacity)),
            executor,
            highlighter: SyntaxHighlighter::plain(),
            config,
        }
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.startup()? == Status::Terminate {
            return self.shutdown();
        }

        loop {
            let prompt = self.state.prompt();
            let line = match self.input.read_line(&prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => {
                    log::debug!("end of input");
                    writeln!(self.out)?;
                    break;
                }
            };

            if self.eval(&line)? == Status::Terminate {
                break;
            }
        }

        self.shutdown()
    }

    /// Tokenizes and runs one line. Command failures are reported and
    /// never end the loop.
    pub fn eval(&mut self, line: &str) -> Result<Status, ShellError> {
        let tokens = tokenize(line);
        let status = match self.executor.execute(&tokens, &mut self.state, &mut self.out) {
            Ok(status) => status,
            Err(e) => {
                report(&mut self.err, &self.highlighter, None, &e, e.hint())?;
                Status::Continue
            }
        };
        self.out.flush()?;
        Ok(status)
    }

    fn startup(&mut self) -> Result<Status, ShellError> {
        if let Some(rc_path) = self.config.rc_path.clone() {
            let Self {
                executor,
                state,
                out,
                err,
                highlighter,
                ..
            } = self;
            let mut failure = Ok(());
            let sourced = ConfigLoader::new(executor).source_if_exists(
                &rc_path,
                state,
                out,
                &mut |line, e| {
                    if failure.is_ok() {
                        let context = format!("{}:{}", rc_path.display(), line);
                        failure = report(&mut *err, highlighter, Some(context.as_str()), e, e.hint());
                    }
                },
            );
            failure?;
            match sourced {
                Ok(Status::Continue) => {}
                Ok(Status::Terminate) => return Ok(Status::Terminate),
                Err(e) => {
                    let context = rc_path.display().to_string();
                    report(err, highlighter, Some(context.as_str()), &e, None)?;
                }
            }
        }

        if let Some(alias_file) = self.config.alias_file.clone() {
            let tokens = vec!["readnewnames".to_string(), alias_file];
            if let Err(e) = self.executor.execute(&tokens, &mut self.state, &mut self.out) {
                report(&mut self.err, &self.highlighter, None, &e, e.hint())?;
            }
        }

        Ok(Status::Continue)
    }

    fn shutdown(&mut self) -> Result<(), ShellError> {
        log::debug!("shutting down {}", self.state.shell_name());
        self.out.flush()?;
        Ok(())
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn diagnostics(&self) -> &E {
        &self.err
    }
}

fn report(
    err: &mut dyn Write,
    highlighter: &SyntaxHighlighter,
    context: Option<&str>,
    error: &dyn fmt::Display,
    hint: Option<String>,
) -> io::Result<()> {
    let prefix = highlighter.highlight_error(DIAGNOSTIC_PREFIX);
    match context {
        Some(context) => writeln!(err, "{} {}: {}", prefix, context, error)?,
        None => writeln!(err, "{} {}", prefix, error)?,
    }
    if let Some(hint) = hint {
        writeln!(err, "{} {}", prefix, highlighter.highlight_hint(&hint))?;
    }
    err.flush()
}
