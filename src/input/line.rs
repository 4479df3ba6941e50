use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    Line(String),
    /// Ctrl-C at the prompt; the partial line is discarded.
    Interrupted,
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, ShellError>;
}

/// Interactive input through rustyline, with in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        log::warn!("Couldn't add to history: {}", e);
                    }
                }
                Ok(ReadResult::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays a fixed script, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<ReadResult>,
    prompts: Vec<String>,
}

impl ScriptedSource {
    pub fn new(lines: &[&str]) -> Self {
        Self::from_results(lines.iter().map(|l| ReadResult::Line(l.to_string())))
    }

    pub fn from_results(results: impl IntoIterator<Item = ReadResult>) -> Self {
        Self {
            script: results.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(ReadResult::Eof))
    }
}
