use super::aliases::AliasTable;

pub const DEFAULT_SHELL_NAME: &str = "myshell";
pub const DEFAULT_TERMINATOR: &str = ">";

/// Everything the built-ins are allowed to change, owned by one shell.
#[derive(Debug, Clone)]
pub struct ShellState {
    shell_name: String,
    terminator: String,
    aliases: AliasTable,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(AliasTable::default())
    }
}

impl ShellState {
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            shell_name: DEFAULT_SHELL_NAME.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            aliases,
        }
    }

    pub fn prompt(&self) -> String {
        format!("{} {} ", self.shell_name, self.terminator)
    }

    pub fn shell_name(&self) -> &str {
        &self.shell_name
    }

    /// `None` restores the default name.
    pub fn set_shell_name(&mut self, name: Option<&str>) {
        self.shell_name = name.unwrap_or(DEFAULT_SHELL_NAME).to_string();
    }

    /// `None` restores the default terminator.
    pub fn set_terminator(&mut self, symbol: Option<&str>) {
        self.terminator = symbol.unwrap_or(DEFAULT_TERMINATOR).to_string();
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt() {
        let state = ShellState::default();
        assert_eq!(state.prompt(), "myshell > ");
    }

    #[test]
    fn test_setters_and_reset() {
        let mut state = ShellState::default();
        state.set_terminator(Some("$"));
        state.set_shell_name(Some("bob"));
        assert_eq!(state.prompt(), "bob $ ");

        state.set_shell_name(None);
        state.set_terminator(None);
        assert_eq!(state.prompt(), "myshell > ");
    }
}
