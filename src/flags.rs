use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        let mut add = |name: &str, short: &str, long: &str, description: &str, takes_value: bool| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", "-h", "--help", "Print this help message", false);
        add("version", "-v", "--version", "Show version information", false);
        add("quiet", "-q", "--quiet", "Suppress notices about interrupted programs", false);
        add("debug", "-d", "--debug", "Enable debug logging", false);
        add("norc", "-n", "--norc", "Do not read ~/.myshellrc", false);
        add("aliases", "-a", "--aliases", "Read aliases from a file at startup", true);
        add("max-aliases", "-m", "--max-aliases", "Maximum number of aliases (default 10)", true);

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = args.get(i + 1).ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: myshell [OPTIONS]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            let long = if flag.takes_value {
                format!("{} <value>", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<19} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_switches() {
        let mut flags = Flags::new();
        flags.parse(&args("-q --debug")).unwrap();

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("norc"));
    }

    #[test]
    fn test_parse_values() {
        let mut flags = Flags::new();
        flags.parse(&args("--aliases /tmp/a -m 4")).unwrap();

        assert_eq!(flags.get_value("aliases").map(String::as_str), Some("/tmp/a"));
        assert_eq!(flags.get_value("max-aliases").map(String::as_str), Some("4"));
    }

    #[test]
    fn test_missing_value() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args("--aliases")),
            Err(ShellError::FlagError(_))
        ));
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args("--bogus")),
            Err(ShellError::FlagError(_))
        ));
    }
}
