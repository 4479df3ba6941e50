use myshell::core::config::Config;
use myshell::flags::Flags;
use myshell::shell::Shell;
use std::env;

fn main() -> Result<(), myshell::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    let default_filter = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("myshell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::from_flags(&flags)?;
    let mut shell = Shell::new(config)?;
    shell.run()
}
