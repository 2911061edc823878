use clap::Parser;
use std::io::Write;
use std::process;
use taskboard_cli::exit_codes::EXIT_ERROR;
use taskboard_cli::logging::{configure_logging, log_level};
use taskboard_cli::{commands, Cli, CliConfig};

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_ERROR);
        }
    };

    let level = log_level(
        cli.verbose,
        cli.debug,
        cli.quiet,
        config.log_level.as_deref(),
    );
    configure_logging(&level);

    let mut stdout = std::io::stdout().lock();
    let exit_code = match commands::run(&cli.command, &config, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };

    let _ = stdout.flush();
    process::exit(exit_code);
}
