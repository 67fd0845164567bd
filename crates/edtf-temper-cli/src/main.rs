//! EDTF to TEMPER command-line converter.

use clap::Parser;
use edtf_temper_cli::cli::Cli;
use edtf_temper_cli::logging::init_logging;
use edtf_temper_cli::run::run;
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.datestr, &mut io::stdout().lock()) {
        Ok(_) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
