use clap::Parser;
use xport_runner::{execute_export, execute_rules, init_logging, Cli, Commands};

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Export(command) => execute_export(&command),
        Commands::Rules(command) => execute_rules(&command),
    };

    match result {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
