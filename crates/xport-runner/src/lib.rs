mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::{Cli, Commands, ExportCommand, OutputFormat, RulesCommand};
pub use config::{load_effective_rules, validate_resource_types};
pub use io::read_resource_document;
pub use logging::init_logging;
pub use run::{execute_export, execute_rules, RunnerError};
