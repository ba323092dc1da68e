//! Command-line interface for splitting a shopping basket across delivery
//! methods.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod prompt;
mod split;

pub use error::CliError;
pub use prompt::Console;
use split::{SplitArgs, run_split_with};

const ARG_CONFIG: &str = "config";
const ARG_BASKET: &str = "basket";
const ARG_OUTPUT: &str = "output";
const ARG_MAX_ROUNDS: &str = "max-rounds";
const ENV_CONFIG: &str = "BASKET_CMDS_SPLIT_CONFIG_PATH";
const ENV_BASKET: &str = "BASKET_CMDS_SPLIT_BASKET_PATH";
const DEFAULT_OUTPUT: &str = "output.json";

/// Run the basket splitter with the current process arguments. Prompts are
/// read from standard input and written to standard error; results go to
/// standard output.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration merging,
/// loading the inputs, splitting, or writing the cover fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompt = std::io::stderr().lock();
    let mut output = std::io::stdout().lock();
    let mut console = Console::new(&mut input, &mut prompt, &mut output);
    match cli.command {
        Command::Split(args) => run_split_with(args, &mut console),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "basket-splitter",
    about = "Split a shopping basket into as few delivery groups as possible",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a basket using a delivery configuration and write the groups.
    Split(SplitArgs),
}

#[cfg(test)]
mod tests;
