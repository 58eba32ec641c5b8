mod commands;
mod logging;

use clap::Parser;
use mattab_core::domain::MattabError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let error = error.as_mattab_error();
            for line in error.report_lines() {
                eprintln!("{}", line);
            }
            error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            logging::init_logging(cli.verbosity())?;
            commands::run_tabulate_command(cli.run)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "mattab",
    version,
    about = "Tabulate a material parameter catalogue as CSV, XLSX and LaTeX"
)]
struct Cli {
    #[command(flatten)]
    run: commands::TabulateArgs,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn verbosity(&self) -> logging::Verbosity {
        if self.quiet {
            logging::Verbosity::Quiet
        } else {
            logging::Verbosity::Level(self.verbose)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Run(MattabError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_mattab_error(&self) -> MattabError {
        match self {
            Self::Usage(message) => {
                MattabError::input("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Run(error) => error.clone(),
            Self::Internal(error) => MattabError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}

impl From<MattabError> for CliError {
    fn from(error: MattabError) -> Self {
        Self::Run(error)
    }
}
