use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use modctl::Result;
use std::io;

#[derive(Parser)]
#[command(name = "modctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Module activation state manager", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the specified module
    Install {
        /// Module name
        module: String,
    },

    /// Uninstall the specified module
    Uninstall {
        /// Module name
        module: String,
    },

    /// Enable the specified module
    Enable {
        /// Module name
        module: String,
    },

    /// Disable the specified module
    Disable {
        /// Module name
        module: String,
    },

    /// Show the status of all tracked modules
    Status {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Remove a module from the status file
    Remove {
        /// Module name
        module: String,
    },

    /// Delete the statuses file and forget all module state
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install { module } => modctl::cli::install::run(&module)?,
        Commands::Uninstall { module } => modctl::cli::uninstall::run(&module)?,
        Commands::Enable { module } => modctl::cli::enable::run(&module)?,
        Commands::Disable { module } => modctl::cli::disable::run(&module)?,
        Commands::Status { json } => modctl::cli::status::run(json)?,
        Commands::Remove { module } => modctl::cli::remove::run(&module)?,
        Commands::Reset { yes } => modctl::cli::reset::run(yes)?,

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "modctl", &mut io::stdout());
        }
    }

    Ok(())
}
