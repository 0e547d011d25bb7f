mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// reject characters the lexer would otherwise skip silently
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// evaluate a single expression and print the result
    Eval {
        #[arg(name = "EXPR")]
        expression: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Eval { expression }) => {
            let result = if cli.strict {
                calc_rs::calculate_strict(&expression)?
            } else {
                calc_rs::calculate(&expression)?
            };
            println!("{}", result);
        }
        None => {
            repl::start(cli.strict);
        }
    }
    Ok(())
}
