use anyhow::Result;
use clap::{Parser, Subcommand};
use otalign::driver;

#[derive(Parser)]
#[command(name = "otalign")]
#[command(version = "0.1.0")]
#[command(about = "Global alignment scoring of CRISPR guide / off-target pairs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a CSV of guide / off-target pairs with alignment columns
    Annotate(driver::AnnotateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate(args) => {
            driver::run(args)?;
        }
    }
    Ok(())
}
