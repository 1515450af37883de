use clap::{Parser, Subcommand};
use recipe_book::{config, shell::Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-book")]
#[command(about = "Interactive console recipe book")]
#[command(long_about = "\
Interactive console recipe book

Enter recipes with their ingredients and steps, then view, scale, reset and
clear them from a numbered menu. Recipes live in memory for the current
session only.

Menu:

  1. Add Recipe               name, ingredients (quantity, unit, calories,
                              food group), steps
  2. Display Recipes          list all names, then show one
  3. Display Recipe           show one by name
  4. Scale Recipe             half, double or triple every quantity
  5. Reset Recipe Quantities  back to the amounts as entered
  6. Clear Recipe             drop ingredients and steps, keep the name
  7. Exit

A warning is printed whenever a recipe's total calories go above the
threshold (300 unless configured otherwise).

Run 'recipe-book gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive menu (default)
    Shell,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let settings = config::load_config(cli.config.as_deref())?;
            tracing::info!("Calorie threshold: {}", settings.calories.threshold);
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout(), &settings);
            shell.run()?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
