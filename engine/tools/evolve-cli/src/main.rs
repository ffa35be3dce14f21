use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "evolve-cli")]
#[command(about = "Pilotage du moteur d'évolution générationnelle", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Lance une évolution sur un problème de référence
    Run(commands::run::RunArgs),
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run(args) => commands::run::handle(args, &mut std::io::stdout().lock()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
    tracing::debug!("Fin de l'exécution du CLI");
}
