use clap::Parser;

use primin::cmd::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Show(a) => a.run(),
        Commands::Minimize(a) => a.run(),
        Commands::Cover(a) => a.run(),
    }
}
