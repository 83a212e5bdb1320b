use clap::Parser;

use langlens::cli::{Cli, Commands};
use langlens::commands::{run_fetch, run_init, run_render, run_stats, run_sum};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Fetch(args) => run_fetch(args, &cli),
        Commands::Sum(args) => run_sum(args, &cli),
        Commands::Render(args) => run_render(args, &cli),
        Commands::Stats(args) => run_stats(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
