use clap::Parser;
use gatesim::Alu;
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    let alu = Alu::new(config);
    let res = match &cli.command {
        Commands::Add(a) => a.add(&alu),
        Commands::Sub(a) => a.sub(&alu),
        Commands::Increment(a) => a.increment(&alu),
        Commands::Complement(a) => a.complement(&alu),
        Commands::Negate(a) => a.negate(&alu),
        Commands::Pass(a) => a.pass(&alu),
        Commands::Show(a) => a.run(config),
        Commands::Check(a) => a.run(&alu),
    };
    if let Err(err) = res {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
