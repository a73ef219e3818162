use algo_visualizer::logging::{LogConfig, init_logging};
use algo_visualizer::{
    AppConfig, Cli, Command, RunPathCommand, RunSortCommand, SearchOutcome, describe_algorithms,
};
use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format.into())
        .with_ansi(cli.log_file.is_none() && io::stderr().is_terminal())
        .with_log_file(cli.log_file.clone());
    init_logging(&log_config).context("failed to initialise logging")?;

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Sort(args) => {
            let summary = RunSortCommand::new(args, config).execute()?;
            println!("{}: {:?} in {:?}", summary.algorithm, summary.outcome, summary.elapsed);
            println!("{:?}", summary.values);
        }
        Command::Path(args) => {
            let summary = RunPathCommand::new(args, config).execute()?;
            match summary.outcome {
                SearchOutcome::PathFound(stats) => println!(
                    "path of length {} found after visiting {} nodes ({} walls) in {:?}",
                    stats.path_length, stats.nodes_visited, summary.walls, summary.elapsed
                ),
                SearchOutcome::Exhausted(stats) => println!(
                    "no path exists; visited {} nodes ({} walls) in {:?}",
                    stats.nodes_visited, summary.walls, summary.elapsed
                ),
                SearchOutcome::Cancelled => println!("search cancelled"),
            }
        }
        Command::Algorithms => print!("{}", describe_algorithms()),
    }

    Ok(())
}
