//! Command line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::algorithms::sorting::SortKind;
use crate::core::data::path_grid::GridCoord;
use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "algo-visualizer",
    version,
    about = "Step through sorting and pathfinding algorithms from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON file with sorting, pathfinding and frame settings.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Animate a comparison sort over a random or given array.
    Sort(SortArgs),
    /// Run A* over a grid with optional random walls.
    Path(PathArgs),
    /// Print the pseudocode and complexity of every algorithm.
    Algorithms,
}

#[derive(Debug, Clone, Args)]
pub struct FrameArgs {
    /// Directory receiving one PPM image per sampled step.
    #[arg(long = "frames-dir", value_name = "DIR")]
    pub frames_dir: Option<PathBuf>,

    /// Keep one frame out of every N snapshots.
    #[arg(long = "every-nth", value_name = "N")]
    pub every_nth: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    #[arg(long, value_enum, default_value = "bubble")]
    pub algorithm: AlgorithmArg,

    /// Number of random values to sort.
    #[arg(long)]
    pub size: Option<usize>,

    /// Sort these comma separated values instead of a random array.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub values: Option<Vec<u32>>,

    /// Animation speed, 1 (slowest) to 100.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub speed: Option<u8>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub frames: FrameArgs,
}

#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub cols: Option<usize>,

    /// Start cell as ROW,COL. Defaults to the top-left corner when the size is overridden.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_grid_coord)]
    pub start: Option<GridCoord>,

    /// End cell as ROW,COL. Defaults to the bottom-right corner when the size is overridden.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_grid_coord)]
    pub end: Option<GridCoord>,

    /// Probability of each cell becoming a wall; 0 leaves the grid open.
    #[arg(long = "maze-density")]
    pub maze_density: Option<f64>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub speed: Option<u8>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub frames: FrameArgs,
}

fn parse_grid_coord(raw: &str) -> Result<GridCoord, String> {
    let (row, col) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got `{raw}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|err| format!("invalid row `{row}`: {err}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|err| format!("invalid column `{col}`: {err}"))?;
    Ok(GridCoord::new(row, col))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Bubble,
    Quick,
    Merge,
}

impl From<AlgorithmArg> for SortKind {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bubble => SortKind::Bubble,
            AlgorithmArg::Quick => SortKind::Quick,
            AlgorithmArg::Merge => SortKind::Merge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_sort_with_values() {
        let cli = Cli::try_parse_from([
            "algo-visualizer",
            "sort",
            "--algorithm",
            "quick",
            "--values",
            "5,3,4",
            "--speed",
            "100",
        ])
        .unwrap();

        let Command::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(SortKind::from(args.algorithm), SortKind::Quick);
        assert_eq!(args.values, Some(vec![5, 3, 4]));
        assert_eq!(args.speed, Some(100));
    }

    #[test]
    fn test_rejects_out_of_range_speed() {
        let result = Cli::try_parse_from(["algo-visualizer", "path", "--speed", "0"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parses_path_endpoints() {
        let cli = Cli::try_parse_from([
            "algo-visualizer",
            "path",
            "--rows",
            "6",
            "--start",
            "1,2",
            "--end",
            " 5, 0",
        ])
        .unwrap();

        let Command::Path(args) = cli.command else {
            panic!("expected path command");
        };
        assert_eq!(args.rows, Some(6));
        assert_eq!(args.start, Some(GridCoord::new(1, 2)));
        assert_eq!(args.end, Some(GridCoord::new(5, 0)));
    }

    #[test]
    fn test_rejects_malformed_endpoint() {
        for raw in ["3", "a,1", "1,-2"] {
            let result = Cli::try_parse_from(["algo-visualizer", "path", "--start", raw]);

            assert!(result.is_err(), "{raw}");
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "algo-visualizer",
            "path",
            "--maze-density",
            "0.2",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }
}
