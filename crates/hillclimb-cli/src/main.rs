//! N-Queens from the command line.
//!
//! Prints the final permutation on the first line of stdout and its
//! conflict count on the second. Progress and warnings go to stderr.
//!
//! **Usage**:
//! ```bash
//! nqueens 8
//! nqueens 8 --seed 42 --grid
//! nqueens 3 --round-limit 1000
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hillclimb::{load_config, solve_nqueens, Result, SolverConfig};

#[derive(Debug, Parser)]
#[command(name = "nqueens", version)]
#[command(about = "Solve N-Queens by hill climbing with plateau moves", long_about = None)]
struct Cli {
    /// Board size (number of queens and board dimension)
    #[arg(value_name = "N")]
    size: usize,

    /// Random seed for a reproducible search
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solver configuration file (defaults to ./solver.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stop an unsolved search after this many seconds
    #[arg(long, value_name = "SECS")]
    time_limit_secs: Option<u64>,

    /// Stop an unsolved search after this many rounds
    #[arg(long, value_name = "ROUNDS")]
    round_limit: Option<u64>,

    /// Draw the final board after the result
    #[arg(short, long)]
    grid: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    // Command-line flags override values from the configuration file.
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(seconds) = self.time_limit_secs {
            config = config.with_termination_seconds(seconds);
        }
        if let Some(rounds) = self.round_limit {
            config = config.with_round_count_limit(rounds);
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        hillclimb_console::init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.solver_config()?;
    let result = solve_nqueens(cli.size, &config)?;

    println!("{}", result.state);
    println!("{}", result.heuristic());
    if cli.grid {
        println!("{}", result.state.render_grid());
    }

    Ok(())
}
