use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use occupancy_board::report::{format_report, modal_string, to_json};
use occupancy_board::{ModelConfig, OccupancyModel, SolverKind};

/// Rank the squares of a Monopoly-style board by long-run occupancy.
#[derive(Parser, Debug)]
#[command(name = "occupancy", version, about)]
struct Cli {
    /// Sides per die.
    #[arg(short, long, env = "OCCUPANCY_SIDES")]
    sides: Option<u32>,

    /// Number of squares to print.
    #[arg(short = 'n', long, default_value_t = 5)]
    top: usize,

    /// Primary stationary solver.
    #[arg(long, value_enum)]
    solver: Option<SolverKind>,

    /// Fail instead of trying the other solver.
    #[arg(long)]
    no_fallback: bool,

    /// JSON model configuration; command line flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the ranking as JSON.
    #[arg(long)]
    json: bool,

    /// Print the modal string (two-digit indices) of the top squares.
    #[arg(long)]
    modal: bool,
}

impl Cli {
    fn model_config(&self) -> Result<ModelConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ModelConfig::from_json(&json)?
            }
            None => ModelConfig::default(),
        };

        if let Some(sides) = self.sides {
            config.sides = sides;
        }
        if let Some(solver) = self.solver {
            config.solver = solver;
        }
        if self.no_fallback {
            config.fallback = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.model_config()?;
    info!("{:?}", config);

    let model = OccupancyModel::new(config)?;
    let ranking = model.compute_probabilities()?;

    if cli.json {
        let top = &ranking[..cli.top.min(ranking.len())];
        println!("{}", to_json(top)?);
    } else {
        print!("{}", format_report(&ranking, cli.top));
    }

    if cli.modal {
        println!("{}", modal_string(&ranking, cli.top));
    }

    Ok(())
}
