use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use simulation::config::SimConfig;

mod agent_mode;
mod headless;
mod inspect;

/// Feral intensity spread simulator: control vs. intervention comparison.
#[derive(Parser, Debug)]
#[command(name = "feralsim", version)]
struct Cli {
    /// Read JSON commands from stdin and answer on stdout
    #[arg(long, conflicts_with = "inspect")]
    agent: bool,

    /// JSON file with a SimConfig (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Turns per batch, overrides the config file
    #[arg(long)]
    turns: Option<u32>,

    /// Intervention coordinate as `x,z`; defaults to the most intense cell
    #[arg(long, value_parser = parse_coord)]
    at: Option<(u32, u32)>,

    /// Write a run export here after the headless protocol finishes
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the summary of an existing run export and exit
    #[arg(long)]
    inspect: Option<PathBuf>,
}

fn parse_coord(raw: &str) -> Result<(u32, u32), String> {
    let (x, z) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `x,z`, got `{raw}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{raw}`: {e}"))?;
    let z = z.trim().parse().map_err(|e| format!("bad z in `{raw}`: {e}"))?;
    Ok((x, z))
}

fn load_config(cli: &Cli) -> Result<SimConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            SimConfig::from_json(&text).map_err(|e| format!("bad config {}: {e}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(turns) = cli.turns {
        config.default_turns = turns;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.inspect {
        return report(inspect::run_inspect(path));
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("feralsim: {message}");
            return ExitCode::FAILURE;
        }
    };

    if cli.agent {
        agent_mode::run_agent_mode(config);
        return ExitCode::SUCCESS;
    }

    report(headless::run_headless(config, cli.at, cli.export.as_deref()))
}

fn report(result: Result<(), String>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("feralsim: {message}");
            ExitCode::FAILURE
        }
    }
}
