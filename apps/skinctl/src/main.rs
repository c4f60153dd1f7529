use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skin_core::{events::keys, load_config, load_config_from, SkinConfig};
use tracing_subscriber::EnvFilter;

mod scenario;

#[derive(Parser, Debug)]
#[command(about = "Drive the skin runtime from scripted scenarios")]
struct Cli {
    /// Config file to use instead of ./skins.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario file and print the transition trace.
    Replay {
        scenario: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List the named key codes.
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = settings(cli.config.as_deref())?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Replay { scenario, json } => {
            let loaded = scenario::load_scenario(&scenario)?;
            tracing::info!(
                path = %scenario.display(),
                events = loaded.events.len(),
                "replaying scenario"
            );
            let report = scenario::replay(&loaded, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for entry in &report.trace {
                    let marker = if entry.matched { "->" } else { "  " };
                    println!(
                        "{:<32} {marker} {}",
                        entry.event,
                        entry.state.as_deref().unwrap_or("-")
                    );
                }
                for line in &report.log {
                    println!("log: {line}");
                }
                for (name, value) in &report.vars {
                    println!("{name} = {value}");
                }
                println!(
                    "final state: {}",
                    report.final_state.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Keys => {
            for (code, name) in keys::named_keys() {
                println!("{code:#010x}  {name}");
            }
        }
    }

    Ok(())
}

fn settings(path: Option<&std::path::Path>) -> Result<SkinConfig> {
    match path {
        Some(path) => {
            let mut config = load_config_from(path)?;
            config.apply_overrides(|key| std::env::var(key).ok());
            Ok(config)
        }
        None => load_config(),
    }
}
