//! Self-play CLI
//!
//! Play matches between Halma engines from the start position.

use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use halma_core::Engine;
use minimax_engine::{EngineConfig, MinimaxEngine};
use random_engine::RandomEngine;
use selfplay::{MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-halma Self-play Runner");
    println!();
    println!("Usage:");
    println!("  selfplay <engine1> <engine2> [options]");
    println!();
    println!("Engines:");
    println!("  minimax       - Discounted alpha-beta search");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Options:");
    println!("  --config FILE         Match config (TOML)");
    println!("  --engine-config FILE  Minimax engine config (TOML)");
    println!("  --games N             Number of games");
    println!("  --depth D             Fixed search depth (overrides the engine config)");
    println!("  --time-ms T           Time budget per move");
    println!("  --max-moves M         Ply cap per game");
    println!("  --seed S              Seed for random engines");
    println!("  --json                Print the match report as JSON");
    println!();
    println!("Examples:");
    println!("  selfplay minimax random --games 4 --depth 2");
    println!("  selfplay minimax minimax --time-ms 500 --json");
}

struct Args {
    engine1: String,
    engine2: String,
    config: MatchConfig,
    engine_config: EngineConfig,
    seed: Option<u64>,
    json: bool,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn parse_args(args: &[String]) -> Result<Args> {
    if args.len() < 2 {
        bail!("expected two engine names");
    }

    // The config file is read first so command-line flags can override it.
    let mut config = MatchConfig::default();
    let mut engine_config = EngineConfig::default();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let path = value(args, i, "--config")?;
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read match config {path}"))?;
                config = MatchConfig::from_toml_str(&text)
                    .with_context(|| format!("invalid match config {path}"))?;
                i += 1;
            }
            "--engine-config" => {
                let path = value(args, i, "--engine-config")?;
                engine_config = EngineConfig::load(path)
                    .with_context(|| format!("failed to load engine config {path}"))?;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    let mut seed = None;
    let mut json = false;
    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "--engine-config" => i += 1,
            "--games" | "-g" => {
                config.num_games = value(args, i, flag)?
                    .parse()
                    .with_context(|| format!("invalid {flag}"))?;
                i += 1;
            }
            "--depth" | "-d" => {
                config.depth = Some(
                    value(args, i, flag)?
                        .parse()
                        .with_context(|| format!("invalid {flag}"))?,
                );
                i += 1;
            }
            "--time-ms" | "-t" => {
                config.time_per_move_ms = Some(
                    value(args, i, flag)?
                        .parse()
                        .with_context(|| format!("invalid {flag}"))?,
                );
                i += 1;
            }
            "--max-moves" => {
                config.max_moves = value(args, i, flag)?
                    .parse()
                    .with_context(|| format!("invalid {flag}"))?;
                i += 1;
            }
            "--seed" => {
                seed = Some(
                    value(args, i, flag)?
                        .parse()
                        .with_context(|| format!("invalid {flag}"))?,
                );
                i += 1;
            }
            "--json" => json = true,
            other => bail!("unknown option {other}"),
        }
        i += 1;
    }

    Ok(Args {
        engine1: args[0].clone(),
        engine2: args[1].clone(),
        config,
        engine_config,
        seed,
        json,
    })
}

fn create_engine(spec: &str, config: &EngineConfig, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "minimax" | "mm" => Ok(Box::new(MinimaxEngine::with_config(config.clone()))),
        "random" | "rand" => Ok(Box::new(match seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::new(),
        })),
        _ => bail!("unknown engine: {spec}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let args = parse_args(&args)?;
    let mut engine1 = create_engine(&args.engine1, &args.engine_config, args.seed)?;
    // Two seeded random engines would mirror each other.
    let mut engine2 = create_engine(&args.engine2, &args.engine_config, args.seed.map(|s| s.wrapping_add(1)))?;

    let runner = MatchRunner::new(args.config);
    let mut report = runner.run_match(engine1.as_mut(), engine2.as_mut());
    report.engine1 = args.engine1;
    report.engine2 = args.engine2;

    if args.json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        report.print_report();
    }
    Ok(())
}
