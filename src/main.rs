//! Command line driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        analyze, create_example_patterns, evolve_batch, load_generation_from_file,
        load_generations_from_directory, Generations,
    },
    utils::{ColorOutput, GenerationFormatter},
};
use log::{debug, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on an unbounded plane")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a seed and print each generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed pattern file (overrides config)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write generations to this directory instead of printing them
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a seed as extinct, still life, oscillator or unsettled
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed pattern file (overrides config)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Generation limit (overrides config)
        #[arg(short, long)]
        max_generations: Option<usize>,
    },

    /// Evolve every pattern in a directory in parallel
    Batch {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern directory (overrides config)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,
    },

    /// Create an example configuration and seed patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("Failed to initialise logger")?;

    match cli.command {
        Commands::Run { config, seed, generations, format, output } => {
            let overrides = CliOverrides {
                generations,
                seed_file: seed,
                format,
                output_dir: output,
                ..CliOverrides::default()
            };
            run_command(load_settings(&config, &overrides)?)
        }
        Commands::Analyze { config, seed, max_generations } => {
            let overrides = CliOverrides {
                max_analysis_generations: max_generations,
                seed_file: seed,
                ..CliOverrides::default()
            };
            analyze_command(load_settings(&config, &overrides)?)
        }
        Commands::Batch { config, directory, generations } => {
            let overrides = CliOverrides {
                generations,
                pattern_directory: directory,
                ..CliOverrides::default()
            };
            batch_command(load_settings(&config, &overrides)?)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    debug!("Settings: {:?}", settings);
    Ok(settings)
}

fn run_command(settings: Settings) -> Result<()> {
    settings.validate_seed_file()?;
    let seed = load_generation_from_file(&settings.input.seed_file)?;
    info!(
        "Running {} generations from {} ({} live cells)",
        settings.simulation.generations,
        settings.input.seed_file.display(),
        seed.len()
    );

    let start_time = Instant::now();
    let generations: Vec<_> = (1..)
        .zip(Generations::new(seed))
        .take(settings.simulation.generations)
        .collect();
    debug!("Evolved in {:.3}s", start_time.elapsed().as_secs_f64());

    match settings.output.output_directory {
        Some(ref output_dir) => {
            GenerationFormatter::save_generations(&generations, output_dir, settings.output.format)
                .context("Failed to save generations")?;
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Saved {} generation(s) to {}",
                    generations.len(),
                    output_dir.display()
                ))
            );
        }
        None => {
            for (index, generation) in &generations {
                println!("{}", GenerationFormatter::render(*index, generation, settings.output.format)?);
            }
        }
    }

    Ok(())
}

fn analyze_command(settings: Settings) -> Result<()> {
    settings.validate_seed_file()?;
    let seed = load_generation_from_file(&settings.input.seed_file)?;

    let analysis = analyze(&seed, settings.simulation.max_analysis_generations);
    let name = settings.input.seed_file.display().to_string();
    println!("{}", GenerationFormatter::format_analysis(&name, &analysis));

    Ok(())
}

fn batch_command(settings: Settings) -> Result<()> {
    let directory = &settings.input.pattern_directory;
    let seeds = load_generations_from_directory(directory)?;
    if seeds.is_empty() {
        println!("{}", ColorOutput::error(&format!("No patterns found in {}", directory.display())));
        return Ok(());
    }

    info!(
        "Evolving {} pattern(s) for {} generations",
        seeds.len(),
        settings.simulation.generations
    );
    let results = evolve_batch(seeds, settings.simulation.generations);
    println!("{}", GenerationFormatter::format_batch_summary(&results));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("input/patterns");

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --seed input/patterns/glider.txt");

    Ok(())
}
