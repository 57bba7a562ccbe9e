//! Main CLI application for the crossword filler

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossword_fill::{
    config::{CliOverrides, OutputFormat, Settings},
    grid::create_example_inputs,
    puzzle::CrosswordProblem,
    utils::{save_svg, ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crossword_fill")]
#[command(about = "Constraint-satisfaction crossword filler")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a crossword structure from a word list
    Generate {
        /// Structure file ('_' = fillable cell, anything else blocked)
        structure: PathBuf,

        /// Word list file (one candidate per line)
        words: PathBuf,

        /// Optional output file (SVG image by default; see --format)
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Abort search after this many seconds (overrides config)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Explore the first slot's candidates in parallel (overrides config)
        #[arg(short, long)]
        parallel: bool,

        /// Output file format (overrides config)
        #[arg(short, long)]
        format: Option<FormatArg>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show slot, crossing, and domain statistics without solving
    Analyze {
        /// Structure file
        structure: PathBuf,

        /// Word list file
        words: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create example structure, word list, and configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Svg,
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            structure,
            words,
            output,
            config,
            timeout,
            parallel,
            format,
            verbose,
        } => generate_command(
            structure, words, output, config, timeout, parallel, format, verbose,
        ),
        Commands::Analyze {
            structure,
            words,
            config,
        } => analyze_command(structure, words, config),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from an optional config path, falling back to defaults
fn load_settings(config_path: Option<&PathBuf>) -> Result<Settings> {
    match config_path {
        Some(path) if path.exists() => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        Some(path) => {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "Config file {} not found, using defaults",
                    path.display()
                ))
            );
            Ok(Settings::default())
        }
        None => Ok(Settings::default()),
    }
}

#[allow(clippy::too_many_arguments)]
fn generate_command(
    structure_path: PathBuf,
    words_path: PathBuf,
    output_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    timeout: Option<u64>,
    parallel: bool,
    format: Option<FormatArg>,
    verbose: bool,
) -> Result<()> {
    let mut settings = load_settings(config_path.as_ref())?;

    let cli_overrides = CliOverrides {
        timeout_seconds: timeout,
        parallel,
        format: format.map(Into::into),
    };
    settings.merge_with_cli(&cli_overrides);
    settings.validate().context("Configuration validation failed")?;

    let problem = CrosswordProblem::new(settings.clone(), &structure_path, &words_path)
        .context("Failed to load puzzle inputs")?;

    if verbose {
        println!("{}", problem.analyze());
    }

    let Some(solution) = problem.solve().context("Solving failed")? else {
        println!("No solution.");
        return Ok(());
    };

    print!(
        "{}",
        SolutionFormatter::format_grid(problem.crossword().grid(), &solution)
    );

    if verbose {
        println!();
        print!("{}", SolutionFormatter::format_entries(&solution));
        println!(
            "Solved {} slots in {:.3}s",
            solution.metadata.slot_count,
            solution.solve_time.as_secs_f64()
        );
    }

    if let Some(output_path) = output_path {
        match settings.output.format {
            OutputFormat::Svg => save_svg(
                &output_path,
                problem.crossword().grid(),
                &solution,
                &settings.output,
            )?,
            OutputFormat::Json => solution.save_to_file(&output_path)?,
            OutputFormat::Text => {
                let content =
                    SolutionFormatter::format_grid(problem.crossword().grid(), &solution);
                std::fs::write(&output_path, content).with_context(|| {
                    format!("Failed to write output to: {}", output_path.display())
                })?;
            }
        }
        println!(
            "{}",
            ColorOutput::success(&format!("Saved output to {}", output_path.display()))
        );
    }

    Ok(())
}

fn analyze_command(
    structure_path: PathBuf,
    words_path: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let settings = load_settings(config_path.as_ref())?;

    let problem = CrosswordProblem::new(settings, &structure_path, &words_path)
        .context("Failed to load puzzle inputs")?;

    println!(
        "Structure ({}x{}):",
        problem.crossword().grid().height,
        problem.crossword().grid().width
    );
    print!(
        "{}",
        SolutionFormatter::format_structure(problem.crossword().grid())
    );
    println!();
    print!("{}", problem.analyze());

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up example inputs..."));

    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create directory {}", directory.display()))?;

    let config_path = directory.join("config.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_inputs(&directory).context("Failed to create example inputs")?;
    println!("Created example structures and word list in: {}", directory.display());

    println!("{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Run: cargo run -- generate {0}/cross.txt {0}/words.txt", directory.display());
    println!("2. Add an output path to render an image");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "crossword_fill",
            "generate",
            "structure.txt",
            "words.txt",
            "out.svg",
            "--timeout",
            "5",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_missing_positional() {
        let cli = Cli::try_parse_from(["crossword_fill", "generate", "structure.txt"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config.yaml").exists());
        assert!(temp_dir.path().join("cross.txt").exists());
        assert!(temp_dir.path().join("words.txt").exists());
    }

    #[test]
    fn test_generate_command_end_to_end() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let output = temp_dir.path().join("out.svg");
        let result = generate_command(
            temp_dir.path().join("cross.txt"),
            temp_dir.path().join("words.txt"),
            Some(output.clone()),
            None,
            None,
            false,
            None,
            false,
        );

        assert!(result.is_ok());
        assert!(output.exists());
    }
}
