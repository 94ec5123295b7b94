use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use fitcalc::import::read_packages_csv;
use fitcalc::logging::{init_logging, LogConfig, LogFormat};
use fitcalc::message::{render_reports, OutputFormat};
use fitcalc::{
    CoefficientConfig, ErrorSeverity, Package, Report, TrainingError, WorkoutCalculator,
};

/// fitcalc - Workout Summary CLI
///
/// Turns raw sensor packages from running, race-walking and swimming
/// sessions into distance, mean speed and calorie reports.
#[derive(Debug, Parser)]
#[command(name = "fitcalc")]
#[command(version)]
#[command(about = "Workout summary calculator", long_about = None)]
struct Cli {
    /// Coefficient config file (defaults to ~/.fitcalc/config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log format (pretty, json, compact)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: LogFormat,

    /// Also write JSON log events to this file
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Roll the log file daily (only with --log-file)
    #[arg(long, global = true)]
    log_rotate: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process the built-in reference packages
    Demo {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Process a single sensor package
    Calc {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Sensor values: action, duration, weight, then kind extras
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Process every package in a CSV file
    Batch {
        /// CSV file with one `CODE,values...` row per package
        #[arg(short = 'i', long)]
        file: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Inspect coefficient configuration
    Config {
        /// Print the effective coefficients as TOML
        #[arg(short, long)]
        show: bool,

        /// Write the default coefficients to the config path
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&log_config(&cli)) {
        eprintln!("{}", format!("Failed to initialize logging: {:#}", e).red());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn log_config(cli: &Cli) -> LogConfig {
    LogConfig {
        format: cli.log_format,
        file_path: cli.log_file.clone(),
        rotation: cli.log_rotate,
        ..LogConfig::from_verbosity(cli.verbose)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Commands::Demo { format } => {
            let config = load_config(config_path.as_ref())?;
            let reports = process_packages(&config, &Package::demo_packages())?;
            print_reports(&reports, format)?;
        }

        Commands::Calc {
            code,
            values,
            format,
        } => {
            let config = load_config(config_path.as_ref())?;
            let reports = process_packages(&config, &[Package::new(code, values)])?;
            print_reports(&reports, format)?;
        }

        Commands::Batch { file, format } => {
            let config = load_config(config_path.as_ref())?;
            let packages = read_packages_csv(&file)
                .with_context(|| format!("Failed to import packages from {}", file.display()))?;
            let reports = process_packages(&config, &packages)?;
            print_reports(&reports, format)?;
        }

        Commands::Config { show, init } => {
            if init {
                let path = config_path
                    .clone()
                    .unwrap_or_else(CoefficientConfig::default_config_path);
                CoefficientConfig::default().save_to_file(&path)?;
                println!(
                    "{}",
                    format!("✓ Wrote default coefficients to {}", path.display()).green()
                );
            }
            if show || !init {
                let config = load_config(config_path.as_ref())?;
                print!("{}", config.export_to_string()?);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CoefficientConfig> {
    match path {
        Some(path) => CoefficientConfig::load_from_file(path),
        None => CoefficientConfig::load_or_default(),
    }
}

/// Dispatch and evaluate every package; the first failure aborts the run
fn process_packages(config: &CoefficientConfig, packages: &[Package]) -> Result<Vec<Report>> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            package
                .read(config)
                .and_then(|training| training.build_report())
                .map_err(|e| {
                    log_failure(index + 1, package, &e);
                    anyhow::anyhow!(e.user_message())
                })
                .with_context(|| format!("Package #{} ({})", index + 1, package.code))
        })
        .collect()
}

fn log_failure(number: usize, package: &Package, error: &TrainingError) {
    match error.severity() {
        ErrorSeverity::Warning => {
            tracing::warn!(package = number, code = %package.code, %error, "Package rejected")
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            tracing::error!(package = number, code = %package.code, %error, "Package failed")
        }
    }
}

fn print_reports(reports: &[Report], format: OutputFormat) -> Result<()> {
    let output = render_reports(reports, format)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_calc_with_negative_value() {
        let cli = parse(&["fitcalc", "calc", "RUN", "15000", "-1", "75", "-f", "json"]);
        match cli.command {
            Commands::Calc {
                code,
                values,
                format,
            } => {
                assert_eq!(code, "RUN");
                assert_eq!(values, vec![15000.0, -1.0, 75.0]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_calc_requires_values() {
        assert!(Cli::try_parse_from(["fitcalc", "calc", "RUN"]).is_err());
    }

    #[test]
    fn test_log_flags_feed_log_config() {
        let cli = parse(&[
            "fitcalc",
            "batch",
            "-i",
            "packages.csv",
            "-vv",
            "--log-format",
            "json",
            "--log-file",
            "logs/fitcalc.log",
            "--log-rotate",
        ]);
        let config = log_config(&cli);

        assert_eq!(config.level, fitcalc::LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file_path, Some(PathBuf::from("logs/fitcalc.log")));
        assert!(config.rotation);
    }

    #[test]
    fn test_no_log_file_by_default() {
        let config = log_config(&parse(&["fitcalc", "demo"]));
        assert_eq!(config.file_path, None);
        assert!(!config.rotation);
    }

    #[test]
    fn test_process_packages() {
        let reports =
            process_packages(&CoefficientConfig::default(), &Package::demo_packages()).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[1].training_type, "Running");
    }

    #[test]
    fn test_failing_package_is_named_in_error_chain() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XYZ", vec![1.0, 2.0, 3.0]),
        ];
        let err = process_packages(&CoefficientConfig::default(), &packages).unwrap_err();
        let chain = format!("{:#}", err);

        assert!(chain.starts_with("Package #2 (XYZ)"));
        assert!(chain.contains("Unknown workout type 'XYZ'"));
    }

    #[test]
    fn test_failure_logging_covers_every_severity() {
        let package = Package::new("RUN", vec![15000.0, 1.0, 75.0]);
        let errors = [
            TrainingError::UnrecognizedKind {
                code: "XYZ".to_string(),
            },
            TrainingError::Io(std::io::Error::other("disk gone")),
            TrainingError::UnimplementedCalories {
                training_type: "Cycling".to_string(),
            },
        ];

        for error in &errors {
            log_failure(1, &package, error);
        }
        assert_eq!(errors[2].severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_config_init_then_show() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("fitcalc").join("config.toml");
        let path_arg = path.to_str().unwrap();

        run(parse(&["fitcalc", "config", "--init", "--config", path_arg])).unwrap();
        assert_eq!(
            CoefficientConfig::load_from_file(&path).unwrap(),
            CoefficientConfig::default()
        );

        run(parse(&["fitcalc", "config", "--show", "--config", path_arg])).unwrap();
    }

    #[test]
    fn test_demo_and_batch_runs() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        CoefficientConfig::default().save_to_file(&config_path).unwrap();
        let config_arg = config_path.to_str().unwrap();

        run(parse(&["fitcalc", "demo", "--config", config_arg])).unwrap();

        let good = temp_dir.path().join("good.csv");
        fs::write(&good, "RUN,15000,1,75\nSWM,720,1,80,25,40\n").unwrap();
        run(parse(&[
            "fitcalc",
            "batch",
            "-i",
            good.to_str().unwrap(),
            "--config",
            config_arg,
        ]))
        .unwrap();

        let blank = temp_dir.path().join("blank.csv");
        fs::write(&blank, "WLK,9000,,1,75,180\n").unwrap();
        let err = run(parse(&[
            "fitcalc",
            "batch",
            "-i",
            blank.to_str().unwrap(),
            "--config",
            config_arg,
        ]))
        .unwrap_err();
        assert!(format!("{:#}", err).contains("empty value in column 3"));
    }

    #[test]
    fn test_unreadable_config_fails_run() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[running\n").unwrap();

        let cli = parse(&["fitcalc", "demo", "--config", config_path.to_str().unwrap()]);
        assert!(run(cli).is_err());
    }
}
