use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;

use launch_kinematics::constants::G_ACCEL_MPS2;
use launch_kinematics::{solve, FlightSummary, Known, Parameter, ParameterPair};

#[derive(Parser)]
#[command(name = "launch")]
#[command(version = "0.1.0")]
#[command(about = "Closed-form projectile launch-velocity calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the launch velocity from two known parameters
    Solve {
        /// Gravitational acceleration (m/s², must be positive)
        #[arg(short, long, default_value_t = G_ACCEL_MPS2)]
        gravity: f64,

        /// Known parameter as name=value or rank=value, given exactly
        /// twice (e.g. --known initial-speed=20 --known angle=30)
        #[arg(short, long = "known")]
        known: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        output: OutputFormat,
    },

    /// List the ten supported parameter combinations
    Pairs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            gravity,
            known,
            output,
        } => {
            if known.len() != 2 {
                return Err(format!(
                    "expected exactly two --known arguments, got {}",
                    known.len()
                )
                .into());
            }
            let a = parse_known(&known[0])?;
            let b = parse_known(&known[1])?;

            let velocity = solve(gravity, a, b)?;
            let summary = FlightSummary::from_velocity(&velocity, gravity);
            display_summary(&summary, output)?;
        }

        Commands::Pairs => {
            println!("Supported parameter pairs:");
            for pair in ParameterPair::ALL {
                let (first, second) = pair.parameters();
                println!(
                    "  {} ({}) + {} ({})",
                    first,
                    first.unit(),
                    second,
                    second.unit()
                );
            }
        }
    }

    Ok(())
}

/// Parse a `name=value` known-parameter argument, enforcing the sign
/// convention: angles may carry any finite value, everything else must
/// be positive.
fn parse_known(arg: &str) -> Result<Known, Box<dyn Error>> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{arg}'"))?;
    let parameter: Parameter = name.trim().parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{value}' for {parameter}"))?;

    if !value.is_finite() {
        return Err(format!("value for {parameter} must be finite").into());
    }
    if parameter != Parameter::Angle && value <= 0.0 {
        return Err(format!("value for {parameter} must be positive, got {value}").into());
    }

    Ok(Known::new(parameter, value))
}

fn display_summary(summary: &FlightSummary, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }

        OutputFormat::Table => {
            println!("╔══════════════════════════════════════════╗");
            println!("║         LAUNCH VELOCITY SOLUTION         ║");
            println!("╠══════════════════════════════════════════╣");
            println!("║ Horizontal vx:    {:>12.4} m/s        ║", summary.vx);
            println!("║ Vertical vy:      {:>12.4} m/s        ║", summary.vy);
            println!("╠══════════════════════════════════════════╣");
            println!("║ Initial Speed:    {:>12.4} m/s        ║", summary.initial_speed);
            println!("║ Time of Flight:   {:>12.4} s          ║", summary.time_of_flight);
            println!("║ Horizontal Range: {:>12.4} m          ║", summary.horizontal_range);
            println!("║ Release Angle:    {:>12.4} deg        ║", summary.release_angle_deg);
            println!("║ Max Height:       {:>12.4} m          ║", summary.max_height);
            println!("╚══════════════════════════════════════════╝");
        }
    }

    Ok(())
}
