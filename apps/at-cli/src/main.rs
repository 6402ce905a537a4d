use at_solver::{
    AircraftParams, FlightCondition, NewtonConfig, ReportMode, TrimProblem, render,
    solve_with_trace,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

mod error;
use error::CliResult;

#[derive(Parser)]
#[command(name = "at-cli")]
#[command(about = "Aerotrim CLI - longitudinal trim calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a trim point
    Trim {
        /// Aircraft data file (YAML); the built-in Airbus A300 when omitted
        #[arg(long)]
        aircraft: Option<PathBuf>,
        /// True airspeed (m/s)
        #[arg(long)]
        airspeed: f64,
        /// Air density (kg/m^3)
        #[arg(long)]
        density: f64,
        /// Flight path angle (rad)
        #[arg(long, default_value_t = 0.0)]
        gamma: f64,
        /// Gravitational acceleration (m/s^2)
        #[arg(long, default_value_t = at_solver::STANDARD_GRAVITY)]
        gravity: f64,
        /// Relative step tolerance
        #[arg(long)]
        tolerance: Option<f64>,
        /// Iteration cap
        #[arg(long)]
        max_iterations: Option<usize>,
        /// Reporting detail
        #[arg(long, value_enum, default_value = "last")]
        report: ReportArg,
        /// Print the solution as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Check an aircraft data file
    Validate {
        /// Path to the aircraft YAML file
        aircraft_path: PathBuf,
    },
    /// Print the built-in A300 as a YAML template
    Sample,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportArg {
    All,
    Last,
    Silent,
}

impl From<ReportArg> for ReportMode {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::All => ReportMode::All,
            ReportArg::Last => ReportMode::Last,
            ReportArg::Silent => ReportMode::Silent,
        }
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trim {
            aircraft,
            airspeed,
            density,
            gamma,
            gravity,
            tolerance,
            max_iterations,
            report,
            json,
        } => cmd_trim(
            aircraft.as_deref(),
            airspeed,
            density,
            gamma,
            gravity,
            tolerance,
            max_iterations,
            report,
            json,
        ),
        Commands::Validate { aircraft_path } => cmd_validate(&aircraft_path),
        Commands::Sample => cmd_sample(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_trim(
    aircraft_path: Option<&Path>,
    airspeed: f64,
    density: f64,
    gamma: f64,
    gravity: f64,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
    report: ReportArg,
    json: bool,
) -> CliResult<()> {
    let aircraft = match aircraft_path {
        Some(path) => load_aircraft(path)?,
        None => AircraftParams::a300(),
    };

    let problem = TrimProblem::new(
        aircraft,
        FlightCondition {
            airspeed,
            air_density: density,
            flight_path_angle: gamma,
        },
    );

    let mut config = NewtonConfig {
        gravity,
        ..NewtonConfig::default()
    };
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = max_iterations {
        config.max_iterations = max_iterations;
    }

    let (solution, trace) = solve_with_trace(&problem, Some(config))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    if let Some(text) = render(report.into(), &problem, &solution, &trace) {
        print!("{}", text);
    }

    if solution.converged {
        println!("✓ Converged in {} iterations", solution.iterations);
    } else {
        println!(
            "⚠ Not converged after {} iterations (error {:.3e})",
            solution.iterations, solution.final_error
        );
    }

    Ok(())
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    println!("Validating aircraft file: {}", path.display());
    let aircraft = load_aircraft(path)?;
    aircraft.validate()?;
    println!("✓ {} is valid", aircraft.name);
    Ok(())
}

fn cmd_sample() -> CliResult<()> {
    print!("{}", serde_yaml::to_string(&AircraftParams::a300())?);
    Ok(())
}

fn load_aircraft(path: &Path) -> CliResult<AircraftParams> {
    let text = std::fs::read_to_string(path)?;
    let aircraft: AircraftParams = serde_yaml::from_str(&text)?;
    Ok(aircraft)
}
