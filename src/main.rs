use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use log::{error, info};
use parabolic_viz::core::ballistics::EARTH_GRAVITY_MPS2;
use parabolic_viz::core::params::LaunchParameters;
use parabolic_viz::core::plot::{PlotError, write_chart};
use thiserror::Error;

const MAX_SAMPLES: i64 = 100_000;

#[derive(Parser, Debug)]
#[command(name = "parabolic_viz", version)]
#[command(about = "Flight time, peak altitude and range of a projectile over flat ground")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Launch angle in degrees [0, 90]
    angle_deg: Option<f64>,

    /// Launch speed in m/s [5, 100]
    speed_mps: Option<f64>,

    /// Launch height in meters [0, 100]
    height_m: Option<f64>,

    /// Gravitational acceleration in m/s^2 [1, 20]
    #[arg(short, long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,

    /// Write a trajectory chart (SVG, or PNG for a .png path). Defaults to a timestamped SVG.
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    plot: Option<Option<PathBuf>>,

    /// Points along the charted trajectory
    #[arg(long, default_value_t = 240, value_parser = clap::value_parser!(u32).range(1..=MAX_SAMPLES))]
    samples: u32,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("expected all of <angle_deg> <speed_mps> <height_m>, or none to be prompted")]
    PartialArguments,
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("input ended unexpectedly (EOF)")]
    Eof,
    #[error(transparent)]
    Plot(#[from] PlotError),
}

fn read_f64(prompt: &str) -> Result<f64, CliError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(CliError::Eof);
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

/// Launch parameters from the command line, or `None` when the user should be prompted.
fn params_from_args(args: &Args) -> Result<Option<LaunchParameters>, CliError> {
    match (args.angle_deg, args.speed_mps, args.height_m) {
        (Some(angle_deg), Some(speed_mps), Some(height_m)) => Ok(Some(
            LaunchParameters {
                speed_mps,
                angle_deg,
                gravity_mps2: args.gravity,
                height_m,
            }
            .clamped(),
        )),
        (None, None, None) => Ok(None),
        _ => Err(CliError::PartialArguments),
    }
}

fn params_from_user(gravity_mps2: f64) -> Result<LaunchParameters, CliError> {
    Ok(LaunchParameters {
        angle_deg: read_f64("Angle (degrees): ")?,
        speed_mps: read_f64("Velocity (m/s): ")?,
        height_m: read_f64("Height (m): ")?,
        gravity_mps2,
    }
    .clamped())
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(Local::now().format("trajectory_%Y%m%d_%H%M%S.svg").to_string())
}

fn run(args: Args) -> Result<(), CliError> {
    let params = match params_from_args(&args)? {
        Some(params) => params,
        None => params_from_user(args.gravity)?,
    };

    let stats = params.stats();
    let velocity = params.velocity();
    println!("\nTime of flight: {:.4} s", stats.flight_time_s);
    println!("Peak altitude: {:.4} m", stats.peak_altitude_m);
    println!("Horizontal distance: {:.4} m", stats.range_m);
    println!(
        "Launch velocity: vx = {:.4} m/s, vy = {:.4} m/s",
        velocity.vx, velocity.vy
    );

    if let Some(plot) = args.plot {
        let path = plot.unwrap_or_else(default_plot_path);
        write_chart(&path, &params, args.samples as usize)?;
        info!("chart written with {} samples", args.samples);
        println!("Chart: {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("parabolic_viz").chain(argv.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn all_positionals_build_clamped_parameters() {
        let params = params_from_args(&parse(&["120", "30", "-2", "--gravity", "10"]))
            .expect("parameters should resolve")
            .expect("parameters were given");

        assert_eq!(params.angle_deg, 90.0);
        assert_eq!(params.speed_mps, 30.0);
        assert_eq!(params.height_m, 0.0);
        assert_eq!(params.gravity_mps2, 10.0);
    }

    #[test]
    fn no_positionals_means_prompt() {
        let args = parse(&[]);
        assert!(params_from_args(&args).expect("no error").is_none());
        assert_eq!(args.gravity, EARTH_GRAVITY_MPS2);
        assert!(args.plot.is_none());
    }

    #[test]
    fn partial_positionals_are_rejected() {
        let err = params_from_args(&parse(&["45", "30"])).expect_err("should fail");
        assert!(matches!(err, CliError::PartialArguments));
    }

    #[test]
    fn plot_flag_takes_an_optional_path() {
        assert_eq!(parse(&["--plot"]).plot, Some(None));
        assert_eq!(
            parse(&["--plot", "arc.png"]).plot,
            Some(Some(PathBuf::from("arc.png")))
        );
    }

    #[test]
    fn sample_count_is_bounded() {
        assert_eq!(parse(&["--samples", "500"]).samples, 500);
        for bad in ["0", "100001", "18446744073709551615"] {
            let argv = ["parabolic_viz", "--samples", bad];
            assert!(Args::try_parse_from(argv).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn default_plot_path_is_timestamped_svg() {
        let path = default_plot_path();
        let name = path.to_string_lossy();
        assert!(name.starts_with("trajectory_"));
        assert!(name.ends_with(".svg"));
        assert_eq!(name.len(), "trajectory_20260101_000000.svg".len());
    }
}
