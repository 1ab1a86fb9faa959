//! Tool to run the transit simulation and export its light curve
//!
//! Runs one orbital period with the configured parameters and writes the
//! resulting light curve as CSV, either to stdout or to a file. Rendering
//! and animation belong to other tools; this one only produces the data.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use transitfield::{SimulationConfig, TransitSimulation};

/// Exoplanet transit light curve generator
#[derive(Parser, Debug)]
#[command(name = "transit_curve", version, about)]
struct Args {
    /// Number of frames in one orbital period
    #[arg(long, default_value_t = 200)]
    num_frames: usize,

    /// Radius of the planet
    #[arg(long, default_value_t = 0.3)]
    planet_radius: f64,

    /// Radius of the star
    #[arg(long, default_value_t = 5.0)]
    star_radius: f64,

    /// Distance of the camera from the system
    #[arg(long, default_value_t = 8.0)]
    camera_distance: f64,

    /// Radius of the planet's orbit
    #[arg(long, default_value_t = 2.0)]
    orbit_radius: f64,

    /// Write the light curve to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Print a simple progress bar
fn print_progress(progress: f64, width: usize) {
    let filled_width = (progress * width as f64).round() as usize;
    let empty_width = width - filled_width;

    print!("\r[");
    for _ in 0..filled_width {
        print!("#");
    }
    for _ in 0..empty_width {
        print!(" ");
    }
    print!("] {:.1}%", progress * 100.0);
    let _ = io::stdout().flush();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig {
        num_frames: args.num_frames,
        planet_radius: args.planet_radius,
        star_radius: args.star_radius,
        camera_distance: args.camera_distance,
        orbit_radius: args.orbit_radius,
    };

    println!("Number of frames: {}", config.num_frames);
    println!("Planet radius:    {}", config.planet_radius);
    println!("Star radius:      {}", config.star_radius);
    println!("Camera distance:  {}", config.camera_distance);
    println!("Orbit radius:     {}", config.orbit_radius);

    let mut sim = TransitSimulation::new(config)?;

    // Only show the bar when the curve goes to a file; otherwise it would
    // interleave with the CSV on stdout.
    let show_progress = args.output.is_some();
    for frame in 0..config.num_frames {
        sim.step(frame);
        if show_progress && (frame % 10 == 0 || frame + 1 == config.num_frames) {
            print_progress((frame + 1) as f64 / config.num_frames as f64, 40);
        }
    }
    if show_progress {
        println!();
    }

    let curve = sim.light_curve();

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(writer, "frame,brightness")?;
    for sample in curve {
        writeln!(writer, "{},{}", sample.frame, sample.brightness)?;
    }
    writer.flush()?;

    let min = curve
        .iter()
        .map(|s| s.brightness)
        .fold(f64::INFINITY, f64::min);
    let in_transit = curve.iter().filter(|s| s.brightness < 1.0).count();
    println!(
        "Minimum brightness {:.6} (transit depth {:.6}), {} of {} frames in transit",
        min,
        1.0 - min,
        in_transit,
        curve.len()
    );

    if let Some(path) = &args.output {
        println!("Light curve written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
