// Ocean Survey Track Chart Generator CLI
//
// This binary renders every valid (variable set, encoding mode) combination
// of the synthetic survey track to SVG, plus a JSON manifest describing
// the run.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use ocean_track::*;

/// CLI arguments for the chart generator
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Render synthetic ocean survey track charts to SVG", long_about = None)]
struct Args {
    /// Output directory for generated charts
    #[arg(short, long, default_value = "svg")]
    output: PathBuf,

    /// Number of samples along the survey track
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,

    /// RNG seed; identical seeds reproduce identical charts
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Measurement noise as a fraction of each variable's span
    #[arg(long, default_value_t = 0.05)]
    noise: f64,
}

/// Parse and validate the noise fraction
fn parse_noise(noise: f64) -> Result<f64, String> {
    if (0.0..1.0).contains(&noise) {
        Ok(noise)
    } else {
        Err(format!(
            "Invalid noise: {}. Must be a fraction in [0, 1)",
            noise
        ))
    }
}

/// Manifest entry for one emitted chart
#[derive(Debug, Serialize)]
struct ChartEntry {
    filename: String,
    variables: Vec<&'static str>,
    channels: Vec<&'static str>,
}

/// Per-variable observed range recorded in the manifest
#[derive(Debug, Serialize)]
struct RangeSummary {
    min: f64,
    max: f64,
}

/// Run manifest written next to the charts
/// This gets serialized to JSON for downstream tooling
#[derive(Debug, Serialize)]
struct Manifest {
    canvas: (f64, f64),
    samples: usize,
    seed: u64,
    noise: f64,
    temperature: RangeSummary,
    salinity: RangeSummary,
    charts: Vec<ChartEntry>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    let noise = parse_noise(args.noise).map_err(|e| e.to_string())?;

    // Survey configuration: defaults with the CLI overrides applied
    let config = SurveyConfig {
        sample_count: args.samples as usize,
        noise,
        ..SurveyConfig::default()
    };

    let style = ChartStyle::default();

    // Print configuration
    println!("\nOcean Survey Track Chart Generator");
    println!("=======================================");
    println!("  Canvas: {}x{}", style.fig_size.0, style.fig_size.1);
    println!("  Samples: {}", config.sample_count);
    println!("  Seed: {}", args.seed);
    println!("  Noise: ±{:.1}% of span", noise * 100.0);
    println!("  Output: {}", args.output.display());
    println!("=======================================\n");

    // Synthesize the track and compute per-variable ranges once
    let mut rng = StdRng::seed_from_u64(args.seed);
    let samples = generate_track(&config, &mut rng);
    let ranges = compute_ranges(&samples);

    // Render every valid combination
    let specs = chart_specs();

    println!("Rendering charts...");
    let pb = ProgressBar::new(specs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} charts ({percent}%)")?
            .progress_chars("█▓▒░ "),
    );

    let mut rendered = Vec::with_capacity(specs.len());
    for spec in &specs {
        let svg = render_chart(spec, &samples, &ranges, &style);
        rendered.push((spec, svg));
        pb.inc(1);
    }
    pb.finish_with_message("✓ Chart rendering complete");

    // Save all files
    println!("\n💾 Writing files...");
    fs::create_dir_all(&args.output)?;

    let mut entries = Vec::with_capacity(rendered.len());
    for (spec, svg) in &rendered {
        let path = args.output.join(spec.filename());
        fs::write(&path, svg)?;
        println!(
            "  ✓ Wrote {} ({:.1} KB)",
            path.display(),
            svg.len() as f64 / 1_000.0
        );

        entries.push(ChartEntry {
            filename: spec.filename(),
            variables: spec.variables.iter().map(|v| v.key()).collect(),
            channels: spec.mode.channels().iter().map(|c| c.name()).collect(),
        });
    }

    // Write manifest (metadata)
    let manifest = Manifest {
        canvas: style.fig_size,
        samples: config.sample_count,
        seed: args.seed,
        noise,
        temperature: RangeSummary {
            min: ranges.temperature.min,
            max: ranges.temperature.max,
        },
        salinity: RangeSummary {
            min: ranges.salinity.min,
            max: ranges.salinity.max,
        },
        charts: entries,
    };
    let manifest_path = args.output.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    println!("  ✓ Wrote Manifest: {}", manifest_path.display());

    // Print statistics
    println!("\n📊 Statistics:");
    println!(
        "  Temperature range: {:.3} - {:.3} C",
        ranges.temperature.min, ranges.temperature.max
    );
    println!(
        "  Salinity range: {:.3} - {:.3} PSU",
        ranges.salinity.min, ranges.salinity.max
    );
    println!("  Charts written: {}", manifest.charts.len());

    println!("\n✨ Generation complete!");
    println!("📁 Output: {}\n", args.output.display());

    Ok(())
}
