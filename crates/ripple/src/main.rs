#![forbid(unsafe_code)]

//! # Ripple CLI
//!
//! Command-line front end for the interference drivers.
//!
//! ## Usage
//!
//! ```bash
//! ripple probe --x 1.5 --y -2        # One evaluation
//! ripple slice --frames 60           # Plot a cross-section
//! ripple surface --format csv        # Dump every surface vertex
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ripple::cli::{Cli, Command, ProbeArgs, ProbeFormat, SliceArgs, SliceFormat, SurfaceArgs, SurfaceFormat};
use ripple::{
    Clock, Config, Controls, CrossSection, ElapsedClock, FrameAccumulator, FrameSnapshot,
    SurfaceGrid, TextPlot,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => Config::default(),
    };

    let mut controls = config.controls;
    cli.overrides
        .apply(&mut controls)
        .context("invalid parameter override")?;
    debug!(?controls, "resolved controls");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Probe(args) => probe(&controls, args, &mut out)?,
        Command::Slice(args) => slice(&controls, config.slice_y, args, &mut out)?,
        Command::Surface(args) => surface(&controls, args, &mut out)?,
    }

    out.flush().context("failed to write output")?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn probe(controls: &Controls, args: &ProbeArgs, out: &mut impl Write) -> Result<()> {
    let frame = FrameSnapshot::capture(controls, args.time);
    let result = frame.evaluate(args.x, args.y);

    match args.format {
        ProbeFormat::Plain => {
            writeln!(out, "{:<10} {:>12.6}", "total", result.total)?;
            for (i, c) in result.components.iter().enumerate() {
                writeln!(out, "{:<10} {:>12.6}", format!("source {}", i + 1), c)?;
            }
        }
        ProbeFormat::Json => {
            let report = serde_json::json!({
                "x": args.x,
                "y": args.y,
                "time": args.time,
                "total": result.total,
                "components": result.components,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

fn slice(controls: &Controls, default_slice_y: f64, args: &SliceArgs, out: &mut impl Write) -> Result<()> {
    let mut clock = FrameAccumulator::new();
    for _ in 0..args.frames {
        clock.advance(1.0 / 60.0, controls.speed);
    }
    let frame = FrameSnapshot::capture(controls, clock.time(controls.speed));

    let section = CrossSection::new(args.slice_y.unwrap_or(default_slice_y)).with_steps(args.steps);
    let profile = section.sample(&frame);
    info!(frames = clock.frames(), time = frame.time(), "cross-section ready");

    match args.format {
        SliceFormat::Plot => {
            let envelope = frame.params.peak_envelope(frame.sources.len());
            writeln!(
                out,
                "cross-section y = {:.2}, t = {:.2}",
                profile.slice_y, profile.time
            )?;
            write!(out, "{}", TextPlot::new(args.width, args.height).render(&profile, envelope))?;
            writeln!(out, ". source 1   + source 2   # composite")?;
        }
        SliceFormat::Csv => write!(out, "{}", profile.to_csv())?,
        SliceFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?,
    }
    Ok(())
}

fn surface(controls: &Controls, args: &SurfaceArgs, out: &mut impl Write) -> Result<()> {
    let clock = ElapsedClock::at(args.elapsed);
    let frame = FrameSnapshot::capture(controls, clock.time(controls.speed));
    let surface = SurfaceGrid::new(args.size, args.segments).sample(&frame);
    let stats = surface.stats();
    info!(vertices = stats.vertices, time = frame.time(), "surface ready");

    match args.format {
        SurfaceFormat::Summary => {
            writeln!(out, "vertices {}", stats.vertices)?;
            writeln!(out, "time     {:.6}", frame.time())?;
            writeln!(out, "min      {:.6}", stats.min)?;
            writeln!(out, "max      {:.6}", stats.max)?;
            writeln!(out, "mean     {:.6}", stats.mean)?;
        }
        SurfaceFormat::Csv => {
            writeln!(out, "x,y,z")?;
            for (x, y, z) in surface.vertices() {
                writeln!(out, "{x},{y},{z}")?;
            }
        }
        SurfaceFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?,
    }
    Ok(())
}
