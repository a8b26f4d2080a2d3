//! Command line front end for the ephemeris catalog
//!
//! Subcommands:
//! - `list`: List catalog entries
//! - `position`: State of one body at one instant
//! - `trajectory`: Evenly sampled states over a date range
//! - `export`: Write the active catalog to a JSON file
//!
//! Set `RUST_LOG=info` (or `debug`) to see query logging.

mod args;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ephemeris::catalog::{Catalog, CatalogConstants};
use ephemeris::julian::julian_date_now;
use ephemeris::query::{position_of, trajectory, BodyState, PositionQuery, TrajectoryPoint};
use ephemeris::{BodyType, DisplayUnits, Vector3};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::args::{InstantArg, UnitsArg};

#[derive(Parser, Debug)]
#[command(name = "ephem")]
#[command(about = "Positions and trajectories of solar system and interstellar objects")]
#[command(version)]
struct Args {
    /// JSON catalog file to use instead of the built-in solar system
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output units for positions, velocities and distances
    #[arg(long, global = true, default_value_t = UnitsArg::Au)]
    units: UnitsArg,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List bodies and interstellar objects in the catalog
    List,

    /// Compute the state of one body
    Position {
        /// Body id (e.g. "earth", "halley", "oumuamua")
        body: String,

        /// Julian Date, YYYY-MM-DD or RFC 3339 timestamp (default: now)
        #[arg(short, long)]
        at: Option<InstantArg>,
    },

    /// Sample a body's trajectory between two instants
    Trajectory {
        /// Body id
        body: String,

        /// Start instant (Julian Date, YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        start: InstantArg,

        /// End instant (Julian Date, YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        end: InstantArg,

        /// Number of samples, including both ends
        #[arg(short = 'n', long, default_value_t = 25)]
        samples: usize,
    },

    /// Write the active catalog to a JSON file
    Export {
        /// Output JSON file
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct TrajectoryOutput<'a> {
    body_id: &'a str,
    points: &'a [TrajectoryPoint],
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::solar_system(CatalogConstants::default())
            .context("Failed to build the built-in catalog"),
    }
}

fn format_vector(v: &Vector3) -> String {
    format!("({:+.6e}, {:+.6e}, {:+.6e})", v.x, v.y, v.z)
}

fn cmd_list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Entry<'a> {
            id: &'a str,
            name: &'a str,
            kind: BodyType,
        }

        let entries: Vec<_> = catalog
            .bodies()
            .into_iter()
            .map(|b| Entry {
                id: b.id(),
                name: b.name(),
                kind: b.kind(),
            })
            .chain(catalog.interstellar_objects().into_iter().map(|o| Entry {
                id: o.id(),
                name: o.name(),
                kind: BodyType::InterstellarObject,
            }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("ID                       NAME                         TYPE");
    for body in catalog.bodies() {
        println!("{:<24} {:<28} {}", body.id(), body.name(), body.kind());
    }
    for object in catalog.interstellar_objects() {
        println!(
            "{:<24} {:<28} InterstellarObject (discovered {} by {})",
            object.id(),
            object.name(),
            object.discovery_date(),
            if object.discoverer().is_empty() {
                "unknown"
            } else {
                object.discoverer()
            }
        );
    }
    Ok(())
}

fn print_state(state: &BodyState) -> Result<()> {
    let units = state.units;
    println!(
        "{} ({}, {}) at JD {:.5} ({})",
        state.name,
        state.body_id,
        state.kind,
        state.julian_date,
        state.timestamp.format(&Rfc3339)?
    );
    println!(
        "  position: {} {}",
        format_vector(&state.position),
        units.distance_label()
    );
    println!(
        "  velocity: {} {}",
        format_vector(&state.velocity),
        units.velocity_label()
    );
    println!("  distance: {:.6e} {}", state.distance, units.distance_label());
    Ok(())
}

fn cmd_position(
    catalog: &Catalog,
    body: &str,
    at: Option<InstantArg>,
    units: DisplayUnits,
    json: bool,
) -> Result<()> {
    let julian_date = at.map_or_else(julian_date_now, |at| at.0);
    let state = position_of(catalog, &PositionQuery::new(body, julian_date))?.in_units(units);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_state(&state)?;
    }
    Ok(())
}

fn cmd_trajectory(
    catalog: &Catalog,
    body: &str,
    start: InstantArg,
    end: InstantArg,
    samples: usize,
    units: DisplayUnits,
    json: bool,
) -> Result<()> {
    let points: Vec<_> = trajectory(catalog, body, start.0, end.0, samples)?
        .into_iter()
        .map(|p| p.in_units(units))
        .collect();

    if json {
        let output = TrajectoryOutput {
            body_id: body,
            points: &points,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} from {} to {} ({} samples)",
        body,
        start,
        end,
        points.len()
    );
    for point in &points {
        println!(
            "  {}  JD {:.5}  r = {} {}  v = {} {}",
            point.timestamp.format(&Rfc3339)?,
            point.julian_date,
            format_vector(&point.position),
            units.distance_label(),
            format_vector(&point.velocity),
            units.velocity_label()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let catalog = load_catalog(args.catalog.as_deref())?;
    let units = DisplayUnits::from(args.units);

    match args.command {
        Command::List => cmd_list(&catalog, args.json),
        Command::Position { body, at } => cmd_position(&catalog, &body, at, units, args.json),
        Command::Trajectory {
            body,
            start,
            end,
            samples,
        } => cmd_trajectory(&catalog, &body, start, end, samples, units, args.json),
        Command::Export { output } => {
            catalog
                .save_to_file(&output)
                .with_context(|| format!("Failed to write catalog to {}", output.display()))?;
            log::info!("Wrote {} catalog entries to {}", catalog.len(), output.display());
            Ok(())
        }
    }
}
