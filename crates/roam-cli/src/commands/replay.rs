use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use roam_core::cluster::Marker;
use roam_core::dispatch::{Collaborators, DispatchOutcome, Interaction};
use roam_core::geo::Coordinate;
use roam_core::services::EventLog;
use roam_core::session::ExploreSession;
use roam_core::viewport::{AnimationId, Region};
use serde::Deserialize;
use tracing::info;

use super::{load_config, load_points};
use crate::summary::{print_event, print_markers};

#[derive(Args)]
pub struct ReplayArgs {
    /// Listings file (GeoJSON-like feature collection)
    pub file: PathBuf,

    /// Interaction script (TOML, a list of [[step]] tables)
    pub script: PathBuf,

    /// Map config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the marker set after every step
    #[arg(long)]
    pub show_markers: bool,
}

#[derive(Debug, Deserialize)]
struct ReplayScript {
    #[serde(default, rename = "step")]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Step {
    /// The chip at `index` was measured at `offset` pixels.
    ChipLayout { index: usize, offset: f64 },
    ChipTap { index: usize },
    /// Tap the marker with this render key.
    Tap { key: String },
    /// User pan/zoom.
    Pan {
        latitude: f64,
        longitude: f64,
        latitude_delta: f64,
        longitude_delta: f64,
    },
    /// The newest programmatic animation finished.
    AnimationComplete,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let contents = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: ReplayScript = toml::from_str(&contents).context("Invalid replay script")?;

    let report = load_points(&args.file)?;
    let listings = report.points.len();
    let rejected = report.rejected.len();
    let mut session = ExploreSession::new(report.points, &config)?;
    let log = EventLog::new();
    let mut last_animation: Option<AnimationId> = None;

    print_markers(session.markers(), listings, rejected);

    let pb = ProgressBar::new(script.steps.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    for (n, step) in script.steps.iter().enumerate() {
        pb.set_message(format!("step {}", n + 1));
        pb.suspend(|| println!("  step {}: {:?}", n + 1, step));

        match step {
            Step::ChipLayout { index, offset } => session.report_layout(*index, *offset)?,
            Step::ChipTap { index } => {
                session.handle(&Interaction::ChipTap(*index), Collaborators::all(&log))?;
            }
            Step::Tap { key } => {
                let interaction = match session.find_marker(key) {
                    Some(Marker::Cluster(c)) => Interaction::ClusterTap(c.clone()),
                    Some(Marker::Leaf(p)) => Interaction::MarkerTap(p.clone()),
                    None => return Err(anyhow!("No marker with key {key:?} at step {}", n + 1)),
                };
                let outcome = session.handle(&interaction, Collaborators::all(&log))?;
                if let DispatchOutcome::Zoomed(id) = outcome {
                    last_animation = Some(id);
                }
            }
            Step::Pan {
                latitude,
                longitude,
                latitude_delta,
                longitude_delta,
            } => {
                let region = Region::new(
                    Coordinate::new(*latitude, *longitude),
                    *latitude_delta,
                    *longitude_delta,
                )?;
                session.on_region_change(region)?;
            }
            Step::AnimationComplete => {
                if let Some(id) = last_animation.take() {
                    let applied = session.on_animation_complete(id);
                    info!(animation = %id, applied, "Animation complete");
                }
            }
        }

        let events = log.drain();
        pb.suspend(|| {
            for event in &events {
                print_event(event);
            }
            if args.show_markers {
                print_markers(session.markers(), listings, rejected);
            }
        });
        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!();
    print_markers(session.markers(), listings, rejected);
    println!(
        "Active category: {}",
        session.selection().active_category().label
    );

    Ok(())
}
