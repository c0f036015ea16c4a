use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use lane_runner::{
    evenly_spaced_lanes, init_logging, load_settings, spawn_coin, spawn_ground, spawn_obstacle,
    spawn_player, CameraBlendPlugin, LaneRunnerPlugin, PlayerBlueprint, PrimaryBlendCamera,
    SettingsFile, TrackStart, VirtualCamera,
};
use log::{error, info};

/// An endless lane runner
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON file overriding the default tuning
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Number of lanes
    #[arg(long, default_value_t = 3)]
    lanes: usize,
    /// Distance between neighbouring lanes
    #[arg(long, default_value_t = 2.0)]
    lane_spacing: f32,
}

fn load(args: &Args) -> Result<SettingsFile> {
    let Some(path) = &args.settings else {
        return Ok(SettingsFile::default());
    };
    load_settings(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Lane counts are single digits."
)]
fn populate_track(world: &mut World, args: &Args) -> Result<()> {
    let lanes = evenly_spaced_lanes(args.lanes, args.lane_spacing);
    let width = args.lane_spacing * lanes.len() as f32;
    spawn_ground(world, Vec3::new(0.0, -0.5, 0.0), Vec3::new(width, 1.0, 200.0));

    if let [first, .., last] = lanes.as_slice() {
        spawn_obstacle(world, *first + Vec3::new(0.0, 1.0, 0.0), Vec3::ONE);
        spawn_coin(world, *last + Vec3::new(0.0, 2.0, 0.0), Vec3::splat(0.5));
    }

    let handles = match spawn_player(world, PlayerBlueprint::new(lanes)) {
        Ok(handles) => handles,
        Err(e) => {
            error!("cannot start the run: {e}");
            return Err(e).context("failed to spawn the player");
        }
    };
    info!("player {:?} on the track", handles.player);

    world.spawn((
        Name::new("TrackCamera"),
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, -10.0).looking_at(Vec3::new(0.0, 1.0, 10.0), Vec3::Y),
        VirtualCamera::default(),
        PrimaryBlendCamera,
    ));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let settings = load(&args)?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .insert_resource(settings.locomotion)
        .insert_resource(settings.gestures)
        .add_plugins((LaneRunnerPlugin, CameraBlendPlugin));

    populate_track(app.world_mut(), &args)?;
    app.world_mut().trigger(TrackStart);

    if let AppExit::Error(code) = app.run() {
        bail!("app exited with code {code}");
    }
    Ok(())
}
