//! Track start blends to the primary camera in a full runner app.

use bevy::prelude::*;
use lane_runner::{PrimaryBlendCamera, TrackStart, VirtualCamera};
use test_utils::{event_counts, run_frames, RunnerAppBuilder};

#[test]
fn track_start_enables_only_the_primary_camera() {
    let mut app = RunnerAppBuilder::new().build();
    let primary = app
        .world_mut()
        .spawn((VirtualCamera::default(), PrimaryBlendCamera))
        .id();
    let intro = app
        .world_mut()
        .spawn(VirtualCamera {
            enabled: true,
            priority: 1,
        })
        .id();
    run_frames(&mut app, 1);
    assert_eq!(
        app.world().get::<VirtualCamera>(primary).map(|c| c.enabled),
        Some(false)
    );

    app.world_mut().trigger(TrackStart);
    run_frames(&mut app, 1);

    assert_eq!(event_counts(&app).track_starts, 1);
    assert_eq!(
        app.world().get::<VirtualCamera>(primary).map(|c| c.enabled),
        Some(true)
    );
    assert_eq!(
        app.world().get::<VirtualCamera>(intro).copied(),
        Some(VirtualCamera {
            enabled: true,
            priority: 1,
        })
    );
}
