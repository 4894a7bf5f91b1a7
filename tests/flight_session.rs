use approx::assert_relative_eq;
use parabolic_viz::core::camera::CanvasExtents;
use parabolic_viz::core::params::{LaunchParameters, Param, StaticInput};
use parabolic_viz::core::playback::{PlaybackConfig, PlaybackState, TickOutcome};
use parabolic_viz::core::session::Session;

fn tower_shot() -> Session<StaticInput> {
    let input = StaticInput::new(LaunchParameters {
        speed_mps: 20.0,
        angle_deg: 0.0,
        gravity_mps2: 9.8,
        height_m: 10.0,
    });
    Session::new(
        input,
        PlaybackConfig::full(),
        CanvasExtents::new(1200.0, 700.0),
    )
}

#[test]
fn step_pauses_then_advances_in_fixed_quanta() {
    let mut session = tower_shot();
    session.launch();
    session.frame(0.0);
    session.frame(0.1);
    let before = session.playback().elapsed_s();

    for _ in 0..3 {
        assert_eq!(session.step(), TickOutcome::Advanced);
    }

    assert_eq!(session.state(), PlaybackState::Paused);
    assert_relative_eq!(session.playback().elapsed_s(), before + 0.15, epsilon = 1e-12);

    // Paused frames hold position.
    session.frame(0.5);
    assert_relative_eq!(session.playback().elapsed_s(), before + 0.15, epsilon = 1e-12);
}

#[test]
fn tower_shot_lands_at_closed_form_range() {
    let mut session = tower_shot();
    session.launch();

    let mut t = 0.0;
    let mut landed = false;
    for _ in 0..1_000 {
        if session.frame(t) == Some(TickOutcome::Landed) {
            landed = true;
            break;
        }
        t += 1.0 / 60.0;
    }
    assert!(landed, "shot never landed");

    let flight_time = (2.0 * 10.0 / 9.8_f64).sqrt();
    let scene = session.scene();
    assert_relative_eq!(scene.elapsed_s, flight_time, epsilon = 1e-9);
    assert_relative_eq!(scene.stats.range_m, 20.0 * flight_time, epsilon = 1e-9);
    assert_relative_eq!(scene.stats.peak_altitude_m, 10.0, epsilon = 1e-12);
    assert_eq!(scene.trajectory.last().map(|p| p.y), Some(0.0));
    assert!(!session.input().is_locked());
}

#[test]
fn relaunch_mid_flight_restarts_the_trace() {
    let mut session = tower_shot();
    session.launch();
    session.frame(0.0);
    session.frame(0.2);
    session.frame(0.4);
    assert!(session.playback().trajectory().len() > 1);

    session.launch();
    assert_eq!(session.playback().trajectory().len(), 1);
    assert_eq!(session.state(), PlaybackState::Flying);
}

#[test]
fn edits_after_landing_refresh_the_preview() {
    let mut session = tower_shot();
    session.launch();
    while session.state() != PlaybackState::Landed {
        session.step();
    }

    assert!(session.input_mut().set(Param::Speed, 40.0));
    session.frame(10.0);
    assert_eq!(session.preview().speed_mps, 40.0);

    let scene = session.scene();
    assert_eq!(scene.state, PlaybackState::Landed);
    let flight_time = (2.0 * 10.0 / 9.8_f64).sqrt();
    assert_relative_eq!(scene.stats.range_m, 40.0 * flight_time, epsilon = 1e-9);
    assert_relative_eq!(scene.impact_marker.x, 40.0 * flight_time, epsilon = 1e-9);
    assert_relative_eq!(
        scene.trajectory.last().map_or(0.0, |p| p.x),
        20.0 * flight_time,
        epsilon = 1e-9
    );
}
