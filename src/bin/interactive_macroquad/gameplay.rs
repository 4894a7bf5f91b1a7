use parabolic_viz::core::playback::{PlaybackState, TickOutcome};

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.session.reset();
        state.status_line = "Reset".to_string();
        return;
    }

    let active = state.session.state().is_active();
    if actions.launch || (actions.launch_or_pause && !active) {
        state.session.launch();
        state.status_line = "Shot launched".to_string();
    } else if actions.pause || actions.launch_or_pause {
        if state.session.toggle_pause() {
            state.status_line = if state.session.state() == PlaybackState::Paused {
                "Paused".to_string()
            } else {
                "Resumed".to_string()
            };
        }
    }

    if actions.step {
        match state.session.step() {
            TickOutcome::Advanced => {
                state.status_line = format!(
                    "Stepped to {:.2} s",
                    state.session.playback().elapsed_s()
                );
            }
            TickOutcome::Landed => state.status_line = landed_status(state),
            _ => {}
        }
    }
}

pub(crate) fn advance_frame(state: &mut AppRuntime, frame_time_s: f64) {
    let time_scale = f64::from(state.panel().time_scale);
    state.session.set_time_scale(time_scale);

    if state.session.frame(frame_time_s) == Some(TickOutcome::Landed) {
        state.status_line = landed_status(state);
    }
}

fn landed_status(state: &AppRuntime) -> String {
    let stats = state
        .session
        .playback()
        .flight()
        .map(|flight| flight.stats)
        .unwrap_or_default();
    format!(
        "Landed at x={:.2} m after {:.2} s",
        stats.range_m, stats.flight_time_s
    )
}
