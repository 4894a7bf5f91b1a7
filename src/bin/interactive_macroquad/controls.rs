use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use parabolic_viz::core::params::{
    ANGLE_RANGE_DEG, GRAVITY_RANGE_MPS2, HEIGHT_RANGE_M, ParamRange, SPEED_RANGE_MPS,
};
use parabolic_viz::core::playback::{MAX_TIME_SCALE, MIN_TIME_SCALE, PlaybackState};

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) launch_or_pause: bool,
    pub(crate) pause: bool,
    pub(crate) step: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            launch_or_pause: self.launch_or_pause || other.launch_or_pause,
            pause: self.pause || other.pause,
            step: self.step || other.step,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Enter),
        launch_or_pause: is_key_pressed(KeyCode::Space),
        pause: is_key_pressed(KeyCode::P),
        step: is_key_pressed(KeyCode::S),
        reset: is_key_pressed(KeyCode::R),
    }
}

fn range_f32(range: ParamRange) -> std::ops::Range<f32> {
    range.min as f32..range.max as f32
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let basic = state.basic();
    let playback_state = state.session.state();
    let panel = state.panel_mut();
    let locked = panel.is_locked();

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch Controls")
    .ui(&mut *root_ui(), |ui| {
        if locked {
            ui.label(None, &format!("Angle: {:.1} deg", panel.angle_deg));
            ui.label(None, &format!("Velocity: {:.1} m/s", panel.speed_mps));
            ui.label(None, &format!("Gravity: {:.2} m/s^2", panel.gravity_mps2));
            if !basic {
                ui.label(None, &format!("Height: {:.1} m", panel.height_m));
            }
            ui.label(None, "(locked while in flight)");
        } else {
            ui.slider(
                hash!(),
                "Angle (deg)",
                range_f32(ANGLE_RANGE_DEG),
                &mut panel.angle_deg,
            );
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                range_f32(SPEED_RANGE_MPS),
                &mut panel.speed_mps,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                range_f32(GRAVITY_RANGE_MPS2),
                &mut panel.gravity_mps2,
            );
            if !basic {
                ui.slider(
                    hash!(),
                    "Height (m)",
                    range_f32(HEIGHT_RANGE_M),
                    &mut panel.height_m,
                );
            }
        }
        ui.slider(
            hash!(),
            "Simulation Speed",
            MIN_TIME_SCALE as f32..MAX_TIME_SCALE as f32,
            &mut panel.time_scale,
        );
        ui.separator();
        ui.checkbox(
            hash!(),
            "Show prediction",
            &mut panel.overlays.show_prediction,
        );
        ui.checkbox(hash!(), "Show vectors", &mut panel.overlays.show_vectors);
        ui.separator();
        if ui.button(None, "Launch (Enter)") {
            actions.launch = true;
        }
        if !basic {
            let pause_label = if playback_state == PlaybackState::Paused {
                "Resume (P)"
            } else {
                "Pause (P)"
            };
            if ui.button(None, pause_label) {
                actions.pause = true;
            }
            if ui.button(None, "Step (S)") {
                actions.step = true;
            }
        }
        if ui.button(None, "Reset (R)") {
            actions.reset = true;
        }
        ui.label(None, &format!("State: {}", playback_state.label()));
    });

    panel.sync();
    actions
}
