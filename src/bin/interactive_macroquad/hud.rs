use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::render::{PlotRect, draw_ui_text};
use crate::state::AppRuntime;

const HEADER_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);

pub(crate) fn draw_hud(state: &AppRuntime, plot: PlotRect, screen_h: f32, font: Option<&Font>) {
    draw_header_block(state, plot, font);
    draw_status_block(state, plot, screen_h, font);
}

fn draw_header_block(state: &AppRuntime, plot: PlotRect, font: Option<&Font>) {
    draw_ui_text(
        "ParabolicRust - Projectile Motion",
        plot.left,
        TITLE_Y,
        30,
        HEADER_COLOR,
        font,
    );

    let scale = format!("Zoom: {:.2} px/m", state.session.camera().current_scale());
    let scale_size = measure_text(&scale, font, 20, 1.0);
    draw_ui_text(
        &scale,
        plot.right - scale_size.width,
        TITLE_Y,
        20,
        DARKGRAY,
        font,
    );

    let controls = if state.basic() {
        "Controls: Enter/Space launch | R reset"
    } else {
        "Controls: Enter launch | Space launch/pause | P pause | S step 0.05 s | R reset"
    };
    draw_ui_text(controls, plot.left + 12.0, CONTROLS_Y, 20, DARKGRAY, font);
}

fn draw_status_block(state: &AppRuntime, plot: PlotRect, screen_h: f32, font: Option<&Font>) {
    let (params, stats) = state.session.shown();
    let playback = state.session.playback();
    let (x, y) = playback
        .current_position()
        .map_or((0.0, params.height_m), |p| (p.x, p.y));

    draw_ui_text(
        &format!(
            "Flight time: {:.2} s | Peak: {:.2} m | Range: {:.2} m",
            stats.flight_time_s, stats.peak_altitude_m, stats.range_m
        ),
        plot.left,
        screen_h - 45.0,
        24,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        &format!(
            "t = {:.2} s | x = {:.2} m | y = {:.2} m | Speed x{:.2} | State: {}",
            playback.elapsed_s(),
            x,
            y,
            playback.config().time_scale,
            playback.state().label()
        ),
        plot.left,
        screen_h - 14.0,
        20,
        BLUE,
        font,
    );
    draw_ui_text(&state.status_line, plot.left, screen_h - 76.0, 18, DARKGRAY, font);
}
