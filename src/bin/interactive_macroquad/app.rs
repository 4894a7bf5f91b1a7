use log::{info, warn};
use macroquad::prelude::*;
use parabolic_viz::core::camera::CanvasExtents;
use parabolic_viz::core::playback::PlaybackConfig;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, ORIGIN_INSET_PX, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{advance_frame, apply_actions};
use crate::hud::draw_hud;
use crate::render::{MacroquadRenderer, PlotRect};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "ParabolicRust Interactive".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn plot_rect(screen_w: f32, screen_h: f32) -> PlotRect {
    PlotRect {
        left: LEFT_MARGIN,
        right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
        top: TOP_MARGIN,
        bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + 1.0),
    }
}

fn canvas_for(plot: PlotRect) -> CanvasExtents {
    CanvasExtents::new(
        f64::from(plot.width() - ORIGIN_INSET_PX),
        f64::from(plot.height()),
    )
}

pub(crate) async fn run(config: PlaybackConfig) {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("could not load '{UI_FONT_PATH}': {err}; falling back to default font");
            None
        }
    };

    let plot = plot_rect(screen_width(), screen_height());
    let mut state = AppRuntime::new(config, canvas_for(plot));
    info!(
        "interactive session started ({})",
        if state.basic() { "basic" } else { "full" }
    );

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let plot = plot_rect(screen_w, screen_h);
        state.session.set_canvas(canvas_for(plot));

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        advance_frame(&mut state, get_time());

        clear_background(BACKGROUND);
        let mut renderer = MacroquadRenderer {
            plot,
            font: ui_font.as_ref(),
        };
        state.session.render(&mut renderer);
        draw_hud(&state, plot, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
