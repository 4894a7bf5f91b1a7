use macroquad::prelude::*;
use parabolic_viz::core::ballistics::TrajectorySample;
use parabolic_viz::core::params::VelocityComponents;
use parabolic_viz::core::scene::{Renderer, SceneDescriptor};

use crate::constants::{
    ARROW_HEAD_PX, AXIS_LABEL_COLOR, CANNON_COLOR, CANNON_LENGTH_PX, CANNON_WIDTH_PX,
    GRAVITY_COLOR, GRAVITY_PX_PER_MPS2, GRID_COLOR, GRID_STEPS_M, GROUND_COLOR, IMPACT_COLOR,
    MARKER_RADIUS_PX, MIN_GRID_SPACING_PX, ORIGIN_INSET_PX, PEAK_COLOR, PREDICTION_COLOR,
    PROJECTILE_RADIUS_PX, TOWER_WIDTH_PX, TRACE_COLOR, VECTOR_PX_PER_MPS, VELOCITY_COLOR,
    VX_COLOR, VY_COLOR,
};

/// Screen rectangle the world is drawn into.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotRect {
    pub(crate) fn width(&self) -> f32 {
        self.right - self.left
    }

    pub(crate) fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Launch foot on the ground line.
    pub(crate) fn origin(&self) -> Vec2 {
        vec2(self.left + ORIGIN_INSET_PX, self.bottom)
    }
}

fn format_axis_value(value: f32, step: f32) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

/// Smallest listed grid step that keeps lines at least `MIN_GRID_SPACING_PX` apart.
fn grid_step_m(scale_px_per_m: f32) -> f32 {
    GRID_STEPS_M
        .iter()
        .copied()
        .find(|step| step * scale_px_per_m >= MIN_GRID_SPACING_PX)
        .unwrap_or(GRID_STEPS_M[GRID_STEPS_M.len() - 1])
}

fn draw_arrow(from: Vec2, delta: Vec2, thickness: f32, color: Color) {
    let length = delta.length();
    if length < 1.0 {
        return;
    }
    let tip = from + delta;
    draw_line(from.x, from.y, tip.x, tip.y, thickness, color);

    let back = -delta / length * ARROW_HEAD_PX.min(length);
    let side = vec2(-back.y, back.x) * 0.5;
    let left = tip + back + side;
    let right = tip + back - side;
    draw_triangle(tip, left, right, color);
}

pub(crate) struct MacroquadRenderer<'a> {
    pub(crate) plot: PlotRect,
    pub(crate) font: Option<&'a Font>,
}

impl MacroquadRenderer<'_> {
    fn to_screen(&self, scene: &SceneDescriptor<'_>, point: TrajectorySample) -> Vec2 {
        let origin = self.plot.origin();
        let (x, y) = scene.to_screen(point, (f64::from(origin.x), f64::from(origin.y)));
        vec2(x as f32, y as f32)
    }

    fn draw_grid(&self, scene: &SceneDescriptor<'_>) {
        let plot = self.plot;
        let origin = plot.origin();
        let origin = (f64::from(origin.x), f64::from(origin.y));
        let min = scene.to_world((f64::from(plot.left), f64::from(plot.bottom)), origin);
        let max = scene.to_world((f64::from(plot.right), f64::from(plot.top)), origin);

        let step = grid_step_m(scene.camera_scale as f32);
        let tick_font_size: u16 = 16;

        let mut i = (min.x as f32 / step).ceil() as i32;
        loop {
            let world_x = i as f32 * step;
            if world_x > max.x as f32 {
                break;
            }
            let x = self.to_screen(scene, TrajectorySample::new(f64::from(world_x), 0.0)).x;
            draw_line(x, plot.top, x, plot.bottom, 1.0, GRID_COLOR);
            let label = format_axis_value(world_x, step);
            let size = measure_text(&label, self.font, tick_font_size, 1.0);
            draw_ui_text(
                &label,
                x - size.width * 0.5,
                plot.bottom + 22.0,
                tick_font_size,
                AXIS_LABEL_COLOR,
                self.font,
            );
            i += 1;
        }

        let mut j = 0;
        loop {
            let world_y = j as f32 * step;
            if world_y > max.y as f32 {
                break;
            }
            let y = self.to_screen(scene, TrajectorySample::new(0.0, f64::from(world_y))).y;
            draw_line(plot.left, y, plot.right, y, 1.0, GRID_COLOR);
            let label = format_axis_value(world_y, step);
            let size = measure_text(&label, self.font, tick_font_size, 1.0);
            draw_ui_text(
                &label,
                plot.left - 8.0 - size.width,
                y + size.height * 0.35,
                tick_font_size,
                AXIS_LABEL_COLOR,
                self.font,
            );
            j += 1;
        }

        draw_ui_text(
            "Distance (m)",
            plot.right - 130.0,
            plot.bottom + 48.0,
            18,
            AXIS_LABEL_COLOR,
            self.font,
        );
        draw_ui_text(
            "Height (m)",
            plot.left + 10.0,
            plot.top - 8.0,
            18,
            AXIS_LABEL_COLOR,
            self.font,
        );
    }

    fn draw_ground(&self) {
        let plot = self.plot;
        let origin = plot.origin();
        draw_line(plot.left, plot.bottom, plot.right, plot.bottom, 3.0, GROUND_COLOR);
        draw_line(origin.x, plot.top, origin.x, plot.bottom, 1.5, DARKGRAY);
    }

    fn draw_cannon(&self, scene: &SceneDescriptor<'_>) {
        let launch = self.to_screen(scene, TrajectorySample::new(0.0, scene.launch_height_m));
        let ground_y = self.plot.bottom;
        if ground_y - launch.y > 0.5 {
            draw_rectangle(
                launch.x - TOWER_WIDTH_PX * 0.5,
                launch.y,
                TOWER_WIDTH_PX,
                ground_y - launch.y,
                CANNON_COLOR,
            );
        }

        let angle = scene.cannon_angle_rad as f32;
        let muzzle = launch + vec2(angle.cos(), -angle.sin()) * CANNON_LENGTH_PX;
        draw_line(launch.x, launch.y, muzzle.x, muzzle.y, CANNON_WIDTH_PX, CANNON_COLOR);
        draw_circle(launch.x, launch.y, CANNON_WIDTH_PX * 0.8, CANNON_COLOR);
    }

    fn draw_path(
        &self,
        scene: &SceneDescriptor<'_>,
        points: &[TrajectorySample],
        thickness: f32,
        color: Color,
    ) {
        for pair in points.windows(2) {
            let a = self.to_screen(scene, pair[0]);
            let b = self.to_screen(scene, pair[1]);
            draw_line(a.x, a.y, b.x, b.y, thickness, color);
        }
    }

    fn draw_markers(&self, scene: &SceneDescriptor<'_>) {
        let peak = self.to_screen(scene, scene.peak_marker);
        draw_circle(peak.x, peak.y, MARKER_RADIUS_PX, PEAK_COLOR);
        draw_ui_text(
            &format!("peak {:.1} m", scene.peak_marker.y),
            peak.x + 8.0,
            peak.y - 8.0,
            16,
            PEAK_COLOR,
            self.font,
        );

        let impact = self.to_screen(scene, scene.impact_marker);
        draw_circle(impact.x, impact.y, MARKER_RADIUS_PX, IMPACT_COLOR);
        let label = format!("{:.2} m", scene.impact_marker.x);
        let size = measure_text(&label, self.font, 16, 1.0);
        draw_ui_text(
            &label,
            impact.x - size.width * 0.5,
            impact.y - 12.0,
            16,
            IMPACT_COLOR,
            self.font,
        );
    }

    fn draw_vectors(&self, at: Vec2, velocity: VelocityComponents, gravity_mps2: f64) {
        let vx = velocity.vx as f32 * VECTOR_PX_PER_MPS;
        let vy = velocity.vy as f32 * VECTOR_PX_PER_MPS;
        draw_arrow(at, vec2(vx, 0.0), 2.0, VX_COLOR);
        draw_arrow(at, vec2(0.0, -vy), 2.0, VY_COLOR);
        draw_arrow(at, vec2(vx, -vy), 2.5, VELOCITY_COLOR);
        draw_arrow(
            at,
            vec2(0.0, gravity_mps2 as f32 * GRAVITY_PX_PER_MPS2),
            2.0,
            GRAVITY_COLOR,
        );
    }
}

impl Renderer for MacroquadRenderer<'_> {
    fn draw(&mut self, scene: &SceneDescriptor<'_>) {
        self.draw_grid(scene);
        self.draw_ground();

        if scene.overlays.show_prediction {
            self.draw_path(scene, &scene.predicted_path, 2.0, PREDICTION_COLOR);
        }
        self.draw_path(scene, scene.trajectory, 3.0, TRACE_COLOR);
        if scene.shows_markers() {
            self.draw_markers(scene);
        }
        self.draw_cannon(scene);

        if let Some(position) = scene.current_position {
            let p = self.to_screen(scene, position);
            if scene.overlays.show_vectors
                && let Some(velocity) = scene.current_velocity
            {
                self.draw_vectors(p, velocity, scene.gravity_mps2);
            }
            draw_circle(p.x, p.y, PROJECTILE_RADIUS_PX, RED);
            draw_circle_lines(p.x, p.y, PROJECTILE_RADIUS_PX, 2.0, MAROON);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_step_keeps_lines_apart() {
        assert_eq!(grid_step_m(4.0), 20.0);
        assert_eq!(grid_step_m(10.0), 5.0);
        assert_eq!(grid_step_m(0.001), 5000.0);
    }

    #[test]
    fn axis_labels_drop_decimals_for_whole_steps() {
        assert_eq!(format_axis_value(40.0, 20.0), "40");
        assert_eq!(format_axis_value(2.5, 0.5), "2.5");
    }
}
