//! Auto-zooming camera: a contain-fit target scale chosen at launch, and a
//! current scale that eases toward it once per rendered frame.

use log::debug;

use crate::core::ballistics::FlightStats;

pub const DEFAULT_SCALE_PX_PER_M: f64 = 4.0;
pub const MIN_SCALE_PX_PER_M: f64 = 0.5;
pub const MAX_SCALE_PX_PER_M: f64 = 10.0;
pub const ZOOM_SMOOTHING: f64 = 0.1;
pub const ZOOM_EPSILON: f64 = 0.01;

const FIT_MARGIN_X_PX: f64 = 100.0;
const FIT_MARGIN_Y_PX: f64 = 100.0;
const MIN_FIT_RANGE_M: f64 = 20.0;
const LAUNCH_HEIGHT_PAD_M: f64 = 5.0;
const MIN_FIT_ALTITUDE_M: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasExtents {
    pub width_px: f64,
    pub height_px: f64,
}

impl CanvasExtents {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    fn drawable(&self) -> (f64, f64) {
        (
            (self.width_px - FIT_MARGIN_X_PX).max(1.0),
            (self.height_px - FIT_MARGIN_Y_PX).max(1.0),
        )
    }
}

/// Largest pixels-per-meter at which the whole arc fits on both axes.
pub fn compute_target_scale(
    peak_altitude_m: f64,
    range_m: f64,
    launch_height_m: f64,
    canvas: CanvasExtents,
) -> f64 {
    let (width_px, height_px) = canvas.drawable();
    let fit_range = range_m
        .max(launch_height_m + LAUNCH_HEIGHT_PAD_M)
        .max(MIN_FIT_RANGE_M);
    let fit_altitude = peak_altitude_m.max(MIN_FIT_ALTITUDE_M);

    let scale = (width_px / fit_range).min(height_px / fit_altitude);
    if scale.is_nan() {
        return DEFAULT_SCALE_PX_PER_M;
    }
    scale.clamp(MIN_SCALE_PX_PER_M, MAX_SCALE_PX_PER_M)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraController {
    current_scale: f64,
    target_scale: f64,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            current_scale: DEFAULT_SCALE_PX_PER_M,
            target_scale: DEFAULT_SCALE_PX_PER_M,
        }
    }

    pub fn current_scale(&self) -> f64 {
        self.current_scale
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    pub fn retarget(&mut self, stats: &FlightStats, launch_height_m: f64, canvas: CanvasExtents) {
        self.target_scale = compute_target_scale(
            stats.peak_altitude_m,
            stats.range_m,
            launch_height_m,
            canvas,
        );
        debug!(
            "camera target {:.3} px/m (current {:.3})",
            self.target_scale, self.current_scale
        );
    }

    pub fn set_target_scale(&mut self, scale: f64) {
        if !scale.is_nan() {
            self.target_scale = scale.clamp(MIN_SCALE_PX_PER_M, MAX_SCALE_PX_PER_M);
        }
    }

    /// Eases the current scale toward the target. Call once per frame.
    pub fn tick(&mut self) -> f64 {
        let diff = self.target_scale - self.current_scale;
        if diff.abs() > ZOOM_EPSILON {
            self.current_scale += diff * ZOOM_SMOOTHING;
        }
        self.current_scale
    }

    /// Retargets to the default scale; the current scale follows over later ticks.
    pub fn reset(&mut self) {
        self.target_scale = DEFAULT_SCALE_PX_PER_M;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const CANVAS: CanvasExtents = CanvasExtents {
        width_px: 1100.0,
        height_px: 600.0,
    };

    #[test]
    fn wide_shot_is_limited_by_width() {
        // 1000 px / 250 m = 4.0, 500 px / 62.5 m = 8.0
        let scale = compute_target_scale(62.5, 250.0, 0.0, CANVAS);
        assert_relative_eq!(scale, 4.0);
    }

    #[test]
    fn tall_shot_is_limited_by_height() {
        // 1000 px / 100 m = 10.0, 500 px / 200 m = 2.5
        let scale = compute_target_scale(200.0, 100.0, 0.0, CANVAS);
        assert_relative_eq!(scale, 2.5);
    }

    #[test]
    fn tiny_shots_hit_the_floors_and_clamp() {
        let scale = compute_target_scale(0.1, 0.1, 0.0, CANVAS);
        // floors: range 20 m -> 50 px/m, altitude 10 m -> 50 px/m, clamp to 10
        assert_relative_eq!(scale, MAX_SCALE_PX_PER_M);
    }

    #[test]
    fn huge_shots_clamp_to_minimum() {
        let scale = compute_target_scale(5_000.0, 20_000.0, 0.0, CANVAS);
        assert_relative_eq!(scale, MIN_SCALE_PX_PER_M);
    }

    #[test]
    fn launch_height_widens_the_range_floor() {
        // floor becomes 95 m + 5 m = 100 m -> 10 px/m; height 500/100 = 5
        let scale = compute_target_scale(100.0, 0.0, 95.0, CANVAS);
        assert_relative_eq!(scale, 5.0);
    }

    #[test]
    fn tiny_canvas_still_yields_a_valid_scale() {
        let scale = compute_target_scale(60.0, 250.0, 0.0, CanvasExtents::new(10.0, 10.0));
        assert_relative_eq!(scale, MIN_SCALE_PX_PER_M);
    }

    #[test]
    fn tick_moves_a_tenth_of_the_gap() {
        let mut camera = CameraController::new();
        camera.set_target_scale(9.0);
        let next = camera.tick();
        assert_relative_eq!(next, 4.5);
        assert_relative_eq!(camera.target_scale(), 9.0);
    }

    #[test]
    fn tick_within_epsilon_is_a_no_op() {
        let mut camera = CameraController::new();
        camera.target_scale = DEFAULT_SCALE_PX_PER_M + ZOOM_EPSILON / 2.0;
        assert_eq!(camera.tick(), DEFAULT_SCALE_PX_PER_M);
    }

    #[test]
    fn reset_retargets_without_snapping() {
        let mut camera = CameraController::new();
        camera.set_target_scale(8.0);
        for _ in 0..200 {
            camera.tick();
        }
        camera.reset();

        assert_eq!(camera.target_scale(), DEFAULT_SCALE_PX_PER_M);
        assert!(camera.current_scale() > 7.9);
        camera.tick();
        assert!(camera.current_scale() < 7.9);
    }

    #[test]
    fn manual_target_is_bounded() {
        let mut camera = CameraController::new();
        camera.set_target_scale(50.0);
        assert_eq!(camera.target_scale(), MAX_SCALE_PX_PER_M);
        camera.set_target_scale(f64::NAN);
        assert_eq!(camera.target_scale(), MAX_SCALE_PX_PER_M);
    }
}
