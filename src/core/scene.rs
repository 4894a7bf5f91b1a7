use crate::core::ballistics::{FlightStats, TrajectorySample};
use crate::core::params::{OverlayToggles, VelocityComponents};
use crate::core::playback::PlaybackState;

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneDescriptor<'a> {
    pub camera_scale: f64,
    pub cannon_angle_rad: f64,
    pub launch_height_m: f64,
    pub gravity_mps2: f64,
    pub trajectory: &'a [TrajectorySample],
    pub predicted_path: Vec<TrajectorySample>,
    pub current_position: Option<TrajectorySample>,
    pub current_velocity: Option<VelocityComponents>,
    pub peak_marker: TrajectorySample,
    pub impact_marker: TrajectorySample,
    pub overlays: OverlayToggles,
    pub stats: FlightStats,
    pub state: PlaybackState,
    pub elapsed_s: f64,
}

impl SceneDescriptor<'_> {
    /// Maps world meters to screen pixels. `origin` is the launch point's foot
    /// on the ground line; screen y grows downward.
    pub fn to_screen(&self, point: TrajectorySample, origin: (f64, f64)) -> (f64, f64) {
        (
            origin.0 + point.x * self.camera_scale,
            origin.1 - point.y * self.camera_scale,
        )
    }

    pub fn to_world(&self, screen: (f64, f64), origin: (f64, f64)) -> TrajectorySample {
        TrajectorySample::new(
            (screen.0 - origin.0) / self.camera_scale,
            (origin.1 - screen.1) / self.camera_scale,
        )
    }

    /// Peak and impact markers follow the prediction toggle, and stay up once a shot exists.
    pub fn shows_markers(&self) -> bool {
        self.overlays.show_prediction || self.state != PlaybackState::Idle
    }
}

pub trait Renderer {
    fn draw(&mut self, scene: &SceneDescriptor<'_>);
}
