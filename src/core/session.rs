//! One visualizer instance: the input, the camera and the playback state it drives.
//!
//! Per frame the host calls [`Session::frame`] with its timestamp and then
//! hands [`Session::scene`] to a [`Renderer`]. Parameter edits are picked up
//! through [`InputSource::take_changed`] and refresh the pre-launch preview;
//! the camera only refits on launch.

use log::debug;

use crate::core::ballistics::{FlightStats, sample_trajectory};
use crate::core::camera::{CameraController, CanvasExtents};
use crate::core::params::{InputSource, LaunchParameters};
use crate::core::playback::{
    PlaybackConfig, PlaybackContext, PlaybackController, PlaybackState, TickOutcome,
};
use crate::core::scene::{Renderer, SceneDescriptor};

pub const PREDICTION_SAMPLES: usize = 160;

pub struct Session<I: InputSource> {
    input: I,
    camera: CameraController,
    playback: PlaybackController,
    canvas: CanvasExtents,
    preview: LaunchParameters,
    preview_stats: FlightStats,
}

impl<I: InputSource> Session<I> {
    pub fn new(input: I, config: PlaybackConfig, canvas: CanvasExtents) -> Self {
        let preview = config.apply(input.parameters());
        Self {
            input,
            camera: CameraController::new(),
            playback: PlaybackController::new(config),
            canvas,
            preview,
            preview_stats: preview.stats(),
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn preview(&self) -> &LaunchParameters {
        &self.preview
    }

    pub fn preview_stats(&self) -> &FlightStats {
        &self.preview_stats
    }

    pub fn set_canvas(&mut self, canvas: CanvasExtents) {
        self.canvas = canvas;
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.playback.set_time_scale(time_scale);
    }

    pub fn launch(&mut self) {
        self.refresh_preview();
        let mut ctx = PlaybackContext {
            camera: &mut self.camera,
            input: &mut self.input,
            canvas: self.canvas,
        };
        self.playback.launch(&mut ctx);
    }

    pub fn reset(&mut self) {
        let mut ctx = PlaybackContext {
            camera: &mut self.camera,
            input: &mut self.input,
            canvas: self.canvas,
        };
        self.playback.reset(&mut ctx);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.playback.toggle_pause()
    }

    pub fn step(&mut self) -> TickOutcome {
        let mut ctx = PlaybackContext {
            camera: &mut self.camera,
            input: &mut self.input,
            canvas: self.canvas,
        };
        self.playback.step(&mut ctx)
    }

    /// Advances one display frame: input changes, the pending tick, then the camera.
    pub fn frame(&mut self, frame_time_s: f64) -> Option<TickOutcome> {
        if self.input.take_changed() {
            self.refresh_preview();
        }

        let mut ctx = PlaybackContext {
            camera: &mut self.camera,
            input: &mut self.input,
            canvas: self.canvas,
        };
        let outcome = self.playback.on_frame(frame_time_s, &mut ctx);
        self.camera.tick();
        outcome
    }

    /// Parameters and stats on display: the launched shot while it is in the
    /// air, the live preview otherwise.
    pub fn shown(&self) -> (LaunchParameters, FlightStats) {
        match self.playback.flight() {
            Some(flight) if self.playback.state().is_active() => (flight.params, flight.stats),
            _ => (self.preview, self.preview_stats),
        }
    }

    pub fn scene(&self) -> SceneDescriptor<'_> {
        let (params, stats) = self.shown();
        SceneDescriptor {
            camera_scale: self.camera.current_scale(),
            cannon_angle_rad: params.angle_rad(),
            launch_height_m: params.height_m,
            gravity_mps2: params.gravity_mps2,
            trajectory: self.playback.trajectory(),
            predicted_path: sample_trajectory(&params, PREDICTION_SAMPLES),
            current_position: self.playback.current_position(),
            current_velocity: self.playback.current_velocity(),
            peak_marker: stats.peak_point(&params),
            impact_marker: stats.impact_point(),
            overlays: self.input.overlays(),
            stats,
            state: self.playback.state(),
            elapsed_s: self.playback.elapsed_s(),
        }
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.draw(&self.scene());
    }

    fn refresh_preview(&mut self) {
        self.preview = self.playback.config().apply(self.input.parameters());
        self.preview_stats = self.preview.stats();
        debug!(
            "preview: flight {:.3} s, peak {:.2} m, range {:.2} m",
            self.preview_stats.flight_time_s,
            self.preview_stats.peak_altitude_m,
            self.preview_stats.range_m
        );
    }
}
