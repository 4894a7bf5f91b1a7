//! Flight playback: launch, per-frame ticks, pause, single-step and reset.
//!
//! Elapsed time comes from frame timestamps (seconds). Positions are always
//! evaluated in closed form from the launch snapshot, so the trace does not
//! drift with frame rate. When a sample would go below ground the flight is
//! snapped to the exact landing time and impact point instead.

use log::{debug, info};

use crate::core::ballistics::{FlightStats, TrajectorySample, position_at, velocity_at};
use crate::core::camera::{CameraController, CanvasExtents};
use crate::core::params::{InputSource, LaunchParameters, VelocityComponents};
use crate::core::recorder::TrajectoryRecorder;
use crate::core::scheduler::{FrameScheduler, TickToken};

pub const STEP_QUANTUM_S: f64 = 0.05;
pub const MIN_TIME_SCALE: f64 = 0.25;
pub const MAX_TIME_SCALE: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Flying,
    Paused,
    Landed,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Ready",
            PlaybackState::Flying => "Flying",
            PlaybackState::Paused => "Paused",
            PlaybackState::Landed => "Landed",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, PlaybackState::Flying | PlaybackState::Paused)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackConfig {
    pub pause_and_step: bool,
    /// Launch height is forced to 0 m.
    pub ground_launch_only: bool,
    pub time_scale: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl PlaybackConfig {
    pub fn full() -> Self {
        Self {
            pause_and_step: true,
            ground_launch_only: false,
            time_scale: 1.0,
        }
    }

    /// Flat-ground launches with no pause or step.
    pub fn basic() -> Self {
        Self {
            pause_and_step: false,
            ground_launch_only: true,
            time_scale: 1.0,
        }
    }

    pub fn apply(&self, mut params: LaunchParameters) -> LaunchParameters {
        if self.ground_launch_only {
            params.height_m = 0.0;
        }
        params
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token from a cancelled chain.
    Stale,
    /// Nothing to advance in the current state.
    Ignored,
    /// Paused: time held, chain kept alive.
    Held,
    Advanced,
    Landed,
}

/// Collaborators a transition reaches into.
pub struct PlaybackContext<'a> {
    pub camera: &'a mut CameraController,
    pub input: &'a mut dyn InputSource,
    pub canvas: CanvasExtents,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    pub params: LaunchParameters,
    pub velocity: VelocityComponents,
    pub stats: FlightStats,
}

impl Flight {
    fn new(params: LaunchParameters) -> Self {
        Self {
            params,
            velocity: params.velocity(),
            stats: params.stats(),
        }
    }

    fn position_at(&self, time_s: f64) -> (f64, f64) {
        position_at(
            time_s,
            self.velocity.vx,
            self.velocity.vy,
            self.params.gravity_mps2,
            self.params.height_m,
        )
    }
}

#[derive(Clone, Debug)]
pub struct PlaybackController {
    config: PlaybackConfig,
    state: PlaybackState,
    elapsed_s: f64,
    last_frame_s: Option<f64>,
    flight: Option<Flight>,
    recorder: TrajectoryRecorder,
    scheduler: FrameScheduler,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl PlaybackController {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            state: PlaybackState::Idle,
            elapsed_s: 0.0,
            last_frame_s: None,
            flight: None,
            recorder: TrajectoryRecorder::new(),
            scheduler: FrameScheduler::new(),
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    pub fn trajectory(&self) -> &[TrajectorySample] {
        self.recorder.snapshot()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn inputs_locked(&self) -> bool {
        self.state.is_active()
    }

    pub fn current_position(&self) -> Option<TrajectorySample> {
        self.flight.and(self.recorder.last())
    }

    pub fn current_velocity(&self) -> Option<VelocityComponents> {
        let flight = self.flight?;
        let (vx, vy) = velocity_at(
            self.elapsed_s,
            flight.velocity.vx,
            flight.velocity.vy,
            flight.params.gravity_mps2,
        );
        Some(VelocityComponents { vx, vy })
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.config.time_scale = if time_scale.is_nan() {
            1.0
        } else {
            time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
        };
    }

    /// Starts a new flight from the input's current parameters, abandoning any
    /// flight in progress.
    pub fn launch(&mut self, ctx: &mut PlaybackContext<'_>) {
        self.scheduler.cancel();

        let flight = Flight::new(self.config.apply(ctx.input.parameters()));
        ctx.camera
            .retarget(&flight.stats, flight.params.height_m, ctx.canvas);
        self.recorder
            .start(TrajectorySample::new(0.0, flight.params.height_m));
        self.elapsed_s = 0.0;
        self.last_frame_s = None;
        self.flight = Some(flight);
        ctx.input.set_locked(true);

        debug!("{:?} -> Flying", self.state);
        self.state = PlaybackState::Flying;
        self.scheduler.schedule();
        info!(
            "launched at {:.1} deg, {:.1} m/s, g={:.2}, h0={:.1}: flight {:.3} s, peak {:.2} m, range {:.2} m",
            flight.params.angle_deg,
            flight.params.speed_mps,
            flight.params.gravity_mps2,
            flight.params.height_m,
            flight.stats.flight_time_s,
            flight.stats.peak_altitude_m,
            flight.stats.range_m
        );
    }

    /// Runs the pending tick, if any. Call from the host's frame callback.
    pub fn on_frame(
        &mut self,
        frame_time_s: f64,
        ctx: &mut PlaybackContext<'_>,
    ) -> Option<TickOutcome> {
        let token = self.scheduler.take_due()?;
        Some(self.tick(token, frame_time_s, ctx))
    }

    pub fn tick(
        &mut self,
        token: TickToken,
        frame_time_s: f64,
        ctx: &mut PlaybackContext<'_>,
    ) -> TickOutcome {
        if !self.scheduler.is_current(token) {
            debug!(
                "dropping stale tick from generation {} (now {})",
                token.generation(),
                self.scheduler.generation()
            );
            return TickOutcome::Stale;
        }

        match self.state {
            PlaybackState::Flying => {}
            PlaybackState::Paused => {
                self.scheduler.schedule();
                return TickOutcome::Held;
            }
            PlaybackState::Idle | PlaybackState::Landed => return TickOutcome::Ignored,
        }

        let delta_s = match self.last_frame_s {
            Some(prev) => (frame_time_s - prev).max(0.0),
            None => 0.0,
        };
        self.last_frame_s = Some(frame_time_s);

        let outcome = self.advance(delta_s * self.config.time_scale, ctx);
        if outcome == TickOutcome::Advanced {
            self.scheduler.schedule();
        }
        outcome
    }

    pub fn toggle_pause(&mut self) -> bool {
        if !self.config.pause_and_step {
            return false;
        }
        match self.state {
            PlaybackState::Flying => {
                debug!("Flying -> Paused at {:.3} s", self.elapsed_s);
                self.state = PlaybackState::Paused;
                true
            }
            PlaybackState::Paused => {
                debug!("Paused -> Flying at {:.3} s", self.elapsed_s);
                self.state = PlaybackState::Flying;
                self.last_frame_s = None;
                true
            }
            PlaybackState::Idle | PlaybackState::Landed => false,
        }
    }

    /// Pauses if needed, then advances exactly one [`STEP_QUANTUM_S`].
    pub fn step(&mut self, ctx: &mut PlaybackContext<'_>) -> TickOutcome {
        if !self.config.pause_and_step {
            return TickOutcome::Ignored;
        }
        match self.state {
            PlaybackState::Flying => {
                self.toggle_pause();
            }
            PlaybackState::Paused => {}
            PlaybackState::Idle | PlaybackState::Landed => return TickOutcome::Ignored,
        }
        self.advance(STEP_QUANTUM_S, ctx)
    }

    pub fn reset(&mut self, ctx: &mut PlaybackContext<'_>) {
        self.scheduler.cancel();
        self.recorder.clear();
        self.elapsed_s = 0.0;
        self.last_frame_s = None;
        self.flight = None;
        ctx.input.set_locked(false);
        ctx.camera.reset();
        if self.state != PlaybackState::Idle {
            debug!("{:?} -> Idle", self.state);
        }
        self.state = PlaybackState::Idle;
    }

    fn advance(&mut self, dt_s: f64, ctx: &mut PlaybackContext<'_>) -> TickOutcome {
        let Some(flight) = self.flight else {
            return TickOutcome::Ignored;
        };

        self.elapsed_s += dt_s;
        let (x, y) = flight.position_at(self.elapsed_s);
        let past_landing = self.elapsed_s > 0.0 && self.elapsed_s >= flight.stats.flight_time_s;
        if y < 0.0 || past_landing {
            self.land(&flight, ctx);
            return TickOutcome::Landed;
        }

        self.recorder.record(TrajectorySample::new(x.max(0.0), y));
        TickOutcome::Advanced
    }

    fn land(&mut self, flight: &Flight, ctx: &mut PlaybackContext<'_>) {
        self.elapsed_s = flight.stats.flight_time_s;
        self.recorder
            .record(TrajectorySample::new(flight.stats.range_m.max(0.0), 0.0));
        self.scheduler.cancel();
        self.last_frame_s = None;
        ctx.input.set_locked(false);

        debug!("{:?} -> Landed", self.state);
        self.state = PlaybackState::Landed;
        info!(
            "landed at x={:.2} m after {:.3} s",
            flight.stats.range_m, flight.stats.flight_time_s
        );
    }
}
