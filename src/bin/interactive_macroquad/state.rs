use parabolic_viz::core::camera::CanvasExtents;
use parabolic_viz::core::params::{InputSource, LaunchParameters, OverlayToggles, Param};
use parabolic_viz::core::playback::PlaybackConfig;
use parabolic_viz::core::session::Session;

/// Slider-backed parameter values. The UI writes the `f32` fields directly;
/// [`ControlPanel::sync`] clamps them and raises the change flag.
pub(crate) struct ControlPanel {
    pub(crate) angle_deg: f32,
    pub(crate) speed_mps: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) height_m: f32,
    pub(crate) time_scale: f32,
    pub(crate) overlays: OverlayToggles,
    params: LaunchParameters,
    shown_overlays: OverlayToggles,
    locked: bool,
    changed: bool,
}

impl ControlPanel {
    pub(crate) fn new(params: LaunchParameters) -> Self {
        let params = params.clamped();
        Self {
            angle_deg: params.angle_deg as f32,
            speed_mps: params.speed_mps as f32,
            gravity_mps2: params.gravity_mps2 as f32,
            height_m: params.height_m as f32,
            time_scale: 1.0,
            overlays: OverlayToggles::default(),
            params,
            shown_overlays: OverlayToggles::default(),
            locked: false,
            changed: true,
        }
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn sync(&mut self) {
        if self.locked {
            self.angle_deg = self.params.angle_deg as f32;
            self.speed_mps = self.params.speed_mps as f32;
            self.gravity_mps2 = self.params.gravity_mps2 as f32;
            self.height_m = self.params.height_m as f32;
        } else {
            let mut next = self.params;
            next.set(Param::Angle, f64::from(self.angle_deg));
            next.set(Param::Speed, f64::from(self.speed_mps));
            next.set(Param::Gravity, f64::from(self.gravity_mps2));
            next.set(Param::Height, f64::from(self.height_m));
            if next != self.params {
                self.params = next;
                self.changed = true;
            }
        }

        if self.overlays != self.shown_overlays {
            self.shown_overlays = self.overlays;
            self.changed = true;
        }
    }
}

impl InputSource for ControlPanel {
    fn parameters(&self) -> LaunchParameters {
        self.params
    }

    fn overlays(&self) -> OverlayToggles {
        self.shown_overlays
    }

    fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

pub(crate) struct AppRuntime {
    pub(crate) session: Session<ControlPanel>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: PlaybackConfig, canvas: CanvasExtents) -> Self {
        Self {
            session: Session::new(
                ControlPanel::new(LaunchParameters::default()),
                config,
                canvas,
            ),
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn panel(&self) -> &ControlPanel {
        self.session.input()
    }

    pub(crate) fn panel_mut(&mut self) -> &mut ControlPanel {
        self.session.input_mut()
    }

    pub(crate) fn basic(&self) -> bool {
        !self.session.playback().config().pause_and_step
    }
}
