//! Launch parameters and the boundary where user input enters the core.

use log::warn;

use crate::core::ballistics::{FlightStats, velocity_components};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN falls back to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const ANGLE_RANGE_DEG: ParamRange = ParamRange::new(0.0, 90.0);
pub const SPEED_RANGE_MPS: ParamRange = ParamRange::new(5.0, 100.0);
pub const GRAVITY_RANGE_MPS2: ParamRange = ParamRange::new(1.0, 20.0);
pub const HEIGHT_RANGE_M: ParamRange = ParamRange::new(0.0, 100.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Angle,
    Speed,
    Gravity,
    Height,
}

impl Param {
    pub const ALL: [Param; 4] = [Param::Angle, Param::Speed, Param::Gravity, Param::Height];

    pub fn range(self) -> ParamRange {
        match self {
            Param::Angle => ANGLE_RANGE_DEG,
            Param::Speed => SPEED_RANGE_MPS,
            Param::Gravity => GRAVITY_RANGE_MPS2,
            Param::Height => HEIGHT_RANGE_M,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Param::Angle => "Angle (deg)",
            Param::Speed => "Velocity (m/s)",
            Param::Gravity => "Gravity (m/s^2)",
            Param::Height => "Height (m)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityComponents {
    pub vx: f64,
    pub vy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
    pub height_m: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            speed_mps: 50.0,
            angle_deg: 45.0,
            gravity_mps2: 9.81,
            height_m: 0.0,
        }
    }
}

impl LaunchParameters {
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Angle => self.angle_deg,
            Param::Speed => self.speed_mps,
            Param::Gravity => self.gravity_mps2,
            Param::Height => self.height_m,
        }
    }

    /// Stores `value` clamped to the parameter's valid range.
    pub fn set(&mut self, param: Param, value: f64) {
        let range = param.range();
        let clamped = range.clamp(value);
        if !range.contains(value) {
            warn!(
                "{} = {value} is outside [{}, {}], using {clamped}",
                param.label(),
                range.min,
                range.max
            );
        }
        match param {
            Param::Angle => self.angle_deg = clamped,
            Param::Speed => self.speed_mps = clamped,
            Param::Gravity => self.gravity_mps2 = clamped,
            Param::Height => self.height_m = clamped,
        }
    }

    pub fn clamped(mut self) -> Self {
        for param in Param::ALL {
            self.set(param, self.get(param));
        }
        self
    }

    pub fn velocity(&self) -> VelocityComponents {
        let (vx, vy) = velocity_components(self.speed_mps, self.angle_deg);
        VelocityComponents { vx, vy }
    }

    pub fn stats(&self) -> FlightStats {
        FlightStats::compute(self)
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayToggles {
    pub show_prediction: bool,
    pub show_vectors: bool,
}

impl Default for OverlayToggles {
    fn default() -> Self {
        Self {
            show_prediction: true,
            show_vectors: true,
        }
    }
}

/// Where parameter values and overlay switches come from.
///
/// Implementations clamp values to [`Param::range`] before handing them out.
pub trait InputSource {
    fn parameters(&self) -> LaunchParameters;

    fn overlays(&self) -> OverlayToggles;

    /// Returns true once per batch of changes since the last call.
    fn take_changed(&mut self) -> bool;

    /// Locked while a shot is in the air.
    fn set_locked(&mut self, locked: bool);
}

/// In-memory input, used by headless callers and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticInput {
    params: LaunchParameters,
    overlays: OverlayToggles,
    changed: bool,
    locked: bool,
}

impl StaticInput {
    pub fn new(params: LaunchParameters) -> Self {
        Self {
            params: params.clamped(),
            overlays: OverlayToggles::default(),
            changed: true,
            locked: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Ignored while locked, as a disabled control would be.
    pub fn set(&mut self, param: Param, value: f64) -> bool {
        if self.locked {
            return false;
        }
        self.params.set(param, value);
        self.changed = true;
        true
    }

    pub fn set_overlays(&mut self, overlays: OverlayToggles) {
        self.overlays = overlays;
        self.changed = true;
    }
}

impl InputSource for StaticInput {
    fn parameters(&self) -> LaunchParameters {
        self.params
    }

    fn overlays(&self) -> OverlayToggles {
        self.overlays
    }

    fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut params = LaunchParameters::default();
        params.set(Param::Angle, 120.0);
        params.set(Param::Speed, 1.0);
        params.set(Param::Gravity, 0.0);
        params.set(Param::Height, -4.0);

        assert_eq!(params.angle_deg, 90.0);
        assert_eq!(params.speed_mps, 5.0);
        assert_eq!(params.gravity_mps2, 1.0);
        assert_eq!(params.height_m, 0.0);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(ANGLE_RANGE_DEG.contains(0.0));
        assert!(ANGLE_RANGE_DEG.contains(90.0));
        assert!(!ANGLE_RANGE_DEG.contains(90.5));
        assert!(!SPEED_RANGE_MPS.contains(f64::NAN));
    }

    #[test]
    fn nan_falls_back_to_lower_bound() {
        let mut params = LaunchParameters::default();
        params.set(Param::Gravity, f64::NAN);
        assert_eq!(params.gravity_mps2, GRAVITY_RANGE_MPS2.min);
    }

    #[test]
    fn clamped_keeps_in_range_values() {
        let params = LaunchParameters {
            speed_mps: 33.0,
            angle_deg: 12.5,
            gravity_mps2: 3.7,
            height_m: 8.0,
        };
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn static_input_reports_changes_once() {
        let mut input = StaticInput::new(LaunchParameters::default());
        assert!(input.take_changed());
        assert!(!input.take_changed());

        assert!(input.set(Param::Speed, 60.0));
        assert!(input.take_changed());
        assert_eq!(input.parameters().speed_mps, 60.0);
    }

    #[test]
    fn locked_static_input_rejects_edits() {
        let mut input = StaticInput::new(LaunchParameters::default());
        input.set_locked(true);

        assert!(!input.set(Param::Angle, 10.0));
        assert_eq!(input.parameters().angle_deg, 45.0);
    }
}
