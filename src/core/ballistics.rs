//! Closed-form kinematics for a point mass launched over flat ground.
//!
//! Every function here is pure: scalar inputs in, scalar outputs back.
//! Degenerate inputs (non-positive gravity, no real landing time, NaN)
//! collapse to zero flight time or the launch height rather than erroring.

use crate::core::params::{LaunchParameters, VelocityComponents};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const MIN_PREDICTION_SEGMENTS: usize = 2;

/// A position on the trajectory, in meters above and downrange of the launch point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrajectorySample {
    pub x: f64,
    pub y: f64,
}

impl TrajectorySample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    let vx = speed_mps * theta.cos();
    let vy = speed_mps * theta.sin();
    (vx, vy)
}

/// Position at `time_s`. The caller clamps `y` at the ground.
pub fn position_at(time_s: f64, vx: f64, vy: f64, gravity: f64, height_m: f64) -> (f64, f64) {
    let x = vx * time_s;
    let y = height_m + (vy * time_s) - (0.5 * gravity * time_s * time_s);
    (x, y)
}

pub fn velocity_at(time_s: f64, vx: f64, vy: f64, gravity: f64) -> (f64, f64) {
    (vx, vy - gravity * time_s)
}

/// Time until the projectile returns to `y = 0`.
///
/// Solves `0.5*g*t^2 - vy*t - h0 = 0` and keeps the larger root, which is the
/// later crossing and the only one reachable when `h0 >= 0`. Returns 0.0 when
/// gravity is not positive, the discriminant is negative, or the root is not
/// a finite non-negative number.
pub fn flight_time(vy: f64, gravity: f64, height_m: f64) -> f64 {
    debug_assert!(
        height_m >= 0.0 || height_m.is_nan(),
        "launch height must be non-negative, got {height_m}"
    );
    if gravity <= 0.0 || gravity.is_nan() {
        return 0.0;
    }

    // Discriminant for 0.5*g*t^2 - vy*t - h0 = 0
    let disc = vy * vy + 2.0 * gravity * height_m;
    if disc < 0.0 || disc.is_nan() {
        return 0.0;
    }

    let t_land = (vy + disc.sqrt()) / gravity;
    if t_land.is_finite() && t_land >= 0.0 {
        t_land
    } else {
        0.0
    }
}

pub fn time_to_peak(vy: f64, gravity: f64) -> f64 {
    if gravity <= 0.0 || gravity.is_nan() {
        return 0.0;
    }
    let t_peak = vy / gravity;
    if t_peak.is_finite() && t_peak > 0.0 {
        t_peak
    } else {
        0.0
    }
}

/// Highest altitude above ground. Never below the launch height.
pub fn peak_altitude(vy: f64, gravity: f64, height_m: f64) -> f64 {
    let t_peak = time_to_peak(vy, gravity);
    if t_peak <= 0.0 {
        return height_m;
    }
    let peak = height_m + (vy * t_peak) - (0.5 * gravity * t_peak * t_peak);
    if peak.is_finite() {
        peak.max(height_m)
    } else {
        height_m
    }
}

pub fn range(vx: f64, flight_time_s: f64) -> f64 {
    vx * flight_time_s
}

/// Derived statistics for one set of launch parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightStats {
    pub flight_time_s: f64,
    pub time_to_peak_s: f64,
    pub peak_altitude_m: f64,
    pub range_m: f64,
}

impl FlightStats {
    pub fn compute(params: &LaunchParameters) -> Self {
        let VelocityComponents { vx, vy } = params.velocity();
        let flight_time_s = flight_time(vy, params.gravity_mps2, params.height_m);
        Self {
            flight_time_s,
            time_to_peak_s: time_to_peak(vy, params.gravity_mps2),
            peak_altitude_m: peak_altitude(vy, params.gravity_mps2, params.height_m),
            range_m: range(vx, flight_time_s),
        }
    }

    /// Apex of the arc, or the launch point for flat and downward shots.
    pub fn peak_point(&self, params: &LaunchParameters) -> TrajectorySample {
        let VelocityComponents { vx, .. } = params.velocity();
        TrajectorySample::new(vx * self.time_to_peak_s, self.peak_altitude_m)
    }

    pub fn impact_point(&self) -> TrajectorySample {
        TrajectorySample::new(self.range_m, 0.0)
    }
}

/// Ground-clamped sample at `time_s`; past the landing time this is the impact point.
pub fn sample_at(params: &LaunchParameters, stats: &FlightStats, time_s: f64) -> TrajectorySample {
    let VelocityComponents { vx, vy } = params.velocity();
    let t = time_s.clamp(0.0, stats.flight_time_s);
    let (x, y) = position_at(t, vx, vy, params.gravity_mps2, params.height_m);
    TrajectorySample::new(x.max(0.0), y.max(0.0))
}

pub fn sample_trajectory(params: &LaunchParameters, samples: usize) -> Vec<TrajectorySample> {
    let stats = FlightStats::compute(params);
    let sample_count = samples.max(MIN_PREDICTION_SEGMENTS);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * stats.flight_time_s) / sample_count as f64;
            sample_at(params, &stats, t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn params(speed_mps: f64, angle_deg: f64, gravity_mps2: f64, height_m: f64) -> LaunchParameters {
        LaunchParameters {
            speed_mps,
            angle_deg,
            gravity_mps2,
            height_m,
        }
    }

    #[test]
    fn forty_five_degree_shot_on_flat_ground() {
        let p = params(50.0, 45.0, 10.0, 0.0);
        let (vx, vy) = velocity_components(p.speed_mps, p.angle_deg);
        assert_close(vx, 35.3553, 0.001);
        assert_close(vy, 35.3553, 0.001);

        let stats = FlightStats::compute(&p);
        assert_close(stats.flight_time_s, 7.0711, 0.001);
        assert_close(stats.peak_altitude_m, 62.5, 0.001);
        assert_close(stats.range_m, 250.0, 0.001);
    }

    #[test]
    fn horizontal_shot_from_a_ledge() {
        let stats = FlightStats::compute(&params(20.0, 0.0, 9.8, 10.0));

        assert_close(stats.flight_time_s, 1.4286, 0.001);
        assert_close(stats.range_m, 28.571, 0.001);
        assert_eq!(stats.peak_altitude_m, 10.0);
        assert_eq!(stats.time_to_peak_s, 0.0);
    }

    #[test]
    fn flat_ground_reduces_to_two_vy_over_g() {
        assert_close(flight_time(12.0, 9.8, 0.0), 2.0 * 12.0 / 9.8, 1e-12);
    }

    #[test]
    fn degenerate_gravity_reports_zero_flight_time() {
        assert_eq!(flight_time(10.0, 0.0, 5.0), 0.0);
        assert_eq!(flight_time(10.0, -9.8, 5.0), 0.0);
        assert_eq!(flight_time(10.0, f64::NAN, 5.0), 0.0);
        assert_eq!(peak_altitude(10.0, 0.0, 5.0), 5.0);
    }

    #[test]
    fn non_finite_velocity_reports_zero_flight_time() {
        assert_eq!(flight_time(f64::NAN, 9.8, 0.0), 0.0);
        assert_eq!(flight_time(f64::INFINITY, 9.8, 0.0), 0.0);
        assert_eq!(peak_altitude(f64::NAN, 9.8, 3.0), 3.0);
    }

    #[test]
    fn downward_velocity_peaks_at_launch_height() {
        assert_eq!(peak_altitude(-5.0, 9.8, 20.0), 20.0);
        assert!(flight_time(-5.0, 9.8, 20.0) > 0.0);
    }

    #[test]
    fn velocity_at_apex_is_horizontal() {
        let p = params(30.0, 60.0, 9.8, 0.0);
        let stats = FlightStats::compute(&p);
        let v = p.velocity();
        let (vx, vy) = velocity_at(stats.time_to_peak_s, v.vx, v.vy, p.gravity_mps2);

        assert_close(vx, v.vx, 1e-12);
        assert_close(vy, 0.0, 1e-9);
    }

    #[test]
    fn sample_at_clamps_past_landing_to_impact() {
        let p = params(25.0, 30.0, 9.8, 4.0);
        let stats = FlightStats::compute(&p);
        let late = sample_at(&p, &stats, stats.flight_time_s + 3.0);

        assert_close(late.x, stats.range_m, 1e-9);
        assert_eq!(late.y, 0.0);
    }

    #[test]
    fn predicted_path_spans_launch_to_impact() {
        let p = params(40.0, 35.0, 9.8, 12.0);
        let stats = FlightStats::compute(&p);
        let path = sample_trajectory(&p, 100);

        assert_eq!(path.len(), 101);
        assert_eq!(path[0], TrajectorySample::new(0.0, 12.0));
        let last = path[path.len() - 1];
        assert_close(last.x, stats.range_m, 1e-9);
        assert_close(last.y, 0.0, 1e-9);
        assert!(path.windows(2).all(|w| w[1].x >= w[0].x));
    }

    #[test]
    fn predicted_path_has_a_minimum_segment_count() {
        let path = sample_trajectory(&params(10.0, 45.0, 9.8, 0.0), 0);
        assert_eq!(path.len(), MIN_PREDICTION_SEGMENTS + 1);
    }

    #[test]
    fn peak_and_impact_markers() {
        let p = params(50.0, 45.0, 10.0, 0.0);
        let stats = FlightStats::compute(&p);

        let peak = stats.peak_point(&p);
        assert_close(peak.x, 125.0, 0.001);
        assert_close(peak.y, 62.5, 0.001);
        assert_eq!(stats.impact_point(), TrajectorySample::new(stats.range_m, 0.0));
    }
}
