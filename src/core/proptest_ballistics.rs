//! Property-based checks of the closed-form solver and the camera easing.

use proptest::prelude::*;

use crate::core::ballistics::{
    FlightStats, flight_time, peak_altitude, position_at, range, sample_trajectory,
};
use crate::core::camera::{
    CameraController, MAX_SCALE_PX_PER_M, MIN_SCALE_PX_PER_M, ZOOM_EPSILON,
};
use crate::core::params::LaunchParameters;

fn launch() -> impl Strategy<Value = LaunchParameters> {
    (0.0f64..100.0, 0.0f64..=90.0, 0.5f64..25.0, 0.0f64..100.0).prop_map(
        |(speed_mps, angle_deg, gravity_mps2, height_m)| LaunchParameters {
            speed_mps,
            angle_deg,
            gravity_mps2,
            height_m,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solved landing time puts the projectile back on the ground.
    #[test]
    fn prop_flight_time_lands_on_the_ground(p in launch()) {
        let v = p.velocity();
        let t = flight_time(v.vy, p.gravity_mps2, p.height_m);
        prop_assert!(t >= 0.0);

        let (_, y) = position_at(t, v.vx, v.vy, p.gravity_mps2, p.height_m);
        let scale = 1.0 + p.height_m + v.vy.abs() * t + p.gravity_mps2 * t * t;
        prop_assert!(y.abs() <= 1e-9 * scale, "y={y} at t={t}");
    }

    /// Downward launches included: the peak is never below the launch point.
    #[test]
    fn prop_peak_not_below_launch_height(
        vy in -100.0f64..100.0,
        gravity in 0.5f64..25.0,
        height in 0.0f64..100.0,
    ) {
        prop_assert!(peak_altitude(vy, gravity, height) >= height);
    }

    #[test]
    fn prop_range_matches_landing_position(p in launch()) {
        let v = p.velocity();
        let t = flight_time(v.vy, p.gravity_mps2, p.height_m);
        let (x, _) = position_at(t, v.vx, v.vy, p.gravity_mps2, p.height_m);
        prop_assert!((range(v.vx, t) - x).abs() <= 1e-9 * (1.0 + x.abs()));
    }

    /// No predicted sample rises above the reported peak.
    #[test]
    fn prop_predicted_path_stays_under_peak(p in launch()) {
        let stats = FlightStats::compute(&p);
        for sample in sample_trajectory(&p, 64) {
            prop_assert!(sample.y <= stats.peak_altitude_m + 1e-9 * (1.0 + stats.peak_altitude_m));
            prop_assert!(sample.y >= 0.0);
        }
    }

    /// Easing is a contraction: it never crosses the target and settles quickly.
    #[test]
    fn prop_camera_converges_without_overshoot(
        start in MIN_SCALE_PX_PER_M..=MAX_SCALE_PX_PER_M,
        target in MIN_SCALE_PX_PER_M..=MAX_SCALE_PX_PER_M,
    ) {
        let mut camera = CameraController::new();
        camera.set_target_scale(start);
        for _ in 0..200 {
            camera.tick();
        }
        camera.set_target_scale(target);

        let side = (target - camera.current_scale()).signum();
        let mut ticks = 0;
        while (camera.target_scale() - camera.current_scale()).abs() > ZOOM_EPSILON {
            let before = (target - camera.current_scale()).abs();
            camera.tick();
            let after = target - camera.current_scale();
            prop_assert!(after.abs() < before);
            prop_assert!(after == 0.0 || after.signum() == side);
            ticks += 1;
            prop_assert!(ticks <= 100, "still {after} away after {ticks} ticks");
        }
    }
}
