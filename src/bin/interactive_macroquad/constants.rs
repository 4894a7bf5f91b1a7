use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 110.0;
pub const PANEL_WIDTH: f32 = 340.0;
pub const PANEL_HEIGHT: f32 = 420.0;

pub const LEFT_MARGIN: f32 = PANEL_X + PANEL_WIDTH + 40.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 110.0;
/// Launch point sits this far right of the plot's left edge.
pub const ORIGIN_INSET_PX: f32 = 40.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 82.0;

pub const MIN_GRID_SPACING_PX: f32 = 48.0;
pub const GRID_STEPS_M: [f32; 12] = [
    1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 5000.0,
];

pub const PROJECTILE_RADIUS_PX: f32 = 7.0;
pub const CANNON_LENGTH_PX: f32 = 38.0;
pub const CANNON_WIDTH_PX: f32 = 9.0;
pub const TOWER_WIDTH_PX: f32 = 16.0;
pub const MARKER_RADIUS_PX: f32 = 5.0;
pub const VECTOR_PX_PER_MPS: f32 = 1.6;
pub const GRAVITY_PX_PER_MPS2: f32 = 4.0;
pub const ARROW_HEAD_PX: f32 = 9.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const AXIS_LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.36, 0.42, 0.30, 1.0);
pub const PREDICTION_COLOR: Color = Color::new(0.30, 0.55, 0.96, 0.55);
pub const TRACE_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const PEAK_COLOR: Color = Color::new(0.93, 0.55, 0.05, 1.0);
pub const IMPACT_COLOR: Color = Color::new(0.75, 0.20, 0.20, 1.0);
pub const VX_COLOR: Color = Color::new(0.10, 0.60, 0.30, 1.0);
pub const VY_COLOR: Color = Color::new(0.55, 0.25, 0.80, 1.0);
pub const VELOCITY_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const GRAVITY_COLOR: Color = Color::new(0.85, 0.30, 0.10, 1.0);
pub const CANNON_COLOR: Color = Color::new(0.25, 0.27, 0.31, 1.0);
