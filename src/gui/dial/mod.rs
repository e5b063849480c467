use std::f64::consts::PI;

pub mod model;
pub mod view;

pub use model::{DialState, Point, Speed};
pub use view::draw;

pub const SPEED_COUNT: usize = 4;
pub const RADIUS_FACTOR: f64 = 0.8; // dial diameter relative to the shorter side
pub const INDICATOR_OFFSET: f64 = -35.0; // marker sits inside the dial edge
pub const LABEL_OFFSET: f64 = 30.0; // labels sit outside the dial edge
pub const INDICATOR_SCALE: f64 = 1.0 / 12.0; // marker size relative to the dial radius
pub const START_ANGLE: f64 = PI * (9.0 / 8.0); // slot of the off position
pub const ANGLE_STEP: f64 = PI / 4.0;
pub const LABEL_FONT_SIZE: f64 = 20.0;
