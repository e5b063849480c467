use crate::config::Labels;
use crate::gui::dial::{
    ANGLE_STEP, INDICATOR_OFFSET, INDICATOR_SCALE, LABEL_OFFSET, RADIUS_FACTOR, SPEED_COUNT,
    START_ANGLE,
};
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The four dial positions, in cycle order. The discriminant doubles as the
/// angular slot index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Speed {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl Speed {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx % SPEED_COUNT)
    }

    pub fn next(self) -> Self {
        Self::from_index(self.as_index() + 1).unwrap_or(Self::Off)
    }

    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            Self::Off => labels.off.as_str(),
            Self::Low => labels.low.as_str(),
            Self::Medium => labels.medium.as_str(),
            Self::High => labels.high.as_str(),
        }
    }

    /// Text attached to the activate action; the tap after high wraps back
    /// around to off.
    pub fn action_hint(&self) -> &'static str {
        match self {
            Self::High => "Reset",
            _ => "Change",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialState {
    pub speed: Speed,
    pub center: Point,
    pub radius: f64,
}

impl DialState {
    pub fn angle(index: usize) -> f64 {
        START_ANGLE + index as f64 * ANGLE_STEP
    }

    /// Zero and negative sizes collapse the dial to a point rather than
    /// erroring.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.center = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        self.radius = RADIUS_FACTOR * f64::from(width.min(height)).max(0.0) / 2.0;
    }

    pub fn advance(&mut self) -> Speed {
        self.speed = self.speed.next();
        self.speed
    }

    pub fn point_at(&self, speed: Speed, radial: f64) -> Point {
        let angle = Self::angle(speed.as_index());
        Point::new(
            radial * angle.cos() + self.center.x,
            radial * angle.sin() + self.center.y,
        )
    }

    pub fn indicator_point(&self) -> Point {
        self.point_at(self.speed, self.radius + INDICATOR_OFFSET)
    }

    pub fn indicator_radius(&self) -> f64 {
        self.radius * INDICATOR_SCALE
    }

    pub fn label_point(&self, speed: Speed) -> Point {
        self.point_at(speed, self.radius + LABEL_OFFSET)
    }
}
