#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod field;
pub mod rng;
#[cfg(feature = "std")]
pub mod scheduler;
pub mod simulation;
pub mod spider;
pub mod surface;

pub use config::{FieldConfig, SpiderConfig};
pub use field::{PointField, POINT_CAPACITY};
pub use rng::{RandomSource, SimpleRng};
#[cfg(feature = "std")]
pub use scheduler::{run, FrameClock, StopToken};
pub use simulation::{InputEvent, PointerState, Simulation, SPIDER_COUNT};
pub use spider::{LegTarget, Spider};
pub use surface::{Color, Surface};

/// A 2D vector used for positions and directions, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

/// A point of the background field. Points never move once generated.
pub type Point = Vector2D;

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians, measured from +x towards +y
    pub fn from_angle(angle: f32) -> Self {
        Self {
            x: math::cos(angle),
            y: math::sin(angle),
        }
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        math::sqrt(dx * dx + dy * dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Float helpers that fall back to libm without std
mod math {
    #[cfg(feature = "std")]
    pub fn sqrt(v: f32) -> f32 {
        v.sqrt()
    }

    #[cfg(not(feature = "std"))]
    pub fn sqrt(v: f32) -> f32 {
        libm::sqrtf(v)
    }

    #[cfg(feature = "std")]
    pub fn sin(v: f32) -> f32 {
        v.sin()
    }

    #[cfg(not(feature = "std"))]
    pub fn sin(v: f32) -> f32 {
        libm::sinf(v)
    }

    #[cfg(feature = "std")]
    pub fn cos(v: f32) -> f32 {
        v.cos()
    }

    #[cfg(not(feature = "std"))]
    pub fn cos(v: f32) -> f32 {
        libm::cosf(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_new() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        let sum = v1 + v2;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = v2 - v1;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        let scaled = v1 * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);

        let halved = v2 / 2.0;
        assert_eq!(halved.x, 1.5);
        assert_eq!(halved.y, 2.0);
    }

    #[test]
    fn test_from_angle() {
        let right = Vector2D::from_angle(0.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);

        let down = Vector2D::from_angle(core::f32::consts::FRAC_PI_2);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }
}
