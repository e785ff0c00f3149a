use crate::Vector2D;

/// An RGBA colour with 8-bit channels and a 0.0..=1.0 alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A 2D drawing target.
///
/// Fill operations use the colour from the last `set_fill_color`, stroke
/// operations the colour from the last `set_stroke_color`. Coordinates are
/// surface pixels with the origin in the top-left corner.
pub trait Surface {
    type Error;

    /// Erase everything inside `[0, width) x [0, height)`
    fn clear(&mut self, width: f32, height: f32) -> Result<(), Self::Error>;

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Filled ellipse with radii `radius_x`/`radius_y`, rotated by `rotation` radians
    fn fill_ellipse(
        &mut self,
        center: Vector2D,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vector2D, radius: f32) -> Result<(), Self::Error>;

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D) -> Result<(), Self::Error>;
}
