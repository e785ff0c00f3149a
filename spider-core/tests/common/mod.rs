use std::convert::Infallible;

use spider_core::{Color, Surface, Vector2D};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    Ellipse { center: Vector2D, color: Color },
    Circle { center: Vector2D, radius: f32, color: Color },
    Line { from: Vector2D, to: Vector2D, color: Color },
}

/// Surface that remembers everything drawn on it
#[derive(Debug)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    fill: Color,
    stroke: Color,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
        }
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Centres of circles drawn with the given radius
    pub fn circles_with_radius(&self, radius: f32) -> Vec<Vector2D> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Circle {
                    center, radius: r, ..
                } if *r == radius => Some(*center),
                _ => None,
            })
            .collect()
    }

    pub fn count_lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self, width: f32, height: f32) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Clear { width, height });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn fill_ellipse(
        &mut self,
        center: Vector2D,
        _radius_x: f32,
        _radius_y: f32,
        _rotation: f32,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Ellipse {
            center,
            color: self.fill,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f32) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color: self.fill,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color: self.stroke,
        });
        Ok(())
    }
}
