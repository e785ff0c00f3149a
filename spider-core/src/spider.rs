use core::f32::consts::TAU;

use crate::config::SpiderConfig;
use crate::field::PointField;
use crate::rng::RandomSource;
use crate::surface::{Color, Surface};
use crate::Vector2D;

/// Direction coincident spiders are pushed apart along
const ESCAPE_DIRECTION: Vector2D = Vector2D { x: 1.0, y: 0.0 };

/// Where one leg ends this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegTarget {
    pub endpoint: Vector2D,
    /// True when the leg grabbed a field point instead of its resting spot
    pub snapped: bool,
}

/// A wandering spider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spider {
    pub position: Vector2D,
    pub config: SpiderConfig,
}

impl Spider {
    pub fn new(position: Vector2D) -> Self {
        Self::with_config(position, SpiderConfig::default())
    }

    pub fn with_config(position: Vector2D, config: SpiderConfig) -> Self {
        Self { position, config }
    }

    pub fn random<R: RandomSource>(width: f32, height: f32, rng: &mut R) -> Self {
        let position = Vector2D::new(rng.range_f32(0.0, width), rng.range_f32(0.0, height));
        Self::new(position)
    }

    /// Step towards `target` by at most `move_speed`, stopping on it rather
    /// than overshooting. Within 1px the spider counts as arrived.
    pub fn move_toward(&mut self, target: Vector2D) {
        let offset = target - self.position;
        let distance = offset.magnitude();

        if distance > 1.0 {
            let step = self.config.move_speed.min(distance);
            self.position += offset / distance * step;
        }
    }

    /// Seek a fresh random target within `wander_range` on each axis
    pub fn random_wander<R: RandomSource>(&mut self, rng: &mut R) {
        let range = self.config.wander_range;
        let target = Vector2D::new(
            self.position.x + rng.range_f32(-range, range),
            self.position.y + rng.range_f32(-range, range),
        );
        self.move_toward(target);
    }

    /// Jump `avoid_speed` pixels directly away from `other` when it is
    /// closer than `avoid_radius`.
    pub fn avoid_other_spider(&mut self, other: &Spider) {
        let offset = self.position - other.position;
        let distance = offset.magnitude();

        if distance < self.config.avoid_radius {
            let direction = if distance > 0.0 {
                offset / distance
            } else {
                ESCAPE_DIRECTION
            };
            self.position += direction * self.config.avoid_speed;
        }
    }

    /// Endpoints of every leg, evenly spaced around the body. A leg whose
    /// resting spot has a field point within `leg_snap_distance` reaches for
    /// that point instead.
    pub fn leg_targets<'a>(
        &'a self,
        field: &'a PointField,
    ) -> impl Iterator<Item = LegTarget> + 'a {
        let legs = self.config.legs;
        (0..legs).map(move |i| {
            let angle = TAU / legs as f32 * i as f32;
            let rest = self.position + Vector2D::from_angle(angle) * self.config.leg_reach;

            match field.nearest_within(rest, self.config.leg_snap_distance) {
                Some(point) => LegTarget {
                    endpoint: point,
                    snapped: true,
                },
                None => LegTarget {
                    endpoint: rest,
                    snapped: false,
                },
            }
        })
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, field: &PointField) -> Result<(), S::Error> {
        surface.set_fill_color(Color::WHITE);
        surface.fill_ellipse(
            self.position,
            self.config.body_radius_x,
            self.config.body_radius_y,
            self.config.body_rotation,
        )?;

        surface.set_stroke_color(Color::WHITE);
        for leg in self.leg_targets(field) {
            surface.stroke_line(self.position, leg.endpoint)?;
            if leg.snapped {
                surface.fill_circle(leg.endpoint, self.config.foot_radius)?;
            }
        }

        Ok(())
    }
}
