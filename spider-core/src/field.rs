use crate::rng::RandomSource;
use crate::{Point, Vector2D};

/// Most points a field can hold
pub const POINT_CAPACITY: usize = 2000;

/// The scattered background points the spiders' legs reach for.
///
/// Storage is fixed-capacity so the field works without an allocator.
#[derive(Debug, Clone, Default)]
pub struct PointField {
    points: heapless::Vec<Point, POINT_CAPACITY>,
}

impl PointField {
    pub fn empty() -> Self {
        Self {
            points: heapless::Vec::new(),
        }
    }

    /// Scatter `count` points uniformly over `[0, width) x [0, height)`.
    /// Counts above [`POINT_CAPACITY`] are clamped.
    pub fn generate<R: RandomSource>(width: f32, height: f32, count: usize, rng: &mut R) -> Self {
        if count > POINT_CAPACITY {
            log::warn!(
                "requested {} points, clamping to capacity {}",
                count,
                POINT_CAPACITY
            );
        }

        let mut points = heapless::Vec::new();
        for _ in 0..count.min(POINT_CAPACITY) {
            let point = Point::new(rng.range_f32(0.0, width), rng.range_f32(0.0, height));
            if points.push(point).is_err() {
                break;
            }
        }

        log::debug!(
            "generated {} points for {}x{} surface",
            points.len(),
            width,
            height
        );
        Self { points }
    }

    /// Build a field from explicit points, keeping their order
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut field = Self::empty();
        let mut dropped = 0usize;
        for point in points {
            if field.points.push(point).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::warn!("point field full, dropped {} points", dropped);
        }
        field
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Closest point to `query`, if it is strictly nearer than `max_distance`.
    ///
    /// Linear scan. On equal distances the earliest point in field order wins.
    pub fn nearest_within(&self, query: Vector2D, max_distance: f32) -> Option<Point> {
        let mut best: Option<(Point, f32)> = None;

        for point in self.points.iter() {
            let distance = query.distance(point);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((*point, distance)),
            }
        }

        match best {
            Some((point, distance)) if distance < max_distance => Some(point),
            _ => None,
        }
    }

    /// Points strictly closer than `radius` to `center`, in field order
    pub fn within_radius(
        &self,
        center: Vector2D,
        radius: f32,
    ) -> impl Iterator<Item = &Point> + '_ {
        self.points
            .iter()
            .filter(move |point| center.distance(point) < radius)
    }
}

impl<'a> IntoIterator for &'a PointField {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
