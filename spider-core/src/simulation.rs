use crate::config::FieldConfig;
use crate::field::PointField;
use crate::rng::RandomSource;
use crate::spider::Spider;
use crate::surface::{Color, Surface};
use crate::Vector2D;

/// Number of spiders on the canvas
pub const SPIDER_COUNT: usize = 2;

/// Last known pointer position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Absent,
    Present(Vector2D),
}

impl PointerState {
    pub fn position(&self) -> Option<Vector2D> {
        match self {
            PointerState::Absent => None,
            PointerState::Present(position) => Some(*position),
        }
    }
}

/// Input from the host, in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    Resized { width: f32, height: f32 },
}

/// All state of the effect: the point field, the spiders, the pointer and
/// the surface size. Hosts feed it input events and call [`Simulation::frame`]
/// once per display frame.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub spiders: [Spider; SPIDER_COUNT],
    pub field: PointField,
    pub config: FieldConfig,
    pointer: PointerState,
    width: f32,
    height: f32,
    field_stale: bool,
    frame_count: u64,
}

impl Simulation {
    pub fn new<R: RandomSource>(width: f32, height: f32, rng: &mut R) -> Self {
        Self::new_with_config(width, height, FieldConfig::default(), rng)
    }

    pub fn new_with_config<R: RandomSource>(
        width: f32,
        height: f32,
        config: FieldConfig,
        rng: &mut R,
    ) -> Self {
        let field = PointField::generate(width, height, config.point_count, rng);
        let spiders = [
            Spider::random(width, height, rng),
            Spider::random(width, height, rng),
        ];
        log::debug!(
            "simulation created at {}x{} with {} points",
            width,
            height,
            field.len()
        );

        Self {
            spiders,
            field,
            config,
            pointer: PointerState::Absent,
            width,
            height,
            field_stale: false,
            frame_count: 0,
        }
    }

    /// Build a simulation from an explicit field and spider positions
    pub fn with_spiders(
        width: f32,
        height: f32,
        field: PointField,
        positions: [Vector2D; SPIDER_COUNT],
    ) -> Self {
        Self {
            spiders: positions.map(Spider::new),
            field,
            config: FieldConfig::default(),
            pointer: PointerState::Absent,
            width,
            height,
            field_stale: false,
            frame_count: 0,
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.pointer_moved(x, y),
            InputEvent::PointerLeft => self.pointer_left(),
            InputEvent::Resized { width, height } => self.resize(width, height),
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = PointerState::Present(Vector2D::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = PointerState::Absent;
    }

    /// Existing points are kept as they are unless the field config asks
    /// for regeneration, which happens on the next update.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("resize {}x{} -> {}x{}", self.width, self.height, width, height);
        self.width = width;
        self.height = height;
        if self.config.regenerate_on_resize {
            self.field_stale = true;
        }
    }

    /// Move every spider once: chase the pointer or wander, then step away
    /// from any spider that is too close. Later spiders see the already
    /// updated positions of earlier ones.
    pub fn update<R: RandomSource>(&mut self, rng: &mut R) {
        if self.field_stale {
            self.field =
                PointField::generate(self.width, self.height, self.config.point_count, rng);
            self.field_stale = false;
        }

        let target = self.pointer.position();
        for i in 0..SPIDER_COUNT {
            match target {
                Some(target) => self.spiders[i].move_toward(target),
                None => self.spiders[i].random_wander(rng),
            }

            for j in 0..SPIDER_COUNT {
                if i != j {
                    let other = self.spiders[j];
                    self.spiders[i].avoid_other_spider(&other);
                }
            }
        }

        self.frame_count += 1;
        log::trace!("frame {}: {:?}", self.frame_count, self.spider_positions());
    }

    /// Clear the surface and light up the points around the pointer
    pub fn draw_background<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.width, self.height)?;

        if let Some(pointer) = self.pointer.position() {
            surface.set_fill_color(Color::WHITE);
            for point in self.field.within_radius(pointer, self.config.highlight_radius) {
                surface.fill_circle(*point, self.config.highlight_dot_radius)?;
            }
        }

        Ok(())
    }

    pub fn draw_spiders<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for spider in &self.spiders {
            spider.draw(surface, &self.field)?;
        }
        Ok(())
    }

    /// Redraw the current state without moving anything
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.draw_background(surface)?;
        self.draw_spiders(surface)
    }

    /// One full frame: clear, highlight, move, draw spiders
    pub fn frame<S, R>(&mut self, surface: &mut S, rng: &mut R) -> Result<(), S::Error>
    where
        S: Surface,
        R: RandomSource,
    {
        self.draw_background(surface)?;
        self.update(rng);
        self.draw_spiders(surface)
    }

    fn spider_positions(&self) -> [Vector2D; SPIDER_COUNT] {
        self.spiders.map(|spider| spider.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::Point;
    use core::convert::Infallible;

    /// Counts draw calls by kind
    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        ellipses: usize,
        circles: usize,
        lines: usize,
    }

    impl Surface for CountingSurface {
        type Error = Infallible;

        fn clear(&mut self, _width: f32, _height: f32) -> Result<(), Infallible> {
            self.clears += 1;
            Ok(())
        }

        fn set_fill_color(&mut self, _color: Color) {}

        fn set_stroke_color(&mut self, _color: Color) {}

        fn fill_ellipse(
            &mut self,
            _center: Vector2D,
            _radius_x: f32,
            _radius_y: f32,
            _rotation: f32,
        ) -> Result<(), Infallible> {
            self.ellipses += 1;
            Ok(())
        }

        fn fill_circle(&mut self, _center: Vector2D, _radius: f32) -> Result<(), Infallible> {
            self.circles += 1;
            Ok(())
        }

        fn stroke_line(&mut self, _from: Vector2D, _to: Vector2D) -> Result<(), Infallible> {
            self.lines += 1;
            Ok(())
        }
    }

    #[test]
    fn test_simulation_creation() {
        let mut rng = SimpleRng::new(5);
        let sim = Simulation::new(800.0, 600.0, &mut rng);

        assert_eq!(sim.field.len(), 2000);
        assert_eq!(sim.size(), (800.0, 600.0));
        assert_eq!(sim.pointer(), PointerState::Absent);
        for spider in &sim.spiders {
            assert!(spider.position.x >= 0.0 && spider.position.x < 800.0);
            assert!(spider.position.y >= 0.0 && spider.position.y < 600.0);
        }
    }

    #[test]
    fn test_input_events() {
        let mut sim = Simulation::with_spiders(
            800.0,
            600.0,
            PointField::empty(),
            [Vector2D::new(0.0, 0.0), Vector2D::new(500.0, 500.0)],
        );

        sim.handle(InputEvent::PointerMoved { x: 12.0, y: 34.0 });
        assert_eq!(sim.pointer(), PointerState::Present(Vector2D::new(12.0, 34.0)));

        sim.handle(InputEvent::PointerLeft);
        assert_eq!(sim.pointer(), PointerState::Absent);

        sim.handle(InputEvent::Resized {
            width: 1024.0,
            height: 768.0,
        });
        assert_eq!(sim.size(), (1024.0, 768.0));
    }

    #[test]
    fn test_resize_keeps_points_by_default() {
        let mut rng = SimpleRng::new(11);
        let mut sim = Simulation::new(800.0, 600.0, &mut rng);
        let before: heapless::Vec<Point, 8> = sim.field.iter().take(8).copied().collect();

        sim.resize(200.0, 100.0);
        sim.update(&mut rng);

        let after: heapless::Vec<Point, 8> = sim.field.iter().take(8).copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_resize_regenerates_when_configured() {
        let mut rng = SimpleRng::new(11);
        let config = FieldConfig {
            regenerate_on_resize: true,
            ..FieldConfig::default()
        };
        let mut sim = Simulation::new_with_config(800.0, 600.0, config, &mut rng);

        sim.resize(200.0, 100.0);
        sim.update(&mut rng);

        assert_eq!(sim.field.len(), 2000);
        for point in &sim.field {
            assert!(point.x < 200.0 && point.y < 100.0);
        }
    }

    #[test]
    fn test_update_counts_frames() {
        let mut rng = SimpleRng::new(2);
        let mut sim = Simulation::new(800.0, 600.0, &mut rng);

        sim.update(&mut rng);
        sim.update(&mut rng);

        assert_eq!(sim.frame_count(), 2);
    }

    #[test]
    fn test_frame_draws_spiders_without_pointer() {
        let mut rng = SimpleRng::new(8);
        let mut sim = Simulation::with_spiders(
            800.0,
            600.0,
            PointField::empty(),
            [Vector2D::new(100.0, 100.0), Vector2D::new(700.0, 500.0)],
        );
        let mut surface = CountingSurface::default();

        sim.frame(&mut surface, &mut rng).unwrap();

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.ellipses, SPIDER_COUNT);
        assert_eq!(surface.lines, SPIDER_COUNT * 8);
        // No pointer and nothing for the legs to grab
        assert_eq!(surface.circles, 0);
    }

    #[test]
    fn test_render_does_not_move_spiders() {
        let mut sim = Simulation::with_spiders(
            800.0,
            600.0,
            PointField::empty(),
            [Vector2D::new(100.0, 100.0), Vector2D::new(700.0, 500.0)],
        );
        sim.pointer_moved(400.0, 300.0);
        let before = sim.spider_positions();

        sim.render(&mut CountingSurface::default()).unwrap();

        assert_eq!(sim.spider_positions(), before);
        assert_eq!(sim.frame_count(), 0);
    }
}
