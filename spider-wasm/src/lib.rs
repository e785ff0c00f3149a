use std::cell::RefCell;
use std::rc::Rc;

use spider_core::{RandomSource, Simulation, StopToken};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, HtmlElement, MouseEvent};

mod animation;
mod logging;
mod surface;

use animation::{AnimationLoop, EventListener};
pub use surface::CanvasSurface;

/// `Math.random` as a random source
struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f32(&mut self) -> f32 {
        let value = js_sys::Math::random() as f32;
        // Values just below 1.0 can round up in the f64 -> f32 cast
        if value < 1.0 {
            value
        } else {
            0.0
        }
    }
}

struct Scene {
    simulation: Simulation,
    surface: CanvasSurface,
    rng: MathRandom,
}

/// Shared between the exported handle and the event/frame callbacks
struct Host {
    scene: RefCell<Scene>,
    canvas: HtmlCanvasElement,
    light_area: Option<HtmlElement>,
}

impl Host {
    fn frame(&self) -> Result<(), JsValue> {
        let mut scene = self.scene.borrow_mut();
        let scene = &mut *scene;
        scene.simulation.frame(&mut scene.surface, &mut scene.rng)
    }

    fn pointer_moved(&self, x: f32, y: f32) {
        self.scene.borrow_mut().simulation.pointer_moved(x, y);
    }

    fn pointer_left(&self) {
        self.scene.borrow_mut().simulation.pointer_left();
    }

    /// Client coordinates are converted to canvas coordinates; the light
    /// area follows the raw client position.
    fn mouse_moved(&self, event: &MouseEvent) {
        let canvas_element: &Element = self.canvas.as_ref();
        let rect = canvas_element.get_bounding_client_rect();
        let client_x = event.client_x() as f64;
        let client_y = event.client_y() as f64;

        self.pointer_moved((client_x - rect.left()) as f32, (client_y - rect.top()) as f32);

        if let Some(light_area) = &self.light_area {
            let style = light_area.style();
            let result = style
                .set_property("left", &format!("{}px", client_x))
                .and_then(|_| style.set_property("top", &format!("{}px", client_y)));
            if let Err(err) = result {
                log::warn!("failed to move light area: {:?}", err);
            }
        }
    }

    fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.scene
            .borrow_mut()
            .simulation
            .resize(width as f32, height as f32);
        log::info!("Resized to {}x{}", width, height);
    }

    fn fit_window(&self) -> Result<(), JsValue> {
        let (width, height) = window_size()?;
        self.resize(width, height);
        Ok(())
    }
}

fn window_size() -> Result<(f64, f64), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("window width is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("window height is not a number")?;
    Ok((width, height))
}

/// The spider effect bound to a canvas element
#[wasm_bindgen]
pub struct SpiderCanvas {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl SpiderCanvas {
    /// Take over the canvas with id `canvas_id`, sized to the window. If
    /// `light_area_id` names an element, it is moved to follow the pointer.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, light_area_id: Option<String>) -> Result<SpiderCanvas, JsValue> {
        logging::init(log::LevelFilter::Info);

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let light_area = match light_area_id {
            Some(id) => Some(
                document
                    .get_element_by_id(&id)
                    .ok_or("light area not found")?
                    .dyn_into::<HtmlElement>()?,
            ),
            None => None,
        };

        let (width, height) = window_size()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut rng = MathRandom;
        let simulation = Simulation::new(width as f32, height as f32, &mut rng);
        log::info!(
            "Spider canvas ready: {}x{}, {} points",
            width,
            height,
            simulation.field.len()
        );

        let scene = Scene {
            simulation,
            surface: CanvasSurface::new(context),
            rng,
        };

        Ok(SpiderCanvas {
            host: Rc::new(Host {
                scene: RefCell::new(scene),
                canvas,
                light_area,
            }),
        })
    }

    /// Advance and draw a single frame
    pub fn frame(&self) -> Result<(), JsValue> {
        self.host.frame()
    }

    /// Pointer position in canvas coordinates
    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.host.pointer_moved(x, y);
    }

    pub fn pointer_left(&self) {
        self.host.pointer_left();
    }

    pub fn handle_mouse_move(&self, event: MouseEvent) {
        self.host.mouse_moved(&event);
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.host.resize(width, height);
    }

    /// Resize the canvas to the window's inner size
    pub fn fit_window(&self) -> Result<(), JsValue> {
        self.host.fit_window()
    }

    pub fn point_count(&self) -> usize {
        self.host.scene.borrow().simulation.field.len()
    }

    pub fn frame_count(&self) -> f64 {
        self.host.scene.borrow().simulation.frame_count() as f64
    }

    /// Spider positions flattened as `[x0, y0, x1, y1, ...]`
    pub fn spider_positions(&self) -> Vec<f32> {
        self.host
            .scene
            .borrow()
            .simulation
            .spiders
            .iter()
            .flat_map(|spider| [spider.position.x, spider.position.y])
            .collect()
    }

    /// Listen for pointer and resize events on the window and animate on
    /// every display frame until the returned handle is stopped.
    pub fn start(&self) -> Result<AnimationHandle, JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let stop = StopToken::new();

        let host = self.host.clone();
        let mouse_move = EventListener::new(&window, "mousemove", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                host.mouse_moved(event);
            }
        })?;

        // mouseout also fires between elements; only a null related target
        // means the pointer left the window
        let host = self.host.clone();
        let mouse_out = EventListener::new(&window, "mouseout", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                if event.related_target().is_none() {
                    host.pointer_left();
                }
            }
        })?;

        let host = self.host.clone();
        let resize = EventListener::new(&window, "resize", move |_event: Event| {
            if let Err(err) = host.fit_window() {
                log::error!("resize failed: {:?}", err);
            }
        })?;

        let host = self.host.clone();
        let animation = AnimationLoop::start(&window, stop.clone(), move || host.frame())?;

        log::info!("Spider animation started");
        Ok(AnimationHandle {
            stop,
            listeners: vec![mouse_move, mouse_out, resize],
            animation: Some(animation),
        })
    }
}

/// A running animation. Stopping it (or dropping it) cancels the frame loop
/// and removes the window listeners.
#[wasm_bindgen]
pub struct AnimationHandle {
    stop: StopToken,
    listeners: Vec<EventListener>,
    animation: Option<AnimationLoop>,
}

#[wasm_bindgen]
impl AnimationHandle {
    pub fn stop(&mut self) {
        self.stop.stop();
        if let Some(mut animation) = self.animation.take() {
            animation.cancel();
            log::info!("Spider animation stopped");
        }
        self.listeners.clear();
    }

    /// False once stopped, or after a frame failed
    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
