use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spider_core::StopToken;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Window};

/// A DOM event listener that is removed again when dropped
pub(crate) struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub(crate) fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.kind, err);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that re-arms itself until the stop token is set
pub(crate) struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    /// Schedule `frame` on every animation frame. A frame error stops the loop.
    pub(crate) fn start<F>(window: &Window, stop: StopToken, mut frame: F) -> Result<Self, JsValue>
    where
        F: FnMut() -> Result<(), JsValue> + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_pending = pending.clone();
        let next_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next_pending.set(None);
            if stop.is_stopped() {
                return;
            }

            if let Err(err) = frame() {
                log::error!("frame failed, stopping animation: {:?}", err);
                stop.stop();
                return;
            }

            if let Some(cb) = next.borrow().as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => next_pending.set(Some(handle)),
                    Err(err) => log::error!("failed to schedule next frame: {:?}", err),
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = callback.borrow().as_ref() {
            let handle = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            pending.set(Some(handle));
        }

        Ok(Self {
            window: window.clone(),
            pending,
            callback,
        })
    }

    /// Cancel the pending frame and release the callback.
    /// Must not be called from inside the frame callback.
    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                log::warn!("failed to cancel animation frame: {:?}", err);
            }
        }
        self.callback.borrow_mut().take();
    }
}
