use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Paces the frame loop. Implementations block or yield until the host is
/// ready to draw again (a vsync, a fixed-rate timer, a test counter).
pub trait FrameClock {
    fn wait_for_next_frame(&mut self);
}

/// Cancellation flag shared between a running loop and whoever stops it
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Drive `frame` once per clock tick until `stop` is set or a frame fails.
///
/// The token is checked before every frame. Returns the number of frames
/// that ran.
pub fn run<C, F, E>(clock: &mut C, stop: &StopToken, mut frame: F) -> Result<u64, E>
where
    C: FrameClock,
    F: FnMut(u64) -> Result<(), E>,
{
    let mut frames = 0u64;

    while !stop.is_stopped() {
        frame(frames)?;
        frames += 1;
        clock.wait_for_next_frame();
    }

    log::debug!("frame loop stopped after {} frames", frames);
    Ok(frames)
}
