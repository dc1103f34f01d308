//! Self-rescheduling flash loops: one for the live session, one per
//! home-screen preview tile. Loops run as browser timer callbacks; stopping
//! one drops its pending `Timeout`, which clears the host timer, so no tick
//! can fire afterwards.

use crate::{draw_delay_ms, draw_frame, FlashFrame, Preset};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared sink receiving each drawn frame.
pub type FrameSink = Rc<dyn Fn(FlashFrame)>;

/// Preview tiles start after a short randomized stagger so they do not all
/// flip in lockstep.
pub const PREVIEW_START_MIN_MS: u32 = 300;
pub const PREVIEW_START_MAX_MS: u32 = 900;

struct LoopState {
    running: bool,
    pending: Option<Timeout>,
}

/// One repeating randomized flash loop: Idle → Running → Idle on stop.
pub struct FlashLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FlashLoop {
    /// Starts a loop that emits one frame per tick and re-arms itself with a
    /// delay drawn from the preset's interval.
    pub fn start(preset: Preset, sink: FrameSink, first_delay_ms: u32) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            running: true,
            pending: None,
        }));
        arm(state.clone(), Rc::new(preset), sink, first_delay_ms);
        FlashLoop { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    /// Cancels the pending tick synchronously. Safe to call repeatedly.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        state.pending = None;
    }

    #[cfg(test)]
    fn idle() -> Self {
        FlashLoop {
            state: Rc::new(RefCell::new(LoopState {
                running: false,
                pending: None,
            })),
        }
    }
}

impl Drop for FlashLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm(state: Rc<RefCell<LoopState>>, preset: Rc<Preset>, sink: FrameSink, delay_ms: u32) {
    let tick_state = state.clone();
    let handle = Timeout::new(delay_ms, move || {
        if !tick_state.borrow().running {
            return;
        }
        let mut rng = rand::rng();
        sink(draw_frame(&preset, &mut rng));
        // The sink may have stopped us (e.g. a session ending on its last
        // tick); re-check before re-arming.
        if !tick_state.borrow().running {
            return;
        }
        let next = draw_delay_ms(preset.min, preset.max, &mut rng);
        arm(tick_state.clone(), preset, sink, next);
    });
    state.borrow_mut().pending = Some(handle);
}

/// Initial delay for a preview tile.
pub fn preview_start_delay_ms(rng: &mut impl rand::Rng) -> u32 {
    rng.random_range(PREVIEW_START_MIN_MS..=PREVIEW_START_MAX_MS)
}

/// Keyed collection of live preview loops, so a view change can cancel them
/// all at once.
#[derive(Default)]
pub struct LoopRegistry {
    loops: HashMap<String, FlashLoop>,
}

impl LoopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a loop under `key`, stopping any loop previously held there.
    pub fn insert(&mut self, key: impl Into<String>, flash_loop: FlashLoop) {
        // Replacing drops the old loop, which stops it.
        self.loops.insert(key.into(), flash_loop);
    }

    pub fn stop(&mut self, key: &str) {
        self.loops.remove(key);
    }

    pub fn stop_all(&mut self) {
        self.loops.clear();
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_stagger_stays_in_bounds() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let ms = preview_start_delay_ms(&mut rng);
            assert!((PREVIEW_START_MIN_MS..=PREVIEW_START_MAX_MS).contains(&ms));
        }
    }

    #[test]
    fn idle_loop_reports_not_running_and_stop_is_idempotent() {
        let flash_loop = FlashLoop::idle();
        assert!(!flash_loop.is_running());
        flash_loop.stop();
        flash_loop.stop();
        assert!(!flash_loop.is_running());
    }

    #[test]
    fn registry_tracks_and_cancels_loops() {
        let mut registry = LoopRegistry::new();
        assert!(registry.is_empty());

        registry.insert("Go/No Go", FlashLoop::idle());
        registry.insert("Sprints", FlashLoop::idle());
        assert_eq!(registry.len(), 2);

        registry.stop("Sprints");
        assert_eq!(registry.len(), 1);

        registry.stop_all();
        assert!(registry.is_empty());
    }

    #[test]
    fn reinserting_a_key_replaces_the_previous_loop() {
        let mut registry = LoopRegistry::new();
        registry.insert("tile", FlashLoop::idle());
        registry.insert("tile", FlashLoop::idle());
        assert_eq!(registry.len(), 1);
    }
}
