// requestAnimationFrame driver. Each frame runs one simulation tick, draws,
// and re-arms itself only while the tick reports `Continue`. Opening the shop
// or losing the fortress therefore stops scheduling; `resume` re-arms it.
// The wave clock advances by the gap between rAF timestamps. The first frame
// after arming has no previous stamp and counts as one nominal frame, so time
// spent stopped is never charged.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::game::{GameState, TickOutcome};
use crate::util::clog;

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameLoop {
    window: Window,
    session: Rc<RefCell<GameState>>,
    frame: FrameCell,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    last_stamp: Rc<Cell<Option<f64>>>,
}

fn request(window: &Window, frame: &FrameCell, raf_id: &Cell<Option<i32>>) {
    if let Some(cb) = frame.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
}

impl FrameLoop {
    pub fn new(
        window: Window,
        session: Rc<RefCell<GameState>>,
        draw: Rc<dyn Fn()>,
        on_stop: Rc<dyn Fn(TickOutcome)>,
    ) -> Rc<Self> {
        let frame: FrameCell = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));
        let last_stamp = Rc::new(Cell::new(None));
        {
            let window = window.clone();
            let session = session.clone();
            let frame_loop = frame.clone();
            let raf_id = raf_id.clone();
            let running = running.clone();
            let last_stamp = last_stamp.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                let outcome = {
                    let mut gs = session.borrow_mut();
                    let elapsed = last_stamp.replace(Some(now)).map_or(gs.config.frame_ms, |prev| now - prev);
                    gs.tick_elapsed(js_sys::Math::random(), elapsed)
                };
                draw();
                match outcome {
                    TickOutcome::Continue => request(&window, &frame_loop, &raf_id),
                    stopped => {
                        running.set(false);
                        raf_id.set(None);
                        last_stamp.set(None);
                        on_stop(stopped);
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }
        Rc::new(Self { window, session, frame, raf_id, running, last_stamp })
    }

    /// Arms the loop if the session can run and no frame is pending.
    pub fn resume(&self) {
        if self.running.get() || !self.session.borrow().is_running() {
            return;
        }
        self.running.set(true);
        self.last_stamp.set(None);
        request(&self.window, &self.frame, &self.raf_id);
    }

    /// Stops the loop for good and drops the frame closure.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            self.window.cancel_animation_frame(id).ok();
        }
        self.running.set(false);
        if self.frame.borrow_mut().take().is_some() {
            clog("Frame loop cancelled");
        }
    }
}
