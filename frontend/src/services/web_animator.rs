use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use progress_ring::{Animator, FrameCallback, Tween};

/// [`Animator`] driven by `requestAnimationFrame`.
///
/// Each run keeps itself alive through its pending frame handle and lets go
/// of it after delivering the final value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameAnimator;

struct Run {
    tween: Tween,
    on_frame: FrameCallback,
    started_at: Option<f64>,
    pending: Option<AnimationFrame>,
}

impl Animator for FrameAnimator {
    fn animate(&self, tween: Tween, on_frame: FrameCallback) {
        let run = Rc::new(RefCell::new(Run {
            tween,
            on_frame,
            started_at: None,
            pending: None,
        }));
        schedule(&run);
    }
}

fn schedule(run: &Rc<RefCell<Run>>) {
    let next = Rc::clone(run);
    let handle = request_animation_frame(move |timestamp| step(next, timestamp));
    run.borrow_mut().pending = Some(handle);
}

fn step(run: Rc<RefCell<Run>>, timestamp: f64) {
    let finished = {
        let mut state = run.borrow_mut();
        let started_at = *state.started_at.get_or_insert(timestamp);
        let elapsed = timestamp - started_at;
        let value = state.tween.value_at(elapsed);
        (state.on_frame)(value);
        state.tween.is_finished(elapsed)
    };

    if finished {
        run.borrow_mut().pending = None;
    } else {
        schedule(&run);
    }
}
