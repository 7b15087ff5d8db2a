//! [`TaskScheduler`] backed by browser timers and animation frames.

use std::collections::HashMap;

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use yew::Callback;

use crate::core::scheduler::{TaskHandle, TaskScheduler, Timing};

enum Pending {
    Timer(Timeout),
    Frame(AnimationFrame),
}

/// Delivers due tasks through `on_fire`; dropping a pending entry cancels it.
pub(crate) struct BrowserScheduler<T> {
    next_id: u64,
    pending: HashMap<TaskHandle, Pending>,
    // Entry for the task being delivered right now; it must outlive its own
    // callback, so it is dropped on the next delivery instead.
    retired: Option<Pending>,
    on_fire: Callback<(TaskHandle, T)>,
}

impl<T> BrowserScheduler<T> {
    pub(crate) fn new(on_fire: Callback<(TaskHandle, T)>) -> Self {
        Self {
            next_id: 0,
            pending: HashMap::new(),
            retired: None,
            on_fire,
        }
    }
}

impl<T: 'static> TaskScheduler<T> for BrowserScheduler<T> {
    fn schedule(&mut self, timing: Timing, task: T) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle::new(self.next_id);
        let on_fire = self.on_fire.clone();
        let pending = match timing {
            Timing::After(millis) => {
                Pending::Timer(Timeout::new(millis, move || on_fire.emit((handle, task))))
            }
            Timing::NextFrame => {
                Pending::Frame(request_animation_frame(move |_| on_fire.emit((handle, task))))
            }
        };
        self.pending.insert(handle, pending);
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.pending.remove(&handle);
    }

    fn complete(&mut self, handle: TaskHandle) {
        self.retired = self.pending.remove(&handle);
    }
}
