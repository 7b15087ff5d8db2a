//! Cancellable deferred work.
//!
//! Engines never touch browser timers directly. They ask a [`TaskScheduler`]
//! to deliver a task value later and receive it back through their own
//! `run_task` entry point, which lets tests drive time with
//! [`VirtualScheduler`] instead of waiting on a wall clock.

use std::collections::BTreeMap;

/// Opaque handle identifying one scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Wrap a raw id. Schedulers hand out unique ids.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// When a task should fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timing {
    /// After a delay in milliseconds.
    After(u32),
    /// On the next animation frame.
    NextFrame,
}

/// Source of cancellable one-shot timers.
pub trait TaskScheduler<T> {
    /// Schedule `task` for delivery at `timing`.
    fn schedule(&mut self, timing: Timing, task: T) -> TaskHandle;

    /// Cancel a pending task. Unknown or already delivered handles are ignored.
    fn cancel(&mut self, handle: TaskHandle);

    /// Release bookkeeping for a task that has been delivered.
    fn complete(&mut self, handle: TaskHandle) {
        let _ = handle;
    }
}

/// Milliseconds an animation frame takes on the virtual clock.
pub const FRAME_MS: u64 = 16;

#[derive(Debug)]
struct PendingTask<T> {
    due: u64,
    task: T,
}

/// Deterministic scheduler driven by an explicit virtual clock.
#[derive(Debug)]
pub struct VirtualScheduler<T> {
    now: u64,
    next_id: u64,
    pending: BTreeMap<TaskHandle, PendingTask<T>>,
    cancelled: Vec<TaskHandle>,
}

impl<T> Default for VirtualScheduler<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: BTreeMap::new(),
            cancelled: Vec::new(),
        }
    }
}

impl<T> VirtualScheduler<T> {
    /// Empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Number of tasks still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Handles cancelled so far, in cancellation order.
    #[must_use]
    pub fn cancelled(&self) -> &[TaskHandle] {
        &self.cancelled
    }

    /// Advance the clock by `millis` and return every task that came due,
    /// ordered by due time and then by scheduling order.
    pub fn advance(&mut self, millis: u64) -> Vec<(TaskHandle, T)> {
        self.now += millis;
        let now = self.now;
        let due: Vec<TaskHandle> = self
            .pending
            .iter()
            .filter(|(_, pending)| pending.due <= now)
            .map(|(handle, _)| *handle)
            .collect();
        let mut fired: Vec<(u64, TaskHandle, T)> = due
            .into_iter()
            .filter_map(|handle| {
                self.pending
                    .remove(&handle)
                    .map(|pending| (pending.due, handle, pending.task))
            })
            .collect();
        fired.sort_by_key(|(due, handle, _)| (*due, *handle));
        fired
            .into_iter()
            .map(|(_, handle, task)| (handle, task))
            .collect()
    }
}

impl<T> TaskScheduler<T> for VirtualScheduler<T> {
    fn schedule(&mut self, timing: Timing, task: T) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle::new(self.next_id);
        let delay = match timing {
            Timing::After(millis) => u64::from(millis),
            Timing::NextFrame => FRAME_MS,
        };
        self.pending.insert(
            handle,
            PendingTask {
                due: self.now + delay,
                task,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if self.pending.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_fire_once_their_delay_elapses() {
        let mut scheduler = VirtualScheduler::new();
        let handle = scheduler.schedule(Timing::After(220), "reorder");
        assert!(scheduler.advance(219).is_empty());
        assert!(scheduler.is_pending(handle));
        assert_eq!(scheduler.advance(1), vec![(handle, "reorder")]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = VirtualScheduler::new();
        let handle = scheduler.schedule(Timing::After(10), 1);
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert!(scheduler.advance(100).is_empty());
        assert_eq!(scheduler.cancelled(), &[handle]);
    }

    #[test]
    fn due_tasks_are_returned_in_due_order() {
        let mut scheduler = VirtualScheduler::new();
        let late = scheduler.schedule(Timing::After(50), "late");
        let frame = scheduler.schedule(Timing::NextFrame, "frame");
        let fired = scheduler.advance(100);
        assert_eq!(fired, vec![(frame, "frame"), (late, "late")]);
        assert_eq!(scheduler.now(), 100);
    }
}
