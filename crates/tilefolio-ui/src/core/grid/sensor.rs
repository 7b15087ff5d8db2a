//! Long-press activation for pointer drags.
//!
//! A press only becomes a drag after the activation delay, and only if the
//! pointer stayed within the tolerance radius. Moving further first means the
//! user is scrolling; releasing first means the press was a click.

use crate::core::geometry::{Point, Rect};
use crate::core::instances::InstanceId;
use crate::core::scheduler::TaskHandle;

/// Press waiting for its activation timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Press {
    pub(crate) id: InstanceId,
    pub(crate) origin: Point,
    pub(crate) rect: Rect,
    pub(crate) handle: TaskHandle,
}

/// Tracks at most one pending press.
#[derive(Clone, Debug)]
pub struct ActivationSensor {
    tolerance_px: f64,
    press: Option<Press>,
}

impl ActivationSensor {
    /// Sensor that abandons presses moving more than `tolerance_px`.
    #[must_use]
    pub const fn new(tolerance_px: f64) -> Self {
        Self {
            tolerance_px,
            press: None,
        }
    }

    /// Whether a press is waiting on its timer.
    #[must_use]
    pub const fn is_pressing(&self) -> bool {
        self.press.is_some()
    }

    /// Track a new press; returns the timer of any press it replaces.
    pub(crate) fn start(&mut self, press: Press) -> Option<TaskHandle> {
        let previous = self.abandon();
        self.press = Some(press);
        previous
    }

    /// Pointer moved; returns the timer to cancel when the press is abandoned.
    pub(crate) fn moved(&mut self, point: Point) -> Option<TaskHandle> {
        let press = self.press?;
        if press.origin.distance_to(point) > self.tolerance_px {
            return self.abandon();
        }
        None
    }

    /// Drop the pending press, returning its timer.
    pub(crate) fn abandon(&mut self) -> Option<TaskHandle> {
        self.press.take().map(|press| press.handle)
    }

    /// Timer fired; yields the press if `handle` is still current.
    pub(crate) fn fire(&mut self, handle: TaskHandle) -> Option<Press> {
        match self.press {
            Some(press) if press.handle == handle => self.press.take(),
            _ => None,
        }
    }
}
